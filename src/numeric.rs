//! Numeric helpers: sign checks, parity and decimal rounding.
//!
//! Sign checks are available for every primitive number, parity for the
//! integers and rounding for the floats.

use std::ops::{Div, Mul, Rem};

use crate::compat::{Zz, zz_compatible};

zz_compatible!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Numbers with a zero to compare against.
pub trait Numeric: Copy + PartialOrd {
    const ZERO: Self;
}

/// Integers, where remainder semantics decide parity.
pub trait Integer: Numeric + Rem<Output = Self> {
    const TWO: Self;
}

/// Floating point numbers that can be rounded to a number of decimal places.
pub trait Float: Numeric + Mul<Output = Self> + Div<Output = Self> {
    /// `10` raised to `places`.
    fn decimal_divisor(places: i32) -> Self;

    /// Round half away from zero.
    #[must_use]
    fn round_nearest(self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
            }

            impl Integer for $ty {
                const TWO: Self = 2;
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0.0;
            }

            impl Float for $ty {
                fn decimal_divisor(places: i32) -> Self {
                    <$ty>::powi(10.0, places)
                }

                fn round_nearest(self) -> Self {
                    self.round()
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
impl_float!(f32, f64);

impl<N: Numeric> Zz<&N> {
    /// Whether the number is strictly greater than zero.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert!(3_i32.zz().is_positive());
    /// assert!(!0_i32.zz().is_positive());
    /// ```
    #[must_use]
    pub fn is_positive(&self) -> bool {
        *self.base > N::ZERO
    }

    /// Whether the number is strictly less than zero. Zero is neither.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        *self.base < N::ZERO
    }
}

impl<I: Integer> Zz<&I> {
    /// Whether the integer is divisible by two.
    #[must_use]
    pub fn is_even(&self) -> bool {
        *self.base % I::TWO == I::ZERO
    }

    /// Whether the integer leaves a remainder when divided by two.
    ///
    /// Uses the remainder operator, so `-3 % 2 == -1` still counts as odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        *self.base % I::TWO != I::ZERO
    }
}

impl<F: Float> Zz<&F> {
    /// Round to `places` decimal places.
    ///
    /// The value is scaled by `10^places`, rounded to the nearest integer and
    /// scaled back. `places` is expected to be non-negative; a negative value
    /// rounds to tens, hundreds and so on.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!(3.14159_f64.zz().rounded(2), 3.14);
    /// ```
    #[must_use]
    pub fn rounded(&self, places: i32) -> F {
        let divisor = F::decimal_divisor(places);
        (*self.base * divisor).round_nearest() / divisor
    }
}

#[cfg(test)]
mod tests {
    use crate::compat::ZzCompatible;

    #[test]
    fn test_sign_checks_integers() {
        assert!(5_i32.zz().is_positive());
        assert!(!5_i32.zz().is_negative());
        assert!((-5_i64).zz().is_negative());
        assert!(!(-5_i64).zz().is_positive());
        assert!(7_u32.zz().is_positive());
    }

    #[test]
    fn test_zero_is_neither_positive_nor_negative() {
        assert!(!0_i32.zz().is_positive());
        assert!(!0_i32.zz().is_negative());
        assert!(!0.0_f64.zz().is_positive());
        assert!(!0.0_f32.zz().is_negative());
        assert!(!(-0.0_f64).zz().is_negative());
    }

    #[test]
    fn test_sign_checks_floats() {
        assert!(0.5_f32.zz().is_positive());
        assert!((-0.001_f64).zz().is_negative());
        assert!(!f64::NAN.zz().is_positive());
        assert!(!f64::NAN.zz().is_negative());
    }

    #[test]
    fn test_parity() {
        assert!(4_i32.zz().is_even());
        assert!(!4_i32.zz().is_odd());
        assert!(7_u8.zz().is_odd());
        assert!(0_i32.zz().is_even());
    }

    #[test]
    fn test_parity_negative_numbers() {
        assert!((-4_i32).zz().is_even());
        assert!((-3_i32).zz().is_odd());
        assert!(!(-3_i32).zz().is_even());
    }

    #[test]
    fn test_rounded() {
        assert!((5.678_91_f64.zz().rounded(2) - 5.68).abs() < f64::EPSILON);
        assert!((2.5_f64.zz().rounded(0) - 3.0).abs() < f64::EPSILON);
        assert!(((-2.5_f64).zz().rounded(0) + 3.0).abs() < f64::EPSILON);
        assert!((1.23456_f32.zz().rounded(3) - 1.235).abs() < 1e-6);
    }

    #[test]
    fn test_rounded_negative_places() {
        assert!((1234.0_f64.zz().rounded(-2) - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounded_is_idempotent() {
        for value in [5.678_91_f64, -7.777_77, 0.1 + 0.2, 1e6 / 7.0, 42.0] {
            for places in 0..6 {
                let once = value.zz().rounded(places);
                let twice = once.zz().rounded(places);
                assert_eq!(once.to_bits(), twice.to_bits(), "{value} at {places}");
            }
        }
    }
}
