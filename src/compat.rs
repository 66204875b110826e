//! The namespacing wrapper.
//!
//! A type opts in by implementing [`ZzCompatible`]. Its helpers are then
//! defined as inherent methods on [`Zz<&T>`](Zz) (instance helpers) or on
//! [`ZzType<T>`] (static helpers such as constructors and generators), and
//! resolved by the static type of the subject.

use std::marker::PhantomData;

/// Holds the subject an extension helper acts upon.
///
/// The wrapper is meant to be created, used and dropped within a single
/// expression. It carries no state beyond the subject itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zz<Base> {
    /// The wrapped subject.
    pub base: Base,
}

impl<Base> Zz<Base> {
    /// Wrap a subject.
    #[must_use]
    pub const fn new(base: Base) -> Self {
        Self { base }
    }

    /// Give back the wrapped subject.
    #[must_use]
    pub fn into_inner(self) -> Base {
        self.base
    }
}

/// Type-level namespace for helpers that need no subject instance.
///
/// It is never constructed; static helpers are associated functions, as in
/// `ZzType::<str>::random(18)`.
#[derive(Debug)]
pub struct ZzType<Base: ?Sized>(PhantomData<fn() -> *const Base>);

/// Marker for types that expose namespaced helpers.
///
/// The trait carries no data. Implementing it is enough to get the
/// accessors below; instance helpers live on [`Zz`], static ones on [`ZzType`].
pub trait ZzCompatible {
    /// Borrow the subject through the namespace.
    fn zz(&self) -> Zz<&Self> {
        Zz::new(self)
    }

    /// Mutably borrow the subject through the namespace.
    fn zz_mut(&mut self) -> Zz<&mut Self> {
        Zz::new(self)
    }
}

macro_rules! zz_compatible {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::compat::ZzCompatible for $ty {})*
    };
}

pub(crate) use zz_compatible;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Subject(u8);

    impl ZzCompatible for Subject {}

    impl Zz<&Subject> {
        fn doubled(&self) -> u8 {
            self.base.0 * 2
        }
    }

    impl Zz<&mut Subject> {
        fn bump(&mut self) {
            self.base.0 += 1;
        }
    }

    impl ZzType<Subject> {
        fn make() -> Subject {
            Subject(7)
        }
    }

    #[test]
    fn test_wrapper_exposes_subject() {
        let subject = Subject(21);
        let wrapped = subject.zz();

        assert_eq!(wrapped.base, &Subject(21));
        assert_eq!(wrapped.doubled(), 42);
        assert_eq!(wrapped.into_inner(), &subject);
    }

    #[test]
    fn test_mutable_wrapper_writes_through() {
        let mut subject = Subject(1);
        subject.zz_mut().bump();
        subject.zz_mut().bump();

        assert_eq!(subject, Subject(3));
    }

    #[test]
    fn test_type_namespace_is_zero_sized() {
        assert_eq!(std::mem::size_of::<ZzType<Subject>>(), 0);
        assert_eq!(std::mem::size_of::<ZzType<str>>(), 0);
        assert_eq!(ZzType::<Subject>::make(), Subject(7));
    }
}
