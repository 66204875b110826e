//! Sequence helpers: random sampling and bounded prefixes.
//!
//! Any contiguous collection (`[T]`, `[T; N]`, `Vec<T>`) is a [`Sequence`].
//! The `*_with` variants take the random source explicitly; the plain ones use
//! the thread-local generator.

use rand::{Rng, seq::SliceRandom};

use crate::compat::{Zz, ZzCompatible};

/// Collections whose elements can be viewed as a slice.
pub trait Sequence {
    type Item;

    fn as_items(&self) -> &[Self::Item];
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T> ZzCompatible for [T] {}
impl<T, const N: usize> ZzCompatible for [T; N] {}
impl<T> ZzCompatible for Vec<T> {}

impl<'a, S: Sequence + ?Sized> Zz<&'a S> {
    /// A uniformly chosen element, or `None` for an empty sequence.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// let picked = [1, 2, 3].zz().sample();
    /// assert!(matches!(picked, Some(1..=3)));
    /// ```
    #[must_use]
    pub fn sample(&self) -> Option<&'a S::Item> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// [`sample`](Self::sample) drawing from `rng`.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a S::Item> {
        self.base.as_items().choose(rng)
    }

    /// `size` random elements.
    ///
    /// With `no_repeat` every element is drawn at most once; drawing stops early
    /// once the sequence is exhausted, so fewer than `size` elements may come
    /// back. Without it the draws are independent and may repeat.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn sample_many(&self, size: usize, no_repeat: bool) -> Option<Vec<&'a S::Item>> {
        self.sample_many_with(size, no_repeat, &mut rand::thread_rng())
    }

    /// [`sample_many`](Self::sample_many) drawing from `rng`.
    pub fn sample_many_with<R: Rng + ?Sized>(
        &self,
        size: usize,
        no_repeat: bool,
        rng: &mut R,
    ) -> Option<Vec<&'a S::Item>> {
        let items = self.base.as_items();
        if items.is_empty() {
            return None;
        }

        if !no_repeat {
            return Some((0..size).filter_map(|_| items.choose(rng)).collect());
        }

        let mut remaining: Vec<&S::Item> = items.iter().collect();
        let mut picked = Vec::with_capacity(size.min(items.len()));
        for _ in 0..size {
            if remaining.is_empty() {
                break;
            }
            let index = rng.gen_range(0..remaining.len());
            picked.push(remaining.swap_remove(index));
        }

        Some(picked)
    }

    /// The first `max` elements in their original order.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!(vec![1, 2, 3, 4].zz().limit(2), vec![&1, &2]);
    /// ```
    #[must_use]
    pub fn limit(&self, max: usize) -> Vec<&'a S::Item> {
        self.base.as_items().iter().take(max).collect()
    }
}
