//! Contains [`MyEnumerate`] for pairing each element of a slice with a running index.
//!
//! A [`MyEnumerate`] is a container, not an iterator. Every call to
//! [`.iter()`](MyEnumerate::iter) starts a fresh pass from the first element,
//! so the same value can be enumerated any number of times:
//! ```
//! use lazy_iters::MyEnumerate;
//!
//! let flavors = ["Chocolate", "Vanilla", "Strawberry"];
//! let e = MyEnumerate::new(&flavors).starting_at(1);
//!
//! let first: Vec<_> = e.iter().collect();
//! let second: Vec<_> = e.iter().collect();
//! assert_eq!(first, second);
//! assert_eq!(first[0], (1, &"Chocolate"));
//! ```
//!
//! For arbitrary iterables that can only be walked once, use [`my_enumerate`].

use std::iter::FusedIterator;

/// A restartable indexed view over a slice.
///
/// For general usage, see the [module-level documentation.](crate::enumerate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyEnumerate<'a, T> {
    data: &'a [T],
    start: i64,
}

impl<'a, T> MyEnumerate<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data, start: 0 }
    }

    /// Use `start` as the index of the first element instead of 0.
    pub fn starting_at(self, start: i64) -> Self {
        Self { start, ..self }
    }

    pub fn iter(&self) -> MyEnumerateIter<'a, T> {
        // Only as many elements as there are indices left before i64::MAX
        let indices_left = usize::try_from(i64::MAX.abs_diff(self.start))
            .map_or(usize::MAX, |n| n.saturating_add(1));
        MyEnumerateIter {
            data: &self.data[..self.data.len().min(indices_left)],
            current_index: 0,
            start: self.start,
        }
    }
}

impl<'a, T> IntoIterator for &MyEnumerate<'a, T> {
    type Item = (i64, &'a T);
    type IntoIter = MyEnumerateIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for MyEnumerate<'a, T> {
    type Item = (i64, &'a T);
    type IntoIter = MyEnumerateIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor half of [`MyEnumerate`]. Once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct MyEnumerateIter<'a, T> {
    data: &'a [T],
    current_index: usize,
    start: i64,
}

impl<'a, T> Iterator for MyEnumerateIter<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.data.get(self.current_index)?;
        let index = self
            .start
            .checked_add(i64::try_from(self.current_index).ok()?)?;
        self.current_index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for MyEnumerateIter<'_, T> {}
impl<T> FusedIterator for MyEnumerateIter<'_, T> {}

/// Lazily pair each item of `iterable` with an index counting up from `start`.
///
/// Unlike [`MyEnumerate`] this consumes its source, so it works with any
/// iterable but can only be walked once. The sequence ends early if the
/// index would pass `i64::MAX`.
pub fn my_enumerate<I: IntoIterator>(
    iterable: I,
    start: i64,
) -> impl Iterator<Item = (i64, I::Item)> {
    let mut next_index = Some(start);
    iterable.into_iter().map_while(move |item| {
        let current = next_index?;
        next_index = current.checked_add(1);
        Some((current, item))
    })
}
