//! Contains [`Circle`] for repeating the elements of a slice until a fixed
//! number of items has been produced.
//!
//! ```
//! use lazy_iters::{Circle, ConstructionError};
//!
//! fn main() -> Result<(), ConstructionError> {
//!     let letters = ['a', 'b', 'c'];
//!     let c = Circle::new(&letters, 5)?;
//!     assert_eq!(c.iter().collect::<String>(), "abcab");
//!     Ok(())
//! }
//! ```
//!
//! A count of `0` means "once around": the length of the source. Asking for
//! items from an empty source is rejected when the [`Circle`] is built, so
//! iteration itself can never fail.
//!
//! # Picking a field
//!
//! When the items to cycle live in one of several fields of a record, choose
//! the field up front with [`Returns`] and [`Circle::project`]:
//! ```
//! use lazy_iters::{Circle, ConstructionError, Fields, Returns};
//!
//! fn main() -> Result<(), ConstructionError> {
//!     let fields = Fields { data: &[1, 2][..], alternate: &[7, 8, 9][..] };
//!     let c = Circle::project(&fields, Returns::Alternate, 4)?;
//!     assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9, 7]);
//!     Ok(())
//! }
//! ```

use std::iter::FusedIterator;

use crate::errors::ConstructionError;

/// A restartable, finite cycle over a slice.
///
/// For general usage, see the [module-level documentation.](crate::circle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle<'a, T> {
    data: &'a [T],
    count: usize,
}

/// A record with two cyclable fields of the same item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a, T> {
    pub data: &'a [T],
    pub alternate: &'a [T],
}

/// Which field of a [`Fields`] record a [`Circle`] should repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Returns {
    #[default]
    Data,
    Alternate,
}

impl<'a, T> Fields<'a, T> {
    pub fn get(&self, returns: Returns) -> &'a [T] {
        match returns {
            Returns::Data => self.data,
            Returns::Alternate => self.alternate,
        }
    }
}

impl<'a, T> Circle<'a, T> {
    /// Cycle through `data` until `count` items have been produced. A `count`
    /// of 0 defaults to `data.len()`.
    pub fn new(data: &'a [T], count: usize) -> Result<Self, ConstructionError> {
        let count = if count == 0 { data.len() } else { count };
        if data.is_empty() && count > 0 {
            return Err(ConstructionError::EmptyCycleSource { count });
        }
        Ok(Self { data, count })
    }

    /// Cycle through the field of `fields` selected by `returns`.
    pub fn project(
        fields: &Fields<'a, T>,
        returns: Returns,
        count: usize,
    ) -> Result<Self, ConstructionError> {
        Self::new(fields.get(returns), count)
    }

    /// Total number of items a full pass produces.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn iter(&self) -> CircleIter<'a, T> {
        CircleIter {
            data: self.data,
            current_index: 0,
            count: self.count,
        }
    }
}

impl<'a, T> IntoIterator for &Circle<'a, T> {
    type Item = &'a T;
    type IntoIter = CircleIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for Circle<'a, T> {
    type Item = &'a T;
    type IntoIter = CircleIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor half of [`Circle`].
#[derive(Debug, Clone)]
pub struct CircleIter<'a, T> {
    data: &'a [T],
    current_index: usize,
    count: usize,
}

impl<'a, T> Iterator for CircleIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.count {
            return None;
        }
        // `Circle::new` guarantees `data` is non-empty whenever `count > 0`
        let item = &self.data[self.current_index % self.data.len()];
        self.current_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current_index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for CircleIter<'_, T> {}
impl<T> FusedIterator for CircleIter<'_, T> {}

/// Generator-style shorthand for [`Circle::new`] followed by `.iter()`.
pub fn circle<T>(data: &[T], count: usize) -> Result<CircleIter<'_, T>, ConstructionError> {
    Circle::new(data, count).map(|c| c.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn repeats_to_requested_count() {
        let letters = ['a', 'b', 'c'];
        let c = Circle::new(&letters, 5).unwrap();
        assert_eq!(c.iter().collect::<String>(), "abcab");
    }

    #[test_case(&[1, 2], 6, vec![1, 2, 1, 2, 1, 2] ; "wraps several times")]
    #[test_case(&[1, 2, 3], 2, vec![1, 2] ; "shorter than source")]
    #[test_case(&[4, 5, 6], 0, vec![4, 5, 6] ; "zero count means once around")]
    fn cycles_numbers(input: &[i32], count: usize, expected: Vec<i32>) {
        let c = Circle::new(input, count).unwrap();
        assert_eq!(c.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn iterating_twice_reproduces_the_sequence() {
        let letters = ["a", "b", "c"];
        let c = Circle::new(&letters, 6).unwrap();
        let first = (&c).into_iter().collect::<Vec<_>>();
        let second = (&c).into_iter().collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn empty_source_with_count_is_rejected_up_front() {
        let empty: [u8; 0] = [];
        let error = Circle::new(&empty, 3).unwrap_err();
        assert_eq!(error, ConstructionError::EmptyCycleSource { count: 3 });
    }

    #[test]
    fn empty_source_with_zero_count_is_an_empty_cycle() {
        let empty: [u8; 0] = [];
        let c = Circle::new(&empty, 0).unwrap();
        assert_eq!(c.iter().next(), None);
    }

    #[test]
    fn projects_selected_field() {
        let fields = Fields {
            data: &["x", "y"][..],
            alternate: &["p", "q", "r"][..],
        };
        let data = Circle::project(&fields, Returns::Data, 3).unwrap();
        let alternate = Circle::project(&fields, Returns::Alternate, 4).unwrap();

        assert_eq!(data.iter().copied().collect::<Vec<_>>(), vec!["x", "y", "x"]);
        assert_eq!(
            alternate.iter().copied().collect::<Vec<_>>(),
            vec!["p", "q", "r", "p"]
        );
    }

    #[test]
    fn projecting_an_empty_field_is_rejected() {
        let fields = Fields {
            data: &[1][..],
            alternate: &[][..],
        };
        assert!(Circle::project(&fields, Returns::Alternate, 2).is_err());
    }

    #[test]
    fn generator_variant_matches_container() {
        let letters = ["a", "b", "c"];
        let from_fn = circle(&letters, 6).unwrap().copied().collect::<Vec<_>>();
        assert_eq!(from_fn, vec!["a", "b", "c", "a", "b", "c"]);
    }
}
