//! Contains [`MyRange`], an integer range that takes one, two or three arguments.
//!
//! ```
//! use lazy_iters::{ConstructionError, MyRange};
//!
//! fn main() -> Result<(), ConstructionError> {
//!     let evens: Vec<i64> = MyRange::with_step(0, 10, 2)?.collect();
//!     assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//!     let digits: Vec<i64> = MyRange::to(10).collect();
//!     assert_eq!(digits.len(), 10);
//!     Ok(())
//! }
//! ```
//!
//! A [`MyRange`] is its own iterator and advances its own bounds, so one
//! traversal consumes it. Build a new one (it is `Copy`) to iterate again.
//!
//! Ranges can also be parsed from their argument list:
//! ```
//! use lazy_iters::{MyRange, RangeParseError};
//!
//! fn main() -> Result<(), RangeParseError> {
//!     let r: MyRange = "0, 20, 10".parse()?;
//!     assert_eq!(r.collect::<Vec<_>>(), vec![0, 10]);
//!     Ok(())
//! }
//! ```

use std::iter::FusedIterator;
use std::str::FromStr;

use crate::errors::{ConstructionError, RangeParseError};
use crate::parsers::parse_range_args;

/// A lazy range of integers from `start` up to, but excluding, `stop`.
///
/// For general usage, see the [module-level documentation.](crate::range)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyRange {
    start: i64,
    stop: i64,
    step: i64,
}

impl MyRange {
    /// `0, 1, .., stop - 1`
    pub fn to(stop: i64) -> Self {
        Self::new(0, stop)
    }

    pub fn new(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// A negative `step` counts down while the current value is above `stop`.
    pub fn with_step(start: i64, stop: i64, step: i64) -> Result<Self, ConstructionError> {
        if step == 0 {
            return Err(ConstructionError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    fn is_exhausted(&self) -> bool {
        if self.step > 0 {
            self.start >= self.stop
        } else {
            self.start <= self.stop
        }
    }
}

impl Iterator for MyRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let value = self.start;
        self.start = match self.start.checked_add(self.step) {
            Some(next) => next,
            // Stepping past i64 bounds means nothing is left before `stop`
            None => self.stop,
        };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            return (0, Some(0));
        }
        let span = self.stop.abs_diff(self.start);
        let step = self.step.unsigned_abs();
        match usize::try_from(span.div_ceil(step)) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for MyRange {}

impl FromStr for MyRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = s;
        match parse_range_args(&mut input)?.as_slice() {
            [stop] => Ok(Self::to(*stop)),
            [start, stop] => Ok(Self::new(*start, *stop)),
            [start, stop, step] => Ok(Self::with_step(*start, *stop, *step)?),
            _ => unreachable!("the parser accepts between one and three arguments"),
        }
    }
}
