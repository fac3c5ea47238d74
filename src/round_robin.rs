//! Contains [`RoundRobin`], a breadth-first interleaver over any number of
//! iterators.
//!
//! Every live source gives up one item per round, in the order the sources
//! were supplied. A source that runs dry is dropped from the rotation and the
//! remaining sources carry on until all of them are exhausted:
//! ```
//! use lazy_iters::RoundRobin;
//!
//! let rr = RoundRobin::new(vec![vec![1], vec![2, 20], vec![3, 30, 300]]);
//! assert_eq!(rr.collect::<Vec<_>>(), vec![1, 2, 3, 20, 30, 300]);
//! ```

use std::iter::FusedIterator;

use tracing::trace;

/// An iterator that alternates through its inner iterators, removing each one
/// the first time it reports end of input.
#[derive(Debug)]
pub struct RoundRobin<I: Iterator> {
    iterators: Vec<I>,
    collection_index: usize,
}

impl<I: Iterator> RoundRobin<I> {
    pub fn new<II>(collections: Vec<II>) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self {
            iterators: collections
                .into_iter()
                .map(IntoIterator::into_iter)
                .collect(),
            collection_index: 0,
        }
    }

    /// Number of sources that have not yet been exhausted.
    pub fn live_sources(&self) -> usize {
        self.iterators.len()
    }
}

impl<I: Iterator> Iterator for RoundRobin<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.iterators.is_empty() {
            if self.collection_index >= self.iterators.len() {
                self.collection_index = 0;
            }
            match self.iterators[self.collection_index].next() {
                Some(item) => {
                    self.collection_index += 1;
                    return Some(item);
                }
                // The next source slides into this slot, so the index stays
                // put and the current round carries on from there.
                None => {
                    let exhausted = self.iterators.remove(self.collection_index);
                    drop(exhausted);
                    trace!(
                        slot = self.collection_index,
                        remaining = self.iterators.len(),
                        "source exhausted"
                    );
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterators
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lo, hi), (l, h)| {
                (
                    lo.saturating_add(l),
                    hi.zip(h).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I: Iterator> FusedIterator for RoundRobin<I> {}
