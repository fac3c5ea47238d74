//! Contains [`MyZip`] for walking any number of iterators in lock step.
//!
//! Each step yields a `Vec` holding the next item from every source, in the
//! order the sources were supplied. Iteration ends as soon as any single
//! source is exhausted.
//! ```
//! use lazy_iters::my_zip;
//!
//! let zipped: Vec<Vec<i32>> = my_zip(vec![vec![1, 2, 3], vec![10, 20]]).collect();
//! assert_eq!(zipped, vec![vec![1, 10], vec![2, 20]]);
//! ```

use std::iter::FusedIterator;

#[derive(Debug)]
pub struct MyZip<I: Iterator> {
    iterators: Vec<I>,
    finished: bool,
}

impl<I: Iterator> MyZip<I> {
    pub fn new<II>(collections: Vec<II>) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        let finished = collections.is_empty();
        Self {
            iterators: collections
                .into_iter()
                .map(IntoIterator::into_iter)
                .collect(),
            finished,
        }
    }
}

impl<I: Iterator> Iterator for MyZip<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let step = self
            .iterators
            .iter_mut()
            .map(Iterator::next)
            .collect::<Option<Vec<_>>>();
        if step.is_none() {
            self.finished = true;
        }
        step
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        self.iterators
            .iter()
            .map(Iterator::size_hint)
            .reduce(|(lo, hi), (l, h)| {
                let upper = match (hi, h) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (lo.min(l), upper)
            })
            .unwrap_or((0, Some(0)))
    }
}

impl<I: Iterator> FusedIterator for MyZip<I> {}

pub fn my_zip<II: IntoIterator>(collections: Vec<II>) -> MyZip<II::IntoIter> {
    MyZip::new(collections)
}
