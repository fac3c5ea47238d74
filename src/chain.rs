//! Contains [`MyChain`] for concatenating any number of iterables.
//!
//! Each source is drained completely, in its own order, before the next one is
//! started. Compare with [`RoundRobin`](crate::round_robin::RoundRobin), which
//! takes one item from each source per pass.
//! ```
//! use lazy_iters::my_chain;
//!
//! let chained: Vec<i32> = my_chain([vec![1, 2], vec![], vec![3]]).collect();
//! assert_eq!(chained, vec![1, 2, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// An iterator that yields every item of its first source, then every item of
/// its second, and so on. The outer sequence of sources is pulled lazily.
pub struct MyChain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    sources: S,
    current: Option<<S::Item as IntoIterator>::IntoIter>,
}

impl<S> MyChain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    pub fn new<SS>(sources: SS) -> Self
    where
        SS: IntoIterator<IntoIter = S>,
    {
        Self {
            sources: sources.into_iter(),
            current: None,
        }
    }
}

impl<S> fmt::Debug for MyChain<S>
where
    S: Iterator + fmt::Debug,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MyChain")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}

impl<S> Iterator for MyChain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            match self.sources.next() {
                Some(source) => self.current = Some(source.into_iter()),
                None => {
                    self.current = None;
                    return None;
                }
            }
        }
    }
}

impl<S> FusedIterator for MyChain<S>
where
    S: FusedIterator,
    S::Item: IntoIterator,
{
}

/// Chain together every iterable yielded by `sources`.
pub fn my_chain<SS>(sources: SS) -> MyChain<SS::IntoIter>
where
    SS: IntoIterator,
    SS::Item: IntoIterator,
{
    MyChain::new(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Mixed {
        Char(char),
        Int(i32),
    }

    #[test]
    fn chains_letters_then_numbers() {
        let letters = "abc".chars().map(Mixed::Char).collect::<Vec<_>>();
        let numbers = [1, 2, 3].map(Mixed::Int).to_vec();

        let chained = my_chain([letters, numbers]).collect::<Vec<_>>();

        assert_eq!(
            chained,
            vec![
                Mixed::Char('a'),
                Mixed::Char('b'),
                Mixed::Char('c'),
                Mixed::Int(1),
                Mixed::Int(2),
                Mixed::Int(3),
            ]
        );
    }

    #[test]
    fn zero_sources_is_empty() {
        let sources: Vec<Vec<u8>> = vec![];
        assert_eq!(my_chain(sources).next(), None);
    }

    #[test]
    fn skips_empty_sources() {
        let chained = my_chain(vec![vec![], vec![1, 2], vec![], vec![], vec![3]]).collect::<Vec<_>>();
        assert_eq!(chained, vec![1, 2, 3]);
    }

    #[test]
    fn pulls_outer_sources_lazily() {
        let mut opened = 0;
        let sources = (0..3).map(|n| {
            opened += 1;
            vec![n; 2]
        });
        let first_two = my_chain(sources).take(2).collect::<Vec<_>>();
        assert_eq!(first_two, vec![0, 0]);
        assert_eq!(opened, 1);
    }

    #[test]
    fn debug_shows_the_current_source() {
        let mut chain = my_chain(vec![vec![1, 2], vec![3]]);
        chain.next();
        let debug = format!("{chain:?}");
        assert!(debug.starts_with("MyChain"));
        assert!(debug.contains("current: Some"));
    }

    #[test]
    fn stays_exhausted() {
        let mut chain = my_chain([vec![1]]);
        assert_eq!(chain.next(), Some(1));
        assert_eq!(chain.next(), None);
        assert_eq!(chain.next(), None);
    }
}
