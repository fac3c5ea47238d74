//! Contains [`ElapsedSince`] for throttling how quickly items are pulled from
//! an iterator.
//!
//! Each item comes paired with the time since the previous one was handed
//! out. If the caller comes back sooner than `min_interval`, the pull blocks
//! for the difference:
//! ```
//! use lazy_iters::elapsed_since;
//! use std::time::Duration;
//!
//! for (elapsed, _item) in elapsed_since(["a", "b", "c"], Duration::from_millis(100)) {
//!     // Consecutive items are always at least 100ms apart
//!     assert!(elapsed >= Duration::from_millis(100));
//! }
//! ```
//!
//! The first item has nothing to be measured against and reports
//! `min_interval` itself.
//!
//! Pacing blocks the calling thread. To stop early, stop pulling.

use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// A monotonic time source that can also block the caller.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// The system's monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// An iterator of `(elapsed, item)` pairs spaced at least `min_interval` apart.
///
/// For general usage, see the [module-level documentation.](crate::pacer)
#[derive(Debug)]
pub struct ElapsedSince<I, C = MonotonicClock> {
    inner: I,
    min_interval: Duration,
    last_yield: Option<Instant>,
    clock: C,
}

impl<I: Iterator> ElapsedSince<I> {
    pub fn new<II>(iterable: II, min_interval: Duration) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self::with_clock(iterable, min_interval, MonotonicClock)
    }
}

impl<I: Iterator, C: Clock> ElapsedSince<I, C> {
    pub fn with_clock<II>(iterable: II, min_interval: Duration, clock: C) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: iterable.into_iter(),
            min_interval,
            last_yield: None,
            clock,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl<I: Iterator, C: Clock> Iterator for ElapsedSince<I, C> {
    type Item = (Duration, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;

        let Some(last_yield) = self.last_yield else {
            self.last_yield = Some(self.clock.now());
            return Some((self.min_interval, item));
        };

        let mut elapsed = self.clock.now().saturating_duration_since(last_yield);
        if elapsed < self.min_interval {
            let pause = self.min_interval - elapsed;
            trace!(?pause, "pacing");
            self.clock.sleep(pause);
            elapsed = self.clock.now().saturating_duration_since(last_yield);
        }

        self.last_yield = Some(self.clock.now());
        Some((elapsed, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Pace `iterable` so that consecutive items are at least `min_interval` apart.
pub fn elapsed_since<II: IntoIterator>(
    iterable: II,
    min_interval: Duration,
) -> ElapsedSince<II::IntoIter> {
    ElapsedSince::new(iterable, min_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// A clock that only moves when told to, recording every sleep.
    struct ManualClock {
        now: Cell<Instant>,
        sleeps: RefCell<Vec<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Cell::new(Instant::now()),
                sleeps: RefCell::new(Vec::new()),
            }
        }

        fn advance(&self, duration: Duration) {
            self.now.set(self.now.get() + duration);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }

        fn sleep(&self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
            self.advance(duration);
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn first_item_reports_the_minimum_interval() {
        let clock = ManualClock::new();
        let mut paced = ElapsedSince::with_clock([1, 2], ms(50), &clock);
        assert_eq!(paced.next(), Some((ms(50), 1)));
        assert!(clock.sleeps.borrow().is_empty());
    }

    #[test]
    fn sleeps_for_the_remaining_difference() {
        let clock = ManualClock::new();
        let mut paced = ElapsedSince::with_clock(["a", "b", "c"], ms(100), &clock);

        paced.next();
        clock.advance(ms(30));
        assert_eq!(paced.next(), Some((ms(100), "b")));
        clock.advance(ms(250));
        assert_eq!(paced.next(), Some((ms(250), "c")));
        assert_eq!(paced.next(), None);

        assert_eq!(*clock.sleeps.borrow(), vec![ms(70)]);
    }

    #[test]
    fn zero_interval_never_sleeps() {
        let clock = ManualClock::new();
        let paced = ElapsedSince::with_clock(0..5, Duration::ZERO, &clock).collect::<Vec<_>>();

        assert_eq!(paced.len(), 5);
        assert_eq!(paced[0], (Duration::ZERO, 0));
        assert!(clock.sleeps.borrow().is_empty());
    }

    #[test]
    fn empty_source_yields_nothing() {
        let mut paced = elapsed_since(Vec::<u8>::new(), ms(10));
        assert_eq!(paced.next(), None);
    }

    #[test]
    fn draining_takes_at_least_the_paced_time() {
        let interval = ms(5);
        let items = 4;
        let started = Instant::now();

        let drained = elapsed_since(0..items, interval).collect::<Vec<_>>();

        assert_eq!(drained.len(), items as usize);
        assert!(started.elapsed() >= interval * (items - 1));
        assert!(drained.iter().all(|(elapsed, _)| *elapsed >= interval));
    }
}
