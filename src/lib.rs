#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! Small, pull-based iterator adapters.
//!
//! Every adapter is lazy: nothing is read, computed or slept for until the
//! caller asks for the next item. Constructors validate their arguments up
//! front, so once an iterator exists, pulling from it never fails. It either
//! produces an item or reports the end of the sequence.
//!
//! # Quick Start
//!
//! Interleaving the lines of every file in a directory, first lines first:
//! ```
//! use lazy_iters::parallel_lines;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     for (file_name, line) in parallel_lines("./logs")?.with_filter("WARN") {
//!         println!("{file_name}: {line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Adapters
//!
//! | Adapter | Yields |
//! |---------|--------|
//! | [`MyEnumerate`] | `(index, item)` pairs, restartable |
//! | [`Circle`] | a slice repeated until `count` items have been produced |
//! | [`MyRange`] | integers from `start` towards `stop` by `step` |
//! | [`MyChain`] | every item of each source, one source after another |
//! | [`MyZip`] | one item from every source per step, until any runs out |
//! | [`RoundRobin`] | one item from every live source per round |
//! | [`ParallelLines`] | `(file name, line)` pairs, round-robin across files |
//! | [`ElapsedSince`] | `(elapsed, item)` pairs spaced at least an interval apart |
//!
//! # Features
//!
//! `parallel-open` (enabled by default) opens the files behind a
//! [`ParallelLines`] concurrently with `rayon`. Reading them is always
//! sequential.

mod errors;
mod parsers;

pub use chain::{MyChain, my_chain};
pub use circle::{Circle, Fields, Returns, circle};
pub use enumerate::{MyEnumerate, my_enumerate};
pub use errors::{ConstructionError, RangeParseError, SourceError};
pub use file_lines::{AllLines, ParallelLines, all_lines, parallel_lines};
pub use pacer::{ElapsedSince, elapsed_since};
pub use range::MyRange;
pub use round_robin::RoundRobin;
pub use zip::{MyZip, my_zip};

pub mod chain;
pub mod circle;
pub mod enumerate;
pub mod file_lines;
pub mod pacer;
pub mod range;
pub mod round_robin;
pub mod zip;
