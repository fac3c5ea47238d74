//! Contains [`ParallelLines`] and [`AllLines`] for reading the lines of every
//! file in a directory.
//!
//! # Round-robin
//!
//! [`parallel_lines`] visits the first line of every file before any second
//! line, then every second line before any third, and so on:
//! ```
//! use lazy_iters::{SourceError, parallel_lines};
//!
//! fn main() -> Result<(), SourceError> {
//!     for (file_name, line) in parallel_lines("./logs")?.with_filter("ERROR") {
//!         println!("{file_name}: {line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Files that cannot be opened, or that fail part way through, quietly stop
//! contributing lines. Only a directory that cannot be listed is an error.
//!
//! # Sequential
//!
//! [`all_lines`] yields each file's lines in full before moving to the next
//! file, and only keeps one file open at a time.
//!
//! Directory entries are visited sorted by file name.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::{FusedIterator, Map};
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel-open")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::chain::MyChain;
use crate::errors::SourceError;
use crate::round_robin::RoundRobin;

/// The name a line's file is reported under.
pub type SourceId = String;

/// A single file's lines. A file that could not be opened is kept as an
/// empty placeholder, so it ends the first time it is pulled.
#[derive(Debug)]
pub struct LineSource {
    id: SourceId,
    lines: Option<Lines<BufReader<File>>>,
}

impl LineSource {
    pub fn open(path: PathBuf) -> Self {
        let id = source_id(&path);
        let lines = match open_file(&path) {
            Ok(file) => Some(BufReader::new(file).lines()),
            Err(error) => {
                debug!(path = %path.display(), %error, "skipping unopenable source");
                None
            }
        };
        Self { id, lines }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `false` once the file has reported end of input, or if it never opened.
    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }
}

impl Iterator for LineSource {
    type Item = (SourceId, String);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.as_mut()?.next();
        match next {
            Some(Ok(line)) => Some((self.id.clone(), line)),
            Some(Err(error)) => {
                warn!(source = %self.id, %error, "read failed, treating source as exhausted");
                self.lines = None;
                None
            }
            None => {
                // Release the file handle as soon as the end is seen
                self.lines = None;
                None
            }
        }
    }
}

impl FusedIterator for LineSource {}

fn open_file(path: &Path) -> std::io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::IsADirectory,
            "is a directory",
        ));
    }
    Ok(file)
}

fn source_id(path: &Path) -> SourceId {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// List the entries of `dir`, sorted by file name.
pub fn list_directory(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, SourceError> {
    let dir = dir.as_ref();

    let entries = std::fs::read_dir(dir)
        .map_err(|source| SourceError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?
        .map(|entry| entry.map(|e| e.path()));
    let paths = readable_entries(dir, entries);

    debug!(dir = %dir.display(), entries = paths.len(), "listed directory");
    Ok(paths)
}

/// Keep the entries that could be read, sorted by file name. An entry that
/// fails is skipped like any other unopenable source.
fn readable_entries(
    dir: &Path,
    entries: impl IntoIterator<Item = std::io::Result<PathBuf>>,
) -> Vec<PathBuf> {
    let mut paths = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(error) => {
                debug!(dir = %dir.display(), %error, "skipping unreadable directory entry");
                None
            }
        })
        .collect::<Vec<_>>();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    paths
}

#[cfg(feature = "parallel-open")]
fn open_all(paths: Vec<PathBuf>) -> Vec<LineSource> {
    paths.into_par_iter().map(LineSource::open).collect()
}

#[cfg(not(feature = "parallel-open"))]
fn open_all(paths: Vec<PathBuf>) -> Vec<LineSource> {
    paths.into_iter().map(LineSource::open).collect()
}

/// Round-robin `(file name, line)` pairs from several files.
///
/// For general usage, see the [module-level documentation.](crate::file_lines)
#[derive(Debug)]
pub struct ParallelLines {
    sources: RoundRobin<LineSource>,
    filter: Option<String>,
}

impl ParallelLines {
    /// Open every entry of `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Self::from_paths(list_directory(dir)?))
    }

    /// Open each of `paths`, keeping their order. Paths that cannot be opened
    /// never produce a line.
    pub fn from_paths<P: Into<PathBuf>>(paths: impl IntoIterator<Item = P>) -> Self {
        let paths = paths.into_iter().map(Into::into).collect::<Vec<_>>();
        Self {
            sources: RoundRobin::new(open_all(paths)),
            filter: None,
        }
    }

    /// Only yield lines containing `needle`. Files whose current line does
    /// not match are still read again on the next round.
    pub fn with_filter(self, needle: impl Into<String>) -> Self {
        Self {
            filter: Some(needle.into()),
            ..self
        }
    }

    /// Number of files still able to produce lines.
    pub fn live_sources(&self) -> usize {
        self.sources.live_sources()
    }
}

impl Iterator for ParallelLines {
    type Item = (SourceId, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, line) = self.sources.next()?;
            match &self.filter {
                Some(needle) if !line.contains(needle.as_str()) => continue,
                _ => return Some((id, line)),
            }
        }
    }
}

impl FusedIterator for ParallelLines {}

/// Shorthand for [`ParallelLines::open`].
pub fn parallel_lines(dir: impl AsRef<Path>) -> Result<ParallelLines, SourceError> {
    ParallelLines::open(dir)
}

type LazySources = Map<std::vec::IntoIter<PathBuf>, fn(PathBuf) -> LineSource>;

/// Every line of every file, one file after another.
///
/// For general usage, see the [module-level documentation.](crate::file_lines)
#[derive(Debug)]
pub struct AllLines(MyChain<LazySources>);

impl Iterator for AllLines {
    type Item = (SourceId, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl FusedIterator for AllLines {}

/// Sequentially read every entry of `dir`. Each file is only opened once the
/// previous one is exhausted.
pub fn all_lines(dir: impl AsRef<Path>) -> Result<AllLines, SourceError> {
    let paths = list_directory(dir)?;
    let open: fn(PathBuf) -> LineSource = LineSource::open;
    Ok(AllLines(MyChain::new(paths.into_iter().map(open))))
}
