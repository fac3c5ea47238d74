use std::path::PathBuf;

use thiserror::Error;
use winnow::error::ContextError;

/// Invalid arguments handed to an iterator constructor. These are always
/// reported by the constructor itself, never by a later call to `next`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A cycle was asked to produce items from a source with nothing in it
    #[error("Cannot cycle an empty source {count} time(s)")]
    EmptyCycleSource { count: usize },

    /// A range step of zero would never reach its bound
    #[error("Range step must not be zero")]
    ZeroStep,
}

#[derive(Error, Debug)]
pub enum RangeParseError {
    #[error("Expected 1 to 3 comma separated integers. Cause: {}",
    match .0.cause() {
        Some(cause) => cause.to_string(),
        None => "None".to_string()
    })]
    InvalidArguments(ContextError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl From<ContextError> for RangeParseError {
    fn from(error: ContextError) -> Self {
        RangeParseError::InvalidArguments(error)
    }
}

#[derive(Error, Debug)]
pub enum SourceError {
    /// The directory holding the line sources could not be listed
    #[error("Could not list directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
