//! Error types raised while loading the dataset and matching patterns.

use std::num::ParseIntError;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::dataset::Column;

/// Errors raised while reading or parsing a postal dataset.
///
/// Any of these means the dataset artefact is unusable. Whether that is
/// fatal is the embedding application's call.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The configured dataset path does not name a regular file.
    #[error("dataset {path} does not exist or is not a regular file")]
    MissingSource {
        /// Configured dataset location.
        path: Utf8PathBuf,
    },
    /// Opening the dataset file failed.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Dataset location.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The CSV framing could not be decoded.
    #[error("failed to read dataset record")]
    Csv {
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A record ended before the fixed column layout was complete.
    #[error("line {line}: record has no `{column}` column")]
    MissingColumn {
        /// One-based line number of the record.
        line: u64,
        /// Column that was absent.
        column: Column,
    },
    /// A numeric column held something other than an integer.
    #[error("line {line}: `{column}` value {value:?} is not an integer")]
    InvalidInteger {
        /// One-based line number of the record.
        line: u64,
        /// Offending column.
        column: Column,
        /// Raw field text.
        value: String,
        /// Source error from integer parsing.
        #[source]
        source: ParseIntError,
    },
}

/// A caller-supplied place-name pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid place-name pattern {pattern:?}")]
pub struct InvalidPatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl InvalidPatternError {
    pub(crate) const fn new(pattern: String, source: regex::Error) -> Self {
        Self { pattern, source }
    }

    /// The pattern as supplied by the caller.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
