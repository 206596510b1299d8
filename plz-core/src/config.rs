//! Configuration for where the dataset comes from and how it is framed.

use camino::{Utf8Path, Utf8PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DatasetError;

/// Location of the postal dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case", tag = "kind", content = "path")
)]
pub enum DatasetSource {
    /// The dataset compiled into the crate.
    #[default]
    Embedded,
    /// A replacement dataset on disk with the same column layout.
    Path(Utf8PathBuf),
}

/// Options controlling how a [`Gazetteer`](crate::Gazetteer) is loaded.
///
/// # Examples
///
/// ```
/// use plz_core::{DatasetConfig, DatasetSource};
///
/// let config = DatasetConfig::default();
/// assert_eq!(config.source, DatasetSource::Embedded);
/// assert_eq!(config.delimiter, b',');
/// assert!(config.has_headers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DatasetConfig {
    /// Where to read rows from.
    pub source: DatasetSource,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row is a header to skip.
    pub has_headers: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::Embedded,
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl DatasetConfig {
    /// Configuration reading a replacement dataset from `path`.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: DatasetSource::Path(path.into()),
            ..Self::default()
        }
    }

    /// Override the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Override whether the first row is a header.
    #[must_use]
    pub const fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Check that a path source names an existing regular file.
    ///
    /// # Errors
    /// Returns [`DatasetError::MissingSource`] when the file is absent or is
    /// not a regular file.
    pub fn validate(&self) -> Result<(), DatasetError> {
        match &self.source {
            DatasetSource::Embedded => Ok(()),
            DatasetSource::Path(path) => require_file(path),
        }
    }
}

fn require_file(path: &Utf8Path) -> Result<(), DatasetError> {
    match plz_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(DatasetError::MissingSource {
            path: path.to_path_buf(),
        }),
    }
}
