//! The immutable postal gazetteer and its query surface.

use std::collections::HashMap;
use std::io::Read;

use camino::Utf8Path;
use log::debug;
use regex::Regex;

use crate::dataset::{EMBEDDED_DATASET, parse_entries};
use crate::index::NameIndex;
use crate::{DatasetConfig, DatasetError, DatasetSource, Entry, InvalidPatternError, PostalCode};

/// In-memory index over the Swiss postal dataset.
///
/// A `Gazetteer` is built once and never changes afterwards. All queries
/// take `&self`, so a single value can be shared between threads behind a
/// reference or an `Arc`.
///
/// Three indices back the queries:
/// - the entries in source order, scanned by [`find_all`](Self::find_all)
///   and [`find_all_by_pattern`](Self::find_all_by_pattern);
/// - a code index where the last loaded entry for a code wins;
/// - a name index that keeps the lowest code per name within a canton.
///
/// # Examples
///
/// ```
/// use plz_core::Gazetteer;
///
/// # fn main() -> Result<(), plz_core::DatasetError> {
/// let gazetteer = Gazetteer::embedded()?;
///
/// let aarau = gazetteer.find_first("Aarau").expect("Aarau is listed");
/// assert_eq!(aarau.code.get(), 5000);
///
/// assert_eq!(gazetteer.find_all("5405").len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<Entry>,
    by_code: HashMap<PostalCode, usize>,
    by_name: NameIndex,
}

impl Gazetteer {
    /// Build the gazetteer from the dataset compiled into the crate.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when the bundled file is malformed, which
    /// indicates a broken build artefact.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_csv_str(EMBEDDED_DATASET)
    }

    /// Build the gazetteer from CSV text in the standard layout.
    ///
    /// # Errors
    /// Returns [`DatasetError`] on malformed records or non-integer codes.
    pub fn from_csv_str(csv: &str) -> Result<Self, DatasetError> {
        Self::from_reader(csv.as_bytes())
    }

    /// Build the gazetteer from any reader producing CSV in the standard
    /// layout.
    ///
    /// # Errors
    /// Returns [`DatasetError`] on malformed records or non-integer codes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_reader_with(reader, &DatasetConfig::default())
    }

    /// Build the gazetteer from a replacement dataset on disk.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when the file is missing or unreadable, or
    /// when its contents are malformed.
    pub fn from_path(path: &Utf8Path) -> Result<Self, DatasetError> {
        Self::load(&DatasetConfig::from_path(path.to_path_buf()))
    }

    /// Build the gazetteer as described by `config`.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when a path source is missing or unreadable,
    /// or when the rows are malformed.
    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        config.validate()?;
        match &config.source {
            DatasetSource::Embedded => Self::from_reader_with(EMBEDDED_DATASET.as_bytes(), config),
            DatasetSource::Path(path) => {
                let file = plz_fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
                    path: path.clone(),
                    source,
                })?;
                Self::from_reader_with(file, config)
            }
        }
    }

    fn from_reader_with<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self, DatasetError> {
        parse_entries(reader, config).map(Self::from_entries)
    }

    /// Index already-built entries, keeping their order.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_name = NameIndex::default();
        for (position, entry) in entries.iter().enumerate() {
            by_code.insert(entry.code, position);
            by_name.register(&entries, position);
        }
        debug!(
            "indexed {} postal entries ({} codes, {} names)",
            entries.len(),
            by_code.len(),
            by_name.len()
        );
        Self {
            entries,
            by_code,
            by_name,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the dataset had no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in dataset order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Return the canonical entry for a postal code or place name.
    ///
    /// Numeric tokens are resolved through the code index, which surfaces a
    /// single entry even when several share the code. Other tokens are
    /// looked up verbatim, then by their upper-cased form.
    #[must_use]
    pub fn find_first(&self, token: &str) -> Option<&Entry> {
        let position = match parse_code(token) {
            Some(code) => self.by_code.get(&code).copied(),
            None => self.by_name.get(token),
        }?;
        self.entries.get(position)
    }

    /// Return every entry with the given postal code or exact place name.
    ///
    /// Names are compared byte for byte; there is no case folding here.
    /// Results keep dataset order.
    #[must_use]
    pub fn find_all(&self, token: &str) -> Vec<&Entry> {
        match parse_code(token) {
            Some(code) => self.scan(|entry| entry.code == code),
            None => self.scan(|entry| entry.name == token),
        }
    }

    /// Return every entry whose name matches the regular expression
    /// `pattern` anywhere in the name.
    ///
    /// # Errors
    /// Returns [`InvalidPatternError`] when `pattern` does not compile; no
    /// partial results are produced.
    pub fn find_all_by_pattern(&self, pattern: &str) -> Result<Vec<&Entry>, InvalidPatternError> {
        let regex = Regex::new(pattern).map_err(|source| {
            debug!("rejected place-name pattern {pattern:?}: {source}");
            InvalidPatternError::new(pattern.to_owned(), source)
        })?;
        Ok(self.scan(|entry| regex.is_match(&entry.name)))
    }

    fn scan<F>(&self, mut matches: F) -> Vec<&Entry>
    where
        F: FnMut(&Entry) -> bool,
    {
        self.entries.iter().filter(|&entry| matches(entry)).collect()
    }
}

fn parse_code(token: &str) -> Option<PostalCode> {
    token.parse().ok()
}
