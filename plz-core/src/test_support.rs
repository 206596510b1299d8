//! Test-only builders for small postal datasets used by unit and behaviour
//! tests.

use crate::dataset::Column;
use crate::{DatasetError, Gazetteer};

/// Builds CSV text in the dataset's column layout.
///
/// Only the columns the gazetteer indexes on are required; the
/// administrative detail is derived from the place name.
#[derive(Debug, Clone, Default)]
pub struct CsvFixture {
    rows: Vec<String>,
}

impl CsvFixture {
    /// Start an empty fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed row.
    #[must_use]
    pub fn place(mut self, code: u32, name: &str, canton_code: &str, canton: &str) -> Self {
        self.rows.push(format!(
            "CH,{code},{name},{canton},{canton_code},Bezirk {name},1,{name},1,47.0,8.0"
        ));
        self
    }

    /// Append a raw line verbatim, e.g. a deliberately malformed row.
    #[must_use]
    pub fn raw(mut self, line: &str) -> Self {
        self.rows.push(line.to_owned());
        self
    }

    /// Render the fixture with its header row.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let header: Vec<_> = Column::ALL.iter().map(|column| column.header()).collect();
        let mut csv = header.join(",");
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(row);
            csv.push('\n');
        }
        csv
    }

    /// Parse the fixture into a gazetteer.
    ///
    /// # Errors
    /// Propagates [`DatasetError`] for malformed rows.
    pub fn build(&self) -> Result<Gazetteer, DatasetError> {
        Gazetteer::from_csv_str(&self.to_csv())
    }
}
