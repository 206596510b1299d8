//! Parsing of the tabular postal dataset.
//!
//! Rows are mapped positionally; the header row is skipped, never
//! interpreted. The layout is fixed:
//!
//! `country_code,zipcode,place,state,state_code,province,province_code,community,community_code,latitude,longitude`

use std::fmt;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::{DatasetConfig, DatasetError, Entry, PostalCode};

/// The postal dataset compiled into the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../data/zipcodes.ch.csv");

/// Columns of the dataset, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// ISO country code. Ignored.
    CountryCode,
    /// Postal code.
    Zipcode,
    /// Place name.
    Place,
    /// Full canton name.
    State,
    /// Canton abbreviation.
    StateCode,
    /// District name.
    Province,
    /// District number.
    ProvinceCode,
    /// Municipality name.
    Community,
    /// Municipality number.
    CommunityCode,
    /// Latitude text.
    Latitude,
    /// Longitude text.
    Longitude,
}

impl Column {
    /// Every column in file order.
    pub const ALL: [Self; 11] = [
        Self::CountryCode,
        Self::Zipcode,
        Self::Place,
        Self::State,
        Self::StateCode,
        Self::Province,
        Self::ProvinceCode,
        Self::Community,
        Self::CommunityCode,
        Self::Latitude,
        Self::Longitude,
    ];

    /// Zero-based field position.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Header label used by the published dataset.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::CountryCode => "country_code",
            Self::Zipcode => "zipcode",
            Self::Place => "place",
            Self::State => "state",
            Self::StateCode => "state_code",
            Self::Province => "province",
            Self::ProvinceCode => "province_code",
            Self::Community => "community",
            Self::CommunityCode => "community_code",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Decode every data row of `reader` into entries, preserving order.
///
/// Parsing stops at the first bad record.
pub(crate) fn parse_entries<R: Read>(
    reader: R,
    config: &DatasetConfig,
) -> Result<Vec<Entry>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        // Short rows are reported per column rather than as a framing error.
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| DatasetError::Csv { source })?;
        entries.push(entry_from_record(&record)?);
    }
    debug!("parsed {} postal dataset rows", entries.len());
    Ok(entries)
}

fn entry_from_record(record: &StringRecord) -> Result<Entry, DatasetError> {
    let fields = RecordFields {
        record,
        line: record.position().map_or(0, csv::Position::line),
    };
    Ok(Entry {
        code: PostalCode::new(fields.integer(Column::Zipcode)?),
        name: fields.text(Column::Place)?,
        canton: fields.text(Column::State)?,
        canton_code: fields.text(Column::StateCode)?,
        district: fields.text(Column::Province)?,
        district_code: fields.integer(Column::ProvinceCode)?,
        municipality: fields.text(Column::Community)?,
        municipality_code: fields.integer(Column::CommunityCode)?,
        latitude: fields.text(Column::Latitude)?,
        longitude: fields.text(Column::Longitude)?,
    })
}

struct RecordFields<'a> {
    record: &'a StringRecord,
    line: u64,
}

impl RecordFields<'_> {
    fn raw(&self, column: Column) -> Result<&str, DatasetError> {
        self.record
            .get(column.index())
            .ok_or(DatasetError::MissingColumn {
                line: self.line,
                column,
            })
    }

    fn text(&self, column: Column) -> Result<String, DatasetError> {
        self.raw(column).map(str::to_owned)
    }

    fn integer(&self, column: Column) -> Result<u32, DatasetError> {
        let raw = self.raw(column)?;
        raw.parse().map_err(|source| DatasetError::InvalidInteger {
            line: self.line,
            column,
            value: raw.to_owned(),
            source,
        })
    }
}
