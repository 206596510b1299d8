//! The postal entry record and its code newtype.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Swiss postal code (Postleitzahl).
///
/// Codes are not unique: one code can serve several places, for example
/// when a delivery area spans municipalities.
///
/// # Examples
///
/// ```
/// use plz_core::PostalCode;
///
/// let code: PostalCode = "8001".parse().expect("numeric token");
/// assert_eq!(code.get(), 8001);
/// assert_eq!(code.to_string(), "8001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PostalCode(u32);

impl PostalCode {
    /// Wrap a raw numeric code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Return the raw numeric code.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PostalCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl FromStr for PostalCode {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single row of the postal dataset.
///
/// Coordinates stay in their textual form; the gazetteer never interprets
/// them.
///
/// # Examples
///
/// ```
/// use plz_core::{Entry, PostalCode};
///
/// let entry = Entry {
///     code: PostalCode::new(5000),
///     name: "Aarau".into(),
///     canton_code: "AG".into(),
///     canton: "Kanton Aargau".into(),
///     district: "Bezirk Aarau".into(),
///     district_code: 1901,
///     municipality: "Aarau".into(),
///     municipality_code: 4001,
///     latitude: "47.3925".into(),
///     longitude: "8.0442".into(),
/// };
/// assert_eq!(entry.display_name(), "5000 Aarau Kanton Aargau");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    /// Postal code.
    pub code: PostalCode,
    /// Place name as spelled in the dataset.
    pub name: String,
    /// Two-letter canton abbreviation, e.g. `ZH`.
    pub canton_code: String,
    /// Full canton name, e.g. `Kanton Zürich`.
    pub canton: String,
    /// District name.
    pub district: String,
    /// Numeric district identifier.
    pub district_code: u32,
    /// Municipality name.
    pub municipality: String,
    /// Numeric municipality identifier.
    pub municipality_code: u32,
    /// Latitude in decimal degrees, verbatim.
    pub latitude: String,
    /// Longitude in decimal degrees, verbatim.
    pub longitude: String,
}

impl Entry {
    /// Human-readable `"<code> <name> <canton>"` label.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.code, self.name, self.canton)
    }
}
