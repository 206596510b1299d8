//! Facade crate for the Swiss postal gazetteer.
//!
//! This crate re-exports the gazetteer, its entry model and configuration
//! from `plz-core`. Serde support and the test fixture builders are behind
//! the `serde` and `test-support` features.
//!
//! # Examples
//!
//! ```
//! use swiss_plz::Gazetteer;
//!
//! # fn main() -> Result<(), swiss_plz::DatasetError> {
//! let gazetteer = Gazetteer::embedded()?;
//!
//! let bern = gazetteer.find_first("3000").expect("3000 is listed");
//! assert_eq!(bern.display_name(), "3000 Bern Kanton Bern");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use plz_core::{
    Column, DatasetConfig, DatasetError, DatasetSource, EMBEDDED_DATASET, Entry, Gazetteer,
    InvalidPatternError, PostalCode,
};

#[cfg(feature = "test-support")]
pub use plz_core::test_support;
