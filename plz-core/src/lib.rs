//! Core gazetteer for Swiss postal codes.
//!
//! The crate parses the Swiss postal dataset (code, place, canton, district,
//! municipality and coordinates) into an immutable [`Gazetteer`] that
//! answers three kinds of question:
//!
//! - [`Gazetteer::find_first`]: the canonical entry for a code or a name;
//! - [`Gazetteer::find_all`]: every entry with a code or an exact name;
//! - [`Gazetteer::find_all_by_pattern`]: every entry whose name matches a
//!   regular expression.
//!
//! Construction is explicit and fallible. A malformed dataset surfaces as
//! [`DatasetError`]; the caller decides whether that is fatal. There is no
//! global state.
//!
//! # Examples
//!
//! ```
//! use plz_core::Gazetteer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gazetteer = Gazetteer::embedded()?;
//!
//! let baden = gazetteer.find_all("Baden");
//! assert_eq!(baden.len(), 6);
//!
//! let oberdorf = gazetteer.find_all_by_pattern("Oberdorf.*")?;
//! assert_eq!(oberdorf.len(), 3);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod dataset;
mod entry;
mod error;
mod gazetteer;
mod index;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{DatasetConfig, DatasetSource};
pub use dataset::{Column, EMBEDDED_DATASET};
pub use entry::{Entry, PostalCode};
pub use error::{DatasetError, InvalidPatternError};
pub use gazetteer::Gazetteer;
