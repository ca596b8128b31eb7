//! This crate provides a parser of DICOM data sets
//! held in memory as a byte buffer,
//! and accessors for retrieving element values by tag.
//!
//! The parser walks the data set once,
//! recording the position and length of each top-level element's value
//! without copying it.
//! Element values are decoded on demand through [`DataSet`]:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dicom_lite_dictionary_std::tags;
//!
//! let bytes = std::fs::read("image.dcm")?;
//! let dataset = dicom_lite_parser::parse(&bytes)?;
//! let patient_name = dataset.string(tags::PATIENT_NAME);
//! let rows = dataset.uint16(tags::ROWS);
//! # Ok(())
//! # }
//! ```
//!
//! Only little endian transfer syntaxes can be read.
//! Data sets in compressed transfer syntaxes are parsed,
//! leaving their pixel data encapsulated.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications)]

pub mod dataset;
pub mod error;
mod read;
pub mod transfer_syntax;

pub use dataset::{DataSet, ElementDescriptor};
pub use error::{Error, Result};
pub use transfer_syntax::TransferSyntax;

use dicom_lite_core::dictionary::DataDictionary;
use dicom_lite_core::Tag;
use dicom_lite_dictionary_std::StandardDataDictionary;
use error::InvalidTagExpressionSnafu;
use snafu::OptionExt;

/// Parse a DICOM data set from the given buffer.
///
/// See [`DataSet::parse`].
pub fn parse(source: &[u8]) -> Result<DataSet<'_>> {
    DataSet::parse(source)
}

/// Parse a DICOM data set and retrieve the value of one element
/// as a display string.
///
/// Returns `Ok(None)` if the element is absent or empty.
pub fn parse_and_get_tag(source: &[u8], tag: Tag) -> Result<Option<String>> {
    let dataset = parse(source)?;
    Ok(dataset.to_display_string(tag))
}

/// Parse a DICOM data set and retrieve the value of one element
/// as a display string,
/// where the element is identified by a tag expression
/// (such as `x00100010`, `(0010,0010)`, or `PatientName`).
///
/// Returns `Ok(None)` if the element is absent or empty.
pub fn parse_and_get_tag_expr(source: &[u8], expr: &str) -> Result<Option<String>> {
    let tag = StandardDataDictionary
        .parse_tag(expr)
        .context(InvalidTagExpressionSnafu { expr })?;
    parse_and_get_tag(source, tag)
}
