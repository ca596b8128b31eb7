//! This crate implements the DICOM data dictionary used by DICOM-lite.
//!
//! Rather than the full standard registry of attributes,
//! it declares the attributes which this project reads by tag:
//! the file meta group, a whitelist of patient, study, series
//! and instance metadata, and the image pixel module.
//!
//! - [`data_element`]: the run-time dictionary,
//!   queried by implicit VR decoders to resolve value representations,
//!   and by tag expression parsers to resolve keywords.
//! - [`tags`]: constants mapping an attribute alias to a DICOM tag.
//! - [`uids`]: transfer syntax unique identifiers.
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
