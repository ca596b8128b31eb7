#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of DICOM-lite containing the concepts
//! needed to interpret DICOM element headers.
//!
//! - [`dictionary`] describes the behavior of DICOM data dictionaries,
//!   which translate tags and keywords to a dictionary entry
//!   holding the attribute's typical value representation.
//! - [`header`] comprises the DICOM attribute tag,
//!   the value representation and its family,
//!   the value length, and the element header composing them.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html

pub mod dictionary;
pub mod header;

pub use dictionary::{DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef};
pub use header::{DataElementHeader, Length, ParseTagError, Tag, VrFamily, VR};
