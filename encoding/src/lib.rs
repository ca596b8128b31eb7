//! DICOM decoding primitives for DICOM-lite.
//!
//! This crate provides the header decoders for the two little endian
//! transfer syntaxes which DICOM-lite reads
//! (Explicit VR Little Endian and Implicit VR Little Endian),
//! basic decoders of binary numbers,
//! and text decoding according to the specific character set.
//!
//! All decoders operate over synchronous [`Read`](std::io::Read) sources.
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, missing_docs, unused_qualifications)]

pub mod decode;
pub mod text;

pub use decode::{BasicDecode, Decode};
pub use text::SpecificCharacterSet;
