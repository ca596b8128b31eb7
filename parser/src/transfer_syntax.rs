//! Resolution of the transfer syntax declared in the file meta group.
use crate::error::{Result, UnsupportedTransferSyntaxSnafu};
use dicom_lite_dictionary_std::uids;
use snafu::ensure;

/// The encoding of the main data set, as far as the parser is concerned.
///
/// Only little endian, non-deflated encodings can be walked.
/// Compressed transfer syntaxes are read with explicit VR headers,
/// leaving their pixel data encapsulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian, the default transfer syntax
    ImplicitVRLittleEndian,
    /// Explicit VR Little Endian
    ExplicitVRLittleEndian,
    /// Explicit VR Little Endian headers with encapsulated pixel data,
    /// identified by its UID
    Encapsulated(String),
}

impl TransferSyntax {
    /// Resolve a transfer syntax by the UID
    /// found in the Transfer Syntax UID (0002,0010) element.
    ///
    /// Trailing padding is ignored.
    /// UIDs which are not known to be incompatible
    /// are read as Explicit VR Little Endian.
    pub fn from_uid(uid: &str) -> Result<Self> {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        let unsupported =
            uid == uids::EXPLICIT_VR_BIG_ENDIAN || uid == uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN;
        ensure!(!unsupported, UnsupportedTransferSyntaxSnafu { uid });

        Ok(match uid {
            uids::IMPLICIT_VR_LITTLE_ENDIAN => TransferSyntax::ImplicitVRLittleEndian,
            uids::EXPLICIT_VR_LITTLE_ENDIAN => TransferSyntax::ExplicitVRLittleEndian,
            uids::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN | uids::RLE_LOSSLESS => {
                TransferSyntax::Encapsulated(uid.to_string())
            }
            uid if uid.starts_with(uids::COMPRESSED_PREFIX) => {
                TransferSyntax::Encapsulated(uid.to_string())
            }
            _ => TransferSyntax::ExplicitVRLittleEndian,
        })
    }

    /// The UID of this transfer syntax.
    pub fn uid(&self) -> &str {
        match self {
            TransferSyntax::ImplicitVRLittleEndian => uids::IMPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitVRLittleEndian => uids::EXPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::Encapsulated(uid) => uid,
        }
    }

    /// Whether element headers carry their value representation.
    pub fn is_explicit_vr(&self) -> bool {
        !matches!(self, TransferSyntax::ImplicitVRLittleEndian)
    }

    /// Whether pixel data is expected to be encapsulated in fragments.
    pub fn is_encapsulated(&self) -> bool {
        matches!(self, TransferSyntax::Encapsulated(_))
    }
}
