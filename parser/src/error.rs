//! Crate-level error types.
use dicom_lite_core::Tag;
use dicom_lite_encoding::decode::Error as DecodeError;
use snafu::{Backtrace, Snafu};

/// The main data type for errors when parsing a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The buffer ended in the middle of an element header.
    #[snafu(display("Could not read element {} at position {}", source.field(), position))]
    ReadHeader {
        /// offset of the header in the source buffer
        position: usize,
        #[snafu(backtrace)]
        source: DecodeError,
    },
    /// The value length of an element goes past the end of the buffer.
    #[snafu(display(
        "Element {} at position {} declares {} value bytes, but only {} are available",
        tag,
        position,
        length,
        available
    ))]
    ValueOutOfBounds {
        tag: Tag,
        position: usize,
        length: usize,
        available: usize,
        backtrace: Backtrace,
    },
    /// A sequence or item of undefined length
    /// has no delimiter before the end of the buffer.
    #[snafu(display(
        "Undefined length {} at position {} is not terminated before the end of data",
        tag,
        position
    ))]
    UnterminatedSequence {
        tag: Tag,
        position: usize,
        backtrace: Backtrace,
    },
    /// Something other than an item or a delimiter was found
    /// where the next item of a sequence was expected.
    #[snafu(display("Unexpected tag {} at position {} inside a sequence", tag, position))]
    UnexpectedItemTag {
        tag: Tag,
        position: usize,
        backtrace: Backtrace,
    },
    /// Sequences are nested deeper than the parser is willing to walk.
    #[snafu(display("Sequence at position {} is nested too deeply", position))]
    NestingTooDeep { position: usize, backtrace: Backtrace },
    /// The file meta group declares a transfer syntax
    /// which cannot be parsed as little endian data.
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    /// The given text is neither a tag expression nor a known keyword.
    #[snafu(display("Could not resolve tag expression `{}`", expr))]
    InvalidTagExpression { expr: String, backtrace: Backtrace },
}

impl Error {
    /// Whether this error was caused by a malformed data set,
    /// as opposed to an unsupported encoding or an invalid query.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::ReadHeader { .. }
                | Error::ValueOutOfBounds { .. }
                | Error::UnterminatedSequence { .. }
                | Error::UnexpectedItemTag { .. }
                | Error::NestingTooDeep { .. }
        )
    }

    /// The offset in the source buffer where a malformed data set
    /// was detected, if applicable.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::ReadHeader { position, .. }
            | Error::ValueOutOfBounds { position, .. }
            | Error::UnterminatedSequence { position, .. }
            | Error::UnexpectedItemTag { position, .. }
            | Error::NestingTooDeep { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
