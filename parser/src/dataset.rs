//! The parsed data set and its tag value accessors.
use crate::error::Result;
use crate::read;
use crate::transfer_syntax::TransferSyntax;
use dicom_lite_core::header::{Tag, VrFamily, VR};
use dicom_lite_dictionary_std::tags;
use dicom_lite_encoding::decode::basic::LittleEndianBasicDecoder;
use dicom_lite_encoding::text::{SpecificCharacterSet, TextCodec};
use dicom_lite_encoding::BasicDecode;
use std::collections::BTreeMap;
use std::fmt;
use std::io;

/// The location of an element's value in the source buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
    /// the value representation, as declared or resolved by dictionary
    pub vr: VR,
    /// offset of the first value byte in the source buffer
    pub offset: usize,
    /// number of value bytes
    pub length: usize,
    /// whether the element was encoded with undefined length,
    /// in which case `length` spans its items
    /// up to the sequence delimitation item
    pub undefined_length: bool,
}

impl ElementDescriptor {
    /// The range of the value in the source buffer.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// A DICOM data set parsed from a byte buffer.
///
/// Top-level elements are indexed by tag, in ascending order,
/// while their values stay in the source buffer,
/// which the data set borrows for its whole life.
/// Every element's value range is within the source.
#[derive(Clone)]
pub struct DataSet<'a> {
    source: &'a [u8],
    elements: BTreeMap<Tag, ElementDescriptor>,
    transfer_syntax: TransferSyntax,
    charset: SpecificCharacterSet,
}

impl fmt::Debug for DataSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DataSet")
            .field("source", &format_args!("[{} bytes]", self.source.len()))
            .field("elements", &self.elements)
            .field("transfer_syntax", &self.transfer_syntax)
            .field("charset", &self.charset)
            .finish()
    }
}

impl<'a> DataSet<'a> {
    /// Parse a data set from the given buffer.
    ///
    /// The buffer may start with the 128-byte preamble and `DICM` magic code,
    /// followed by the file meta group,
    /// or contain a bare little endian data set.
    ///
    /// Parsing either fails or yields the complete data set.
    pub fn parse(source: &'a [u8]) -> Result<Self> {
        let (elements, transfer_syntax) = read::read(source)?;

        let charset = elements
            .get(&tags::SPECIFIC_CHARACTER_SET)
            .map(|e| SpecificCharacterSet::Default.decode(&source[e.range()]))
            .and_then(|text| text.ok())
            .map(|text| SpecificCharacterSet::from_element_value(&text))
            .unwrap_or_default();

        Ok(DataSet {
            source,
            elements,
            transfer_syntax,
            charset,
        })
    }

    /// The buffer which this data set was parsed from.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// The transfer syntax which the main data set was read with.
    pub fn transfer_syntax(&self) -> &TransferSyntax {
        &self.transfer_syntax
    }

    /// The character set used to decode text values.
    pub fn charset(&self) -> SpecificCharacterSet {
        self.charset
    }

    /// The number of top-level elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements, in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &ElementDescriptor)> + '_ {
        self.elements.iter().map(|(tag, e)| (*tag, e))
    }

    /// Iterate over the tags of all elements, in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.elements.keys().copied()
    }

    /// Look up the descriptor of an element.
    pub fn element(&self, tag: Tag) -> Option<&ElementDescriptor> {
        self.elements.get(&tag)
    }

    /// Retrieve the raw value bytes of an element.
    pub fn value_bytes(&self, tag: Tag) -> Option<&'a [u8]> {
        let e = self.element(tag)?;
        self.source.get(e.range())
    }

    /// Retrieve the text value of an element with a textual VR,
    /// decoded with the data set's specific character set.
    ///
    /// One trailing padding byte (space or NUL) is removed from
    /// values of odd length,
    /// and surrounding whitespace and NULs are trimmed.
    /// Returns `None` if the element is absent,
    /// does not have a textual VR, or is empty after trimming.
    pub fn string(&self, tag: Tag) -> Option<String> {
        let e = self.element(tag)?;
        if e.vr.family() != VrFamily::Text {
            return None;
        }
        self.decode_text(self.source.get(e.range())?)
    }

    fn decode_text(&self, mut bytes: &[u8]) -> Option<String> {
        if bytes.len() % 2 == 1 {
            if let Some((b' ' | b'\0', rest)) = bytes.split_last() {
                bytes = rest;
            }
        }
        let text = self.charset.decode(bytes).ok()?;
        let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Retrieve the first value of an element with the US VR.
    ///
    /// Returns `None` if the element is absent,
    /// has another VR, or holds less than 2 bytes.
    pub fn uint16(&self, tag: Tag) -> Option<u16> {
        let e = self.element(tag)?;
        if e.vr.family() != VrFamily::UnsignedShort {
            return None;
        }
        let bytes = self.source.get(e.range())?;
        LittleEndianBasicDecoder.decode_us(bytes).ok()
    }

    /// Retrieve the first value of an element with the UL VR.
    ///
    /// Returns `None` if the element is absent,
    /// has another VR, or holds less than 4 bytes.
    pub fn uint32(&self, tag: Tag) -> Option<u32> {
        let e = self.element(tag)?;
        if e.vr.family() != VrFamily::UnsignedLong {
            return None;
        }
        let bytes = self.source.get(e.range())?;
        LittleEndianBasicDecoder.decode_ul(bytes).ok()
    }

    /// Render the value of an element as text for display.
    ///
    /// Text is retrieved as in [`string`](DataSet::string).
    /// Elements of unknown VR (`UN`) and defined length
    /// are also decoded as text.
    /// Binary numbers are formatted in decimal,
    /// multiple values being separated by a backslash,
    /// and attribute tags as `(GGGG,EEEE)`.
    /// Returns `None` for absent or empty elements,
    /// as well as for opaque binary data and sequences.
    pub fn to_display_string(&self, tag: Tag) -> Option<String> {
        let e = self.element(tag)?;
        let bytes = self.source.get(e.range())?;
        let basic = LittleEndianBasicDecoder;
        match e.vr.family() {
            VrFamily::Text => self.string(tag),
            VrFamily::UnsignedShort => join_values(bytes, 2, |b| basic.decode_us(b)),
            VrFamily::UnsignedLong => join_values(bytes, 4, |b| basic.decode_ul(b)),
            VrFamily::SignedShort => join_values(bytes, 2, |b| basic.decode_ss(b)),
            VrFamily::SignedLong => join_values(bytes, 4, |b| basic.decode_sl(b)),
            VrFamily::Float => join_values(bytes, 4, |b| basic.decode_fl(b)),
            VrFamily::Double => join_values(bytes, 8, |b| basic.decode_fd(b)),
            VrFamily::AttributeTag => join_values(bytes, 4, |b| basic.decode_tag(b)),
            VrFamily::Binary if e.vr == VR::UN && !e.undefined_length => self.decode_text(bytes),
            VrFamily::Binary | VrFamily::Sequence => None,
        }
    }
}

/// Decode each `size`-byte value in `bytes` and join their textual forms
/// with backslashes. Trailing bytes which do not form a full value are ignored.
fn join_values<T, F>(bytes: &[u8], size: usize, decode: F) -> Option<String>
where
    T: fmt::Display,
    F: Fn(&[u8]) -> io::Result<T>,
{
    let values = bytes
        .chunks_exact(size)
        .map(|chunk| decode(chunk).map(|v| v.to_string()))
        .collect::<io::Result<Vec<_>>>()
        .ok()?;
    if values.is_empty() {
        None
    } else {
        Some(values.join("\\"))
    }
}
