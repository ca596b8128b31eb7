//! This module walks a DICOM data set held in a byte slice,
//! recording where the value of each top-level element lies.
//!
//! Values are never copied: the walk only decodes element headers
//! (see [`dicom_lite_encoding::decode`]) and checks that each value
//! fits in the source.
//! Sequences and items of undefined length are walked
//! until their delimiters, without recording nested elements.
use crate::dataset::ElementDescriptor;
use crate::error::{
    NestingTooDeepSnafu, ReadHeaderSnafu, Result, UnexpectedItemTagSnafu,
    UnterminatedSequenceSnafu, ValueOutOfBoundsSnafu,
};
use crate::transfer_syntax::TransferSyntax;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicom_lite_core::header::DataElementHeader;
use dicom_lite_core::{Tag, VR};
use dicom_lite_dictionary_std::tags;
use dicom_lite_encoding::decode::{self, Decode};
use snafu::{ensure, ResultExt};
use std::collections::BTreeMap;
use tracing::{debug, trace};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];
const PREAMBLE_LENGTH: usize = 128;

/// Item (FFFE,E000)
const ITEM: Tag = Tag(0xFFFE, 0xE000);

/// The maximum number of sequences which may be nested in one another.
const MAX_NESTING: u32 = 64;

/// The elements of a data set by tag.
pub(crate) type ElementMap = BTreeMap<Tag, ElementDescriptor>;

/// Walk the full data set in `source`,
/// including the preamble and file meta group when present.
pub(crate) fn read(source: &[u8]) -> Result<(ElementMap, TransferSyntax)> {
    let mut elements = ElementMap::new();

    let start = skip_preamble(source);
    let position = read_meta_group(source, start, &mut elements)?;

    let declared_uid = elements
        .get(&tags::TRANSFER_SYNTAX_UID)
        .map(|e| String::from_utf8_lossy(&source[e.offset..e.offset + e.length]))
        .map(|uid| uid.trim_matches(|c: char| c == '\0' || c == ' ').to_string())
        .filter(|uid| !uid.is_empty());

    let ts = match declared_uid {
        Some(uid) => TransferSyntax::from_uid(&uid)?,
        None => {
            let ts = detect_transfer_syntax(source, position);
            debug!("No transfer syntax declared, detected {:?}", ts);
            ts
        }
    };
    debug!("Reading data set from position {} as {}", position, ts.uid());

    if ts.is_explicit_vr() {
        read_data_set(&decode::file_header_decoder(), source, position, &mut elements)?;
    } else {
        read_data_set(&decode::default_reader(), source, position, &mut elements)?;
    }

    debug!("Found {} elements", elements.len());
    Ok((elements, ts))
}

/// Locate the first byte after the preamble and magic code, if any.
pub(crate) fn skip_preamble(source: &[u8]) -> usize {
    if source.get(PREAMBLE_LENGTH..PREAMBLE_LENGTH + 4) == Some(&DICM_MAGIC_CODE[..]) {
        PREAMBLE_LENGTH + 4
    } else if source.starts_with(&DICM_MAGIC_CODE) {
        4
    } else {
        0
    }
}

/// Guess the encoding of a data set without a file meta group
/// by checking whether the first header carries a VR.
///
/// Any pair of uppercase letters counts as a VR code,
/// so that unrecognized codes still select explicit VR.
fn detect_transfer_syntax(source: &[u8], position: usize) -> TransferSyntax {
    match source.get(position + 4..position + 6) {
        Some(&[a, b]) if a.is_ascii_uppercase() && b.is_ascii_uppercase() => {
            TransferSyntax::ExplicitVRLittleEndian
        }
        _ => TransferSyntax::ImplicitVRLittleEndian,
    }
}

fn peek_group(source: &[u8], position: usize) -> Option<u16> {
    source
        .get(position..position + 2)
        .map(LittleEndian::read_u16)
}

/// Read the file meta group elements starting at `position`,
/// which are always in Explicit VR Little Endian.
///
/// Returns the position of the first element after the group.
fn read_meta_group(source: &[u8], position: usize, elements: &mut ElementMap) -> Result<usize> {
    let decoder = decode::file_header_decoder();
    let mut position = position;
    while peek_group(source, position) == Some(0x0002) {
        position = read_element(&decoder, source, position, elements)?;
    }
    if !elements.is_empty() {
        trace!("File meta group ends at position {}", position);
    }
    Ok(position)
}

/// Read all elements from `position` to the end of `source`.
fn read_data_set<D>(
    decoder: &D,
    source: &[u8],
    mut position: usize,
    elements: &mut ElementMap,
) -> Result<()>
where
    D: Decode,
{
    while position < source.len() {
        position = read_element(decoder, source, position, elements)?;
    }
    Ok(())
}

/// Decode the header at `position`,
/// returning it along with the position of its value.
fn read_header<D>(decoder: &D, source: &[u8], position: usize) -> Result<(DataElementHeader, usize)>
where
    D: Decode,
{
    let mut rest = source.get(position..).unwrap_or_default();
    let (header, header_len) = decoder
        .decode_header(&mut rest)
        .context(ReadHeaderSnafu { position })?;
    Ok((header, position + header_len))
}

/// Read the top-level element at `position` and record it.
///
/// Returns the position of the next element.
fn read_element<D>(
    decoder: &D,
    source: &[u8],
    position: usize,
    elements: &mut ElementMap,
) -> Result<usize>
where
    D: Decode,
{
    let (header, value_start) = read_header(decoder, source, position)?;
    let tag = header.tag();

    if tag.is_item_or_delimiter() {
        trace!("Skipping stray {} at position {}", tag, position);
        if header.length().is_undefined() {
            return Ok(value_start);
        }
        return check_value(&header, source, position, value_start);
    }

    let (descriptor, next) = if is_undefined_sequence(&header) {
        let (value_end, next) = skip_any_sequence(decoder, source, &header, position, value_start, 0)?;
        trace!("{} {} of undefined length at position {}", tag, header.vr(), position);
        (
            ElementDescriptor {
                vr: header.vr(),
                offset: value_start,
                length: value_end - value_start,
                undefined_length: true,
            },
            next,
        )
    } else {
        let value_end = check_value(&header, source, position, value_start)?;
        trace!("{} {} ({} bytes) at position {}", tag, header.vr(), header.length(), position);
        (
            ElementDescriptor {
                vr: header.vr(),
                offset: value_start,
                length: value_end - value_start,
                undefined_length: false,
            },
            value_end,
        )
    };

    // the last occurrence of a repeated tag wins
    elements.insert(tag, descriptor);
    Ok(next)
}

/// Whether the element is a sequence, an unknown element
/// or encapsulated pixel data of undefined length,
/// the value of which can only be delimited by walking its items.
fn is_undefined_sequence(header: &DataElementHeader) -> bool {
    header.is_encapsulated_pixeldata()
        || (header.length().is_undefined() && matches!(header.vr(), VR::SQ | VR::UN))
}

/// Ensure that the defined length value of the given header
/// fits in the source.
///
/// Returns the position of the end of the value.
fn check_value(
    header: &DataElementHeader,
    source: &[u8],
    position: usize,
    value_start: usize,
) -> Result<usize> {
    let length = header.length().0 as usize;
    let available = source.len().saturating_sub(value_start);
    ensure!(
        length <= available,
        ValueOutOfBoundsSnafu {
            tag: header.tag(),
            position,
            length,
            available,
        }
    );
    Ok(value_start + length)
}

/// Walk the sequence of undefined length described by `header`,
/// switching to implicit VR for the content of `UN` elements.
fn skip_any_sequence<D>(
    decoder: &D,
    source: &[u8],
    header: &DataElementHeader,
    position: usize,
    value_start: usize,
    depth: u32,
) -> Result<(usize, usize)>
where
    D: Decode,
{
    ensure!(depth < MAX_NESTING, NestingTooDeepSnafu { position });
    if header.vr() == VR::UN {
        // UN of undefined length is encoded in Implicit VR Little Endian
        skip_sequence(&decode::default_reader(), source, header.tag(), position, value_start, depth)
    } else {
        skip_sequence(decoder, source, header.tag(), position, value_start, depth)
    }
}

/// Walk the items of a sequence of undefined length.
///
/// Returns the position of the sequence delimiter
/// and the position right after it.
fn skip_sequence<D>(
    decoder: &D,
    source: &[u8],
    tag: Tag,
    position: usize,
    start: usize,
    depth: u32,
) -> Result<(usize, usize)>
where
    D: Decode,
{
    let mut cursor = start;
    loop {
        ensure!(
            cursor < source.len(),
            UnterminatedSequenceSnafu { tag, position }
        );
        let (item, item_start) = read_header(decoder, source, cursor)?;
        if item.is_sequence_delimiter() {
            return Ok((cursor, item_start));
        }
        ensure!(
            item.is_item(),
            UnexpectedItemTagSnafu {
                tag: item.tag(),
                position: cursor,
            }
        );
        cursor = if item.length().is_undefined() {
            skip_item(decoder, source, cursor, item_start, depth)?
        } else {
            check_value(&item, source, cursor, item_start)?
        };
    }
}

/// Walk the elements of an item of undefined length.
///
/// Returns the position right after the item delimiter.
fn skip_item<D>(
    decoder: &D,
    source: &[u8],
    position: usize,
    start: usize,
    depth: u32,
) -> Result<usize>
where
    D: Decode,
{
    let mut cursor = start;
    loop {
        ensure!(
            cursor < source.len(),
            UnterminatedSequenceSnafu { tag: ITEM, position }
        );
        let (header, value_start) = read_header(decoder, source, cursor)?;
        if header.is_item_delimiter() {
            return Ok(value_start);
        }
        ensure!(
            !header.tag().is_item_or_delimiter(),
            UnexpectedItemTagSnafu {
                tag: header.tag(),
                position: cursor,
            }
        );
        cursor = if is_undefined_sequence(&header) {
            skip_any_sequence(decoder, source, &header, cursor, value_start, depth + 1)?.1
        } else {
            check_value(&header, source, cursor, value_start)?
        };
    }
}
