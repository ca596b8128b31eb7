//! Parsing whole data sets from synthetic buffers.
use dicom_lite_core::{Tag, VR};
use dicom_lite_dictionary_std::tags;
use dicom_lite_parser::{parse, parse_and_get_tag, parse_and_get_tag_expr, Error, TransferSyntax};
use rstest::rstest;
use std::collections::BTreeSet;

// manually crafting a data set in Explicit VR Little Endian, without meta group
#[rustfmt::skip]
const RAW: &[u8] = &[
    0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
        b'C', b'S',             // VR: CS
        0x02, 0x00,             // Length: 2
            b'O', b'T',
    0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
        b'P', b'N',             // VR: PN
        0x08, 0x00,             // Length: 8
            b'D', b'O', b'E', b'^', b'J', b'O', b'H', b'N',
    0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
        b'U', b'S',
        0x02, 0x00,
            0x02, 0x00,         // 2
    0x28, 0x00, 0x11, 0x00,     // (0028,0011) Columns
        b'U', b'S',
        0x02, 0x00,
            0x03, 0x00,         // 3
    0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
        b'O', b'B',
        0x00, 0x00,             // Reserved
        0x06, 0x00, 0x00, 0x00, // Length: 6
            0x00, 0x20, 0x40, 0x80, 0xC0, 0xFF,
];

fn explicit(tag: Tag, vr: VR, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.group().to_le_bytes());
    out.extend_from_slice(&tag.element().to_le_bytes());
    out.extend_from_slice(&vr.to_bytes());
    if vr.has_short_length() {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    } else {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    }
    out.extend_from_slice(value);
    out
}

fn implicit(tag: Tag, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.group().to_le_bytes());
    out.extend_from_slice(&tag.element().to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
    out
}

/// A header of undefined length: SQ/UN elements, items and delimiters
fn undefined(tag: Tag, vr: Option<VR>) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.group().to_le_bytes());
    out.extend_from_slice(&tag.element().to_le_bytes());
    if let Some(vr) = vr {
        out.extend_from_slice(&vr.to_bytes());
        out.extend_from_slice(&[0, 0]);
    }
    out.extend_from_slice(&[0xFF; 4]);
    out
}

fn item(value: &[u8]) -> Vec<u8> {
    implicit(Tag(0xFFFE, 0xE000), value)
}

fn item_delimiter() -> Vec<u8> {
    implicit(Tag(0xFFFE, 0xE00D), &[])
}

fn sequence_delimiter() -> Vec<u8> {
    implicit(Tag(0xFFFE, 0xE0DD), &[])
}

/// Preamble, magic code and file meta group declaring the given transfer syntax
fn file_preamble_and_meta(transfer_syntax: &str) -> Vec<u8> {
    let mut uid = transfer_syntax.as_bytes().to_vec();
    if uid.len() % 2 == 1 {
        uid.push(0);
    }
    let mut group = explicit(tags::FILE_META_INFORMATION_VERSION, VR::OB, &[0x00, 0x01]);
    group.extend(explicit(tags::TRANSFER_SYNTAX_UID, VR::UI, &uid));

    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    out.extend(explicit(
        tags::FILE_META_INFORMATION_GROUP_LENGTH,
        VR::UL,
        &(group.len() as u32).to_le_bytes(),
    ));
    out.extend(group);
    out
}

#[test]
fn parse_explicit_vr_data_set() {
    let dataset = parse(RAW).unwrap();

    assert_eq!(dataset.len(), 5);
    assert_eq!(
        dataset.transfer_syntax(),
        &TransferSyntax::ExplicitVRLittleEndian
    );

    let expected = [
        (tags::MODALITY, VR::CS, 8, 2),
        (tags::PATIENT_NAME, VR::PN, 18, 8),
        (tags::ROWS, VR::US, 34, 2),
        (tags::COLUMNS, VR::US, 44, 2),
        (tags::PIXEL_DATA, VR::OB, 58, 6),
    ];
    for (tag, vr, offset, length) in expected {
        let e = dataset.element(tag).unwrap();
        assert_eq!(e.vr, vr, "VR of {}", tag);
        assert_eq!(e.offset, offset, "offset of {}", tag);
        assert_eq!(e.length, length, "length of {}", tag);
        assert!(e.offset + e.length <= RAW.len());
    }

    assert_eq!(dataset.string(tags::PATIENT_NAME).as_deref(), Some("DOE^JOHN"));
    assert_eq!(dataset.string(tags::MODALITY).as_deref(), Some("OT"));
    assert_eq!(dataset.uint16(tags::ROWS), Some(2));
    assert_eq!(dataset.uint16(tags::COLUMNS), Some(3));
    assert_eq!(
        dataset.value_bytes(tags::PIXEL_DATA),
        Some(&[0x00, 0x20, 0x40, 0x80, 0xC0, 0xFF][..])
    );
}

#[test]
fn parse_empty_buffer() {
    let dataset = parse(&[]).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.element(tags::PIXEL_DATA), None);
}

#[test]
fn detect_truncation_at_every_position() {
    let dataset = parse(RAW).unwrap();
    let boundaries: BTreeSet<usize> = std::iter::once(0)
        .chain(dataset.iter().map(|(_, e)| e.offset + e.length))
        .collect();

    for len in 0..RAW.len() {
        let result = parse(&RAW[..len]);
        if boundaries.contains(&len) {
            assert!(result.is_ok(), "cut at element boundary {} should parse", len);
        } else {
            let err = result.expect_err("truncated data set should fail");
            assert!(err.is_malformed(), "cut at {}: {}", len, err);
            assert!(err.position().unwrap() < len.max(1), "cut at {}: {}", len, err);
        }
    }
}

#[rstest]
// cut in the middle of a tag
#[case(3, "tag")]
// cut in the middle of the VR of Patient Name
#[case(15, "vr")]
// cut in the middle of the length field of Patient Name
#[case(17, "length")]
// cut in the reserved bytes of Pixel Data
#[case(53, "reserved")]
// cut in the long length field of Pixel Data
#[case(56, "length")]
fn truncated_header_names_the_field(#[case] len: usize, #[case] field: &str) {
    match parse(&RAW[..len]) {
        Err(Error::ReadHeader { source, .. }) => assert_eq!(source.field(), field),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn value_past_the_end_is_out_of_bounds() {
    match parse(&RAW[..RAW.len() - 1]) {
        Err(Error::ValueOutOfBounds {
            tag,
            position,
            length,
            available,
            ..
        }) => {
            assert_eq!(tag, tags::PIXEL_DATA);
            assert_eq!(position, 46);
            assert_eq!(length, 6);
            assert_eq!(available, 5);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn odd_length_text_loses_its_padding() {
    let mut data = explicit(tags::PATIENT_NAME, VR::PN, b"JOHN\0");
    data.extend(explicit(tags::PATIENT_ID, VR::LO, b"12345 "));
    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.string(tags::PATIENT_NAME).as_deref(), Some("JOHN"));
    assert_eq!(dataset.string(tags::PATIENT_ID).as_deref(), Some("12345"));
}

#[test]
fn repeated_tag_keeps_the_last_occurrence() {
    let mut data = explicit(tags::PATIENT_NAME, VR::PN, b"FIRST ");
    data.extend(explicit(tags::PATIENT_NAME, VR::PN, b"SECOND"));
    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.string(tags::PATIENT_NAME).as_deref(), Some("SECOND"));
}

#[test]
fn parse_file_with_meta_group() {
    let mut data = file_preamble_and_meta("1.2.840.10008.1.2.1");
    data.extend(explicit(tags::PATIENT_ID, VR::LO, b"P-0001"));
    data.extend(explicit(tags::ROWS, VR::US, &512u16.to_le_bytes()));

    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.transfer_syntax(), &TransferSyntax::ExplicitVRLittleEndian);
    assert_eq!(
        dataset.string(tags::TRANSFER_SYNTAX_UID).as_deref(),
        Some("1.2.840.10008.1.2.1")
    );
    assert!(dataset.uint32(tags::FILE_META_INFORMATION_GROUP_LENGTH).is_some());
    assert_eq!(dataset.string(tags::PATIENT_ID).as_deref(), Some("P-0001"));
    assert_eq!(dataset.uint16(tags::ROWS), Some(512));
    // meta group and main data set are both recorded
    assert_eq!(dataset.len(), 5);
}

#[test]
fn parse_implicit_vr_file() {
    let mut data = file_preamble_and_meta("1.2.840.10008.1.2");
    data.extend(implicit(tags::PATIENT_NAME, b"DOE^JANE"));
    data.extend(implicit(tags::COLUMNS, &4u16.to_le_bytes()));
    data.extend(implicit(Tag(0x0009, 0x1001), b"private!"));
    data.extend(implicit(tags::PIXEL_DATA, &[1, 2, 3, 4]));

    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.transfer_syntax(), &TransferSyntax::ImplicitVRLittleEndian);
    assert_eq!(dataset.string(tags::PATIENT_NAME).as_deref(), Some("DOE^JANE"));
    assert_eq!(dataset.uint16(tags::COLUMNS), Some(4));
    assert_eq!(dataset.element(Tag(0x0009, 0x1001)).unwrap().vr, VR::UN);
    assert_eq!(dataset.element(tags::PIXEL_DATA).unwrap().vr, VR::OW);

    // values of unknown VR are shown as text, but are not strings
    assert_eq!(dataset.string(Tag(0x0009, 0x1001)), None);
    assert_eq!(
        dataset.to_display_string(Tag(0x0009, 0x1001)).as_deref(),
        Some("private!")
    );
    assert_eq!(
        parse_and_get_tag(&data, Tag(0x0009, 0x1001)).unwrap().as_deref(),
        Some("private!")
    );
}

#[test]
fn unknown_explicit_vr_keeps_short_header() {
    let mut data = vec![0x09, 0x00, 0x10, 0x00, b'Z', b'Z', 0x02, 0x00, 0xAB, 0xCD];
    data.extend(explicit(tags::ROWS, VR::US, &2u16.to_le_bytes()));

    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.transfer_syntax(), &TransferSyntax::ExplicitVRLittleEndian);
    assert_eq!(dataset.len(), 2);
    let unknown = dataset.element(Tag(0x0009, 0x0010)).unwrap();
    assert_eq!(unknown.vr, VR::UN);
    assert_eq!((unknown.offset, unknown.length), (8, 2));
    assert_eq!(dataset.value_bytes(Tag(0x0009, 0x0010)), Some(&[0xAB, 0xCD][..]));
    assert_eq!(dataset.uint16(tags::ROWS), Some(2));

    // same layout after a file meta group
    let mut file = file_preamble_and_meta("1.2.840.10008.1.2.1");
    file.extend_from_slice(&data);
    let dataset = parse(&file).unwrap();
    assert_eq!(dataset.element(Tag(0x0009, 0x0010)).unwrap().vr, VR::UN);
    assert_eq!(dataset.uint16(tags::ROWS), Some(2));
}

#[test]
fn detect_implicit_vr_without_meta_group() {
    let mut data = implicit(tags::MODALITY, b"MR");
    data.extend(implicit(tags::ROWS, &16u16.to_le_bytes()));

    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.transfer_syntax(), &TransferSyntax::ImplicitVRLittleEndian);
    assert_eq!(dataset.string(tags::MODALITY).as_deref(), Some("MR"));
    assert_eq!(dataset.uint16(tags::ROWS), Some(16));
}

#[test]
fn magic_code_without_preamble() {
    let mut data = b"DICM".to_vec();
    data.extend(explicit(tags::MODALITY, VR::CS, b"CT"));
    let dataset = parse(&data).unwrap();
    assert_eq!(dataset.element(tags::MODALITY).unwrap().offset, 12);
}

#[rstest]
#[case("1.2.840.10008.1.2.2")]
#[case("1.2.840.10008.1.2.1.99")]
fn reject_unsupported_transfer_syntax(#[case] uid: &str) {
    let mut data = file_preamble_and_meta(uid);
    data.extend(explicit(tags::MODALITY, VR::CS, b"CT"));
    let err = parse(&data).unwrap_err();
    assert!(matches!(err, Error::UnsupportedTransferSyntax { .. }));
    assert!(!err.is_malformed());
}

#[test]
fn skip_sequences_of_undefined_length() {
    let mut nested = Vec::new();
    nested.extend(undefined(Tag(0x0008, 0x1115), Some(VR::SQ)));
    // item of defined length
    nested.extend(item(&explicit(tags::SERIES_INSTANCE_UID, VR::UI, b"1.2.3\0")));
    // item of undefined length with a nested sequence
    nested.extend(undefined(Tag(0xFFFE, 0xE000), None));
    nested.extend(explicit(tags::MODALITY, VR::CS, b"CT"));
    nested.extend(undefined(Tag(0x0008, 0x1140), Some(VR::SQ)));
    nested.extend(sequence_delimiter());
    nested.extend(item_delimiter());
    nested.extend(sequence_delimiter());

    let mut data = explicit(tags::PATIENT_NAME, VR::PN, b"DOE^JOHN");
    let sequence_start = data.len();
    data.extend(&nested);
    data.extend(explicit(tags::ROWS, VR::US, &8u16.to_le_bytes()));

    let dataset = parse(&data).unwrap();
    // nested elements are not recorded
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.element(tags::MODALITY), None);

    let sequence = dataset.element(Tag(0x0008, 0x1115)).unwrap();
    assert_eq!(sequence.vr, VR::SQ);
    assert!(sequence.undefined_length);
    assert_eq!(sequence.offset, sequence_start + 12);
    // up to the sequence delimiter
    assert_eq!(sequence.length, nested.len() - 12 - 8);
    assert_eq!(dataset.to_display_string(Tag(0x0008, 0x1115)), None);

    assert_eq!(dataset.uint16(tags::ROWS), Some(8));
}

#[test]
fn skip_encapsulated_pixel_data() {
    let mut data = file_preamble_and_meta("1.2.840.10008.1.2.4.50");
    data.extend(explicit(tags::ROWS, VR::US, &1u16.to_le_bytes()));
    data.extend(undefined(tags::PIXEL_DATA, Some(VR::OB)));
    // basic offset table, then one fragment
    data.extend(item(&[]));
    data.extend(item(&[0xFF, 0xD8, 0xFF, 0xD9]));
    data.extend(sequence_delimiter());

    let dataset = parse(&data).unwrap();
    assert!(dataset.transfer_syntax().is_encapsulated());
    let pixel_data = dataset.element(tags::PIXEL_DATA).unwrap();
    assert!(pixel_data.undefined_length);
    assert_eq!(pixel_data.length, 8 + 12);
}

#[test]
fn unterminated_sequence_is_malformed() {
    let mut data = undefined(Tag(0x0008, 0x1115), Some(VR::SQ));
    data.extend(item(&explicit(tags::MODALITY, VR::CS, b"CT")));

    let err = parse(&data).unwrap_err();
    assert!(matches!(err, Error::UnterminatedSequence { position: 0, .. }));
    assert!(err.is_malformed());

    // item of undefined length without its delimiter
    let mut data = undefined(Tag(0x0008, 0x1115), Some(VR::SQ));
    data.extend(undefined(Tag(0xFFFE, 0xE000), None));
    data.extend(explicit(tags::MODALITY, VR::CS, b"CT"));
    let err = parse(&data).unwrap_err();
    assert!(matches!(err, Error::UnterminatedSequence { position: 12, .. }));
}

#[test]
fn element_in_place_of_item_is_malformed() {
    let mut data = undefined(Tag(0x0008, 0x1115), Some(VR::SQ));
    data.extend(explicit(tags::MODALITY, VR::CS, b"CT"));
    data.extend(sequence_delimiter());

    match parse(&data) {
        Err(Error::UnexpectedItemTag { tag, position, .. }) => {
            assert_eq!(tag, tags::MODALITY);
            assert_eq!(position, 12);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn undefined_length_outside_of_sequences_is_malformed() {
    let data = undefined(Tag(0x0009, 0x0010), Some(VR::OB));
    let err = parse(&data).unwrap_err();
    assert!(matches!(err, Error::ValueOutOfBounds { position: 0, .. }));
    assert!(err.is_malformed());
}

#[test]
fn get_tag_value() {
    assert_eq!(
        parse_and_get_tag(RAW, tags::PATIENT_NAME).unwrap().as_deref(),
        Some("DOE^JOHN")
    );
    assert_eq!(
        parse_and_get_tag(RAW, tags::ROWS).unwrap().as_deref(),
        Some("2")
    );
    // absent
    assert_eq!(parse_and_get_tag(RAW, tags::PATIENT_ID).unwrap(), None);
    // binary
    assert_eq!(parse_and_get_tag(RAW, tags::PIXEL_DATA).unwrap(), None);
    // malformed
    assert!(parse_and_get_tag(&RAW[..12], tags::MODALITY).is_err());
}

#[rstest]
#[case("x00100010")]
#[case("00100010")]
#[case("(0010,0010)")]
#[case("0010,0010")]
#[case("PatientName")]
fn get_tag_value_by_expression(#[case] expr: &str) {
    let value = parse_and_get_tag_expr(RAW, expr).unwrap();
    assert_eq!(value.as_deref(), Some("DOE^JOHN"));
}

#[test]
fn invalid_tag_expression() {
    let err = parse_and_get_tag_expr(RAW, "x0010").unwrap_err();
    assert!(matches!(err, Error::InvalidTagExpression { .. }));
    assert!(!err.is_malformed());
}
