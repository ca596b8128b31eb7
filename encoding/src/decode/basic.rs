//! This module provides the primitive decoder of little endian data.

use super::BasicDecode;
use byteordered::ByteOrdered;
use std::io::Read;

type Result<T> = std::io::Result<T>;

/// A basic decoder of DICOM primitive elements in little endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct LittleEndianBasicDecoder;

impl BasicDecode for LittleEndianBasicDecoder {
    fn decode_us<S>(&self, source: S) -> Result<u16>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_u16()
    }

    fn decode_ul<S>(&self, source: S) -> Result<u32>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_u32()
    }

    fn decode_ss<S>(&self, source: S) -> Result<i16>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_i16()
    }

    fn decode_sl<S>(&self, source: S) -> Result<i32>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_i32()
    }

    fn decode_fl<S>(&self, source: S) -> Result<f32>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_f32()
    }

    fn decode_fd<S>(&self, source: S) -> Result<f64>
    where
        S: Read,
    {
        ByteOrdered::le(source).read_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::LittleEndianBasicDecoder;
    use crate::decode::BasicDecode;
    use dicom_lite_core::Tag;
    use std::io::ErrorKind;

    #[test]
    fn decode_numbers() {
        let le = LittleEndianBasicDecoder;

        assert_eq!(le.decode_us(&[0x00, 0x02][..]).unwrap(), 512);
        assert_eq!(le.decode_ul(&[0x10, 0x00, 0x00, 0x00][..]).unwrap(), 16);
        assert_eq!(le.decode_ss(&[0xFE, 0xFF][..]).unwrap(), -2);
        assert_eq!(le.decode_sl(&[0xFF, 0xFF, 0xFF, 0xFF][..]).unwrap(), -1);
        assert_eq!(le.decode_fl(&[0x00, 0x00, 0xC0, 0x3F][..]).unwrap(), 1.5);
        assert_eq!(
            le.decode_fd(&[0, 0, 0, 0, 0, 0, 0x04, 0x40][..]).unwrap(),
            2.5
        );
    }

    #[test]
    fn decode_tag() {
        let le = LittleEndianBasicDecoder;
        let tag = le.decode_tag(&[0xE0, 0x7F, 0x10, 0x00][..]).unwrap();
        assert_eq!(tag, Tag(0x7FE0, 0x0010));
    }

    #[test]
    fn short_source_is_an_error() {
        let le = LittleEndianBasicDecoder;
        let err = le.decode_ul(&[0x10, 0x00][..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
