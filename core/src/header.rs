//! This module contains an assortment of types required for interpreting
//! DICOM data element headers: the attribute tag, the value representation
//! and the value length.

use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// An error which may occur when parsing a tag expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The expression has no hexadecimal digits at all.
    #[snafu(display("empty tag expression"))]
    Empty { backtrace: Backtrace },
    /// The group and element parts are not 4 digits each.
    #[snafu(display(
        "tag component `{}` has an invalid length: got {} but must be 4",
        component,
        got
    ))]
    InvalidComponentLength {
        component: &'static str,
        got: usize,
        backtrace: Backtrace,
    },
    /// The expression is not 8 hexadecimal digits long.
    #[snafu(display("tag expression has {} digits, expected 8", got))]
    InvalidLength { got: usize, backtrace: Backtrace },
    /// One of the components contains characters other than hexadecimal digits.
    #[snafu(display("tag component `{}` is not hexadecimal", component))]
    NotHexadecimal {
        component: &'static str,
        backtrace: Backtrace,
    },
    /// One of the components could not be parsed as a number.
    #[snafu(display("invalid tag component `{}`", component))]
    InvalidComponent {
        component: &'static str,
        source: std::num::ParseIntError,
        backtrace: Backtrace,
    },
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are ordered by group, then by element,
/// which is also the order in which they appear in a data set.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this is one of the item or delimitation tags (group `FFFE`).
    #[inline]
    pub fn is_item_or_delimiter(self) -> bool {
        self.0 == 0xFFFE
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// Parse a tag from one of its textual forms.
///
/// The following expressions are accepted,
/// with hexadecimal digits in either case:
///
/// - `ggggeeee`, e.g. `00100010`
/// - `xggggeeee` or `0xggggeeee`, e.g. `x7fe00010`
/// - `gggg,eeee`
/// - `(gggg,eeee)`
///
/// ```
/// # use dicom_lite_core::Tag;
/// assert_eq!("00100010".parse::<Tag>().unwrap(), Tag(0x0010, 0x0010));
/// assert_eq!("x7fe00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
/// assert_eq!("(0028,0011)".parse::<Tag>().unwrap(), Tag(0x0028, 0x0011));
/// ```
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.trim();
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        ensure!(!s.is_empty(), EmptySnafu);

        if let Some((group, elem)) = s.split_once(',') {
            ensure!(
                group.len() == 4,
                InvalidComponentLengthSnafu {
                    component: "group",
                    got: group.len()
                }
            );
            ensure!(
                elem.len() == 4,
                InvalidComponentLengthSnafu {
                    component: "element",
                    got: elem.len()
                }
            );
            return parse_components(group, elem);
        }

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('x'))
            .or_else(|| s.strip_prefix('X'))
            .unwrap_or(s);
        ensure!(
            digits.len() == 8 && digits.is_ascii(),
            InvalidLengthSnafu { got: digits.len() }
        );
        parse_components(&digits[..4], &digits[4..])
    }
}

fn parse_components(group: &str, elem: &str) -> Result<Tag, ParseTagError> {
    // from_str_radix alone would let a leading sign through
    ensure!(
        group.bytes().all(|b| b.is_ascii_hexdigit()),
        NotHexadecimalSnafu { component: "group" }
    );
    ensure!(
        elem.bytes().all(|b| b.is_ascii_hexdigit()),
        NotHexadecimalSnafu {
            component: "element"
        }
    );
    let group = u16::from_str_radix(group, 16).context(InvalidComponentSnafu {
        component: "group",
    })?;
    let elem = u16::from_str_radix(elem, 16).context(InvalidComponentSnafu {
        component: "element",
    })?;
    Ok(Tag(group, elem))
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

/// The family of a value representation,
/// which determines how the bytes of a value are interpreted.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum VrFamily {
    /// Character strings, possibly padded to even length.
    Text,
    /// 16-bit unsigned integers (US)
    UnsignedShort,
    /// 32-bit unsigned integers (UL)
    UnsignedLong,
    /// 16-bit signed integers (SS)
    SignedShort,
    /// 32-bit signed integers (SL)
    SignedLong,
    /// IEEE 754 single precision (FL)
    Float,
    /// IEEE 754 double precision (FD)
    Double,
    /// Pairs of 16-bit numbers forming attribute tags (AT)
    AttributeTag,
    /// Opaque bytes or words (OB, OW, UN, ...)
    Binary,
    /// Nested data sets (SQ)
    Sequence,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Classify this value representation.
    pub fn family(self) -> VrFamily {
        use VR::*;
        match self {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR
            | UT => VrFamily::Text,
            US => VrFamily::UnsignedShort,
            UL => VrFamily::UnsignedLong,
            SS => VrFamily::SignedShort,
            SL => VrFamily::SignedLong,
            FL => VrFamily::Float,
            FD => VrFamily::Double,
            AT => VrFamily::AttributeTag,
            SQ => VrFamily::Sequence,
            OB | OD | OF | OL | OV | OW | SV | UN | UV => VrFamily::Binary,
        }
    }

    /// Whether the explicit VR header of an element with this VR
    /// carries a 16-bit value length right after the VR field.
    ///
    /// All other VRs are followed by 2 reserved bytes
    /// and a 32-bit value length (PS3.5 7.1.2).
    pub fn has_short_length(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS
                | AT
                | CS
                | DA
                | DS
                | DT
                | FL
                | FD
                | IS
                | LO
                | LT
                | PN
                | SH
                | SL
                | SS
                | ST
                | TM
                | UI
                | UL
                | US
        )
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// Two undefined lengths are not equal,
/// and comparing with an undefined length is never `true`.
///
/// ```
/// # use dicom_lite_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!(Length(16) < Length(64));
/// assert!(!(Length::UNDEFINED < Length(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// The header of a data element as read from its source:
/// tag, value representation and value length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the element's value length.
    #[inline]
    pub fn length(&self) -> Length {
        self.len
    }

    /// Check whether this is the header of an item.
    pub fn is_item(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    pub fn is_item_delimiter(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    pub fn is_sequence_delimiter(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE0DD)
    }

    /// Check whether this is the header of an encapsulated pixel data.
    pub fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag == Tag(0x7FE0, 0x0010) && self.len.is_undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
        assert_eq!(format!("{:?}", Tag(0x0028, 0x0011)), "Tag(0x0028, 0x0011)");
    }

    #[test]
    fn parse_tag_expressions() {
        let patient_name = Tag(0x0010, 0x0010);
        assert_eq!("00100010".parse::<Tag>().unwrap(), patient_name);
        assert_eq!("x00100010".parse::<Tag>().unwrap(), patient_name);
        assert_eq!("0x00100010".parse::<Tag>().unwrap(), patient_name);
        assert_eq!("0010,0010".parse::<Tag>().unwrap(), patient_name);
        assert_eq!("(0010,0010)".parse::<Tag>().unwrap(), patient_name);
        assert_eq!("x7fe00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert_eq!("X7FE00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
    }

    #[test]
    fn parse_bad_tag_expressions() {
        assert!(matches!("".parse::<Tag>(), Err(ParseTagError::Empty { .. })));
        assert!(matches!(
            "0010001".parse::<Tag>(),
            Err(ParseTagError::InvalidLength { got: 7, .. })
        ));
        assert!(matches!(
            "001,0010".parse::<Tag>(),
            Err(ParseTagError::InvalidComponentLength {
                component: "group",
                ..
            })
        ));
        assert!(matches!(
            "0010zz10".parse::<Tag>(),
            Err(ParseTagError::NotHexadecimal {
                component: "element",
                ..
            })
        ));
        assert!(matches!(
            "+010,0010".parse::<Tag>(),
            Err(ParseTagError::NotHexadecimal {
                component: "group",
                ..
            })
        ));
        assert!("PatientName".parse::<Tag>().is_err());
    }

    #[test]
    fn vr_families() {
        assert_eq!(VR::PN.family(), VrFamily::Text);
        assert_eq!(VR::UI.family(), VrFamily::Text);
        assert_eq!(VR::US.family(), VrFamily::UnsignedShort);
        assert_eq!(VR::UL.family(), VrFamily::UnsignedLong);
        assert_eq!(VR::OW.family(), VrFamily::Binary);
        assert_eq!(VR::UN.family(), VrFamily::Binary);
        assert_eq!(VR::SQ.family(), VrFamily::Sequence);
    }

    #[test]
    fn vr_length_forms() {
        assert!(VR::US.has_short_length());
        assert!(VR::PN.has_short_length());
        assert!(!VR::OB.has_short_length());
        assert!(!VR::OW.has_short_length());
        assert!(!VR::SQ.has_short_length());
        assert!(!VR::UT.has_short_length());
        assert!(!VR::UN.has_short_length());
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary(*b"OW"), Some(VR::OW));
        assert_eq!(VR::from_binary(*b"ow"), None);
        assert_eq!(VR::from_binary([0x10, 0x00]), None);
        assert_eq!(VR::UL.to_bytes(), *b"UL");
    }

    #[test]
    fn undefined_length() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(26).get(), Some(26));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }
}
