//! Core module for building and using DICOM data element dictionaries.
//!
//! A data dictionary translates a tag to a record
//! with the attribute's keyword and its typical value representation,
//! which is what an implicit VR decoder needs to interpret an element.
//! See `dicom-lite-dictionary-std` for the dictionary used by this project.

use crate::header::{Tag, VR};

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// either by DICOM tag via [`by_tag`][1],
/// or by its keyword (also known as alias) via [`by_name`][2].
///
/// These methods will return `None`
/// when the tag or name is not recognized by the dictionary.
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are in UpperCamelCase and case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Use this data element dictionary to interpret a DICOM tag.
    ///
    /// This method accepts any of the tag expressions
    /// supported by `Tag`'s `FromStr` implementation
    /// (`ggggeeee`, `xggggeeee`, `gggg,eeee`, `(gggg,eeee)`),
    /// or an exact (case sensitive) keyword known by the dictionary.
    ///
    /// When failing to identify the intended syntax or the tag keyword,
    /// `None` is returned.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse().ok().or_else(|| self.by_name(tag.trim()).map(|e| e.tag()))
    }
}

impl<D> DataDictionary for &D
where
    D: DataDictionary,
{
    type Entry = D::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DataDictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A dictionary which knows no attributes.
///
/// Implicit VR decoders using this dictionary
/// resolve every element to `UN`, except for the special cases
/// handled by the decoder itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}
