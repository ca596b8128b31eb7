#![allow(clippy::derive_partial_eq_without_eq)]
//! DICOM data dumping library
//!
//! This is a helper library
//! for dumping the elements of parsed DICOM data sets
//! in a human readable way.
//!
//! # Examples
//!
//! A quick and easy way to dump the contents of a data set
//! is via [`dump_data_set`]
//! (or [`dump_data_set_to`] to print to an arbitrary writer).
//!
//! ```no_run
//! use dicom_lite_dump::dump_data_set;
//!
//! let bytes = std::fs::read("path/to/file.dcm")?;
//! let dataset = dicom_lite_parser::parse(&bytes)?;
//! dump_data_set(&dataset)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! See the [`DumpOptions`] builder for additional dumping options.
use dicom_lite_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_lite_core::header::VrFamily;
use dicom_lite_core::{Tag, VR};
use dicom_lite_dictionary_std::StandardDataDictionary;
use dicom_lite_parser::{DataSet, ElementDescriptor};
use owo_colors::*;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// The text printed in place of the value of an absent or empty element
pub const TAG_NOT_FOUND: &str = "Tag not found or empty";

/// Options and flags to configure how to dump a DICOM data set.
///
/// # Example
///
/// ```no_run
/// use dicom_lite_dump::{ColorMode, DumpOptions};
///
/// let bytes = std::fs::read("/path_to_file")?;
/// let dataset = dicom_lite_parser::parse(&bytes)?;
/// let mut options = DumpOptions::new();
/// options
///     // maximum 120 characters per line
///     .width(120)
///     // never print colored output
///     .color_mode(ColorMode::Never)
///     // dump to stdout
///     .dump_data_set(&dataset)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the console width to assume when trimming long values
    pub width: Option<u32>,
    /// never trim out any values
    pub no_limit: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum output width in number of characters.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum output width to automatic,
    /// based on terminal size.
    ///
    /// This is the default behavior.
    /// If a terminal width could not be determined,
    /// the default width of 120 characters is used.
    pub fn width_auto(&mut self) -> &mut Self {
        self.width = None;
        self
    }

    /// Set whether to remove the maximum width restriction
    /// for all DICOM values.
    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    /// Set the output color mode.
    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Dump the elements of a data set to standard output.
    pub fn dump_data_set(&self, dataset: &DataSet) -> IoResult<()> {
        self.dump_data_set_impl(stdout(), dataset, true)
    }

    /// Dump the elements of a data set to the given writer.
    ///
    /// Output to a writer is only colored under [`ColorMode::Always`].
    pub fn dump_data_set_to(&self, to: impl Write, dataset: &DataSet) -> IoResult<()> {
        self.dump_data_set_impl(to, dataset, false)
    }

    fn dump_data_set_impl(
        &self,
        mut to: impl Write,
        dataset: &DataSet,
        to_stdout: bool,
    ) -> IoResult<()> {
        match (self.color, to_stdout) {
            (ColorMode::Never, _) => owo_colors::set_override(false),
            (ColorMode::Always, _) => owo_colors::set_override(true),
            (ColorMode::Auto, false) => owo_colors::set_override(false),
            (ColorMode::Auto, true) => owo_colors::unset_override(),
        }

        let width = determine_width(self.width);
        let max_characters = Some(width.saturating_sub(63)).filter(|_| !self.no_limit);

        writeln!(
            to,
            "{}: {}",
            "Transfer Syntax".if_supports_color(Stream::Stdout, |v| v.bold()),
            dataset.transfer_syntax().uid(),
        )?;
        writeln!(
            to,
            "{}: {}",
            "Elements".if_supports_color(Stream::Stdout, |v| v.bold()),
            dataset.len(),
        )?;
        writeln!(to)?;

        let mut in_meta_group = true;
        for (tag, element) in dataset.iter() {
            if in_meta_group && tag.group() != 0x0002 {
                in_meta_group = false;
                writeln!(to, "{:-<58}", "")?;
            }
            dump_element(&mut to, dataset, tag, element, max_characters)?;
        }

        Ok(())
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if supported by the destination
    /// (namely, if the destination is a terminal).
    /// When calling [`dump_data_set_to`](DumpOptions::dump_data_set_to),
    /// the output will not be colored.
    ///
    /// This is the default behavior.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            _ => Err(ColorModeError),
        }
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DumpValue<T>
where
    T: ToString,
{
    TagNum(T),
    Alias(T),
    Num(T),
    Str(T),
    DateTime(T),
    Note(T),
    Nothing,
}

impl<T> fmt::Display for DumpValue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_value_with_width(value: impl fmt::Display, f: &mut fmt::Formatter) -> fmt::Result {
            if let Some(width) = f.width() {
                write!(f, "{:width$}", value, width = width)
            } else {
                write!(f, "{}", value)
            }
        }

        match self {
            DumpValue::TagNum(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.dimmed());
                write_value_with_width(value, f)
            }
            DumpValue::Alias(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.bold());
                write_value_with_width(value, f)
            }
            DumpValue::Num(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.cyan());
                write_value_with_width(value, f)
            }
            DumpValue::Str(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.yellow());
                write_value_with_width(value, f)
            }
            DumpValue::DateTime(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.green());
                write_value_with_width(value, f)
            }
            DumpValue::Note(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.italic());
                write_value_with_width(value, f)
            }
            DumpValue::Nothing => {
                let value = "(no value)".if_supports_color(Stream::Stdout, |v| v.italic());
                write_value_with_width(value, f)
            }
        }
    }
}

/// Dump the elements of a data set to stdout.
pub fn dump_data_set(dataset: &DataSet) -> IoResult<()> {
    DumpOptions::new().dump_data_set(dataset)
}

/// Dump the elements of a data set to the given writer.
pub fn dump_data_set_to(to: impl Write, dataset: &DataSet) -> IoResult<()> {
    DumpOptions::new().dump_data_set_to(to, dataset)
}

/// Describe the display value of a single element,
/// as requested by the given tag expression.
pub fn tag_summary(expr: &str, value: Option<&str>) -> String {
    format!("{}: {}", expr, value.unwrap_or(TAG_NOT_FOUND))
}

/// Print one line describing an element:
/// tag, keyword, VR, value position, value length, and value preview.
pub fn dump_element<W>(
    to: &mut W,
    dataset: &DataSet,
    tag: Tag,
    element: &ElementDescriptor,
    max_characters: Option<u32>,
) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let tag_alias = StandardDataDictionary
        .by_tag(tag)
        .map(DataDictionaryEntry::alias)
        .unwrap_or("«Unknown Attribute»");

    let length = if element.undefined_length {
        format!("undefined length, {} bytes", element.length)
    } else {
        format!("{} bytes", element.length)
    };

    writeln!(
        to,
        "{} {:28} {} @{} ({}): {}",
        DumpValue::TagNum(tag),
        DumpValue::Alias(tag_alias),
        element.vr,
        element.offset,
        length,
        value_summary(dataset, tag, element, max_characters),
    )
}

fn value_summary(
    dataset: &DataSet,
    tag: Tag,
    element: &ElementDescriptor,
    max_characters: Option<u32>,
) -> DumpValue<String> {
    if element.length == 0 {
        return DumpValue::Nothing;
    }

    match element.vr.family() {
        VrFamily::Sequence => DumpValue::Note("(sequence)".to_string()),
        VrFamily::Binary if element.undefined_length => {
            if element.vr == VR::UN {
                DumpValue::Note("(sequence)".to_string())
            } else {
                DumpValue::Note("(encapsulated)".to_string())
            }
        }
        VrFamily::Binary => match dataset.value_bytes(tag) {
            Some(bytes) => DumpValue::Num(format_value_list(
                bytes.iter().map(|n| format!("{:02X}", n)),
                max_characters,
                false,
            )),
            None => DumpValue::Nothing,
        },
        VrFamily::Text => match dataset.string(tag) {
            Some(text) => {
                let values: Vec<&str> = text
                    .split('\\')
                    .map(|v| v.trim_matches(whitespace_or_null))
                    .collect();
                let list = format_value_list(values, max_characters, true);
                if matches!(element.vr, VR::DA | VR::DT | VR::TM) {
                    DumpValue::DateTime(list)
                } else {
                    DumpValue::Str(list)
                }
            }
            None => DumpValue::Nothing,
        },
        VrFamily::AttributeTag => match dataset.to_display_string(tag) {
            Some(text) => DumpValue::Str(format_value_list(
                text.split('\\').collect::<Vec<_>>(),
                max_characters,
                false,
            )),
            None => DumpValue::Nothing,
        },
        _ => match dataset.to_display_string(tag) {
            Some(text) => DumpValue::Num(format_value_list(
                text.split('\\').collect::<Vec<_>>(),
                max_characters,
                false,
            )),
            None => DumpValue::Nothing,
        },
    }
}

#[inline]
fn whitespace_or_null(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

fn format_value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: std::fmt::Display,
{
    let values = values.into_iter();
    let len = values.len();
    let mut acc_size = 0;
    let mut pieces = String::new();
    if len > 1 {
        pieces.push('[');
    }
    for piece in values {
        let mut piece = piece.to_string();
        // sanitize value piece
        piece = piece
            .replace('\n', "␊")
            .replace('\r', "␍")
            .replace('\0', "␀")
            .replace(|c: char| c.is_control(), "�");

        if acc_size > 0 {
            pieces.push_str(", ");
        }

        if quoted {
            piece = piece.replace('\"', "\\\"");
            pieces.push('"');
        }

        acc_size += piece.len();
        pieces.push_str(&piece);
        if quoted {
            pieces.push('"');
        }
        // stop earlier if applicable
        if max_characters
            .filter(|max| (*max as usize) < acc_size)
            .is_some()
        {
            break;
        }
    }
    if len > 1 {
        pieces.push(']');
    }
    if let Some(max_characters) = max_characters {
        cut_str(&pieces, max_characters).into_owned()
    } else {
        pieces
    }
}

fn cut_str(s: &str, max_characters: u32) -> Cow<str> {
    let max = (max_characters.saturating_sub(3)) as usize;
    let len = s.chars().count();

    if len > max {
        s.chars()
            .take(max)
            .chain("...".chars())
            .collect::<String>()
            .into()
    } else {
        s.into()
    }
}

fn determine_width(user_width: Option<u32>) -> u32 {
    user_width
        .or_else(|| terminal_size::terminal_size().map(|(width, _)| width.0 as u32))
        .unwrap_or(120)
}
