//! Utility module for fetching key attributes from a DICOM data set.

use dicom_lite_dictionary_std::tags;
use dicom_lite_parser::DataSet;

/// Raster width used when Columns is absent or zero
pub const DEFAULT_WIDTH: u32 = 512;
/// Raster height used when Rows is absent or zero
pub const DEFAULT_HEIGHT: u32 = 512;

/// Get the Columns from the data set,
/// or the default width if it is absent, not a US, or zero.
pub fn cols(dataset: &DataSet) -> u32 {
    dataset
        .uint16(tags::COLUMNS)
        .filter(|&cols| cols > 0)
        .map(u32::from)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Get the Rows from the data set,
/// or the default height if it is absent, not a US, or zero.
pub fn rows(dataset: &DataSet) -> u32 {
    dataset
        .uint16(tags::ROWS)
        .filter(|&rows| rows > 0)
        .map(u32::from)
        .unwrap_or(DEFAULT_HEIGHT)
}

/// Get the BitsAllocated from the data set, if present
pub fn bits_allocated(dataset: &DataSet) -> Option<u16> {
    dataset.uint16(tags::BITS_ALLOCATED)
}

/// Get the SamplesPerPixel from the data set, if present
pub fn samples_per_pixel(dataset: &DataSet) -> Option<u16> {
    dataset.uint16(tags::SAMPLES_PER_PIXEL)
}

/// Get the PhotometricInterpretation from the data set, if present
pub fn photometric_interpretation(dataset: &DataSet) -> Option<String> {
    dataset.string(tags::PHOTOMETRIC_INTERPRETATION)
}
