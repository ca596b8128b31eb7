//! This crate renders the pixel data of DICOM data sets
//! into RGBA rasters, which can then be encoded as PNG images.
//!
//! Only single frame, 8-bit grayscale native pixel data is supported:
//! every stored sample becomes an opaque gray pixel.
//!
//! # Example
//!
//! ```no_run
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let bytes = std::fs::read("image.dcm")?;
//! let dataset = dicom_lite_parser::parse(&bytes)?;
//! let raster = dicom_lite_pixeldata::render(&dataset)?;
//! std::fs::write("image.png", raster.to_png()?)?;
//! # Ok(())
//! # }
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications)]

use dicom_lite_dictionary_std::tags;
use dicom_lite_parser::DataSet;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageBuffer, ImageEncoder, Rgba};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{debug, warn};

pub mod attribute;

pub use attribute::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not parse DICOM data set"))]
    ParseDataSet {
        #[snafu(backtrace)]
        source: dicom_lite_parser::Error,
    },

    #[snafu(display("Pixel data not found in the DICOM file"))]
    MissingPixelData { backtrace: Backtrace },

    #[snafu(display("Unsupported TransferSyntax {}", ts))]
    UnsupportedTransferSyntax { ts: String, backtrace: Backtrace },

    #[snafu(display("Unsupported BitsAllocated {}, must be 8", bits_allocated))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        backtrace: Backtrace,
    },

    #[snafu(display("Unsupported SamplesPerPixel {}, must be 1", spp))]
    UnsupportedSamplesPerPixel { spp: u16, backtrace: Backtrace },

    #[snafu(display("Invalid buffer when constructing ImageBuffer"))]
    InvalidImageBuffer { backtrace: Backtrace },

    #[snafu(display("Could not encode image as PNG"))]
    EncodePng {
        source: image::ImageError,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A rendered raster of 8-bit RGBA pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// the number of pixel columns
    pub width: u32,
    /// the number of pixel rows
    pub height: u32,
    /// `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Encode the raster as an 8-bit RGBA PNG image,
    /// with default compression and adaptive filtering.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Adaptive)
            .write_image(&self.data, self.width, self.height, ExtendedColorType::Rgba8)
            .context(EncodePngSnafu)?;
        Ok(out)
    }

    /// Convert the raster into a dynamic image from the `image` crate.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                .context(InvalidImageBufferSnafu)?;
        Ok(DynamicImage::ImageRgba8(buffer))
    }
}

/// An image encoded in a general purpose file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// the encoded file contents
    pub data: Vec<u8>,
    /// the image width in pixels
    pub width: u32,
    /// the image height in pixels
    pub height: u32,
}

/// Render the pixel data of a data set as a grayscale RGBA raster.
///
/// The raster size is given by Columns and Rows,
/// each defaulting to 512 when absent or zero.
/// Each stored sample `v` becomes the pixel `[v, v, v, 255]`.
/// Samples beyond the raster are ignored,
/// and pixels without a sample are left fully transparent black.
pub fn render(dataset: &DataSet) -> Result<RasterImage> {
    let pixel_data = dataset
        .element(tags::PIXEL_DATA)
        .context(MissingPixelDataSnafu)?;

    let ts = dataset.transfer_syntax();
    ensure!(
        !pixel_data.undefined_length && !ts.is_encapsulated(),
        UnsupportedTransferSyntaxSnafu { ts: ts.uid() }
    );

    if let Some(bits_allocated) = attribute::bits_allocated(dataset) {
        ensure!(
            bits_allocated == 8,
            UnsupportedBitsAllocatedSnafu { bits_allocated }
        );
    }
    if let Some(spp) = attribute::samples_per_pixel(dataset) {
        ensure!(spp == 1, UnsupportedSamplesPerPixelSnafu { spp });
    }

    let width = attribute::cols(dataset);
    let height = attribute::rows(dataset);
    debug!(
        "Rendering {}x{} raster ({})",
        width,
        height,
        attribute::photometric_interpretation(dataset)
            .as_deref()
            .unwrap_or("no photometric interpretation")
    );

    let samples = dataset.value_bytes(tags::PIXEL_DATA).unwrap_or_default();
    let pixel_count = width as usize * height as usize;
    if samples.len() < pixel_count {
        warn!(
            "Pixel data holds {} samples for {} pixels, leaving the rest blank",
            samples.len(),
            pixel_count
        );
    }

    let mut data = vec![0u8; pixel_count * 4];
    for (pixel, &v) in data.chunks_exact_mut(4).zip(samples) {
        pixel.copy_from_slice(&[v, v, v, 255]);
    }

    Ok(RasterImage {
        width,
        height,
        data,
    })
}

/// Render the pixel data of a data set and encode it as PNG.
pub fn render_png(dataset: &DataSet) -> Result<EncodedImage> {
    let raster = render(dataset)?;
    let data = raster.to_png()?;
    Ok(EncodedImage {
        data,
        width: raster.width,
        height: raster.height,
    })
}

/// Parse a DICOM data set from the given buffer,
/// then render its pixel data as a PNG image.
pub fn parse_and_render_png(source: &[u8]) -> Result<Vec<u8>> {
    let dataset = dicom_lite_parser::parse(source).context(ParseDataSetSnafu)?;
    Ok(render_png(&dataset)?.data)
}
