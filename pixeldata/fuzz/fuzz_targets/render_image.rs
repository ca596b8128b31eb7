#![no_main]
use libfuzzer_sys::fuzz_target;
use std::error::Error;

/// Rasters beyond this many pixels are not rendered,
/// so that fuzzing is not dominated by allocation
const MAX_PIXELS: u64 = 4096 * 4096;

fuzz_target!(|data: &[u8]| {
    let _ = fuzz(data);
});

fn fuzz(data: &[u8]) -> Result<(), Box<dyn Error>> {
    let dataset = dicom_lite_parser::parse(data)?;

    let size = dicom_lite_pixeldata::attribute::cols(&dataset) as u64
        * dicom_lite_pixeldata::attribute::rows(&dataset) as u64;
    if size > MAX_PIXELS {
        return Ok(());
    }

    let raster = dicom_lite_pixeldata::render(&dataset)?;
    assert_eq!(raster.data.len() as u64, size * 4);

    Ok(())
}
