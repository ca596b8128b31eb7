//! A CLI tool for converting a DICOM image file
//! into a PNG image file.
use std::path::PathBuf;

use clap::Parser;
use snafu::{Report, ResultExt, Whatever};
use tracing::{error, info, Level};

/// Convert a DICOM file into a PNG image
#[derive(Debug, Parser)]
struct App {
    /// Path to the DICOM file to convert
    file: PathBuf,

    /// Path to the output image
    /// (default is to replace input extension with `.png`)
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Print more information about the image and the output file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        file,
        output,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let output = output.unwrap_or_else(|| {
        let mut path = file.clone();
        path.set_extension("png");
        path
    });

    let bytes = std::fs::read(&file)
        .with_whatever_context(|_| format!("Could not read file {}", file.display()))
        .unwrap_or_else(|e: Whatever| {
            error!("{}", Report::from_error(e));
            std::process::exit(-1);
        });

    let dataset = dicom_lite_parser::parse(&bytes).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-2);
    });

    let image = dicom_lite_pixeldata::render_png(&dataset).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-3);
    });

    if verbose {
        info!(
            "{}x{} image, 8-bit grayscale, {} bytes encoded",
            image.width,
            image.height,
            image.data.len()
        );
    }

    std::fs::write(&output, &image.data)
        .with_whatever_context(|_| format!("Could not write image to {}", output.display()))
        .unwrap_or_else(|e: Whatever| {
            error!("{}", Report::from_error(e));
            std::process::exit(-4);
        });

    if verbose {
        info!("Image saved to {}", output.display());
    }
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
