//! A CLI tool for inspecting the contents of a DICOM file
//! by printing it in a human readable format.
use clap::Parser;
use dicom_lite_dump::{tag_summary, ColorMode, DumpOptions};
use snafu::{Report, ResultExt, Whatever};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{error, Level};

/// Exit code for when an error emerged while reading the DICOM file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while dumping the file.
const ERROR_PRINT: i32 = -3;

/// Dump the contents of a DICOM file
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file to read
    file: PathBuf,
    /// Only print the value of this element
    /// (e.g. `PatientName`, `x00100010`, or `(0010,0010)`)
    #[clap(short = 't', long = "tag")]
    tag: Option<String>,
    /// Print all values to the end
    /// (limited to `width` by default)
    #[clap(long = "no-limit")]
    no_limit: bool,
    /// The width of the display
    /// (default is to check automatically)
    #[clap(short = 'w', long = "width")]
    width: Option<u32>,
    /// The color mode
    #[clap(long = "color", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let App {
        file,
        tag,
        no_limit,
        width,
        color,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let bytes = std::fs::read(&file)
        .with_whatever_context(|_| format!("Could not read file {}", file.display()))
        .unwrap_or_else(|e: Whatever| {
            error!("{}", Report::from_error(e));
            std::process::exit(ERROR_READ);
        });

    if let Some(expr) = tag {
        let value = dicom_lite_parser::parse_and_get_tag_expr(&bytes, &expr).unwrap_or_else(|e| {
            error!("{}", Report::from_error(e));
            std::process::exit(ERROR_READ);
        });
        println!("{}", tag_summary(&expr, value.as_deref()));
        return;
    }

    let dataset = dicom_lite_parser::parse(&bytes).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(ERROR_READ);
    });

    let mut options = DumpOptions::new();
    options.no_limit(no_limit).color_mode(color);
    if let Some(width) = width {
        options.width(width);
    }

    println!("{}: ", file.display());
    if let Err(ref e) = options.dump_data_set(&dataset) {
        if e.kind() == ErrorKind::BrokenPipe {
            // handle broken pipe separately with a no-op
        } else {
            error!("{}", Report::from_error(e));
            std::process::exit(ERROR_PRINT);
        }
    }
}
