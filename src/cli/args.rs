use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DEFAULT_FONT_SIZE, DEFAULT_PAGE_MARGIN, MAX_FONT_SIZE, MIN_FONT_SIZE, OUTPUT_SUFFIX,
};

#[derive(Parser, Debug)]
#[command(name = "pdf-text-compress")]
#[command(
    author,
    version,
    about = "Shrink a PDF by re-rendering only its text into a new, text-only PDF"
)]
pub struct Args {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to the input name with a _text_only suffix)
    pub output: Option<PathBuf>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "letter")]
    pub page_size: PageSize,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    pub orientation: Orientation,

    /// Builtin font used for the text
    #[arg(short = 'f', long, value_enum, default_value = "helvetica")]
    pub font: FontChoice,

    /// Font size in points
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE, value_parser = parse_font_size)]
    pub font_size: f32,

    /// Page margin in mm, applied to all four sides
    #[arg(short = 'm', long, default_value_t = DEFAULT_PAGE_MARGIN, value_parser = parse_margin)]
    pub margin: f32,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Standard PDF fonts offered for the output
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum FontChoice {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl Args {
    /// Get the output path, defaulting to `<stem>_text_only.<ext>` next to the input
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Get page dimensions in mm (width, height) accounting for orientation
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Insert the `_text_only` suffix between file stem and extension.
///
/// The directory and extension of `input` are kept as they are.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();

    let mut name = OsString::from(stem);
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}

fn parse_font_size(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(format!(
            "Font size must be between {} and {} points",
            MIN_FONT_SIZE, MAX_FONT_SIZE
        ));
    }
    Ok(size)
}

fn parse_margin(s: &str) -> Result<f32, String> {
    let margin: f32 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !margin.is_finite() || margin < 0.0 {
        return Err(format!("Invalid margin: {}", s));
    }
    Ok(margin)
}
