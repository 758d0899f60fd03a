/// Letter page width in mm
pub const DEFAULT_PAGE_WIDTH: f32 = 215.9;

/// Letter page height in mm
pub const DEFAULT_PAGE_HEIGHT: f32 = 279.4;

/// Default page margin in mm (3/4 inch)
pub const DEFAULT_PAGE_MARGIN: f32 = 19.05;

/// Default body font size in points
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Smallest and largest font size accepted on the command line
pub const MIN_FONT_SIZE: f32 = 4.0;
pub const MAX_FONT_SIZE: f32 = 72.0;

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING: f32 = 1.2;

/// 1 point = 0.3528 mm
pub const POINTS_TO_MM: f32 = 0.3528;

/// Suffix inserted before the extension of the default output file
pub const OUTPUT_SUFFIX: &str = "_text_only";

/// Creation and modification date written into every output PDF
pub const DOCUMENT_DATE: &str = "D:20000101000000Z";
