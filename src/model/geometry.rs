use printpdf::BuiltinFont;

use crate::config::defaults::{LINE_SPACING, POINTS_TO_MM};

/// Page margins in mm, measured inward from each page edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    /// Same margin on all four sides
    pub fn uniform(mm: f32) -> Self {
        Self {
            left: mm,
            right: mm,
            top: mm,
            bottom: mm,
        }
    }
}

/// Fixed geometry for one render pass.
///
/// All coordinates are in mm with the origin at the bottom-left corner of
/// the page, which is how PDF positions text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margins: Margins,
    pub font: BuiltinFont,
    /// Font size in points
    pub font_size: f32,
    /// Baseline-to-baseline distance as a multiple of the font size
    pub line_spacing: f32,
}

impl PageGeometry {
    pub fn new(page_width: f32, page_height: f32, margins: Margins, font: BuiltinFont, font_size: f32) -> Self {
        Self {
            page_width,
            page_height,
            margins,
            font,
            font_size,
            line_spacing: LINE_SPACING,
        }
    }

    /// X coordinate where every line starts
    pub fn left(&self) -> f32 {
        self.margins.left
    }

    /// X coordinate no line should extend past
    pub fn right(&self) -> f32 {
        self.page_width - self.margins.right
    }

    /// Baseline of the first line on a page
    pub fn top(&self) -> f32 {
        self.page_height - self.margins.top
    }

    /// Lowest baseline allowed before a page break
    pub fn bottom(&self) -> f32 {
        self.margins.bottom
    }

    pub fn usable_width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Line height in mm
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_spacing * POINTS_TO_MM
    }

    /// How many lines fit between `top()` and `bottom()` inclusive.
    ///
    /// Mirrors the paginator's stepping so rounding matches exactly.
    pub fn lines_per_page(&self) -> usize {
        let line_height = self.line_height();
        if line_height <= 0.0 {
            return 0;
        }
        let mut y = self.top();
        let mut lines = 0;
        while y >= self.bottom() {
            lines += 1;
            y -= line_height;
        }
        lines
    }
}
