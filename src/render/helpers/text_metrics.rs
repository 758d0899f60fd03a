//! Glyph-width measurement for the PDF Standard 14 fonts
//!
//! Widths come from Adobe's AFM files, so wrapping decisions match what a
//! viewer will actually draw for proportional fonts.

use printpdf::BuiltinFont;

use crate::config::defaults::POINTS_TO_MM;

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Measure text width in mm at a given font size
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

/// Width tables used for a builtin font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metrics {
    Times,
    Helvetica,
    /// Every glyph is 600 units wide
    Monospace,
}

/// Text measurer for PDF builtin fonts
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFontMeasurer {
    metrics: Metrics,
}

impl BuiltinFontMeasurer {
    /// Bold and italic variants are measured with the regular face's widths.
    pub fn new(font: BuiltinFont) -> Self {
        let metrics = match font {
            BuiltinFont::TimesRoman
            | BuiltinFont::TimesBold
            | BuiltinFont::TimesItalic
            | BuiltinFont::TimesBoldItalic => Metrics::Times,
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => Metrics::Monospace,
            _ => Metrics::Helvetica,
        };
        Self { metrics }
    }

    /// Get character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        if self.metrics == Metrics::Monospace {
            return 600;
        }

        // Only the ASCII range has table entries
        if !c.is_ascii() {
            return 500;
        }

        let code = c as usize;
        match self.metrics {
            Metrics::Times => TIMES_ROMAN_WIDTHS.get(code).copied().unwrap_or(250),
            _ => HELVETICA_WIDTHS.get(code).copied().unwrap_or(278),
        }
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * POINTS_TO_MM
    }
}

impl TextMeasure for BuiltinFontMeasurer {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_mm(text, font_size)
    }
}

/// Get the measurer for a builtin font
pub fn get_builtin_measurer(font: BuiltinFont) -> BuiltinFontMeasurer {
    BuiltinFontMeasurer::new(font)
}

// =============================================================================
// Adobe AFM Character Width Tables (ASCII subset, in 1000 units per em)
// =============================================================================

/// Times-Roman character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static TIMES_ROMAN_WIDTHS: [u16; 128] = [
    // 0-31: Control characters (use 0)
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 48-63: 0 1 2 3 4 5 6 7 8 9 : ; < = > ?
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    // 64-79: @ A B C D E F G H I J K L M N O
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    // 80-95: P Q R S T U V W X Y Z [ \ ] ^ _
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    // 96-111: ` a b c d e f g h i j k l m n o
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    // 112-127: p q r s t u v w x y z { | } ~ DEL
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
];

/// Helvetica character widths
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];
