use printpdf::BuiltinFont;

use crate::cli::{Args, FontChoice};
use crate::error::ConfigError;
use crate::model::{Margins, PageGeometry};

use super::defaults::*;

/// Runtime settings for PDF generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (in mm)
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,

    // Typography
    pub font: BuiltinFont,
    /// Font size in points
    pub font_size: f32,
    pub line_spacing: f32,

    /// Document title written into the PDF metadata
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin_top: DEFAULT_PAGE_MARGIN,
            margin_bottom: DEFAULT_PAGE_MARGIN,
            margin_left: DEFAULT_PAGE_MARGIN,
            margin_right: DEFAULT_PAGE_MARGIN,

            font: BuiltinFont::Helvetica,
            font_size: DEFAULT_FONT_SIZE,
            line_spacing: LINE_SPACING,

            title: "Text-only copy".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let (page_width, page_height) = args.page_dimensions();

        let title = args
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| Self::default().title);

        Self {
            page_width,
            page_height,
            margin_top: args.margin,
            margin_bottom: args.margin,
            margin_left: args.margin,
            margin_right: args.margin,
            font: args.font.builtin(),
            font_size: args.font_size,
            title,
            ..Default::default()
        }
    }

    /// Replace the document title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Get the usable content area width
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Get the usable content area height
    pub fn content_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Reject margins that leave no usable area on the page
    pub fn validate(&self) -> Result<(), ConfigError> {
        let content_width = self.content_width();
        let content_height = self.content_height();
        if content_width > 0.0 && content_height > 0.0 {
            return Ok(());
        }
        Err(ConfigError::NoContentArea {
            page_width: self.page_width,
            page_height: self.page_height,
            content_width,
            content_height,
        })
    }

    /// Freeze the settings into the geometry used by the paginator
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.page_width,
            page_height: self.page_height,
            margins: Margins {
                left: self.margin_left,
                right: self.margin_right,
                top: self.margin_top,
                bottom: self.margin_bottom,
            },
            font: self.font,
            font_size: self.font_size,
            line_spacing: self.line_spacing,
        }
    }
}

impl FontChoice {
    pub fn builtin(self) -> BuiltinFont {
        match self {
            FontChoice::Helvetica => BuiltinFont::Helvetica,
            FontChoice::Times => BuiltinFont::TimesRoman,
            FontChoice::Courier => BuiltinFont::Courier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_letter_with_three_quarter_inch_margins() {
        let settings = Settings::default();
        assert!((settings.content_width() - 177.8).abs() < 0.01);
        assert!((settings.content_height() - 241.3).abs() < 0.01);
        assert_eq!(settings.font, BuiltinFont::Helvetica);
        assert_eq!(settings.font_size, 10.0);
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "pdf-text-compress",
            "scans/report.pdf",
            "--page-size",
            "a4",
            "--orientation",
            "landscape",
            "--font",
            "courier",
            "--font-size",
            "12",
            "--margin",
            "10",
        ]);
        let settings = Settings::from_args(&args);

        assert!((settings.page_width - 297.0).abs() < 0.01);
        assert!((settings.page_height - 210.0).abs() < 0.01);
        assert_eq!(settings.margin_left, 10.0);
        assert_eq!(settings.margin_bottom, 10.0);
        assert_eq!(settings.font, BuiltinFont::Courier);
        assert_eq!(settings.font_size, 12.0);
        assert_eq!(settings.title, "report");
    }

    #[test]
    fn test_geometry_carries_settings() {
        let settings = Settings::default().with_title("x");
        let geometry = settings.geometry();
        assert_eq!(geometry.page_width, settings.page_width);
        assert_eq!(geometry.margins.top, settings.margin_top);
        assert_eq!(geometry.font_size, settings.font_size);
        assert!((geometry.usable_width() - settings.content_width()).abs() < 0.001);
    }

    #[test]
    fn test_validate_rejects_margins_wider_than_the_page() {
        assert!(Settings::default().validate().is_ok());

        let args = Args::parse_from(["pdf-text-compress", "in.pdf", "--margin", "500"]);
        let err = Settings::from_args(&args).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NoContentArea { .. }));

        // Wide enough, but landscape Letter is only 215.9 mm tall
        let args = Args::parse_from([
            "pdf-text-compress",
            "in.pdf",
            "--orientation",
            "landscape",
            "--margin",
            "108",
        ]);
        assert!(Settings::from_args(&args).validate().is_err());
    }
}
