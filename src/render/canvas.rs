//! Drawing surface used by the paginator
//!
//! The paginator only needs to set a font, measure, draw a line of text and
//! start a new page. [`PdfCanvas`](super::PdfCanvas) does this with printpdf;
//! [`RecordingCanvas`] keeps a log of the calls instead, which is what the
//! layout preview tool and the tests use.

use printpdf::BuiltinFont;

use super::helpers::{get_builtin_measurer, TextMeasure};

/// Write-side capability of a paginated document
pub trait Canvas {
    /// Select the font for subsequent `draw_text` calls
    fn set_font(&mut self, font: BuiltinFont, font_size: f32);

    /// Draw one line of text with its baseline starting at (x, y), in mm
    fn draw_text(&mut self, x: f32, y: f32, text: &str);

    /// Rendered width of `text` in mm
    fn measure_text_width(&self, text: &str, font: BuiltinFont, font_size: f32) -> f32;

    /// Close the current page and start drawing on a fresh one
    fn new_page(&mut self);
}

/// One call made against a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    SetFont { font: BuiltinFont, font_size: f32 },
    DrawText { page: usize, x: f32, y: f32, text: String },
    NewPage,
}

/// A drawn line, as reported by [`RecordingCanvas::lines`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLine {
    /// 0-based destination page
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Canvas that records every call instead of producing a PDF
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    /// Fixed advance per character in mm; `None` uses builtin font metrics
    char_width: Option<f32>,
    current_page: usize,
    events: Vec<CanvasEvent>,
}

impl RecordingCanvas {
    /// Measure with the same AFM metrics as the PDF output
    pub fn with_builtin_metrics() -> Self {
        Self {
            char_width: None,
            current_page: 0,
            events: Vec::new(),
        }
    }

    /// Measure every character as `mm` wide, whatever the font
    pub fn fixed_width(mm: f32) -> Self {
        Self {
            char_width: Some(mm),
            ..Self::with_builtin_metrics()
        }
    }

    pub fn events(&self) -> &[CanvasEvent] {
        &self.events
    }

    /// Number of pages touched so far (the first page is always open)
    pub fn page_count(&self) -> usize {
        self.current_page + 1
    }

    /// Every drawn line, in draw order
    pub fn lines(&self) -> Vec<DrawnLine> {
        self.events
            .iter()
            .filter_map(|event| match event {
                CanvasEvent::DrawText { page, x, y, text } => Some(DrawnLine {
                    page: *page,
                    x: *x,
                    y: *y,
                    text: text.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Lines drawn on one destination page
    pub fn lines_on_page(&self, page: usize) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.page == page)
            .map(|line| line.text)
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, font: BuiltinFont, font_size: f32) {
        self.events.push(CanvasEvent::SetFont { font, font_size });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.events.push(CanvasEvent::DrawText {
            page: self.current_page,
            x,
            y,
            text: text.to_string(),
        });
    }

    fn measure_text_width(&self, text: &str, font: BuiltinFont, font_size: f32) -> f32 {
        match self.char_width {
            Some(width) => text.chars().count() as f32 * width,
            None => get_builtin_measurer(font).measure_text(text, font_size),
        }
    }

    fn new_page(&mut self) {
        self.current_page += 1;
        self.events.push(CanvasEvent::NewPage);
    }
}
