use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::error::RenderError;

use super::canvas::Canvas;
use super::helpers::{get_builtin_measurer, pin_metadata, LayerBuilder, TextMeasure};

/// [`Canvas`] that builds a printpdf document page by page
pub struct PdfCanvas {
    page_width: f32,
    page_height: f32,
    /// Finished pages
    pages: Vec<PdfPage>,
    /// Page currently being drawn
    layer: LayerBuilder,
    font: BuiltinFont,
    font_size: f32,
}

impl PdfCanvas {
    /// Start a document whose pages are `page_width` x `page_height` mm
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            pages: Vec::new(),
            layer: LayerBuilder::new(),
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
        }
    }

    /// Pages so far, counting the one still open
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    fn close_page(&mut self) {
        let layer = std::mem::take(&mut self.layer);
        self.pages.push(PdfPage::new(
            Mm(self.page_width),
            Mm(self.page_height),
            layer.into_ops(),
        ));
    }

    /// Close the open page and serialize the document.
    ///
    /// Dates and document ids are fixed, so equal input gives equal bytes.
    pub fn finish(mut self, title: &str) -> Result<Vec<u8>, RenderError> {
        self.close_page();

        let mut doc = PdfDocument::new(title);
        doc.with_pages(self.pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }

        if bytes.is_empty() {
            return Err(RenderError::PdfGeneration(
                "PDF writer produced no output".to_string(),
            ));
        }

        pin_metadata(&bytes, title).map_err(RenderError::PdfGeneration)
    }
}

impl Canvas for PdfCanvas {
    fn set_font(&mut self, font: BuiltinFont, font_size: f32) {
        self.font = font;
        self.font_size = font_size;
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.layer
            .use_text_builtin(text, self.font_size, Mm(x), Mm(y), self.font);
    }

    fn measure_text_width(&self, text: &str, font: BuiltinFont, font_size: f32) -> f32 {
        get_builtin_measurer(font).measure_text(text, font_size)
    }

    fn new_page(&mut self) {
        self.close_page();
    }
}
