use crate::config::Settings;
use crate::error::RenderError;
use crate::model::PageText;

use super::paginator::{LayoutSummary, Paginator};
use super::pdf_canvas::PdfCanvas;

/// A rendered text-only PDF
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub layout: LayoutSummary,
}

/// Main document renderer
pub struct DocumentRenderer {
    settings: Settings,
}

impl DocumentRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Lay out the pages and serialize the PDF
    pub fn render(&self, pages: &[PageText]) -> Result<RenderedPdf, RenderError> {
        let geometry = self.settings.geometry();
        let mut canvas = PdfCanvas::new(geometry.page_width, geometry.page_height);

        let layout = Paginator::new(geometry).run(&mut canvas, pages);
        log::info!(
            "Laid out {} source pages onto {} pages ({} lines)",
            layout.source_pages,
            layout.destination_pages,
            layout.lines_drawn
        );

        let bytes = canvas.finish(&self.settings.title)?;
        Ok(RenderedPdf { bytes, layout })
    }
}

/// Render page text to PDF bytes with the given settings
pub fn generate_pdf(pages: &[PageText], settings: &Settings) -> Result<Vec<u8>, RenderError> {
    let renderer = DocumentRenderer::new(settings.clone());
    Ok(renderer.render(pages)?.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_render_hello_world() {
        let pages = vec![PageText::new("Hello world"), PageText::new("")];
        let rendered = DocumentRenderer::new(Settings::default())
            .render(&pages)
            .unwrap();

        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert_eq!(rendered.layout.source_pages, 2);
        assert_eq!(rendered.layout.destination_pages, 2);
        assert_eq!(rendered.layout.lines_drawn, 1);
    }

    #[test]
    fn test_generate_pdf_long_page_spills() {
        let text = (1..=200)
            .map(|n| format!("Line number {}", n))
            .collect::<Vec<_>>()
            .join("\n");
        let settings = Settings::default();
        let capacity = settings.geometry().lines_per_page();

        let rendered = DocumentRenderer::new(settings)
            .render(&[PageText::new(text)])
            .unwrap();
        assert_eq!(rendered.layout.destination_pages, 200_usize.div_ceil(capacity));
    }

    #[test]
    fn test_generate_pdf_is_byte_identical_across_runs() {
        let pages = vec![
            PageText::new("Hello world\nSecond line of text"),
            PageText::new(""),
        ];
        let settings = Settings::default().with_title("report");

        let first = generate_pdf(&pages, &settings).unwrap();
        // PDF dates have one second resolution
        thread::sleep(Duration::from_millis(1100));
        let second = generate_pdf(&pages, &settings).unwrap();

        assert_eq!(first, second);
    }
}
