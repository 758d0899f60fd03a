//! PDF rendering modules

pub mod canvas;
pub mod document;
pub mod helpers;
pub mod paginator;
pub mod pdf_canvas;

// Re-export commonly used items for convenience
pub use canvas::{Canvas, CanvasEvent, DrawnLine, RecordingCanvas};
pub use document::{generate_pdf, DocumentRenderer, RenderedPdf};
pub use helpers::{get_builtin_measurer, BuiltinFontMeasurer, LayerBuilder, TextMeasure};
pub use paginator::{LayoutSummary, Paginator};
pub use pdf_canvas::PdfCanvas;
