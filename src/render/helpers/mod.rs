//! Helper utilities for PDF rendering

pub mod layer;
pub mod metadata;
pub mod text_metrics;

pub use layer::LayerBuilder;
pub use metadata::pin_metadata;
pub use text_metrics::{get_builtin_measurer, BuiltinFontMeasurer, TextMeasure};
