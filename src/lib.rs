pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod report;

pub use config::Settings;
pub use error::{ConfigError, ConvertError, ExtractError, InputError, RenderError};
pub use extract::{
    extract_file, extract_pages, extract_pages_with, has_text, ExtractProgress, LopdfSource,
    TextSource,
};
pub use model::{PageGeometry, PageText};
pub use render::{generate_pdf, DocumentRenderer, LayoutSummary, Paginator, RenderedPdf};
pub use report::SizeReport;

use std::fs;
use std::path::Path;

/// Outcome of a successful [`convert_file`]
#[derive(Debug, Clone, Copy)]
pub struct ConversionSummary {
    pub layout: LayoutSummary,
    pub sizes: SizeReport,
}

/// Check that `path` names an existing regular file
pub fn validate_input(path: &Path) -> Result<(), InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Extract the text of `source` and render it as a text-only PDF.
///
/// Returns [`ConvertError::NoText`] when every page is blank, without
/// rendering anything.
pub fn convert_source<S: TextSource + ?Sized>(
    source: &S,
    settings: &Settings,
) -> Result<RenderedPdf, ConvertError> {
    convert_source_with(source, settings, |progress| log::info!("{}", progress))
}

/// Like [`convert_source`], reporting extraction progress to `on_progress`
pub fn convert_source_with<S, F>(
    source: &S,
    settings: &Settings,
    on_progress: F,
) -> Result<RenderedPdf, ConvertError>
where
    S: TextSource + ?Sized,
    F: FnMut(ExtractProgress),
{
    settings.validate()?;

    let pages = extract_pages_with(source, on_progress)?;
    if !has_text(&pages) {
        return Err(ConvertError::NoText);
    }

    let renderer = DocumentRenderer::new(settings.clone());
    Ok(renderer.render(&pages)?)
}

/// High-level API: convert the PDF at `input` into a text-only PDF at `output`.
///
/// The output file is only written once rendering has fully succeeded, so a
/// failed run never leaves a partial file behind.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pdf_text_compress::{convert_file, Settings};
///
/// let summary = convert_file(
///     Path::new("scan.pdf"),
///     Path::new("scan_text_only.pdf"),
///     &Settings::default(),
/// ).unwrap();
///
/// println!("{:.1}% smaller", summary.sizes.reduction_percent());
/// ```
pub fn convert_file(
    input: &Path,
    output: &Path,
    settings: &Settings,
) -> Result<ConversionSummary, ConvertError> {
    convert_file_with(input, output, settings, |progress| log::info!("{}", progress))
}

/// Like [`convert_file`], reporting extraction progress to `on_progress`
pub fn convert_file_with<F>(
    input: &Path,
    output: &Path,
    settings: &Settings,
    on_progress: F,
) -> Result<ConversionSummary, ConvertError>
where
    F: FnMut(ExtractProgress),
{
    validate_input(input)?;

    let source = LopdfSource::open(input)?;
    let rendered = convert_source_with(&source, settings, on_progress)?;

    fs::write(output, &rendered.bytes).map_err(RenderError::from)?;
    let sizes = SizeReport::from_files(input, output).map_err(RenderError::from)?;

    Ok(ConversionSummary {
        layout: rendered.layout,
        sizes,
    })
}
