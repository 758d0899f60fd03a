use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Margins leave no room for text on a {page_width} x {page_height} mm page \
         ({content_width:.1} x {content_height:.1} mm usable)"
    )]
    NoContentArea {
        page_width: f32,
        page_height: f32,
        content_width: f32,
        content_height: f32,
    },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("Page {0} does not exist")]
    PageOutOfRange(usize),

    #[error("Failed to extract text from page {page}: {source}")]
    Page {
        page: usize,
        #[source]
        source: lopdf::Error,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that can end a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("No text found in PDF. The file may contain only images.")]
    NoText,

    #[error(transparent)]
    Render(#[from] RenderError),
}
