//! Text extraction from source PDFs
//!
//! Reading is behind the [`TextSource`] trait so the rest of the pipeline
//! does not care which PDF library produced the text. [`LopdfSource`] is the
//! implementation used by the command line tool.

pub mod lopdf_source;

pub use lopdf_source::LopdfSource;

use std::fmt;
use std::path::Path;

use crate::error::ExtractError;
use crate::model::PageText;

/// Read-only access to the text of a paginated document
pub trait TextSource {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Raw text of the page at `index` (0-based)
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;
}

/// Progress reported while pages are extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractProgress {
    /// Extraction is starting on a document with this many pages
    Started { pages: usize },
    /// A page was read; `page` is 1-based
    Page { page: usize, chars: usize },
}

impl fmt::Display for ExtractProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractProgress::Started { pages } => write!(f, "Processing {} pages...", pages),
            ExtractProgress::Page { page, chars } => {
                write!(f, "  Page {}: {} characters extracted", page, chars)
            }
        }
    }
}

/// Pull the text of every page, in page order, logging progress at `info`.
///
/// Fails on the first page the source cannot decode.
pub fn extract_pages<S: TextSource + ?Sized>(source: &S) -> Result<Vec<PageText>, ExtractError> {
    extract_pages_with(source, |progress| log::info!("{}", progress))
}

/// Like [`extract_pages`], but hands each progress step to `on_progress`
pub fn extract_pages_with<S, F>(
    source: &S,
    mut on_progress: F,
) -> Result<Vec<PageText>, ExtractError>
where
    S: TextSource + ?Sized,
    F: FnMut(ExtractProgress),
{
    let count = source.page_count();
    on_progress(ExtractProgress::Started { pages: count });

    let mut pages = Vec::with_capacity(count);
    for index in 0..count {
        let page = PageText::new(source.page_text(index)?);
        on_progress(ExtractProgress::Page {
            page: index + 1,
            chars: page.char_count(),
        });
        pages.push(page);
    }

    Ok(pages)
}

/// Open a PDF file and extract the text of all its pages
pub fn extract_file(path: &Path) -> Result<Vec<PageText>, ExtractError> {
    let source = LopdfSource::open(path)?;
    extract_pages(&source)
}

/// True if at least one page carries non-whitespace text.
///
/// Whitespace-only pages count as empty because lopdf reports a page with
/// no text operators as a bare newline.
pub fn has_text(pages: &[PageText]) -> bool {
    pages.iter().any(|page| !page.is_blank())
}
