use std::fs;
use std::path::Path;

use lopdf::Document;

use crate::error::ExtractError;

use super::TextSource;

/// [`TextSource`] backed by a parsed `lopdf` document
pub struct LopdfSource {
    doc: Document,
    /// 1-based PDF page numbers in ascending order
    page_numbers: Vec<u32>,
}

impl LopdfSource {
    /// Load a PDF from disk.
    ///
    /// The whole file is read into memory first, so no file handle outlives
    /// this call whether parsing succeeds or not.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let bytes = fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self::from_document(doc))
    }

    pub fn from_document(doc: Document) -> Self {
        let page_numbers = doc.get_pages().keys().copied().collect();
        Self { doc, page_numbers }
    }
}

impl TextSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let page = self
            .page_numbers
            .get(index)
            .copied()
            .ok_or(ExtractError::PageOutOfRange(index + 1))?;

        self.doc
            .extract_text(&[page])
            .map_err(|source| ExtractError::Page {
                page: index + 1,
                source,
            })
    }
}
