//! Document text extraction.
//!
//! Parsing is delegated to `lopdf`. The pipeline only needs the full text of
//! each document, assembled from its pages in page order.

use crate::error::{Error, Result};
use lopdf::Document;
use std::path::Path;

/// Source of full-document text.
///
/// The report pipeline is written against this trait so that alternative
/// backends (or fixed texts in tests) can stand in for PDF parsing.
pub trait TextExtractor {
    /// Return the concatenated text of every page of the document at `path`.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// [`TextExtractor`] backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an in-memory PDF. `source` names the document in
    /// errors.
    pub fn extract_bytes(&self, bytes: &[u8], source: &Path) -> Result<String> {
        let doc = Document::load_mem(bytes).map_err(|e| extraction_error(source, e))?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        let mut text = String::new();
        for page_number in page_numbers {
            let page_text = doc
                .extract_text(&[page_number])
                .map_err(|e| extraction_error(source, e))?;
            text.push_str(&page_text);
        }

        log::debug!("Extracted {} chars from {}", text.chars().count(), source.display());
        Ok(text)
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        // The file is read in one call; no handle outlives it.
        let bytes = std::fs::read(path).map_err(|e| extraction_error(path, e))?;
        self.extract_bytes(&bytes, path)
    }
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract(&self, path: &Path) -> Result<String> {
        (**self).extract(path)
    }
}

fn extraction_error(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::Extraction {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{PdfWriter, PAGE_A4};

    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut writer = PdfWriter::new();
        for text in pages {
            let mut page = writer.add_page(PAGE_A4.0, PAGE_A4.1);
            page.add_text(text, 72.0, 720.0, "Helvetica", 12.0);
            page.finish();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_extract_single_page() {
        let bytes = pdf_with_pages(&["cat cat dog"]);
        let text = LopdfExtractor::new()
            .extract_bytes(&bytes, Path::new("mem.pdf"))
            .unwrap();
        assert!(text.contains("cat cat dog"));
    }

    #[test]
    fn test_extract_pages_in_order() {
        let bytes = pdf_with_pages(&["first page", "second page"]);
        let text = LopdfExtractor::new()
            .extract_bytes(&bytes, Path::new("mem.pdf"))
            .unwrap();
        let first = text.find("first page").unwrap();
        let second = text.find("second page").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_extract_garbage_fails() {
        let err = LopdfExtractor::new()
            .extract_bytes(b"this is not a pdf", Path::new("junk.pdf"))
            .unwrap_err();
        match err {
            Error::Extraction { path, .. } => assert_eq!(path, Path::new("junk.pdf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extract_missing_file_fails() {
        let err = LopdfExtractor::new()
            .extract(Path::new("/nonexistent/missing.pdf"))
            .unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }
}
