//! PDF metadata extraction

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::Result;
use crate::pdf::SourceDocument;

/// PDF metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// PDF header version
    pub version: String,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

/// Extract metadata from a PDF file
pub fn extract_metadata(path: &Path) -> Result<PdfMetadata> {
    let source = SourceDocument::load(path)?;
    let doc = source.document();

    Ok(PdfMetadata {
        page_count: source.page_count(),
        version: source.version().to_string(),
        title: info_string(doc, b"Title"),
        author: info_string(doc, b"Author"),
    })
}

/// Count the number of pages in a PDF file
///
/// Zero-page documents are valid and report 0.
pub fn count_pages(path: &Path) -> Result<usize> {
    Ok(SourceDocument::load(path)?.page_count())
}

/// Read a text entry from the trailer's Info dictionary
fn info_string(doc: &Document, key: &[u8]) -> Option<String> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };

    // PDFDocEncoding or UTF-16BE with a byte order mark
    lopdf::decode_text_string(info.get(key).ok()?).ok()
}
