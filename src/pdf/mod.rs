//! PDF library adapter: reading documents as page sequences and writing them back

pub mod document;
pub mod metadata;
pub mod writer;

// Re-export commonly used items
pub use document::SourceDocument;
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
pub use writer::{save_atomic, PageWriter};
