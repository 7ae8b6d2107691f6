//! Error types for the PDF editor library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF editor library
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist or is not a regular file
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input exists but could not be parsed as a PDF document
    #[error("Cannot read PDF {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Output could not be created, written, flushed or moved into place
    #[error("Cannot write output {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page range outside the document under strict validation
    #[error(
        "Invalid page range {start}..{} for a document with {page_count} pages",
        .end.map(|end| end.to_string()).unwrap_or_default()
    )]
    InvalidRange {
        start: usize,
        end: Option<usize>,
        page_count: usize,
    },

    /// Page range text that could not be parsed
    #[error("Invalid page range expression: {0}")]
    InvalidRangeSyntax(String),

    /// Operation received the wrong number of input documents
    #[error("{operation} expects {expected} input file(s), got {actual}")]
    InputCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// PDF structure error while assembling the output document
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}
