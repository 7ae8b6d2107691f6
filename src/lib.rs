//! PDF Editor Library
//!
//! Page-level operations on PDF documents behind a single dispatch point.
//! This library provides:
//! - An [`Operation`] trait with [`Merge`] and [`Split`] implementations
//! - An [`Editor`] that holds the active operation and can switch it at runtime
//! - A thin lopdf adapter for reading page sequences and writing them atomically
//! - Metadata extraction (page counts, title, author)
//!
//! # Example
//!
//! ```no_run
//! use pdf_editor::{Editor, Merge, Split};
//! use std::path::{Path, PathBuf};
//!
//! let mut editor = Editor::new(Merge);
//! editor
//!     .execute_operation(
//!         &[PathBuf::from("1. intro.pdf"), PathBuf::from("2. advanced.pdf")],
//!         Path::new("merged.pdf"),
//!     )
//!     .expect("Failed to merge PDFs");
//!
//! // Pages 2, 3 and 4 of the merged document
//! editor.set_operation(Split::new(2, Some(5)));
//! editor
//!     .execute_operation(&[PathBuf::from("merged.pdf")], Path::new("excerpt.pdf"))
//!     .expect("Failed to split PDF");
//! ```

pub mod editor;
pub mod error;
pub mod operation;
pub mod pdf;
pub mod range;

// Re-export commonly used items
pub use editor::Editor;
pub use error::{Error, Result};
pub use operation::{Merge, Operation, Split};
pub use range::PageRange;
