//! Page operations and the trait the editor dispatches through

pub mod merge;
pub mod split;

use std::path::{Path, PathBuf};
use crate::error::Result;

pub use merge::{merge_pdfs, Merge, MergeOptions};
pub use split::{split_pdf, Split, SplitOptions};

/// A transformation from zero or more input PDFs to exactly one output PDF
///
/// Implementations write `output` in full or not at all: any failure leaves an
/// existing file at `output` untouched and creates nothing new.
pub trait Operation: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Run the operation over `inputs`, writing the result to `output`
    fn execute(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;
}

impl<T: Operation + ?Sized> Operation for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn execute(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        (**self).execute(inputs, output)
    }
}
