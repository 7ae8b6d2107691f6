//! Concatenating whole documents

use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::Result;
use crate::operation::Operation;
use crate::pdf::{PageWriter, SourceDocument};

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Merge multiple PDF files into a single PDF
///
/// Pages appear in input order: every page of the first file, then every page of the
/// second, and so on. An empty input list produces a valid zero-page document.
///
/// # Example
///
/// ```no_run
/// use pdf_editor::operation::{merge_pdfs, MergeOptions};
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     input_paths: vec![
///         PathBuf::from("1. first.pdf"),
///         PathBuf::from("2. second.pdf"),
///     ],
///     output_path: PathBuf::from("merged.pdf"),
/// };
///
/// merge_pdfs(&options).expect("Failed to merge");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<()> {
    let mut writer = PageWriter::new();

    // Load everything before touching the output
    for path in &options.input_paths {
        let source = SourceDocument::load(path)?;
        debug!("Loaded {} ({} pages)", path.display(), source.page_count());
        writer.append_all(source)?;
    }

    let page_count = writer.page_count();
    writer.write(&options.output_path)?;

    info!(
        "Merged {} file(s) into {} ({} pages)",
        options.input_paths.len(),
        options.output_path.display(),
        page_count
    );

    Ok(())
}

/// Operation that concatenates all inputs, in order, into one document
#[derive(Debug, Clone, Copy, Default)]
pub struct Merge;

impl Merge {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Merge {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn execute(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        merge_pdfs(&MergeOptions {
            input_paths: inputs.to_vec(),
            output_path: output.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_merge_options_creation() {
        let options = MergeOptions {
            input_paths: vec![
                PathBuf::from("test1.pdf"),
                PathBuf::from("test2.pdf"),
            ],
            output_path: PathBuf::from("merged.pdf"),
        };

        assert_eq!(options.input_paths.len(), 2);
        assert_eq!(options.output_path, Path::new("merged.pdf"));
    }

    #[test]
    fn test_merge_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("merged.pdf");

        let result = Merge.execute(&[PathBuf::from("nonexistent.pdf")], &output);

        assert!(matches!(result, Err(Error::InputNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_merge_name() {
        assert_eq!(Merge::new().name(), "merge");
    }

    // Merges of real documents are covered in tests/
}
