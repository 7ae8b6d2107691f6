//! Extracting a contiguous run of pages from one document

use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::pdf::{PageWriter, SourceDocument};
use crate::range::PageRange;

/// Options for splitting a PDF
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Input PDF file path
    pub input_path: PathBuf,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Pages to keep, 0-based and half-open
    pub range: PageRange,
    /// Reject ranges that fall outside the document instead of clamping them
    pub strict: bool,
}

/// Write pages `range` of one PDF to a new PDF
///
/// By default the range is clamped to the document like a slice, so an inverted or
/// out-of-bounds range yields a zero-page document. With `strict` set, such ranges
/// fail with [`Error::InvalidRange`] and nothing is written.
///
/// # Example
///
/// ```no_run
/// use pdf_editor::operation::{split_pdf, SplitOptions};
/// use pdf_editor::PageRange;
/// use std::path::PathBuf;
///
/// let options = SplitOptions {
///     input_path: PathBuf::from("doc.pdf"),
///     output_path: PathBuf::from("chapter.pdf"),
///     range: PageRange::new(2, Some(5)),
///     strict: false,
/// };
///
/// split_pdf(&options).expect("Failed to split");
/// ```
pub fn split_pdf(options: &SplitOptions) -> Result<()> {
    let source = SourceDocument::load(&options.input_path)?;
    let total = source.page_count();

    let pages = if options.strict {
        options.range.resolve_strict(total)?
    } else {
        options.range.resolve(total)
    };
    debug!(
        "Splitting {} ({} pages): requested {}, taking {:?}",
        options.input_path.display(),
        total,
        options.range,
        pages
    );

    let mut writer = PageWriter::new();
    writer.append_range(source, pages)?;

    let page_count = writer.page_count();
    writer.write(&options.output_path)?;

    info!(
        "Split {} into {} ({} pages)",
        options.input_path.display(),
        options.output_path.display(),
        page_count
    );

    Ok(())
}

/// Operation that copies a contiguous page range of a single input
#[derive(Debug, Clone, Copy, Default)]
pub struct Split {
    range: PageRange,
    strict: bool,
}

impl Split {
    /// Split pages `start_page..end_page`, where `None` means through the last page
    pub fn new(start_page: usize, end_page: Option<usize>) -> Self {
        Self::with_range(PageRange::new(start_page, end_page))
    }

    pub fn with_range(range: PageRange) -> Self {
        Self {
            range,
            strict: false,
        }
    }

    /// Reject out-of-bounds or inverted ranges instead of clamping them
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn range(&self) -> PageRange {
        self.range
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Operation for Split {
    fn name(&self) -> &'static str {
        "split"
    }

    fn execute(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let [input] = inputs else {
            return Err(Error::InputCount {
                operation: self.name(),
                expected: 1,
                actual: inputs.len(),
            });
        };

        split_pdf(&SplitOptions {
            input_path: input.clone(),
            output_path: output.to_path_buf(),
            range: self.range,
            strict: self.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_defaults_to_whole_document() {
        let split = Split::default();
        assert_eq!(split.range(), PageRange::all());
        assert!(!split.is_strict());
    }

    #[test]
    fn test_split_builder() {
        let split = Split::new(2, Some(5)).strict(true);
        assert_eq!(split.range(), PageRange::new(2, Some(5)));
        assert!(split.is_strict());
    }

    #[test]
    fn test_split_requires_exactly_one_input() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("out.pdf");

        for inputs in [vec![], vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]] {
            let result = Split::default().execute(&inputs, &output);
            match result {
                Err(Error::InputCount { operation, expected, actual }) => {
                    assert_eq!(operation, "split");
                    assert_eq!(expected, 1);
                    assert_eq!(actual, inputs.len());
                }
                other => panic!("Expected InputCount error, got {:?}", other),
            }
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_split_missing_input() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let output = temp_dir.path().join("out.pdf");

        let result = Split::default().execute(&[PathBuf::from("nonexistent.pdf")], &output);
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }
}
