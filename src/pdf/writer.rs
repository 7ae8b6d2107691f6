//! Assembling page sequences into a new PDF and writing it to disk
//!
//! Pages are copied out of their source documents with the same renumbering approach
//! as the lopdf merge example:
//! https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
//!
//! Output is written to a temporary file next to the destination and renamed into
//! place only after the whole document has been serialized and flushed.

use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;
use lopdf::{Dictionary, Document, Object, ObjectId};
use log::debug;
use crate::error::{Error, Result};
use crate::pdf::SourceDocument;

/// Version written when no source document contributed pages
const DEFAULT_VERSION: &str = "1.5";

/// Collects pages from source documents, in order, into one output document
#[derive(Debug)]
pub struct PageWriter {
    document: Document,
    page_ids: Vec<ObjectId>,
    version: Option<String>,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter {
    /// Create a writer with no pages
    pub fn new() -> Self {
        Self {
            document: Document::with_version(DEFAULT_VERSION),
            page_ids: Vec::new(),
            version: None,
        }
    }

    /// Number of pages collected so far
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append every page of `source` in document order
    pub fn append_all(&mut self, source: SourceDocument) -> Result<()> {
        let count = source.page_count();
        self.append_range(source, 0..count)
    }

    /// Append the pages of `source` whose 0-based index falls in `range`
    ///
    /// The range must already lie within the source's page count.
    pub fn append_range(&mut self, mut source: SourceDocument, range: Range<usize>) -> Result<()> {
        // Renumber objects in this document to avoid conflicts
        source.document.renumber_objects_with(self.document.max_id + 1);

        let selected: Vec<ObjectId> = source
            .page_ids()
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        for &page_id in &selected {
            source.flatten_inherited_attributes(page_id)?;
        }

        debug!(
            "Taking {} page(s) from {} (pages {}..{})",
            selected.len(),
            source.path().display(),
            range.start,
            range.end
        );

        if !selected.is_empty() {
            let version = source.version();
            if self.version.as_deref().map_or(true, |current| version > current) {
                self.version = Some(version.to_string());
            }
        }

        // Unreferenced objects from the source are pruned on write
        self.document.max_id = source.document.max_id;
        self.document.objects.extend(source.document.objects);
        self.page_ids.extend(selected);

        Ok(())
    }

    /// Build the final document with a fresh page tree over the collected pages
    pub fn into_document(self) -> Document {
        let mut doc = self.document;
        if let Some(version) = self.version {
            doc.version = version;
        }

        // Pages and catalog get ids above every copied object
        let pages_id = doc.new_object_id();

        for &page_id in &self.page_ids {
            if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();

        let mut pages_object = Dictionary::new();
        pages_object.set("Type", Object::Name(b"Pages".to_vec()));
        pages_object.set("Count", Object::Integer(self.page_ids.len() as i64));
        pages_object.set("Kids", Object::Array(kids));
        doc.objects.insert(pages_id, Object::Dictionary(pages_object));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(Object::Dictionary(catalog));

        doc.trailer = Dictionary::new();
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let pruned = doc.prune_objects();
        debug!("Pruned {} unreachable object(s)", pruned.len());

        doc.compress();
        doc
    }

    /// Write the collected pages to `path`, replacing any existing file
    pub fn write(self, path: &Path) -> Result<()> {
        let mut doc = self.into_document();
        save_atomic(&mut doc, path)
    }
}

/// Serialize `doc` to a temporary file beside `path`, then rename it over `path`
///
/// The temporary file is removed if any step fails, so a failed write never leaves a
/// truncated document behind.
pub fn save_atomic(doc: &mut Document, path: &Path) -> Result<()> {
    let write_failure = |source: std::io::Error| Error::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".pdf-editor-")
        .suffix(".pdf.tmp")
        .tempfile_in(dir)
        .map_err(write_failure)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        doc.save_to(&mut writer)
            .map_err(|e| write_failure(std::io::Error::other(e)))?;
        writer.flush().map_err(write_failure)?;
    }

    temp.as_file().sync_all().map_err(write_failure)?;
    temp.persist(path).map_err(|e| write_failure(e.error))?;

    debug!("Wrote {}", path.display());
    Ok(())
}
