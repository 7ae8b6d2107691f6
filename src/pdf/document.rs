//! Loading source PDFs as ordered page sequences

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use lopdf::{Document, Object, ObjectId};
use crate::error::{Error, Result};

/// Page attributes a page may receive from an ancestor `Pages` node
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// A PDF loaded from disk, exposed as an ordered sequence of pages
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    pub(crate) document: Document,
}

impl SourceDocument {
    /// Load a PDF from `path`
    ///
    /// Fails with [`Error::InputNotFound`] when the path does not name a regular file and
    /// with [`Error::InputUnreadable`] when lopdf cannot parse it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let document = Document::load(path).map_err(|source| Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PDF header version, e.g. `"1.7"`
    pub fn version(&self) -> &str {
        &self.document.version
    }

    /// Number of pages reachable through the page tree
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page object ids in document order
    pub fn page_ids(&self) -> Vec<ObjectId> {
        self.document.get_pages().into_values().collect()
    }

    /// Underlying lopdf document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Copy attributes inherited from the page tree onto the page itself
    ///
    /// Once a page is moved under a new `Pages` node it no longer sees its old
    /// ancestors, so anything it relied on from them has to live on the page.
    pub(crate) fn flatten_inherited_attributes(&mut self, page_id: ObjectId) -> Result<()> {
        let inherited = inherited_attributes(&self.document, page_id);
        if inherited.is_empty() {
            return Ok(());
        }

        let page = self.document.get_dictionary_mut(page_id)?;
        for (key, value) in inherited {
            page.set(key, value);
        }

        Ok(())
    }
}

/// Collect inheritable attributes that `page_id` is missing but an ancestor defines
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found = Vec::new();

    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut missing: Vec<&[u8]> = INHERITABLE_ATTRIBUTES
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();

    let mut visited = HashSet::from([page_id]);
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    while let Some(node_id) = parent {
        if missing.is_empty() || !visited.insert(node_id) {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        // Nearest ancestor wins
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    found
}
