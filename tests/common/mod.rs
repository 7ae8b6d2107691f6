//! Fixture PDFs for integration tests
//!
//! Every generated page carries a `Label` entry in its dictionary so tests can check
//! which source page ended up where.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::path::{Path, PathBuf};

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

fn media_box(width: i64, height: i64) -> Object {
    Object::Array(vec![0.into(), 0.into(), width.into(), height.into()])
}

fn font_resources(doc: &mut Document) -> Object {
    let mut font = Dictionary::new();
    font.set("Type", name("Font"));
    font.set("Subtype", name("Type1"));
    font.set("BaseFont", name("Helvetica"));
    let font_id = doc.add_object(font);

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    Object::Dictionary(resources)
}

fn add_page(doc: &mut Document, parent: ObjectId, label: &str, own_attributes: bool) -> ObjectId {
    let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", label);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page = Dictionary::new();
    page.set("Type", name("Page"));
    page.set("Parent", Object::Reference(parent));
    page.set("Contents", Object::Reference(content_id));
    page.set("Label", Object::String(label.as_bytes().to_vec(), StringFormat::Literal));
    if own_attributes {
        page.set("MediaBox", media_box(612, 792));
        let resources = font_resources(doc);
        page.set("Resources", resources);
    }
    doc.add_object(page)
}

fn finish(mut doc: Document, pages_id: ObjectId, pages: Dictionary, path: &Path) {
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", name("Catalog"));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(path).expect("Failed to save fixture");
}

/// Labels `"{prefix}-0"`, `"{prefix}-1"`, ... for a fixture of `count` pages
pub fn labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}-{}", prefix, i)).collect()
}

/// Write a flat PDF with one page per label
pub fn write_pdf(dir: &Path, file_name: &str, labels: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = labels
        .iter()
        .map(|label| Object::Reference(add_page(&mut doc, pages_id, label, true)))
        .collect();

    let mut pages = Dictionary::new();
    pages.set("Type", name("Pages"));
    pages.set("Count", Object::Integer(kids.len() as i64));
    pages.set("Kids", Object::Array(kids));

    finish(doc, pages_id, pages, &path);
    path
}

/// Write a PDF whose pages sit in a two-level tree and inherit `MediaBox` and
/// `Resources` from the root `Pages` node
///
/// Labels are split into two intermediate nodes: the first `split_at` labels and the
/// rest.
pub fn write_nested_pdf(dir: &Path, file_name: &str, labels: &[String], split_at: usize) -> PathBuf {
    let path = dir.join(file_name);
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();

    let mut branches = Vec::new();
    for chunk in [&labels[..split_at], &labels[split_at..]] {
        let branch_id = doc.new_object_id();
        let kids: Vec<Object> = chunk
            .iter()
            .map(|label| Object::Reference(add_page(&mut doc, branch_id, label, false)))
            .collect();

        let mut branch = Dictionary::new();
        branch.set("Type", name("Pages"));
        branch.set("Parent", Object::Reference(root_id));
        branch.set("Count", Object::Integer(kids.len() as i64));
        branch.set("Kids", Object::Array(kids));
        doc.objects.insert(branch_id, Object::Dictionary(branch));
        branches.push(Object::Reference(branch_id));
    }

    let resources = font_resources(&mut doc);
    let mut root = Dictionary::new();
    root.set("Type", name("Pages"));
    root.set("Count", Object::Integer(labels.len() as i64));
    root.set("Kids", Object::Array(branches));
    root.set("MediaBox", media_box(420, 595));
    root.set("Resources", resources);

    finish(doc, root_id, root, &path);
    path
}

/// Page labels of the PDF at `path`, in page order
pub fn read_labels(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load output");
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).expect("Page is not a dictionary");
            let label = page.get(b"Label").and_then(Object::as_str).expect("Page has no label");
            String::from_utf8(label.to_vec()).expect("Label is not UTF-8")
        })
        .collect()
}

/// Page dictionaries of the PDF at `path`, in page order
pub fn read_pages(path: &Path) -> (Document, Vec<ObjectId>) {
    let doc = Document::load(path).expect("Failed to load output");
    let pages = doc.get_pages().into_values().collect();
    (doc, pages)
}
