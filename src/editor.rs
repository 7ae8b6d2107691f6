//! Editor holding the active page operation

use std::fmt;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::Result;
use crate::operation::Operation;

/// Runs whichever [`Operation`] it currently holds
///
/// The operation can be swapped at any time; the next call to
/// [`execute_operation`](Editor::execute_operation) uses the new one. An editor is not
/// meant to be driven from several threads at once: give each task its own editor or
/// lock around it.
///
/// # Example
///
/// ```no_run
/// use pdf_editor::{Editor, Merge, Split};
/// use std::path::{Path, PathBuf};
///
/// let mut editor = Editor::new(Merge);
/// editor
///     .execute_operation(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")], Path::new("ab.pdf"))
///     .expect("Failed to merge");
///
/// editor.set_operation(Split::new(0, Some(3)));
/// editor
///     .execute_operation(&[PathBuf::from("ab.pdf")], Path::new("first-three.pdf"))
///     .expect("Failed to split");
/// ```
pub struct Editor {
    operation: Box<dyn Operation>,
}

impl Editor {
    pub fn new(operation: impl Operation + 'static) -> Self {
        Self::from_boxed(Box::new(operation))
    }

    pub fn from_boxed(operation: Box<dyn Operation>) -> Self {
        Self { operation }
    }

    /// The operation the next execution will use
    pub fn operation(&self) -> &dyn Operation {
        self.operation.as_ref()
    }

    /// Replace the current operation; the old one is dropped
    pub fn set_operation(&mut self, operation: impl Operation + 'static) {
        self.set_boxed_operation(Box::new(operation));
    }

    pub fn set_boxed_operation(&mut self, operation: Box<dyn Operation>) {
        debug!("Switching operation {} -> {}", self.operation.name(), operation.name());
        self.operation = operation;
    }

    /// Forward to the current operation unchanged
    pub fn execute_operation(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        debug!("Executing {} with {} input(s)", self.operation.name(), inputs.len());
        self.operation.execute(inputs, output)
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("operation", &self.operation.name())
            .finish()
    }
}
