//! File operations for the editor application.
//!
//! Handles new, open, save (including save-as) and closing the document
//! with the unsaved-changes prompt. Failures are shown through the error
//! reporter; none of them stop the app.

use std::path::Path;

use mica_pad_core::{CloseOutcome, Document, SaveOutcome};

use super::App;

impl App {
    /// Runs the close protocol on the current document.
    /// Returns true if the document is now closed.
    pub(crate) fn close_document(&mut self) -> bool {
        let dialogs = &mut self.dialogs;
        match self
            .doc
            .close(dialogs.prompt.as_mut(), dialogs.picker.as_mut())
        {
            Ok(CloseOutcome::Closed) => true,
            Ok(CloseOutcome::Cancelled) => false,
            Err(e) => {
                dialogs.reporter.report(&e);
                false
            }
        }
    }

    /// Replaces the document with an empty one once the current one is closed.
    pub(crate) fn new_document(&mut self) {
        if self.close_document() {
            self.replace_document(Document::with_encoding(self.encoding));
        }
    }

    /// Asks for a file and opens it.
    pub(crate) fn open_document(&mut self) {
        let Some(path) = self.dialogs.picker.pick_open() else {
            return;
        };
        self.remember_folder(&path);
        self.open_path(&path);
    }

    /// Loads `path` into a fresh document and swaps it in once the current
    /// document is closed. Nothing changes if the file can't be read.
    pub(crate) fn open_path(&mut self, path: &Path) {
        let mut doc = Document::with_encoding(self.encoding);
        if let Err(e) = doc.open(path) {
            self.dialogs.reporter.report(&e);
            return;
        }
        if self.close_document() {
            tracing::info!("Opened '{}'", path.display());
            self.replace_document(doc);
        }
    }

    /// Saves the document, asking for a destination when it has none or
    /// when `save_as` is set.
    pub(crate) fn save_document(&mut self, save_as: bool) {
        match self.doc.save_with(self.dialogs.picker.as_mut(), save_as) {
            Ok(SaveOutcome::Saved(path)) => {
                tracing::info!("Saved '{}'", path.display());
                self.remember_folder(&path);
            }
            Ok(SaveOutcome::Cancelled) => {}
            Err(e) => self.dialogs.reporter.report(&e),
        }
    }

    fn replace_document(&mut self, doc: Document) {
        self.doc = doc;
        self.editor.reset();
    }

    fn remember_folder(&mut self, file_path: &Path) {
        if self.config.remember_folder_of(file_path) {
            self.persist_config();
        }
    }

    pub(crate) fn persist_config(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::warn!(
                "Failed to save config to {}: {e}",
                self.config_path.display()
            );
        }
    }
}
