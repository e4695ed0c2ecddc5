//! Interfaces to the user-facing collaborators the document needs:
//! file selection, the unsaved-changes question, and error display.
//!
//! The UI crate implements these with native dialogs; tests script them.

use std::path::PathBuf;

use crate::error::DocumentError;

/// A named file-type filter for open/save dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the leading dot; `"*"` matches anything.
    pub extensions: &'static [&'static str],
}

/// Filters offered by every file dialog, in order.
pub const TEXT_FILE_FILTERS: [FileFilter; 2] = [
    FileFilter {
        name: "Text file",
        extensions: &["txt"],
    },
    FileFilter {
        name: "Any file",
        extensions: &["*"],
    },
];

/// Answer to "save changes before closing?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Save, then close.
    Yes,
    /// Close without saving.
    No,
    /// Keep the document open.
    Cancel,
}

/// Supplies file paths chosen by the user. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_open(&mut self) -> Option<PathBuf>;
    fn pick_save(&mut self, suggested_name: &str) -> Option<PathBuf>;
}

/// Asks whether unsaved changes to `title` should be saved.
pub trait UnsavedChangesPrompt {
    fn confirm_unsaved(&mut self, title: &str) -> ConfirmChoice;
}

/// Shows a failed operation to the user.
pub trait ErrorReporter {
    fn report(&mut self, error: &DocumentError);
}
