//! Native dialogs backed by `rfd`: file pickers, the unsaved-changes
//! question, and error message boxes.
//!
//! [`Dialogs`] bundles one implementation of each collaborator trait the
//! document needs, so tests can swap in scripted ones.

use std::path::{Path, PathBuf};

use mica_pad_core::dialogs::TEXT_FILE_FILTERS;
use mica_pad_core::{ConfirmChoice, DocumentError, ErrorReporter, FilePicker, UnsavedChangesPrompt};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Title of every message box.
const APP_NAME: &str = "Notepad";

/// The set of user-facing collaborators the app talks to.
pub struct Dialogs {
    pub picker: Box<dyn FilePicker>,
    pub prompt: Box<dyn UnsavedChangesPrompt>,
    pub reporter: Box<dyn ErrorReporter>,
}

impl Dialogs {
    /// Native dialogs; file pickers start in `start_folder` when given.
    pub fn native(start_folder: Option<PathBuf>) -> Self {
        Self {
            picker: Box::new(NativeFilePicker::new(start_folder)),
            prompt: Box::new(NativePrompt),
            reporter: Box::new(NativeErrorReporter),
        }
    }
}

/// `rfd` open/save dialogs that remember the folder of the last pick.
#[derive(Debug, Default)]
pub struct NativeFilePicker {
    folder: Option<PathBuf>,
}

impl NativeFilePicker {
    pub fn new(start_folder: Option<PathBuf>) -> Self {
        Self {
            folder: start_folder,
        }
    }

    fn dialog(&self, title: &str) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new().set_title(title);
        for filter in TEXT_FILE_FILTERS {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        if let Some(dir) = self.folder.as_deref().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    fn picked(&mut self, path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(parent) = path.as_deref().and_then(Path::parent) {
            self.folder = Some(parent.to_path_buf());
        }
        path
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_open(&mut self) -> Option<PathBuf> {
        let path = self.dialog("Open").pick_file();
        self.picked(path)
    }

    fn pick_save(&mut self, suggested_name: &str) -> Option<PathBuf> {
        let path = self
            .dialog("Save As")
            .set_file_name(suggested_file_name(suggested_name))
            .save_file();
        self.picked(path)
    }
}

/// Untitled documents are offered as `.txt` files.
fn suggested_file_name(title: &str) -> String {
    if Path::new(title).extension().is_some() {
        title.to_string()
    } else {
        format!("{title}.txt")
    }
}

/// Yes/No/Cancel message box.
#[derive(Debug, Default)]
pub struct NativePrompt;

impl UnsavedChangesPrompt for NativePrompt {
    fn confirm_unsaved(&mut self, title: &str) -> ConfirmChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(APP_NAME)
            .set_description(format!("Do you want to save changes to {title}?"))
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match result {
            MessageDialogResult::Yes => ConfirmChoice::Yes,
            MessageDialogResult::No => ConfirmChoice::No,
            _ => ConfirmChoice::Cancel,
        }
    }
}

/// Logs the error and shows it in a message box.
#[derive(Debug, Default)]
pub struct NativeErrorReporter;

impl ErrorReporter for NativeErrorReporter {
    fn report(&mut self, error: &DocumentError) {
        tracing::error!("{error}");
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(APP_NAME)
            .set_description(error.to_string())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
