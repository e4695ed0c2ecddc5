//! Document operations that involve the user: choosing paths and deciding
//! what happens to unsaved changes on close.

use std::path::PathBuf;

use crate::dialogs::{ConfirmChoice, FilePicker, UnsavedChangesPrompt};
use crate::error::DocumentError;

use super::{Document, DocumentState};

/// Result of a save that may have asked the user for a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user dismissed the destination dialog; nothing was written.
    Cancelled,
}

/// Result of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// The user chose to keep the document open.
    Cancelled,
}

impl Document {
    /// Asks for a file and opens it. Returns `Ok(None)` if the user cancelled.
    ///
    /// # Errors
    ///
    /// Same as [`Document::open`].
    pub fn open_with(&mut self, picker: &mut dyn FilePicker) -> Result<Option<PathBuf>, DocumentError> {
        self.ensure_open()?;
        let Some(path) = picker.pick_open() else {
            return Ok(None);
        };
        self.open(&path)?;
        Ok(Some(path))
    }

    /// Saves to the document's own path, asking for one if there is none
    /// or if `save_as` is set.
    ///
    /// # Errors
    ///
    /// Same as [`Document::save`].
    pub fn save_with(
        &mut self,
        picker: &mut dyn FilePicker,
        save_as: bool,
    ) -> Result<SaveOutcome, DocumentError> {
        self.ensure_open()?;
        let path = match (&self.file_path, save_as) {
            (Some(path), false) => path.clone(),
            _ => match picker.pick_save(&self.title) {
                Some(path) => path,
                None => return Ok(SaveOutcome::Cancelled),
            },
        };
        self.save(Some(&path))?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Closes the document.
    ///
    /// A clean document closes without asking. A modified one asks `prompt`:
    /// `Yes` saves first (asking `picker` for a destination if needed) and
    /// only closes if that save went through, `No` discards the changes,
    /// `Cancel` keeps the document open.
    ///
    /// # Errors
    ///
    /// The save error when save-then-close fails; the document stays open.
    pub fn close(
        &mut self,
        prompt: &mut dyn UnsavedChangesPrompt,
        picker: &mut dyn FilePicker,
    ) -> Result<CloseOutcome, DocumentError> {
        if self.state == DocumentState::Closed {
            return Ok(CloseOutcome::Closed);
        }

        if self.modified {
            match prompt.confirm_unsaved(&self.title) {
                ConfirmChoice::Cancel => return Ok(CloseOutcome::Cancelled),
                ConfirmChoice::No => {}
                ConfirmChoice::Yes => {
                    if self.save_with(picker, false)? == SaveOutcome::Cancelled {
                        return Ok(CloseOutcome::Cancelled);
                    }
                }
            }
        }

        self.state = DocumentState::Closed;
        Ok(CloseOutcome::Closed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[derive(Default)]
    struct Script {
        open: Option<PathBuf>,
        save: Option<PathBuf>,
        answer: Option<ConfirmChoice>,
        prompts: usize,
        save_picks: usize,
    }

    impl FilePicker for Script {
        fn pick_open(&mut self) -> Option<PathBuf> {
            self.open.clone()
        }

        fn pick_save(&mut self, _suggested_name: &str) -> Option<PathBuf> {
            self.save_picks += 1;
            self.save.clone()
        }
    }

    impl UnsavedChangesPrompt for Script {
        fn confirm_unsaved(&mut self, _title: &str) -> ConfirmChoice {
            self.prompts += 1;
            self.answer.expect("unexpected prompt")
        }
    }

    fn close(doc: &mut Document, script: &mut Script) -> Result<CloseOutcome, DocumentError> {
        let mut picker = Script {
            open: script.open.clone(),
            save: script.save.clone(),
            ..Default::default()
        };
        let outcome = doc.close(script, &mut picker);
        script.save_picks += picker.save_picks;
        outcome
    }

    fn edited() -> Document {
        let mut doc = Document::new();
        doc.buffer.text_mut().push_str("draft");
        doc.on_content_changed();
        doc
    }

    #[test]
    fn test_close_clean_never_prompts() {
        let mut doc = Document::new();
        let mut script = Script::default();
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Closed);
        assert_eq!(script.prompts, 0);
        assert_eq!(doc.state(), DocumentState::Closed);
    }

    #[test]
    fn test_close_cancel_keeps_document() {
        let mut doc = edited();
        let mut script = Script {
            answer: Some(ConfirmChoice::Cancel),
            ..Default::default()
        };
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Cancelled);
        assert_eq!(doc.state(), DocumentState::Modified);
        assert!(doc.is_modified());
    }

    #[test]
    fn test_close_discard() {
        let mut doc = edited();
        let mut script = Script {
            answer: Some(ConfirmChoice::No),
            ..Default::default()
        };
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Closed);
        assert_eq!(script.save_picks, 0);
    }

    #[test]
    fn test_close_save_then_close_asks_for_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        let mut doc = edited();
        let mut script = Script {
            answer: Some(ConfirmChoice::Yes),
            save: Some(path.clone()),
            ..Default::default()
        };
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Closed);
        assert_eq!(script.save_picks, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft");
    }

    #[test]
    fn test_close_save_dialog_cancelled_aborts_close() {
        let mut doc = edited();
        let mut script = Script {
            answer: Some(ConfirmChoice::Yes),
            save: None,
            ..Default::default()
        };
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Cancelled);
        assert_ne!(doc.state(), DocumentState::Closed);
    }

    #[test]
    fn test_close_save_failure_aborts_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = edited();
        let mut script = Script {
            answer: Some(ConfirmChoice::Yes),
            // A directory can't be overwritten by a file.
            save: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(close(&mut doc, &mut script).is_err());
        assert_eq!(doc.state(), DocumentState::Modified);
        assert!(doc.is_modified());
    }

    #[test]
    fn test_closed_document_rejects_file_operations() {
        let mut doc = Document::new();
        let mut script = Script::default();
        close(&mut doc, &mut script).unwrap();
        assert!(matches!(
            doc.open(Path::new("whatever.txt")),
            Err(DocumentError::Closed)
        ));
        assert!(matches!(doc.save(None), Err(DocumentError::Closed)));
        // Closing twice is harmless.
        assert_eq!(close(&mut doc, &mut script).unwrap(), CloseOutcome::Closed);
    }

    #[test]
    fn test_open_with_cancelled() {
        let mut doc = Document::new();
        let mut script = Script::default();
        assert_eq!(doc.open_with(&mut script).unwrap(), None);
        assert_eq!(doc.state(), DocumentState::Empty);
    }

    #[test]
    fn test_open_with_picked_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello").unwrap();
        let mut doc = Document::new();
        let mut script = Script {
            open: Some(path.clone()),
            ..Default::default()
        };
        assert_eq!(doc.open_with(&mut script).unwrap(), Some(path));
        assert_eq!(doc.buffer.text(), "hello");
    }

    #[test]
    fn test_save_with_existing_path_skips_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut doc = edited();
        doc.save(Some(&path)).unwrap();
        doc.on_content_changed();

        let mut script = Script::default();
        assert_eq!(
            doc.save_with(&mut script, false).unwrap(),
            SaveOutcome::Saved(path)
        );
        assert_eq!(script.save_picks, 0);
    }

    #[test]
    fn test_save_as_always_asks() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");
        let mut doc = edited();
        doc.save(Some(&first)).unwrap();

        let mut script = Script {
            save: Some(second.clone()),
            ..Default::default()
        };
        assert_eq!(
            doc.save_with(&mut script, true).unwrap(),
            SaveOutcome::Saved(second.clone())
        );
        assert_eq!(doc.file_path, Some(second));
        assert_eq!(doc.title, "b.txt");
    }
}
