use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use egui_kittest::Harness;
use mica_pad_config::ThemeChoice;
use mica_pad_core::{ConfirmChoice, DocumentError, ErrorReporter, FilePicker, UnsavedChangesPrompt};
use mica_pad_ui::{App, Dialogs, StartupArgs};
use tempfile::TempDir;

/// What the scripted dialogs answer, and what they were asked.
#[derive(Debug, Default)]
pub struct Script {
    /// Answers for open dialogs; an empty queue means cancel.
    pub open_paths: VecDeque<PathBuf>,
    /// Answers for save dialogs; an empty queue means cancel.
    pub save_paths: VecDeque<PathBuf>,
    /// Answers for the unsaved-changes prompt; an empty queue means cancel.
    pub choices: VecDeque<ConfirmChoice>,
    /// Titles the unsaved-changes prompt was shown for.
    pub prompts: Vec<String>,
    /// Reported errors, as displayed.
    pub errors: Vec<String>,
}

#[derive(Clone)]
struct Scripted(Rc<RefCell<Script>>);

impl FilePicker for Scripted {
    fn pick_open(&mut self) -> Option<PathBuf> {
        self.0.borrow_mut().open_paths.pop_front()
    }

    fn pick_save(&mut self, _suggested_name: &str) -> Option<PathBuf> {
        self.0.borrow_mut().save_paths.pop_front()
    }
}

impl UnsavedChangesPrompt for Scripted {
    fn confirm_unsaved(&mut self, title: &str) -> ConfirmChoice {
        let mut script = self.0.borrow_mut();
        script.prompts.push(title.to_string());
        script.choices.pop_front().unwrap_or(ConfirmChoice::Cancel)
    }
}

impl ErrorReporter for Scripted {
    fn report(&mut self, error: &DocumentError) {
        self.0.borrow_mut().errors.push(error.to_string());
    }
}

/// An app under test with scripted dialogs and a private config file.
pub struct TestApp {
    pub harness: Harness<'static, App>,
    pub script: Rc<RefCell<Script>>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("mica-pad.json")
    }

    /// Writes `content` to a file in the test directory and returns its path.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        write_file(self.dir.path(), name, content)
    }

    pub fn errors(&self) -> Vec<String> {
        self.script.borrow().errors.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.script.borrow().prompts.clone()
    }

    /// Types into the document as if the editor had received `text`.
    pub fn edit(&mut self, text: &str) {
        let app = self.harness.state_mut();
        app.doc.buffer.text_mut().push_str(text);
        app.doc.on_content_changed();
    }
}

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Creates a standard test harness with the app at 1024x768 and a dark theme.
pub fn create_app() -> TestApp {
    create_app_with(|_| StartupArgs::default())
}

/// Like [`create_app`]; `setup` gets the test directory (for files or a
/// config to put there before start-up) and returns the startup arguments.
pub fn create_app_with(setup: impl FnOnce(&Path) -> StartupArgs) -> TestApp {
    let dir = TempDir::new().unwrap();
    let mut args = setup(dir.path());
    args.config_path = Some(dir.path().join("mica-pad.json"));
    args.theme.get_or_insert(ThemeChoice::Dark);

    let script = Rc::new(RefCell::new(Script::default()));
    let scripted = Scripted(Rc::clone(&script));
    let dialogs = Dialogs {
        picker: Box::new(scripted.clone()),
        prompt: Box::new(scripted.clone()),
        reporter: Box::new(scripted),
    };

    let harness = Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| App::with_dialogs(cc, args, dialogs));

    TestApp {
        harness,
        script,
        dir,
    }
}
