pub mod buffer;
pub mod commands;
pub mod cursor;
pub mod dialogs;
pub mod document;
pub mod encoding;
pub mod error;
pub mod scroll;

pub use buffer::TextBuffer;
pub use commands::{BindingError, Command, CommandTable, Shortcut};
pub use cursor::CursorPosition;
pub use dialogs::{ConfirmChoice, ErrorReporter, FileFilter, FilePicker, UnsavedChangesPrompt};
pub use document::{CloseOutcome, Document, DocumentState, SaveOutcome};
pub use encoding::{LineEnding, TextEncoding};
pub use error::DocumentError;
pub use scroll::{AutoHideScrollIndicator, ScrollRangeListener, ScrollState};
