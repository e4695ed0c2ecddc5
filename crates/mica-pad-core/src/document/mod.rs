//! Document model combining text buffer, cursor, and file metadata.
//!
//! A `Document` ties together a `TextBuffer`, the cursor position, the file
//! it belongs to, its encoding and line-ending style, and whether it has
//! unsaved changes. File I/O is in the `io` submodule; the operations that
//! need the user (picking a path, confirming a close) are in `interactive`.

mod interactive;
mod io;

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::cursor::CursorPosition;
use crate::encoding::{normalize_line_endings, LineEnding, TextEncoding};
use crate::error::DocumentError;

pub use interactive::{CloseOutcome, SaveOutcome};

/// Where a document is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentState {
    /// Fresh document, never loaded, saved or edited.
    #[default]
    Empty,
    /// Content matches the file it was opened from.
    Loaded,
    /// Content changed since the last load or save.
    Modified,
    /// Content matches the file it was last saved to.
    Saved,
    /// The document was closed; no further file operations are accepted.
    Closed,
}

/// A single document with its buffer, cursor, and file metadata.
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer.
    pub buffer: TextBuffer,
    /// File path on disk, if any.
    pub file_path: Option<PathBuf>,
    /// Display name for the window title.
    pub title: String,
    /// Timestamp of the last successful save to disk.
    pub last_saved_at: Option<chrono::DateTime<chrono::Local>>,
    cursor: CursorPosition,
    encoding: TextEncoding,
    line_ending: LineEnding,
    /// Whether the loaded file began with a BOM; it is written back on save.
    has_bom: bool,
    /// Whether `buffer` holds LF-only text that save expands to `line_ending`.
    normalized: bool,
    modified: bool,
    state: DocumentState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new empty UTF-8 document.
    pub fn new() -> Self {
        Self::with_encoding(TextEncoding::default())
    }

    /// Creates a new empty document that reads and writes files as `encoding`.
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            buffer: TextBuffer::new(),
            file_path: None,
            title: "Untitled".to_string(),
            last_saved_at: None,
            cursor: CursorPosition::default(),
            encoding,
            line_ending: LineEnding::Unknown,
            has_bom: false,
            normalized: false,
            modified: false,
            state: DocumentState::Empty,
        }
    }

    /// Whether the document has been modified since last load or save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    /// Records a new cursor position. Returns true if it differs from the
    /// previous one.
    ///
    /// Moving the cursor is not an edit: the modified flag is untouched.
    pub fn on_cursor_move(&mut self, position: CursorPosition) -> bool {
        let changed = self.cursor != position;
        self.cursor = position;
        changed
    }

    /// Records that the buffer content was edited.
    pub fn on_content_changed(&mut self) {
        if self.state == DocumentState::Closed {
            return;
        }
        self.modified = true;
        self.state = DocumentState::Modified;
    }

    /// Changes the encoding used by the next save.
    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        if encoding != self.encoding {
            self.encoding = encoding;
            self.on_content_changed();
        }
    }

    /// Changes the line-ending style used by the next save.
    ///
    /// Any line breaks already in the buffer are converted to the new style.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        if line_ending == self.line_ending && (self.normalized || line_ending == LineEnding::Unknown)
        {
            return;
        }
        if !self.normalized {
            let text = normalize_line_endings(self.buffer.text());
            *self.buffer.text_mut() = text;
        }
        self.normalized = line_ending != LineEnding::Unknown;
        self.line_ending = line_ending;
        self.on_content_changed();
    }

    /// Fails with [`DocumentError::Closed`] once the document is closed.
    fn ensure_open(&self) -> Result<(), DocumentError> {
        if self.state == DocumentState::Closed {
            Err(DocumentError::Closed)
        } else {
            Ok(())
        }
    }

    fn set_path(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
    }
}
