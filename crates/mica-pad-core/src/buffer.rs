/// Text buffer holding the editable document content.
use std::fmt;

use crate::cursor::CursorPosition;

/// A plain-string text buffer.
///
/// The view edits the string in place (see [`TextBuffer::text_mut`]); whoever
/// does so reports the change to the owning document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TextBuffer {
    /// Creates an empty text buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the whole content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the view layer's text widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Returns the total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the total number of bytes in the buffer.
    pub fn len_bytes(&self) -> usize {
        self.text.len()
    }

    /// Returns the number of lines; an empty buffer has one.
    pub fn len_lines(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Converts a char index into a cursor position (1-based line, 0-based column).
    ///
    /// Indices past the end clamp to the end of the buffer. The `\r` of a
    /// `\r\n` pair (kept in files with mixed line endings) takes no column.
    pub fn position_at(&self, char_idx: usize) -> CursorPosition {
        let mut line = 1;
        let mut column = 0;
        let mut chars = self.text.chars().take(char_idx).peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    line += 1;
                    column = 0;
                }
                '\r' if chars.peek() == Some(&'\n') => {}
                _ => column += 1,
            }
        }
        CursorPosition { line, column }
    }
}
