//! File I/O operations for documents.
//!
//! Handles opening files from disk (decoding with the document's encoding
//! and detecting the line-ending style) and saving documents back to disk
//! atomically.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::encoding::{
    apply_line_ending, decode_bytes, detect_line_ending, encode_string, guess_encoding,
    normalize_line_endings,
};
use crate::error::DocumentError;

use super::{Document, DocumentState};

impl Document {
    /// Replaces the buffer with the contents of `path`.
    ///
    /// On failure the buffer, the file association and the modified flag are
    /// left exactly as they were.
    ///
    /// # Errors
    ///
    /// [`DocumentError::NotFound`] if `path` does not exist,
    /// [`DocumentError::Decode`] if its bytes are invalid under the
    /// document's encoding, [`DocumentError::PermissionDenied`] or
    /// [`DocumentError::Io`] if it can't be read.
    pub fn open(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.ensure_open()?;

        let bytes = std::fs::read(path).map_err(|e| DocumentError::from_io(path, e))?;

        let decoded = decode_bytes(&bytes, self.encoding).ok_or_else(|| DocumentError::Decode {
            path: path.to_path_buf(),
            encoding: self.encoding.to_string(),
            suggestion: guess_encoding(&bytes)
                .filter(|guess| *guess != self.encoding)
                .map(|guess| guess.to_string()),
        })?;

        let line_ending = detect_line_ending(&decoded.text);
        // Keep LF-only text when re-expanding reproduces the file exactly;
        // files with mixed endings stay verbatim.
        let normalized_text = normalize_line_endings(&decoded.text);
        let normalized = apply_line_ending(&normalized_text, line_ending) == decoded.text;
        let text = if normalized {
            normalized_text
        } else {
            decoded.text
        };

        *self.buffer.text_mut() = text;
        self.line_ending = line_ending;
        self.normalized = normalized;
        self.has_bom = decoded.has_bom;
        self.cursor = Default::default();
        self.modified = false;
        self.state = DocumentState::Loaded;
        self.last_saved_at = None;
        self.set_path(path);

        Ok(())
    }

    /// Saves the document to `path`, or to its own file path when `None`.
    ///
    /// The write is atomic: readers see either the previous file or the
    /// complete new content. On success the document is associated with
    /// the path it was saved to.
    ///
    /// # Errors
    ///
    /// [`DocumentError::NoPath`] when there is nowhere to save,
    /// [`DocumentError::Encode`] when the text doesn't fit the encoding,
    /// [`DocumentError::PermissionDenied`] when the destination is
    /// read-only or its directory can't be written. The modified flag
    /// stays set on every error.
    pub fn save(&mut self, path: Option<&Path>) -> Result<(), DocumentError> {
        self.ensure_open()?;

        let path: PathBuf = path
            .map(Path::to_path_buf)
            .or_else(|| self.file_path.clone())
            .ok_or(DocumentError::NoPath)?;

        let text = if self.normalized {
            apply_line_ending(self.buffer.text(), self.line_ending)
        } else {
            self.buffer.text().to_string()
        };
        let bytes =
            encode_string(&text, self.encoding, self.has_bom).ok_or_else(|| DocumentError::Encode {
                encoding: self.encoding.to_string(),
            })?;

        write_atomically(&path, &bytes)?;

        self.set_path(&path);
        self.modified = false;
        self.state = DocumentState::Saved;
        self.last_saved_at = Some(chrono::Local::now());

        Ok(())
    }
}

/// Writes `bytes` to a temporary file next to `path` and renames it over `path`.
///
/// An existing destination keeps its permissions; a read-only one is refused.
/// A symlinked destination is followed and its target replaced.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let io_err = |e: std::io::Error| DocumentError::from_io(path, e);

    // Write through symlinks to the file they point at, never over the link.
    let resolved = match std::fs::canonicalize(path) {
        Ok(target) => target,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(io_err(e)),
    };
    let target = resolved.as_path();

    let existing = match std::fs::metadata(target) {
        Ok(meta) => Some(meta),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(io_err(e)),
    };
    if let Some(meta) = &existing {
        if meta.is_dir() {
            return Err(io_err(std::io::Error::other("destination is a directory")));
        }
        if meta.permissions().readonly() {
            return Err(DocumentError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    if let Some(meta) = existing {
        std::fs::set_permissions(tmp.path(), meta.permissions()).map_err(io_err)?;
    }
    tmp.persist(target).map_err(|e| io_err(e.error))?;

    Ok(())
}
