//! Typed errors for document operations.
//!
//! Every variant carries enough context to be shown to the user as-is; the
//! UI layer decides how (message box, log line) and never retries on its own.

use std::path::PathBuf;

/// Errors produced by [`Document`](crate::document::Document) operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The path to open does not exist.
    #[error("Error, file not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// The file bytes are not valid under the configured encoding.
    #[error("Error, can not decode '{}' as {encoding}{}", .path.display(), suggestion_suffix(.suggestion))]
    Decode {
        path: PathBuf,
        encoding: String,
        /// Best guess at the file's real encoding, if one could be made.
        suggestion: Option<String>,
    },

    /// The filesystem refused access to the path.
    #[error("Error, permission denied: '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The buffer contains characters the target encoding cannot represent.
    #[error("Error, the text can not be encoded as {encoding}")]
    Encode { encoding: String },

    /// Save was requested but neither an explicit nor a stored path exists.
    #[error("no destination path: choose where to save first")]
    NoPath,

    /// The document has already been closed.
    #[error("the document is closed")]
    Closed,

    /// An encoding label that neither the built-in encodings nor `encoding_rs` know.
    #[error("unknown encoding: '{label}'")]
    UnknownEncoding { label: String },

    /// Any other I/O failure.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (it looks like {name})"),
        None => String::new(),
    }
}

impl DocumentError {
    /// Maps an I/O error on `path` to the matching variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
