/// Encoding and line-ending handling for file I/O.
use serde::{Deserialize, Serialize};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Supported text encodings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Ascii,
    /// A named encoding from `encoding_rs` (e.g., "windows-1252").
    Legacy(&'static str),
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Ascii => write!(f, "ASCII"),
            Self::Legacy(name) => write!(f, "{name}"),
        }
    }
}

impl TextEncoding {
    /// Resolves a configuration label such as `"utf-8"`, `"ascii"` or
    /// `"windows-1252"`. Matching is case-insensitive.
    ///
    /// Returns `None` for labels nobody knows, and for labels that
    /// `encoding_rs` maps to its write-only "replacement" encoding.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        // encoding_rs treats "ascii" as windows-1252, so claim it first.
        if trimmed.eq_ignore_ascii_case("ascii") || trimmed.eq_ignore_ascii_case("us-ascii") {
            return Some(Self::Ascii);
        }
        let encoding = encoding_rs::Encoding::for_label(trimmed.as_bytes())?;
        if encoding == encoding_rs::UTF_8 {
            Some(Self::Utf8)
        } else if encoding == encoding_rs::UTF_16LE {
            Some(Self::Utf16Le)
        } else if encoding == encoding_rs::UTF_16BE {
            Some(Self::Utf16Be)
        } else if encoding == encoding_rs::REPLACEMENT {
            None
        } else {
            Some(Self::Legacy(encoding.name()))
        }
    }

    /// Returns the canonical label, suitable for writing back to configuration.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Ascii => "ascii",
            Self::Legacy(name) => name,
        }
    }

    fn bom(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &UTF8_BOM,
            Self::Utf16Le => &UTF16LE_BOM,
            Self::Utf16Be => &UTF16BE_BOM,
            Self::Ascii | Self::Legacy(_) => &[],
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = crate::error::DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| crate::error::DocumentError::UnknownEncoding {
            label: s.to_string(),
        })
    }
}

/// Line ending format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\r\n` (Windows)
    CrLf,
    /// `\n` (Unix/macOS)
    Lf,
    /// `\r` (Classic Mac)
    Cr,
    /// No line break seen yet.
    #[default]
    Unknown,
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CrLf => write!(f, "Windows (CRLF)"),
            Self::Lf => write!(f, "Unix (LF)"),
            Self::Cr => write!(f, "Macintosh (CR)"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    ///
    /// `Unknown` has none and returns `"\n"`, the buffer's own separator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf | Self::Unknown => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Text decoded from raw file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Whether a byte-order mark for the encoding preceded the text.
    pub has_bom: bool,
}

/// Decodes raw bytes with the given encoding without any replacement.
///
/// A leading BOM that belongs to `encoding` is stripped and reported in
/// [`Decoded::has_bom`]. Returns `None` if the bytes are not valid.
pub fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> Option<Decoded> {
    let bom = encoding.bom();
    let has_bom = !bom.is_empty() && bytes.starts_with(bom);
    let content = if has_bom { &bytes[bom.len()..] } else { bytes };

    let text = match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(content).ok()?.to_string(),
        TextEncoding::Ascii => {
            if !content.is_ascii() {
                return None;
            }
            std::str::from_utf8(content).ok()?.to_string()
        }
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            if content.len() % 2 != 0 {
                return None;
            }
            let little = encoding == TextEncoding::Utf16Le;
            let u16s: Vec<u16> = content
                .chunks_exact(2)
                .map(|chunk| {
                    if little {
                        u16::from_le_bytes([chunk[0], chunk[1]])
                    } else {
                        u16::from_be_bytes([chunk[0], chunk[1]])
                    }
                })
                .collect();
            String::from_utf16(&u16s).ok()?
        }
        TextEncoding::Legacy(name) => {
            let encoding = encoding_rs::Encoding::for_label(name.as_bytes())?;
            encoding
                .decode_without_bom_handling_and_without_replacement(content)?
                .into_owned()
        }
    };

    Some(Decoded { text, has_bom })
}

/// Encodes a string with the given encoding, prefixing the BOM when asked.
///
/// Returns `None` if `text` holds characters the encoding cannot represent.
pub fn encode_string(text: &str, encoding: TextEncoding, with_bom: bool) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() + 3);
    if with_bom {
        bytes.extend_from_slice(encoding.bom());
    }
    match encoding {
        TextEncoding::Utf8 => bytes.extend_from_slice(text.as_bytes()),
        TextEncoding::Ascii => {
            if !text.is_ascii() {
                return None;
            }
            bytes.extend_from_slice(text.as_bytes());
        }
        TextEncoding::Utf16Le => {
            for code_unit in text.encode_utf16() {
                bytes.extend_from_slice(&code_unit.to_le_bytes());
            }
        }
        TextEncoding::Utf16Be => {
            for code_unit in text.encode_utf16() {
                bytes.extend_from_slice(&code_unit.to_be_bytes());
            }
        }
        TextEncoding::Legacy(name) => {
            let encoding = encoding_rs::Encoding::for_label(name.as_bytes())?;
            let (encoded, _, had_errors) = encoding.encode(text);
            if had_errors {
                return None;
            }
            bytes.extend_from_slice(&encoded);
        }
    }
    Some(bytes)
}

/// Guesses the encoding of bytes that failed to decode, for error messages.
pub fn guess_encoding(bytes: &[u8]) -> Option<TextEncoding> {
    if bytes.starts_with(&UTF16LE_BOM) {
        return Some(TextEncoding::Utf16Le);
    }
    if bytes.starts_with(&UTF16BE_BOM) {
        return Some(TextEncoding::Utf16Be);
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    TextEncoding::from_label(detector.guess(None, true).name())
}

/// Returns the prefix of `text` covering its first two lines, terminators included.
fn first_two_lines(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut breaks = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                breaks += 1;
            }
            b'\n' => breaks += 1,
            _ => {}
        }
        i += 1;
        if breaks == 2 {
            return &text[..i];
        }
    }
    text
}

/// Detects the line ending style from the first two lines of `text`.
///
/// `\r\n` wins over a bare `\n`, which wins over a bare `\r`.
pub fn detect_line_ending(text: &str) -> LineEnding {
    let head = first_two_lines(text);
    if head.contains("\r\n") {
        LineEnding::CrLf
    } else if head.contains('\n') {
        LineEnding::Lf
    } else if head.contains('\r') {
        LineEnding::Cr
    } else {
        LineEnding::Unknown
    }
}

/// Normalizes line endings to `\n` (LF).
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Converts all `\n` in the text to the specified line ending.
pub fn apply_line_ending(text: &str, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf | LineEnding::Unknown => text.to_string(),
        LineEnding::CrLf => text.replace('\n', "\r\n"),
        LineEnding::Cr => text.replace('\n', "\r"),
    }
}
