/// Cursor position as shown in the status bar.
use std::fmt;

/// Represents a position in the text as line and column.
///
/// Lines count from 1, columns from 0; the column is *reported* 1-based
/// (see [`CursorPosition::display_column`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// 1-indexed line number.
    pub line: usize,
    /// 0-indexed column (char offset within the line).
    pub column: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl CursorPosition {
    /// Creates a position, lifting a zero line to 1.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: line.max(1),
            column,
        }
    }

    /// The column as the user sees it.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

impl PartialOrd for CursorPosition {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CursorPosition {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line.cmp(&other.line).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.display_column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_line_first_column() {
        let pos = CursorPosition::default();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.to_string(), "Ln 1, Col 1");
    }

    #[test]
    fn test_display_column_is_one_based() {
        for line in 1..5 {
            for column in 0..50 {
                let pos = CursorPosition::new(line, column);
                assert_eq!(pos.display_column(), column + 1);
            }
        }
    }

    #[test]
    fn test_zero_line_lifted() {
        assert_eq!(CursorPosition::new(0, 3).line, 1);
    }

    #[test]
    fn test_ordering() {
        assert!(CursorPosition::new(1, 9) < CursorPosition::new(2, 0));
        assert!(CursorPosition::new(3, 1) < CursorPosition::new(3, 2));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(CursorPosition::new(12, 4).to_string(), "Ln 12, Col 5");
    }
}
