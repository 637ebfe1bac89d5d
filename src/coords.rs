//! Coordinate structure used to reference specific locations within parser input

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single location within the parser input
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coords {
    /// The absolute character position
    pub absolute: usize,
    /// The row position
    pub line: usize,
    /// The column position
    pub column: usize,
}

impl Coords {
    /// Move the coordinates forward over a single character. A newline resets the
    /// column and bumps the line count, anything else just bumps the column.
    pub(crate) fn advance(&mut self, ch: char) {
        self.absolute += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

impl Default for Coords {
    /// The default set of coordinates are positioned at the start of the first row
    fn default() -> Self {
        Coords {
            absolute: 0,
            line: 0,
            column: 0,
        }
    }
}

impl Eq for Coords {}

impl PartialOrd<Self> for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::Coords;

    #[test]
    fn should_track_lines_and_columns() {
        let mut coords = Coords::default();
        for ch in "ab\ncd".chars() {
            coords.advance(ch);
        }
        assert_eq!(coords.absolute, 5);
        assert_eq!(coords.line, 1);
        assert_eq!(coords.column, 2);
    }

    #[test]
    fn should_order_by_absolute_position() {
        let mut a = Coords::default();
        let mut b = Coords::default();
        a.advance('x');
        b.advance('\n');
        b.advance('y');
        assert!(a < b);
    }
}
