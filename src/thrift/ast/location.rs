//! Position and location tracking for thrift sources
//!
//! This module defines the data structures for positions and spans in a thrift file, and the
//! arithmetic that derives a span's end from its start and the exact text it matched.
//!
//! ## Types
//!
//! - [`Position`] - A line:column position, plus the byte offset of that position
//! - [`Location`] - A half-open `[start, end)` span between two positions
//! - [`Cursor`] - Threads span computation across consecutive pieces of matched text
//! - [`SourceMap`] - Converts byte offsets of a source text to positions and back
//!
//! ## Units
//!
//! Lines and columns are 1-based. Columns count runes (Unicode scalar values), offsets count
//! bytes. The two units are never interchangeable: `"é"` advances the column by one and the
//! offset by two.
//!
//! Ordering and equality only look at `(line, column)`. The byte offset is carried along for
//! consumers that need to apply text edits.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A position in a thrift source
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number
    pub line: isize,
    /// 1-based rune count from the start of the line
    pub column: isize,
    /// 0-based byte offset from the start of the source
    pub offset: isize,
}

impl Position {
    /// The first character of a source.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Sentinel for "no position".
    pub const INVALID: Position = Position {
        line: -1,
        column: -1,
        offset: -1,
    };

    pub fn new(line: isize, column: isize, offset: isize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.line < 1 || self.column < 1 || self.offset < 0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.line.hash(state);
        self.column.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open span of source text: `start` is the first character, `end` the position
/// immediately after the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Degenerate span used for synthetic or missing tokens.
    pub fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Compute the span that `text` occupies when it starts at `start`.
    ///
    /// A single-line match moves the column by its rune count. A match that crosses lines
    /// ends on `start.line + newlines`, at the rune count of the text after the last newline
    /// plus one. The offset always moves by the byte length.
    pub fn compute(start: Position, text: &str) -> Self {
        let offset = start.offset + text.len() as isize;
        let end = match text.rfind('\n') {
            None => Position::new(
                start.line,
                start.column + text.chars().count() as isize,
                offset,
            ),
            Some(last_newline) => {
                let newlines = text.bytes().filter(|b| *b == b'\n').count() as isize;
                let tail = &text[last_newline + 1..];
                Position::new(
                    start.line + newlines,
                    tail.chars().count() as isize + 1,
                    offset,
                )
            }
        };
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True iff `start <= pos < end`.
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && self.end > pos
    }

    /// Whether the two half-open spans share at least one position.
    pub fn overlaps(&self, other: &Location) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(&self, other: &Location) -> Location {
        Location {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Build a bounding box that contains all provided locations.
    pub fn bounding_box<'a, I>(mut locations: I) -> Option<Location>
    where
        I: Iterator<Item = &'a Location>,
    {
        let first = *locations.next()?;
        Some(locations.fold(first, |acc, location| acc.cover(location)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// `contains` for an optional location; an absent location contains nothing.
pub fn contains(location: Option<&Location>, pos: Position) -> bool {
    location.is_some_and(|location| location.contains(pos))
}

/// Produces consecutive locations from the text a scanner matches, one piece after another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::at(Position::START)
    }

    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Consume `text` and return the span it occupied.
    pub fn advance(&mut self, text: &str) -> Location {
        let location = Location::compute(self.position, text);
        self.position = location.end;
        location
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts between byte offsets and positions of one source text
pub struct SourceMap<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Position of the character starting at `offset`. `None` past the end of the source or
    /// inside a multi-byte character.
    pub fn position_at(&self, offset: usize) -> Option<Position> {
        if offset > self.source.len() || !self.source.is_char_boundary(offset) {
            return None;
        }
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();
        Some(Position::new(
            line as isize + 1,
            column as isize + 1,
            offset as isize,
        ))
    }

    /// Byte offset of a line:column position. The column may point one past the last
    /// character of the line.
    pub fn offset_of(&self, line: isize, column: isize) -> Option<usize> {
        if line < 1 || column < 1 {
            return None;
        }
        let line_start = *self.line_starts.get(line as usize - 1)?;
        let line_text = self.source[line_start..]
            .split('\n')
            .next()
            .unwrap_or_default();
        let wanted = column as usize - 1;
        if wanted == line_text.chars().count() {
            return Some(line_start + line_text.len());
        }
        line_text
            .char_indices()
            .nth(wanted)
            .map(|(byte, _)| line_start + byte)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
