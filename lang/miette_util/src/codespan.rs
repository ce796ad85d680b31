use std::fmt;

/// The raw, untyped index. We use a 32-bit integer here for space efficiency,
/// assuming we won't be working with sources larger than 4GB.
pub type RawIndex = u32;

/// A byte position in a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteIndex(pub RawIndex);

impl ByteIndex {
    /// Convert the position into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ByteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A 1-indexed line number. Useful for pretty printing source locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineNumber(RawIndex);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A zero-indexed line offset into a source file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIndex(pub RawIndex);

impl LineIndex {
    /// The 1-indexed line number. Useful for pretty printing source locations.
    ///
    /// ```rust
    /// use interop_miette_util::codespan::{LineIndex, LineNumber};
    ///
    /// assert_eq!(format!("{}", LineIndex(0).number()), "1");
    /// assert_eq!(format!("{}", LineIndex(3).number()), "4");
    /// ```
    pub const fn number(self) -> LineNumber {
        LineNumber(self.0 + 1)
    }

    /// Convert the index into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A 1-indexed column number. Useful for pretty printing source locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnNumber(RawIndex);

impl fmt::Display for ColumnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A zero-indexed column offset into a source file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnIndex(pub RawIndex);

impl ColumnIndex {
    /// The 1-indexed column number. Useful for pretty printing source locations.
    ///
    /// ```rust
    /// use interop_miette_util::codespan::{ColumnIndex, ColumnNumber};
    ///
    /// assert_eq!(format!("{}", ColumnIndex(0).number()), "1");
    /// assert_eq!(format!("{}", ColumnIndex(3).number()), "4");
    /// ```
    pub const fn number(self) -> ColumnNumber {
        ColumnNumber(self.0 + 1)
    }

    /// Convert the index into a `usize`, for use in array indexing
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A location in a source file: the byte offset together with the line and
/// column it falls on. Lines and columns are zero-indexed; columns count
/// characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub offset: ByteIndex,
    pub line: LineIndex,
    pub column: ColumnIndex,
}

impl Loc {
    /// Advance the location past `ch`.
    pub fn advance(&mut self, ch: char) {
        self.offset = ByteIndex(self.offset.0 + ch.len_utf8() as RawIndex);
        if ch == '\n' {
            self.line = LineIndex(self.line.0 + 1);
            self.column = ColumnIndex(0);
        } else {
            self.column = ColumnIndex(self.column.0 + 1);
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line.number(), self.column.number())
    }
}

/// A span between two locations in a source file.
/// The start of the span is inclusive, the end is exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    start: Loc,
    end: Loc,
}

impl Span {
    /// Create a new span from a starting and ending location.
    pub fn new(start: Loc, end: Loc) -> Span {
        assert!(end.offset >= start.offset);

        Span { start, end }
    }

    /// Combine two spans by taking the start of the earlier span
    /// and the end of the later span.
    ///
    /// Note: this will work even if the two spans are disjoint.
    ///
    /// ```rust
    /// use interop_miette_util::codespan::{Loc, Span};
    ///
    /// let span1 = Span::new(Loc::default(), Loc::default());
    /// assert_eq!(span1.merge(span1), span1);
    /// ```
    pub fn merge(self, other: Span) -> Span {
        use std::cmp::{max, min};

        let start = min(self.start, other.start);
        let end = max(self.end, other.end);
        Span::new(start, end)
    }

    /// Get the starting location.
    pub fn start(self) -> Loc {
        self.start
    }

    /// Get the ending location.
    pub fn end(self) -> Loc {
        self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{start}, {end})", start = self.start, end = self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn loc(offset: RawIndex, line: RawIndex, column: RawIndex) -> Loc {
        Loc { offset: ByteIndex(offset), line: LineIndex(line), column: ColumnIndex(column) }
    }

    fn span(start: RawIndex, end: RawIndex) -> Span {
        Span::new(loc(start, 0, start), loc(end, 0, end))
    }

    #[test]
    fn test_merge() {
        // overlap
        let a = span(1, 5);
        let b = span(3, 10);
        assert_eq!(a.merge(b), span(1, 10));
        assert_eq!(b.merge(a), span(1, 10));

        // subset
        let two_four = span(2, 4);
        assert_eq!(a.merge(two_four), span(1, 5));
        assert_eq!(two_four.merge(a), span(1, 5));

        // disjoint
        let ten_twenty = span(10, 20);
        assert_eq!(a.merge(ten_twenty), span(1, 20));
        assert_eq!(ten_twenty.merge(a), span(1, 20));

        // identity
        assert_eq!(a.merge(a), a);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Loc::default();
        for ch in "ab\ncd".chars() {
            cursor.advance(ch);
        }
        assert_eq!(cursor, loc(5, 1, 2));
    }

    #[test]
    fn test_advance_multibyte() {
        let mut cursor = Loc::default();
        cursor.advance('ß');
        assert_eq!(cursor, loc(2, 0, 1));
    }
}
