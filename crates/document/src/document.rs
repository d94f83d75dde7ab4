// Chunk: docs/chunks/document_model - Master document data structure

//! The master document: ordered lines with insert/delete splicing.

use std::sync::Arc;

use crate::line::Line;
use crate::location::{DocumentLocation, DocumentRange};
use crate::symbol::Symbol;

/// Lines of text with an implied terminator between (never after) them.
///
/// A document always has at least one line: zero lines and one empty line
/// are defined to be the same state, which removes a whole class of
/// boundary bugs.
///
/// The line list is shared (`Arc`), and lines themselves share their symbol
/// storage, so a document snapshot costs O(lines touched) to produce, not
/// O(document size). There is no mutation API; [`Document::insert`] and
/// [`Document::delete`] return new documents along with a report of exactly
/// which lines changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Arc<[Line]>,
    /// Maximum symbols allowed on any single line. Inserts that would
    /// violate it are refused without mutating.
    max_line_len: Option<usize>,
}

/// What an insert did.
///
/// `range` spans from the insertion point to the location immediately after
/// the inserted text, in master coordinates. `line_change` is the range of
/// master line indices that were replaced, so display layers can re-derive
/// only those lines. A refused insert has `changed == false` and carries
/// the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub document: Document,
    pub range: DocumentRange,
    pub line_change: std::ops::Range<usize>,
    pub changed: bool,
}

/// What a delete did.
///
/// `cut` always equals the start of the deleted range. `lines_removed` is
/// how many fewer lines the new document has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub document: Document,
    pub cut: DocumentLocation,
    pub lines_removed: usize,
}

impl Document {
    /// Builds a document of plain symbols from flat text.
    ///
    /// Splits on `'\n'`. The empty string produces one empty line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Line> = text.split('\n').map(Line::from_text).collect();
        Self::from_lines(lines)
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        // Never allow a zero-line document; it is the same state as one
        // empty line.
        let lines = if lines.is_empty() {
            vec![Line::empty()]
        } else {
            lines
        };
        Self {
            lines: lines.into(),
            max_line_len: None,
        }
    }

    pub fn with_max_line_len(&self, max_line_len: Option<usize>) -> Self {
        debug_assert!(max_line_len.map_or(true, |max| max >= 1));
        Self {
            lines: self.lines.clone(),
            max_line_len,
        }
    }

    fn with_lines(&self, lines: Vec<Line>) -> Self {
        debug_assert!(!lines.is_empty());
        Self {
            lines: lines.into(),
            max_line_len: self.max_line_len,
        }
    }

    // ==================== Accessors ====================

    pub fn max_line_len(&self) -> Option<usize> {
        self.max_line_len
    }

    /// Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_index_check(&self, index: usize) -> bool {
        index < self.lines.len()
    }

    /// True for any location in the document, including each line's end.
    pub fn location_check(&self, location: DocumentLocation) -> bool {
        match self.line(location.line) {
            Some(line) => line.location_check(location.symbol),
            None => false,
        }
    }

    pub fn symbol(&self, location: DocumentLocation) -> Option<&Symbol> {
        self.line(location.line)?.get(location.symbol)
    }

    /// The end-of-document location: end of the last line.
    pub fn end_location(&self) -> DocumentLocation {
        let line = self.lines.len() - 1;
        DocumentLocation::new(line, self.lines[line].end_location())
    }

    /// True when the document is a single empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    // ==================== Text ====================

    /// Flat text with terminators re-inserted between lines.
    ///
    /// The exact inverse of [`Document::from_text`]: no trailing
    /// terminator.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(&line.text());
        }
        text
    }

    /// Flat text with style codes rendered inline.
    pub fn styled_text(&self) -> String {
        let mut text = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(&line.styled_text());
        }
        text
    }

    // ==================== Mutations ====================

    /// Inserts text at a location, splicing line terminators in `text` into
    /// new document lines.
    ///
    /// The original line is split at `location`; the inserted text (as its
    /// own mini-document) is appended to the left remainder, the right
    /// remainder is appended to its tail, and the spliced lines replace the
    /// original line. Lines outside the splice keep their identity.
    ///
    /// Refused (no change, `changed == false`) when a resulting line would
    /// exceed the line length limit. Empty insert text is a caller bug and
    /// is a no-op in release builds.
    pub fn insert(&self, location: DocumentLocation, text: &str) -> InsertOutcome {
        debug_assert!(self.location_check(location), "insert at invalid location");
        debug_assert!(!text.is_empty(), "insert text must not be empty");

        if text.is_empty() {
            return self.unchanged_insert(location);
        }

        let original = &self.lines[location.line];
        let left = original.split_before(location.symbol);
        let right = original.split_after(location.symbol);

        // The insert text as its own mini-document; one entry per line.
        let mut spliced: Vec<Line> = text.split('\n').map(Line::from_text).collect();

        // Left remainder joins the first inserted line. The end of the
        // inserted text is measured before the right remainder is glued on.
        let head = left.join(&spliced[0]);
        spliced[0] = head;
        let last = spliced.len() - 1;
        let end = DocumentLocation::new(location.line + last, spliced[last].end_location());
        let tail = spliced[last].join(&right);
        spliced[last] = tail;

        if let Some(max) = self.max_line_len {
            if spliced.iter().any(|line| line.len() > max) {
                // Too large to insert; silently refuse.
                return self.unchanged_insert(location);
            }
        }

        let line_change = location.line..location.line + spliced.len();

        let mut lines = Vec::with_capacity(self.lines.len() + spliced.len() - 1);
        lines.extend_from_slice(&self.lines[..location.line]);
        lines.append(&mut spliced);
        lines.extend_from_slice(&self.lines[location.line + 1..]);

        InsertOutcome {
            document: self.with_lines(lines),
            range: DocumentRange::new(location, end),
            line_change,
            changed: true,
        }
    }

    fn unchanged_insert(&self, location: DocumentLocation) -> InsertOutcome {
        InsertOutcome {
            document: self.clone(),
            range: DocumentRange::new(location, location),
            line_change: location.line..location.line,
            changed: false,
        }
    }

    /// Deletes a range, keeping everything left of `range.start` and right
    /// of `range.end`, joined into one line that replaces every line the
    /// range touched.
    ///
    /// A zero-length range rebuilds an identical document. The reported cut
    /// location always equals `range.start`.
    pub fn delete(&self, range: DocumentRange) -> DeleteOutcome {
        debug_assert!(self.location_check(range.start), "delete start invalid");
        debug_assert!(self.location_check(range.end), "delete end invalid");

        let left = self.lines[range.start.line].split_before(range.start.symbol);
        let right = self.lines[range.end.line].split_after(range.end.symbol);
        let joined = left.join(&right);

        let lines_removed = range.end.line - range.start.line;

        let mut lines = Vec::with_capacity(self.lines.len() - lines_removed);
        lines.extend_from_slice(&self.lines[..range.start.line]);
        lines.push(joined);
        lines.extend_from_slice(&self.lines[range.end.line + 1..]);

        DeleteOutcome {
            document: self.with_lines(lines),
            cut: range.start,
            lines_removed,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::from_text("")
    }
}
