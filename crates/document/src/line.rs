// Chunk: docs/chunks/document_model - Master document data structure

//! A line: an ordered sequence of symbols behind a shared buffer.

use std::sync::Arc;

use crate::symbol::Symbol;

/// One line of a document. May be empty (a line with just a terminator on
/// it). A line has no identity beyond its position in a document.
///
/// The symbol storage is shared (`Arc`), so cloning a line is cheap and
/// untouched lines are carried between document snapshots without copying.
/// All edits produce a new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    symbols: Arc<[Symbol]>,
}

impl Line {
    pub fn empty() -> Self {
        Self::from_symbols(Vec::new())
    }

    /// Builds a line of plain (unstyled) symbols from text.
    ///
    /// The text must not contain a line terminator; splitting text into
    /// lines is the document's job.
    pub fn from_text(text: &str) -> Self {
        debug_assert!(
            !text.contains('\n'),
            "line text must not contain a terminator"
        );
        Self {
            symbols: text.chars().map(Symbol::new).collect(),
        }
    }

    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    // ==================== Accessors ====================

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The end-of-line location: one past the last symbol. For an empty
    /// line this is 0.
    pub fn end_location(&self) -> usize {
        self.symbols.len()
    }

    /// True for any location on this line, including end of line.
    pub fn location_check(&self, location: usize) -> bool {
        location <= self.end_location()
    }

    /// True only if a symbol exists at `index` (end of line excluded).
    pub fn index_check(&self, index: usize) -> bool {
        index < self.symbols.len()
    }

    // ==================== Edits ====================

    /// Everything strictly left of `location`.
    pub fn split_before(&self, location: usize) -> Self {
        debug_assert!(self.location_check(location));
        self.subset(0, location.min(self.len()))
    }

    /// Everything at and right of `location`.
    pub fn split_after(&self, location: usize) -> Self {
        debug_assert!(self.location_check(location));
        self.subset(location.min(self.len()), self.len())
    }

    /// The symbols in `[start, end)`.
    pub fn subset(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len());
        Self {
            symbols: self.symbols[start..end].to_vec().into(),
        }
    }

    /// This line followed by `tail`, as one line.
    pub fn join(&self, tail: &Line) -> Self {
        if tail.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return tail.clone();
        }
        let mut symbols = self.symbols.to_vec();
        symbols.extend_from_slice(&tail.symbols);
        Self::from_symbols(symbols)
    }

    // ==================== Text ====================

    /// The line's characters, styles dropped.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|symbol| symbol.character).collect()
    }

    /// The line's characters with style codes rendered inline.
    pub fn styled_text(&self) -> String {
        self.symbols
            .iter()
            .map(|symbol| symbol.styled_text())
            .collect()
    }
}
