// Chunk: docs/chunks/location_mapping - Viewport lines and the master mapping

//! One wrapped segment of one master line.

use flowedit_document::{DocumentLocation, DocumentRange, Symbol};

use crate::font::Font;

/// A symbol as displayed: the document symbol plus its measured width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportSymbol {
    pub symbol: Symbol,
    pub width: u32,
}

impl ViewportSymbol {
    pub fn new(symbol: Symbol, font: &Font) -> Self {
        let width = font.glyph(symbol.character).width;
        Self { symbol, width }
    }
}

/// One contiguous slice of exactly one master line.
///
/// `master_start` is where the slice begins in master coordinates
/// (inclusive); together with the slice's own symbol count it reconstructs
/// the segment's master extent. `is_wrap` means more of the master line
/// continues in a later viewport line - equivalently, this segment is not
/// the final one, so the cursor may not sit at its end-of-line slot.
///
/// An empty master line produces exactly one viewport line with
/// `is_wrap == false`; a wrapped viewport line is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportLine {
    pub master_start: DocumentLocation,
    symbols: Vec<ViewportSymbol>,
    pub is_wrap: bool,
}

impl ViewportLine {
    pub fn new(
        master_start: DocumentLocation,
        symbols: Vec<ViewportSymbol>,
        is_wrap: bool,
    ) -> Self {
        debug_assert!(
            !is_wrap || !symbols.is_empty(),
            "impossible for an empty line to need wrapping"
        );
        Self {
            master_start,
            symbols,
            is_wrap,
        }
    }

    /// Empty and not wrapped; the single segment of an empty master line.
    pub fn empty_at(master_start: DocumentLocation) -> Self {
        Self::new(master_start, Vec::new(), false)
    }

    // ==================== Accessors ====================

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ViewportSymbol> {
        self.symbols.get(index)
    }

    pub fn symbols(&self) -> &[ViewportSymbol] {
        &self.symbols
    }

    /// The last location a cursor may occupy on this line.
    ///
    /// One past the last symbol, except for wrapped segments where the
    /// cursor must stay over an actual symbol (the end-of-line slot lives
    /// on the final segment of the master line). An empty line allows
    /// location 0; empty lines are never wrapped.
    pub fn end_location(&self) -> usize {
        if self.is_wrap {
            debug_assert!(!self.is_empty());
            self.symbols.len() - 1
        } else {
            self.symbols.len()
        }
    }

    /// True for any cursor-legal location on this line.
    pub fn location_check(&self, location: usize) -> bool {
        location <= self.end_location()
    }

    /// True only if a symbol exists at `index`.
    pub fn index_check(&self, index: usize) -> bool {
        index < self.symbols.len()
    }

    // ==================== Master mapping ====================

    /// The exclusive end of this segment's master-location range.
    ///
    /// One past the last *location* this segment maps: for a wrapped
    /// segment that is one past its last symbol; for the final segment it
    /// additionally covers the master line's end-of-line slot, so the
    /// range for "abc" (final) spans symbols 0..3 plus location 3.
    pub fn master_end(&self) -> DocumentLocation {
        DocumentLocation::new(
            self.master_start.line,
            self.master_start.symbol + self.end_location() + 1,
        )
    }

    /// Every master location this segment resolves, start inclusive, end
    /// exclusive.
    pub fn master_range(&self) -> DocumentRange {
        DocumentRange::new(self.master_start, self.master_end())
    }

    // ==================== Pixels ====================

    /// Total width of the symbols; the end-of-line slot adds nothing.
    pub fn width(&self) -> u32 {
        self.symbols.iter().map(|symbol| symbol.width).sum()
    }

    /// Left pixel edge of the symbol at `location`, relative to the line
    /// start. The end-of-line location maps just past the last symbol.
    pub fn location_to_x(&self, location: usize) -> u32 {
        debug_assert!(self.location_check(location));

        self.symbols[..location.min(self.symbols.len())]
            .iter()
            .map(|symbol| symbol.width)
            .sum()
    }

    /// The nearest cursor-legal location to pixel `x`.
    ///
    /// Negative x clamps to location 0; x at or past the line's total
    /// width clamps to the end location. In between, the location of the
    /// symbol whose pixel span contains x.
    pub fn x_to_nearest_location(&self, x: i32) -> usize {
        if x < 0 {
            return 0;
        }
        let x = x as u32;
        if x >= self.width() {
            return self.end_location();
        }

        let mut right_edge = 0u32;
        for (index, symbol) in self.symbols.iter().enumerate() {
            right_edge += symbol.width;
            // careful to compare a position to a size (< not <=)
            if x < right_edge {
                return index;
            }
        }

        debug_assert!(false, "x inside line width but not inside any symbol");
        self.end_location()
    }

    // ==================== Text ====================

    pub fn text(&self) -> String {
        self.symbols
            .iter()
            .map(|symbol| symbol.symbol.character)
            .collect()
    }

    pub fn styled_text(&self) -> String {
        self.symbols
            .iter()
            .map(|symbol| symbol.symbol.styled_text())
            .collect()
    }
}
