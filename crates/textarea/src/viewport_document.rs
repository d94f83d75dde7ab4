// Chunk: docs/chunks/location_mapping - Master/viewport coordinate mapping

//! The wrapped document and the mapping between coordinate systems.

use flowedit_document::{Document, DocumentLocation, DocumentRange};

use crate::font::Font;
use crate::geometry::PixelPosition;
use crate::viewport_line::{ViewportLine, ViewportSymbol};
use crate::wrap;

/// A point in the wrapped document as (viewport line, symbol).
///
/// Viewport locations refer to wrapped lines; they are a different
/// coordinate space from [`DocumentLocation`] and the two must never be
/// compared or combined directly - translate through
/// [`ViewportDocument::to_master`] / [`ViewportDocument::to_viewport`].
///
/// As with master locations, the slot one past the last symbol is legal,
/// but only on an unwrapped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportLocation {
    pub line: usize,
    pub symbol: usize,
}

impl ViewportLocation {
    pub fn new(line: usize, symbol: usize) -> Self {
        Self { line, symbol }
    }

    pub fn is_origin(&self) -> bool {
        self.line == 0 && self.symbol == 0
    }

    pub fn with_symbol(&self, symbol: usize) -> Self {
        Self::new(self.line, symbol)
    }
}

impl PartialOrd for ViewportLocation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ViewportLocation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.symbol.cmp(&other.symbol),
            ord => ord,
        }
    }
}

/// A span of viewport locations, end exclusive, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportRange {
    pub start: ViewportLocation,
    pub end: ViewportLocation,
}

impl ViewportRange {
    pub fn new(start: ViewportLocation, end: ViewportLocation) -> Self {
        debug_assert!(start <= end, "negative location range");
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The wrapped rendition of a master document, plus its display geometry.
///
/// Derived from a master snapshot and never mutated: every edit goes
/// through the master document and produces a freshly derived viewport
/// document. Wrapping only ever subdivides lines, so the viewport line
/// count is always at least the master line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportDocument {
    lines: Vec<ViewportLine>,
    /// Full content width in pixels; wrapping happens at
    /// `size_x - wrap_padding`.
    size_x: u32,
    /// Pixels reserved on the right edge so the cursor can rest past the
    /// last symbol of a full line.
    wrap_padding: u32,
    /// Height of every line.
    line_height: u32,
    wrap_enabled: bool,
}

impl ViewportDocument {
    /// Derives the wrapped document from a master snapshot.
    pub fn derive(
        master: &Document,
        font: &Font,
        size_x: u32,
        wrap_padding: u32,
        line_height: u32,
        wrap_enabled: bool,
    ) -> Self {
        debug_assert!(wrap_padding > 0);
        debug_assert!(
            wrap_padding < size_x,
            "wrap padding leaves less than one pixel for text"
        );
        debug_assert!(line_height > 0);

        let lines = if wrap_enabled {
            wrap::wrap_document(master, size_x - wrap_padding, font)
        } else {
            wrap::unwrapped_document(master, font)
        };
        debug_assert!(lines.len() >= master.line_count());

        Self {
            lines,
            size_x,
            wrap_padding,
            line_height,
            wrap_enabled,
        }
    }

    // ==================== Accessors ====================

    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    pub fn wrap_padding(&self) -> u32 {
        self.wrap_padding
    }

    pub fn wrap_width(&self) -> u32 {
        self.size_x - self.wrap_padding
    }

    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    /// Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total pixel height; grows with the line count.
    pub fn size_y(&self) -> u32 {
        self.line_height * self.lines.len() as u32
    }

    pub fn line(&self, index: usize) -> Option<&ViewportLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[ViewportLine] {
        &self.lines
    }

    pub fn line_index_check(&self, index: usize) -> bool {
        index < self.lines.len()
    }

    /// Pulls an out-of-range line index to the nearest valid one.
    pub fn line_index_clamp(&self, index: isize) -> usize {
        if index < 0 {
            0
        } else {
            (index as usize).min(self.lines.len() - 1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// The end-of-line cursor slot of a viewport line.
    pub fn line_end_location(&self, index: usize) -> usize {
        debug_assert!(self.line_index_check(index));
        self.line(index).map_or(0, |line| line.end_location())
    }

    // ==================== Location checks ====================

    /// True iff `location` points at a symbol or, on an unwrapped line
    /// only, at the end-of-line slot.
    pub fn location_check(&self, location: ViewportLocation) -> bool {
        match self.line(location.line) {
            Some(line) => line.location_check(location.symbol),
            None => false,
        }
    }

    /// True iff a symbol exists at `location` (end-of-line excluded).
    pub fn symbol_check(&self, location: ViewportLocation) -> bool {
        match self.line(location.line) {
            Some(line) => line.index_check(location.symbol),
            None => false,
        }
    }

    pub fn symbol(&self, location: ViewportLocation) -> Option<&ViewportSymbol> {
        self.line(location.line)?.get(location.symbol)
    }

    // ==================== Master <-> viewport ====================

    /// Translates a master location into the unique viewport location that
    /// resolves it.
    ///
    /// Every valid master location (including each master line's
    /// end-of-line slot) is covered by exactly one viewport line's master
    /// range; the ranges are sorted and non-overlapping, so a binary
    /// search finds the segment. An invalid master location is a caller
    /// bug; release builds clamp to the end of the document.
    pub fn to_viewport(&self, master: DocumentLocation) -> ViewportLocation {
        let index = self
            .lines
            .partition_point(|line| line.master_end() <= master);

        match self.lines.get(index) {
            Some(line) if line.master_range().contains(master) => ViewportLocation::new(
                index,
                master.symbol - line.master_start.symbol,
            ),
            _ => {
                debug_assert!(
                    false,
                    "master location {master:?} has no viewport counterpart"
                );
                self.end_location()
            }
        }
    }

    /// Translates a viewport location back into master coordinates.
    pub fn to_master(&self, viewport: ViewportLocation) -> DocumentLocation {
        debug_assert!(self.location_check(viewport));

        match self.line(viewport.line) {
            Some(line) => DocumentLocation::new(
                line.master_start.line,
                line.master_start.symbol + viewport.symbol,
            ),
            None => DocumentLocation::new(0, 0),
        }
    }

    pub fn range_to_master(&self, range: ViewportRange) -> DocumentRange {
        DocumentRange::new(self.to_master(range.start), self.to_master(range.end))
    }

    /// The last cursor-legal location in the viewport document.
    pub fn end_location(&self) -> ViewportLocation {
        let line = self.lines.len() - 1;
        ViewportLocation::new(line, self.lines[line].end_location())
    }

    // ==================== Pixels ====================

    /// Top-left pixel of the location within the document.
    pub fn location_to_position(&self, location: ViewportLocation) -> PixelPosition {
        debug_assert!(self.location_check(location));

        let x = self
            .line(location.line)
            .map_or(0, |line| line.location_to_x(location.symbol));
        let y = location.line as u32 * self.line_height;
        PixelPosition::new(x as i32, y as i32)
    }

    /// The nearest location to a document-relative pixel position.
    ///
    /// The vertical coordinate picks the line (clamped to the document);
    /// the horizontal coordinate resolves the nearest location on that
    /// line.
    pub fn position_to_location(&self, position: PixelPosition) -> ViewportLocation {
        let line_index = if position.y < 0 {
            0
        } else {
            (position.y as usize / self.line_height as usize).min(self.lines.len() - 1)
        };

        let symbol = self.lines[line_index].x_to_nearest_location(position.x);
        ViewportLocation::new(line_index, symbol)
    }

    pub fn position_x_check(&self, x: i32) -> bool {
        x >= 0 && (x as u32) < self.size_x
    }

    pub fn position_y_check(&self, y: i32) -> bool {
        y >= 0 && (y as u32) < self.size_y()
    }
}
