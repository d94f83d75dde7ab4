// Chunk: docs/chunks/cursor_navigation - Visual cursor movement

//! The text cursor: a viewport location plus the remembered column.
//!
//! The cursor navigates the *wrapped* document: arrow keys move between
//! viewport lines, so a long master line is walked segment by segment. It
//! may sit over any symbol, or at the end-of-line slot of an unwrapped
//! line; wrapped segments keep it over an actual symbol.
//!
//! Vertical movement carries a remembered pixel column. Without it,
//! repeatedly moving through short lines would pull the cursor left a
//! little more on every step; with it, consecutive vertical moves track a
//! straight visual line. Any non-vertical movement forgets the column.

use crate::viewport_document::{ViewportDocument, ViewportLocation};

/// Cursor state over a viewport document.
///
/// Movement methods take the current viewport document as context and
/// return the updated cursor; a movement with no valid destination returns
/// the cursor unchanged. Callers must re-validate the location after
/// replacing the master document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub location: ViewportLocation,
    /// Pixel x remembered across consecutive vertical moves, relative to
    /// the line start.
    vertical_x: Option<u32>,
}

impl Cursor {
    /// A cursor at the document origin.
    pub fn origin() -> Self {
        Self {
            location: ViewportLocation::new(0, 0),
            vertical_x: None,
        }
    }

    /// Places the cursor, forgetting the remembered column.
    pub fn with_location(&self, location: ViewportLocation) -> Self {
        Self {
            location,
            vertical_x: None,
        }
    }

    fn with_vertical_x(&self, location: ViewportLocation, vertical_x: u32) -> Self {
        Self {
            location,
            vertical_x: Some(vertical_x),
        }
    }

    /// The pixel column vertical movement aims for: the remembered column
    /// if one is set, else the cursor's current pixel position.
    pub fn vertical_target_x(&self, view: &ViewportDocument) -> u32 {
        match self.vertical_x {
            Some(x) => x,
            None => view
                .line(self.location.line)
                .map_or(0, |line| line.location_to_x(self.location.symbol)),
        }
    }

    // ==================== Step targets ====================

    /// The location one step left of `from`, or `None` at the document
    /// origin.
    ///
    /// At the start of a line this is the end-of-line slot of the previous
    /// viewport line (for a wrapped segment, its last symbol).
    pub fn step_left(
        view: &ViewportDocument,
        from: ViewportLocation,
    ) -> Option<ViewportLocation> {
        debug_assert!(view.location_check(from));

        if from.symbol > 0 {
            return Some(from.with_symbol(from.symbol - 1));
        }
        if from.line == 0 {
            return None;
        }

        let above = from.line - 1;
        Some(ViewportLocation::new(above, view.line_end_location(above)))
    }

    /// The location one step right of `from`, or `None` at the document
    /// end.
    pub fn step_right(
        view: &ViewportDocument,
        from: ViewportLocation,
    ) -> Option<ViewportLocation> {
        debug_assert!(view.location_check(from));

        if from.symbol < view.line_end_location(from.line) {
            return Some(from.with_symbol(from.symbol + 1));
        }
        if from.line + 1 == view.line_count() {
            return None;
        }

        Some(ViewportLocation::new(from.line + 1, 0))
    }

    /// The location `delta_lines` away vertically, resolved at
    /// `target_x`. The destination line is clamped into the document.
    fn step_vertical(
        view: &ViewportDocument,
        from: ViewportLocation,
        delta_lines: isize,
        target_x: u32,
    ) -> ViewportLocation {
        debug_assert!(view.location_check(from));

        let destination = view.line_index_clamp(from.line as isize + delta_lines);
        let symbol = view
            .line(destination)
            .map_or(0, |line| line.x_to_nearest_location(target_x as i32));
        ViewportLocation::new(destination, symbol)
    }

    // ==================== Movement ====================

    pub fn move_left(&self, view: &ViewportDocument) -> Self {
        match Self::step_left(view, self.location) {
            Some(location) => self.with_location(location),
            None => *self,
        }
    }

    pub fn move_right(&self, view: &ViewportDocument) -> Self {
        match Self::step_right(view, self.location) {
            Some(location) => self.with_location(location),
            None => *self,
        }
    }

    pub fn move_up(&self, view: &ViewportDocument) -> Self {
        self.move_vertical(view, -1)
    }

    pub fn move_down(&self, view: &ViewportDocument) -> Self {
        self.move_vertical(view, 1)
    }

    pub fn page_up(&self, view: &ViewportDocument, page_lines: usize) -> Self {
        self.move_vertical(view, -(page_lines as isize))
    }

    pub fn page_down(&self, view: &ViewportDocument, page_lines: usize) -> Self {
        self.move_vertical(view, page_lines as isize)
    }

    /// Vertical movement re-stores the target column so successive moves
    /// do not drift.
    fn move_vertical(&self, view: &ViewportDocument, delta_lines: isize) -> Self {
        let target_x = self.vertical_target_x(view);
        let location = Self::step_vertical(view, self.location, delta_lines, target_x);
        self.with_vertical_x(location, target_x)
    }

    /// Start of the current line, or of the whole document.
    pub fn home(&self, view: &ViewportDocument, whole_document: bool) -> Self {
        let location = if whole_document {
            ViewportLocation::new(0, 0)
        } else {
            self.location.with_symbol(0)
        };
        debug_assert!(view.location_check(location));
        self.with_location(location)
    }

    /// End of the current line, or of the whole document.
    pub fn end(&self, view: &ViewportDocument, whole_document: bool) -> Self {
        let line = if whole_document {
            view.line_count() - 1
        } else {
            self.location.line
        };
        let location = ViewportLocation::new(line, view.line_end_location(line));
        debug_assert!(view.location_check(location));
        self.with_location(location)
    }

    /// Clamps the cursor after the viewport document was replaced; an
    /// unresolvable location falls back to the origin.
    pub fn revalidate(&self, view: &ViewportDocument) -> Self {
        if view.location_check(self.location) {
            // keep the location, drop the stale column memory
            self.with_location(self.location)
        } else {
            Self::origin()
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::origin()
    }
}
