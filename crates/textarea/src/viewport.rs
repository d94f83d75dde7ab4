// Chunk: docs/chunks/viewport_scroll - Viewport mapping & scroll arithmetic

//! The viewport: a master document, its wrapped rendition, and scroll
//! state.
//!
//! All edits funnel through here: an edit is translated from viewport to
//! master coordinates, applied to the master document, and a fresh
//! viewport document is derived from the result. The scroll index is a
//! whole line index (the line at the top of the view); scrolling is
//! clamped so the last page always fills the view.

use flowedit_document::{Document, DocumentLocation, DocumentRange};

use crate::font::Font;
use crate::geometry::{Padding, PixelPosition, Size};
use crate::viewport_document::{ViewportDocument, ViewportLocation, ViewportRange};

/// Master document + derived viewport document + scroll state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    master: Document,
    view: ViewportDocument,
    /// Full control size; the content rectangle is inset by
    /// `content_padding`.
    size: Size,
    /// Line index at the top of the view.
    scroll_index: usize,
    content_padding: Padding,
    font: Font,
    read_only: bool,
    /// Set by any successful edit; cleared when a new master document is
    /// loaded.
    modified: bool,
    /// Refuse inserts that would leave a line wider than the content
    /// rectangle (only meaningful with wrapping off).
    limit_width: bool,
}

/// A successful (or refused) insert, with the affected span in both
/// coordinate systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportInsert {
    pub viewport: Viewport,
    pub master_range: DocumentRange,
    pub viewport_range: ViewportRange,
    pub changed: bool,
}

/// A delete, with the cut location in both coordinate systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportDelete {
    pub viewport: Viewport,
    pub master_cut: DocumentLocation,
    pub viewport_cut: ViewportLocation,
}

impl Viewport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        master: Document,
        font: Font,
        size: Size,
        content_padding: Padding,
        wrap_padding: u32,
        line_height: u32,
        wrap_enabled: bool,
        read_only: bool,
        limit_width: bool,
    ) -> Self {
        let content = content_padding.inner_size(size);
        let view = ViewportDocument::derive(
            &master,
            &font,
            content.x,
            wrap_padding,
            line_height,
            wrap_enabled,
        );

        Self {
            master,
            view,
            size,
            scroll_index: 0,
            content_padding,
            font,
            read_only,
            modified: false,
            limit_width,
        }
    }

    // ==================== Accessors ====================

    pub fn master(&self) -> &Document {
        &self.master
    }

    pub fn view(&self) -> &ViewportDocument {
        &self.view
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn content_size(&self) -> Size {
        self.content_padding.inner_size(self.size)
    }

    /// Lines that fit fully in the content height; never 0.
    pub fn page_lines(&self) -> usize {
        let fit = self.content_size().y / self.view.line_height();
        (fit as usize).max(1)
    }

    pub fn location_check(&self, location: ViewportLocation) -> bool {
        self.view.location_check(location)
    }

    // ==================== Rebuild helpers ====================

    fn with_view(&self, master: Document, view: ViewportDocument, modified: bool) -> Self {
        let mut next = Self {
            master,
            view,
            size: self.size,
            scroll_index: self.scroll_index,
            content_padding: self.content_padding,
            font: self.font.clone(),
            read_only: self.read_only,
            modified,
            limit_width: self.limit_width,
        };
        next.scroll_index = next.clamp_scroll(next.scroll_index as isize);
        next
    }

    fn rederive(&self, master: &Document) -> ViewportDocument {
        ViewportDocument::derive(
            master,
            &self.font,
            self.content_size().x,
            self.view.wrap_padding(),
            self.view.line_height(),
            self.view.wrap_enabled(),
        )
    }

    /// Replaces the whole master document: re-derives, resets scroll,
    /// clears the modified flag. Callers must revalidate any cursor.
    pub fn with_master_document(&self, master: Document) -> Self {
        let view = self.rederive(&master);
        let mut next = self.with_view(master, view, false);
        next.scroll_index = 0;
        next
    }

    pub fn with_read_only(&self, read_only: bool) -> Self {
        let mut next = self.clone();
        next.read_only = read_only;
        next
    }

    /// Resizes the control and re-wraps to the new content width.
    pub fn with_size(&self, size: Size) -> Self {
        let mut next = self.clone();
        next.size = size;
        let content = next.content_padding.inner_size(size);
        next.view = ViewportDocument::derive(
            &next.master,
            &next.font,
            content.x,
            next.view.wrap_padding(),
            next.view.line_height(),
            next.view.wrap_enabled(),
        );
        next.scroll_index = next.clamp_scroll(next.scroll_index as isize);
        next
    }

    // ==================== Edits ====================

    /// Inserts text at a viewport location.
    ///
    /// The location is translated to master coordinates, the master
    /// document is edited, and the viewport document is re-derived. The
    /// returned ranges give the inserted span in both systems (callers put
    /// the cursor at the viewport end). Refusals (line length limit, width
    /// limit) come back with `changed == false`.
    pub fn insert(&self, location: ViewportLocation, text: &str) -> ViewportInsert {
        debug_assert!(!self.read_only, "insert on a read-only viewport");
        debug_assert!(self.location_check(location));

        let master_location = self.view.to_master(location);
        let outcome = self.master.insert(master_location, text);
        if !outcome.changed {
            return self.unchanged_insert(location);
        }

        let view = self.rederive(&outcome.document);
        if self.limit_width && !self.width_check(&view) {
            // Text would poke out the right edge; silently refuse.
            return self.unchanged_insert(location);
        }

        let viewport_range = ViewportRange::new(
            view.to_viewport(outcome.range.start),
            view.to_viewport(outcome.range.end),
        );

        ViewportInsert {
            viewport: self.with_view(outcome.document, view, true),
            master_range: outcome.range,
            viewport_range,
            changed: true,
        }
    }

    fn unchanged_insert(&self, location: ViewportLocation) -> ViewportInsert {
        let master = self.view.to_master(location);
        ViewportInsert {
            viewport: self.clone(),
            master_range: DocumentRange::new(master, master),
            viewport_range: ViewportRange::new(location, location),
            changed: false,
        }
    }

    /// Every line must leave room for the end-of-line cursor slot.
    fn width_check(&self, view: &ViewportDocument) -> bool {
        let max_text_width = view.size_x().saturating_sub(self.font.space().width);
        view.lines().iter().all(|line| line.width() <= max_text_width)
    }

    /// Deletes a viewport range from the master document.
    ///
    /// The cut location (== range start) is reported in both systems;
    /// callers move the cursor there.
    pub fn delete(&self, range: ViewportRange) -> ViewportDelete {
        debug_assert!(!self.read_only, "delete on a read-only viewport");
        debug_assert!(self.location_check(range.start));
        debug_assert!(self.location_check(range.end));

        let master_range = self.view.range_to_master(range);
        let outcome = self.master.delete(master_range);

        let view = self.rederive(&outcome.document);
        let viewport_cut = view.to_viewport(outcome.cut);

        ViewportDelete {
            viewport: self.with_view(outcome.document, view, true),
            master_cut: outcome.cut,
            viewport_cut,
        }
    }

    // ==================== Scrolling ====================

    /// The furthest the view can scroll down: the last page always stays
    /// full (0 when everything fits).
    pub fn max_scroll(&self) -> usize {
        self.view.line_count().saturating_sub(self.page_lines())
    }

    fn clamp_scroll(&self, index: isize) -> usize {
        if index < 0 {
            0
        } else {
            (index as usize).min(self.max_scroll())
        }
    }

    pub fn with_scroll_index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.scroll_index = next.clamp_scroll(index as isize);
        next
    }

    pub fn scroll_by(&self, delta: isize) -> Self {
        self.with_scroll_index(self.clamp_scroll(self.scroll_index as isize + delta))
    }

    /// The currently visible line index range.
    pub fn visible_lines(&self) -> std::ops::Range<usize> {
        let end = (self.scroll_index + self.page_lines()).min(self.view.line_count());
        self.scroll_index..end
    }

    pub fn is_in_view(&self, line: usize) -> bool {
        self.visible_lines().contains(&line)
    }

    /// Scrolls just enough to bring `line` into view: top-aligns when the
    /// line is above the window, bottom-aligns when below, and leaves the
    /// scroll alone when the line is already visible.
    pub fn scroll_into_view(&self, line: usize) -> Self {
        let visible = self.visible_lines();
        if visible.contains(&line) {
            return self.clone();
        }

        let index = if line < visible.start {
            line
        } else {
            // line sits just past the bottom; put it on the last row
            self.scroll_index + (line + 1 - visible.end)
        };
        self.with_scroll_index(index)
    }

    // ==================== Pixel transforms ====================

    /// Top pixel of the scroll position within the document.
    pub fn scroll_y(&self) -> u32 {
        self.scroll_index as u32 * self.view.line_height()
    }

    /// Translates a control-relative position (e.g. a click) to the
    /// nearest viewport location. `None` when the position is outside the
    /// control entirely.
    pub fn position_to_location(&self, position: PixelPosition) -> Option<ViewportLocation> {
        if position.x < 0
            || position.y < 0
            || position.x as u32 >= self.size.x
            || position.y as u32 >= self.size.y
        {
            return None;
        }

        // control -> content -> document coordinates
        let content_x = position.x - self.content_padding.left as i32;
        let content_y = position.y - self.content_padding.top as i32;
        let document = PixelPosition::new(content_x, content_y + self.scroll_y() as i32);

        Some(self.view.position_to_location(document))
    }

    /// Top-left pixel of a location in control coordinates. Lines scrolled
    /// off the top come back negative.
    pub fn location_to_position(&self, location: ViewportLocation) -> PixelPosition {
        let document = self.view.location_to_position(location);
        PixelPosition::new(
            document.x + self.content_padding.left as i32,
            document.y - self.scroll_y() as i32 + self.content_padding.top as i32,
        )
    }
}
