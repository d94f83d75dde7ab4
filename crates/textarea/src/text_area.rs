// Chunk: docs/chunks/textarea_commands - Host command surface

//! The text area: viewport + cursor behind the host command surface.
//!
//! Every command is a pure transform: it takes the current text area and
//! returns the next one. A host holds one current value, feeds input
//! events through these methods, and renders whatever comes back. Editing
//! commands keep the cursor visible; read-only mode turns every mutating
//! command into a no-op.

use flowedit_document::Document;
use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::font::Font;
use crate::geometry::{Padding, PixelPosition, Size};
use crate::viewport::Viewport;
use crate::viewport_document::ViewportRange;

/// Host-configurable text area behavior.
///
/// Serde-derived so a host can persist the settings alongside its own
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAreaOptions {
    /// Soft-wrap long lines to the content width.
    pub wrap: bool,
    /// Reject every mutating command.
    pub read_only: bool,
    /// Maximum symbols on any single master line; inserts that would
    /// exceed it are refused.
    pub max_line_len: Option<usize>,
    /// With wrapping off, refuse inserts that would leave a line wider
    /// than the control.
    pub limit_width: bool,
    /// Line height in pixels; `None` uses the font's line height.
    pub line_height: Option<u32>,
    /// Space around the content rectangle.
    pub content_padding: Padding,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            read_only: false,
            max_line_len: None,
            limit_width: false,
            line_height: None,
            content_padding: Padding::default(),
        }
    }
}

/// A complete editable text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    viewport: Viewport,
    cursor: Cursor,
}

impl TextArea {
    /// An empty text area.
    ///
    /// The wrap padding is one space glyph, so the cursor can always rest
    /// past the last symbol of a full line.
    pub fn new(font: Font, size: Size, options: TextAreaOptions) -> Self {
        let line_height = options.line_height.unwrap_or(font.line_height());
        let wrap_padding = font.space().width;

        let master = Document::from_text("").with_max_line_len(options.max_line_len);
        let viewport = Viewport::new(
            master,
            font,
            size,
            options.content_padding,
            wrap_padding,
            line_height,
            options.wrap,
            options.read_only,
            options.limit_width,
        );

        Self {
            viewport,
            cursor: Cursor::origin(),
        }
    }

    // ==================== Accessors ====================

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn document(&self) -> &Document {
        self.viewport.master()
    }

    /// The document as flat text.
    pub fn text(&self) -> String {
        self.viewport.master().text()
    }

    pub fn is_read_only(&self) -> bool {
        self.viewport.is_read_only()
    }

    pub fn is_modified(&self) -> bool {
        self.viewport.is_modified()
    }

    pub fn is_cursor_in_view(&self) -> bool {
        self.viewport.is_in_view(self.cursor.location.line)
    }

    // ==================== Rebuild helpers ====================

    fn with_viewport(&self, viewport: Viewport) -> Self {
        debug_assert!(viewport.location_check(self.cursor.location));
        Self {
            viewport,
            cursor: self.cursor,
        }
    }

    fn with_cursor(&self, cursor: Cursor) -> Self {
        debug_assert!(self.viewport.location_check(cursor.location));
        Self {
            viewport: self.viewport.clone(),
            cursor,
        }
    }

    fn with_cursor_in_view(&self, cursor: Cursor) -> Self {
        let viewport = self.viewport.scroll_into_view(cursor.location.line);
        Self { viewport, cursor }
    }

    // ==================== Document loading ====================

    /// Replaces the document, resetting scroll and revalidating the
    /// cursor (an unresolvable cursor falls back to the origin).
    pub fn load_document(&self, master: Document) -> Self {
        let master = master.with_max_line_len(self.viewport.master().max_line_len());
        let viewport = self.viewport.with_master_document(master);
        let cursor = self.cursor.revalidate(viewport.view());
        Self { viewport, cursor }
    }

    pub fn load_text(&self, text: &str) -> Self {
        self.load_document(Document::from_text(text))
    }

    // ==================== Editing ====================

    pub fn insert_char(&self, character: char) -> Self {
        let mut buffer = [0u8; 4];
        self.insert_text(character.encode_utf8(&mut buffer))
    }

    /// Inserts text at the cursor; the cursor lands after the insert.
    pub fn insert_text(&self, text: &str) -> Self {
        if self.is_read_only() || text.is_empty() {
            return self.clone();
        }

        let result = self.viewport.insert(self.cursor.location, text);
        if !result.changed {
            return self.clone();
        }

        let cursor = self.cursor.with_location(result.viewport_range.end);
        Self {
            viewport: result.viewport,
            cursor,
        }
        .scroll_cursor_into_view()
    }

    pub fn enter(&self) -> Self {
        self.insert_char('\n')
    }

    pub fn tab(&self) -> Self {
        self.insert_char('\t')
    }

    /// Deletes the symbol after the cursor (Delete). Blocked at the
    /// document end.
    pub fn delete_forward(&self) -> Self {
        if self.is_read_only() {
            return self.clone();
        }

        let Some(end) = Cursor::step_right(self.viewport.view(), self.cursor.location) else {
            return self.clone();
        };

        let result = self
            .viewport
            .delete(ViewportRange::new(self.cursor.location, end));
        let cursor = self.cursor.with_location(result.viewport_cut);
        Self {
            viewport: result.viewport,
            cursor,
        }
        .scroll_cursor_into_view()
    }

    /// Deletes the symbol before the cursor (Backspace). Blocked at the
    /// document origin.
    pub fn delete_backward(&self) -> Self {
        if self.is_read_only() {
            return self.clone();
        }

        let Some(start) = Cursor::step_left(self.viewport.view(), self.cursor.location) else {
            return self.clone();
        };

        let result = self
            .viewport
            .delete(ViewportRange::new(start, self.cursor.location));
        let cursor = self.cursor.with_location(result.viewport_cut);
        Self {
            viewport: result.viewport,
            cursor,
        }
        .scroll_cursor_into_view()
    }

    // ==================== Cursor movement ====================

    pub fn move_left(&self) -> Self {
        self.with_cursor_in_view(self.cursor.move_left(self.viewport.view()))
    }

    pub fn move_right(&self) -> Self {
        self.with_cursor_in_view(self.cursor.move_right(self.viewport.view()))
    }

    pub fn move_up(&self) -> Self {
        self.with_cursor_in_view(self.cursor.move_up(self.viewport.view()))
    }

    pub fn move_down(&self) -> Self {
        self.with_cursor_in_view(self.cursor.move_down(self.viewport.view()))
    }

    /// Home: start of line, or of the document.
    pub fn home(&self, whole_document: bool) -> Self {
        self.with_cursor_in_view(self.cursor.home(self.viewport.view(), whole_document))
    }

    /// End: end of line, or of the document.
    pub fn end(&self, whole_document: bool) -> Self {
        self.with_cursor_in_view(self.cursor.end(self.viewport.view(), whole_document))
    }

    pub fn page_up(&self) -> Self {
        let page = self.viewport.page_lines();
        self.with_cursor_in_view(self.cursor.page_up(self.viewport.view(), page))
    }

    pub fn page_down(&self) -> Self {
        let page = self.viewport.page_lines();
        self.with_cursor_in_view(self.cursor.page_down(self.viewport.view(), page))
    }

    fn scroll_cursor_into_view(&self) -> Self {
        self.with_viewport(self.viewport.scroll_into_view(self.cursor.location.line))
    }

    // ==================== Pointer / scroll / window ====================

    /// Moves the cursor to the click position; clicks outside the control
    /// are ignored.
    pub fn click(&self, position: PixelPosition) -> Self {
        match self.viewport.position_to_location(position) {
            Some(location) => self.with_cursor(self.cursor.with_location(location)),
            None => self.clone(),
        }
    }

    /// Scrolls the view without touching the cursor.
    pub fn scroll_by(&self, delta_lines: isize) -> Self {
        Self {
            viewport: self.viewport.scroll_by(delta_lines),
            cursor: self.cursor,
        }
    }

    pub fn scroll_to(&self, line: usize) -> Self {
        Self {
            viewport: self.viewport.with_scroll_index(line),
            cursor: self.cursor,
        }
    }

    pub fn scroll_page_up(&self) -> Self {
        self.scroll_by(-(self.viewport.page_lines() as isize))
    }

    pub fn scroll_page_down(&self) -> Self {
        self.scroll_by(self.viewport.page_lines() as isize)
    }

    /// Resizes the control, re-wraps, and revalidates the cursor against
    /// the new wrap.
    pub fn resize(&self, size: Size) -> Self {
        let viewport = self.viewport.with_size(size);
        let cursor = self.cursor.revalidate(viewport.view());
        Self { viewport, cursor }
    }

    pub fn set_read_only(&self, read_only: bool) -> Self {
        Self {
            viewport: self.viewport.with_read_only(read_only),
            cursor: self.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport_document::ViewportLocation;

    fn text_area(size: Size) -> TextArea {
        TextArea::new(
            Font::monospace_ascii(8, 16),
            size,
            TextAreaOptions::default(),
        )
    }

    fn vloc(line: usize, symbol: usize) -> ViewportLocation {
        ViewportLocation::new(line, symbol)
    }

    // ==================== Typing ====================

    #[test]
    fn test_typing_moves_cursor() {
        let area = text_area(Size::new(100, 64));
        let area = area.insert_char('h').insert_char('i');
        assert_eq!(area.text(), "hi");
        assert_eq!(area.cursor().location, vloc(0, 2));
        assert!(area.is_modified());
    }

    #[test]
    fn test_enter_splits_line() {
        let area = text_area(Size::new(100, 64)).insert_text("hello");
        let area = area.enter().insert_text("world");
        assert_eq!(area.text(), "hello\nworld");
        assert_eq!(area.cursor().location, vloc(1, 5));
    }

    #[test]
    fn test_insert_text_multi_line() {
        let area = text_area(Size::new(100, 64)).insert_text("one\ntwo");
        assert_eq!(area.text(), "one\ntwo");
        assert_eq!(area.cursor().location, vloc(1, 3));
    }

    #[test]
    fn test_insert_empty_text_is_noop() {
        let area = text_area(Size::new(100, 64)).insert_text("hi");
        let same = area.insert_text("");
        assert_eq!(same, area);
    }

    #[test]
    fn test_typing_across_wrap_keeps_cursor_after_insert() {
        // content 100 wide minus 8 padding = 11 chars of 8px
        let area = text_area(Size::new(100, 64));
        let area = area.insert_text("aaaaaaaaaaaaaa"); // 14 chars, wraps
        assert!(area.viewport().view().line_count() > 1);
        // cursor follows to the end of the inserted text
        let master = area.viewport().view().to_master(area.cursor().location);
        assert_eq!(master.line, 0);
        assert_eq!(master.symbol, 14);
    }

    // ==================== Deleting ====================

    #[test]
    fn test_backspace() {
        let area = text_area(Size::new(100, 64)).insert_text("ab");
        let area = area.delete_backward();
        assert_eq!(area.text(), "a");
        assert_eq!(area.cursor().location, vloc(0, 1));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let area = text_area(Size::new(100, 64)).insert_text("ab\ncd");
        let area = area.home(false).delete_backward();
        assert_eq!(area.text(), "abcd");
        assert_eq!(area.cursor().location, vloc(0, 2));
    }

    #[test]
    fn test_backspace_blocked_at_origin() {
        let area = text_area(Size::new(100, 64)).insert_text("ab").home(true);
        let same = area.delete_backward();
        assert_eq!(same.text(), "ab");
        assert_eq!(same.cursor().location, vloc(0, 0));
    }

    #[test]
    fn test_delete_forward() {
        let area = text_area(Size::new(100, 64)).insert_text("ab").home(true);
        let area = area.delete_forward();
        assert_eq!(area.text(), "b");
        assert_eq!(area.cursor().location, vloc(0, 0));
    }

    #[test]
    fn test_delete_forward_blocked_at_end() {
        let area = text_area(Size::new(100, 64)).insert_text("ab");
        let same = area.delete_forward();
        assert_eq!(same.text(), "ab");
    }

    // ==================== Read-only ====================

    #[test]
    fn test_read_only_rejects_mutations() {
        let area = text_area(Size::new(100, 64))
            .insert_text("ab")
            .set_read_only(true);

        assert_eq!(area.insert_char('x').text(), "ab");
        assert_eq!(area.insert_text("yz").text(), "ab");
        assert_eq!(area.delete_backward().text(), "ab");
        assert_eq!(area.delete_forward().home(true).delete_forward().text(), "ab");
    }

    #[test]
    fn test_read_only_allows_navigation() {
        let area = text_area(Size::new(100, 64))
            .insert_text("ab\ncd")
            .set_read_only(true);
        assert_eq!(area.home(true).cursor().location, vloc(0, 0));
        assert_eq!(area.home(true).move_down().cursor().location, vloc(1, 0));
    }

    #[test]
    fn test_read_only_round_trip() {
        let area = text_area(Size::new(100, 64)).set_read_only(true);
        let area = area.set_read_only(false).insert_char('x');
        assert_eq!(area.text(), "x");
    }

    // ==================== Cursor follows edits ====================

    #[test]
    fn test_cursor_scrolls_into_view_when_typing() {
        // 2 visible rows
        let mut area = text_area(Size::new(100, 32));
        for _ in 0..5 {
            area = area.insert_text("x").enter();
        }
        assert!(area.is_cursor_in_view());
        assert!(area.viewport().scroll_index() > 0);
    }

    #[test]
    fn test_movement_scrolls_into_view() {
        let mut area = text_area(Size::new(100, 32));
        for _ in 0..5 {
            area = area.insert_text("x").enter();
        }
        let area = area.home(true);
        assert_eq!(area.viewport().scroll_index(), 0);
        assert!(area.is_cursor_in_view());
    }

    // ==================== Click ====================

    #[test]
    fn test_click_sets_cursor() {
        let area = text_area(Size::new(100, 64)).insert_text("ab\ncd");
        let area = area.click(PixelPosition::new(9, 20));
        assert_eq!(area.cursor().location, vloc(1, 1));
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let area = text_area(Size::new(100, 64)).insert_text("ab");
        let clicked = area.click(PixelPosition::new(200, 10));
        assert_eq!(clicked.cursor().location, area.cursor().location);
    }

    // ==================== Scroll commands ====================

    #[test]
    fn test_scroll_does_not_move_cursor() {
        let mut area = text_area(Size::new(100, 32));
        for _ in 0..5 {
            area = area.insert_text("x").enter();
        }
        let area = area.home(true).scroll_by(2);
        assert_eq!(area.viewport().scroll_index(), 2);
        assert_eq!(area.cursor().location, vloc(0, 0));
        assert!(!area.is_cursor_in_view());
    }

    #[test]
    fn test_scroll_page_commands() {
        let mut area = text_area(Size::new(100, 32));
        for _ in 0..6 {
            area = area.insert_text("x").enter();
        }
        let area = area.home(true);
        let down = area.scroll_page_down();
        assert_eq!(down.viewport().scroll_index(), 2);
        assert_eq!(down.scroll_page_up().viewport().scroll_index(), 0);
    }

    // ==================== Resize ====================

    #[test]
    fn test_resize_revalidates_cursor() {
        let area = text_area(Size::new(100, 64)).insert_text("abcdefghij");
        // end-of-line slot on the single unwrapped line
        assert_eq!(area.cursor().location, vloc(0, 10));

        let narrow = area.resize(Size::new(24, 64));
        // the old location no longer resolves; cursor falls back safely
        assert!(narrow
            .viewport()
            .location_check(narrow.cursor().location));
    }

    // ==================== Loading ====================

    #[test]
    fn test_load_text_resets() {
        let area = text_area(Size::new(100, 32)).insert_text("a\nb\nc\nd").scroll_to(2);
        let loaded = area.load_text("fresh");
        assert_eq!(loaded.text(), "fresh");
        assert_eq!(loaded.viewport().scroll_index(), 0);
        assert!(!loaded.is_modified());
        assert!(loaded
            .viewport()
            .location_check(loaded.cursor().location));
    }

    #[test]
    fn test_load_document_keeps_line_limit() {
        let area = TextArea::new(
            Font::monospace_ascii(8, 16),
            Size::new(100, 64),
            TextAreaOptions {
                max_line_len: Some(3),
                ..TextAreaOptions::default()
            },
        );
        let area = area.load_text("ab");
        let refused = area.end(false).insert_text("xy");
        assert_eq!(refused.text(), "ab");
    }

    // ==================== Options ====================

    #[test]
    fn test_options_serde_round_trip() {
        let options = TextAreaOptions {
            wrap: false,
            read_only: true,
            max_line_len: Some(120),
            limit_width: true,
            line_height: Some(18),
            content_padding: Padding::uniform(2),
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: TextAreaOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
