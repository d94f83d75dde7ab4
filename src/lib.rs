// Chunk: docs/chunks/textarea_commands - Top-level crate surface

//! flowedit: an immutable text document engine with soft wrapping and
//! visual cursor navigation.
//!
//! The engine keeps two synchronized views of one document: the logical,
//! unwrapped *master* document and a display-oriented *viewport* document
//! derived from it by automatic line wrapping. Edits are character
//! granular, report exactly which regions changed, and every value is
//! immutable - each operation returns a new snapshot.
//!
//! Hosts talk to [`TextArea`]: feed it commands (type, delete, move,
//! click, scroll, resize), hold the returned value, render from the
//! wrapped lines it exposes. The only capability a host must supply is
//! per-character pixel metrics, via [`Font`].
//!
//! ```
//! use flowedit::{Font, Size, TextArea, TextAreaOptions};
//!
//! let font = Font::monospace_ascii(8, 16);
//! let area = TextArea::new(font, Size::new(320, 240), TextAreaOptions::default());
//!
//! let area = area.insert_text("hello\nworld").move_left();
//! assert_eq!(area.text(), "hello\nworld");
//! ```

pub use flowedit_document::{
    DeleteOutcome, Document, DocumentLocation, DocumentRange, InsertOutcome, Line, Symbol,
    SymbolStyle,
};
pub use flowedit_textarea::{
    Cursor, Font, Glyph, Padding, PixelPosition, Size, TextArea, TextAreaOptions, Viewport,
    ViewportDelete, ViewportDocument, ViewportInsert, ViewportLine, ViewportLocation,
    ViewportRange, ViewportSymbol,
};
