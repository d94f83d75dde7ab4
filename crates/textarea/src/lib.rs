// Chunk: docs/chunks/soft_wrap - Wrap engine, viewport, cursor, command surface

//! flowedit-textarea: the display side of the engine.
//!
//! This crate derives a wrapped "viewport" document from a master
//! [`Document`](flowedit_document::Document), maps locations between the
//! two coordinate systems, and drives a cursor that navigates by visual
//! position. The top-level [`TextArea`] bundles everything behind the
//! command surface a host UI talks to.
//!
//! # Layering
//!
//! Leaves first, each layer read-only with respect to the ones above it:
//!
//! - [`Font`]: per-character pixel metrics (a measure capability, not a
//!   rasterizer).
//! - [`ViewportLine`] / [`wrap`]: one wrapped segment of one master line,
//!   and the scan that produces segments.
//! - [`ViewportDocument`]: the wrapped line list plus master↔viewport
//!   location mapping and pixel↔location math.
//! - [`Cursor`]: visual navigation over a viewport document, including the
//!   remembered column for vertical movement.
//! - [`Viewport`]: master + derived viewport document + scroll state, and
//!   the insert/delete coordination between them.
//! - [`TextArea`]: viewport + cursor behind pure command transforms.
//!
//! Every value is immutable; each command returns a new value. Hosts hold
//! one current `TextArea` and replace it wholesale after each command.

mod cursor;
mod font;
mod geometry;
mod text_area;
mod viewport;
mod viewport_document;
mod viewport_line;
pub mod wrap;

pub use cursor::Cursor;
pub use font::{Font, Glyph};
pub use geometry::{Padding, PixelPosition, Size};
pub use text_area::{TextArea, TextAreaOptions};
pub use viewport::{Viewport, ViewportDelete, ViewportInsert};
pub use viewport_document::{ViewportDocument, ViewportLocation, ViewportRange};
pub use viewport_line::{ViewportLine, ViewportSymbol};
