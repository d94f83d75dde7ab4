// Chunk: docs/chunks/document_model - Master document data structure

//! flowedit-document: the immutable master document model.
//!
//! This crate provides the unwrapped ("master") side of the engine: symbols,
//! lines, and the document itself, along with character-granular insert and
//! delete operations. Everything here is a plain value type; every operation
//! returns a new value and reports exactly what changed, so a caller can
//! re-derive display state for only the affected lines.
//!
//! # Overview
//!
//! The main type is [`Document`], an ordered, never-empty sequence of
//! [`Line`]s with an implied line terminator *between* (never after)
//! adjacent lines. A line is an ordered sequence of [`Symbol`]s: one
//! character plus optional hidden style codes applied before and after it.
//!
//! # Example
//!
//! ```
//! use flowedit_document::{Document, DocumentLocation};
//!
//! let doc = Document::from_text("hello\nworld");
//! assert_eq!(doc.line_count(), 2);
//!
//! let outcome = doc.insert(DocumentLocation::new(0, 5), ", there");
//! assert!(outcome.changed);
//! assert_eq!(outcome.document.text(), "hello, there\nworld");
//! ```
//!
//! # Change Reporting
//!
//! Mutating operations never touch the receiver. [`Document::insert`]
//! returns an [`InsertOutcome`] carrying the new document, the inserted
//! range in master coordinates, and the range of line indices that were
//! replaced. [`Document::delete`] returns a [`DeleteOutcome`] with the cut
//! location and the number of lines removed. A refused insert (line length
//! limit) comes back with `changed == false` and the original document.

mod document;
mod line;
mod location;
mod symbol;

pub use document::{DeleteOutcome, Document, InsertOutcome};
pub use line::Line;
pub use location::{DocumentLocation, DocumentRange};
pub use symbol::{Symbol, SymbolStyle};
