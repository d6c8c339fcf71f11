//! Rich-text document model and on-disk store
//!
//! The model mirrors the regions a word-processor document exposes: body
//! paragraphs and tables, plus a header and footer per section. Paragraphs
//! are sequences of styled runs; the engine only ever reads a paragraph's
//! concatenated text and writes it back whole, so run boundaries inside a
//! paragraph never hide a placeholder.
//!
//! The store persists the model as a JSON tree. Any backend that can open a
//! file into this model and save it back satisfies the engine's needs; the
//! substitution code never touches the on-disk format directly.

pub mod model;
pub mod store;

pub use model::{Body, Cell, Document, HeaderFooter, Paragraph, Row, Run, Section, Table};
pub use store::{open_document, save_document};
