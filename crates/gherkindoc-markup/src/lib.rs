//! reStructuredText building blocks for gherkindoc.
//!
//! This crate provides the pieces every generated document is assembled from:
//! - [`escape`] / [`escape_with_slashes`]: protect text from rST inline markup
//! - [`Document`]: ordered line buffer with section headers and write-if-changed
//! - [`hyperlink`]: anonymous embedded hyperlinks
//!
//! # Example
//!
//! ```
//! use gherkindoc_markup::{Document, INDENT_DEPTH, escape};
//!
//! let mut doc = Document::new();
//! doc.create_section(1, "Feature: Login");
//! doc.add_output(&escape("Users sign in with <email>"), 1, INDENT_DEPTH);
//! assert_eq!(
//!     doc.to_string(),
//!     "Feature: Login\n==============\n\n    Users sign in with \\<email\\>\n"
//! );
//! ```

mod document;
mod escape;

pub use document::{Document, INDENT_DEPTH, SECTION_UNDERLINES, WriteOutcome};
pub use escape::{TABLE_QUOTE, escape, escape_with_slashes, hyperlink};
