//! Parser for indentation-structured data files.
//!
//! A data file is plain text where nesting is expressed by leading
//! whitespace: a line indented deeper than the one before it becomes a
//! child of that line. Each non-blank, non-comment line is scanned into
//! whitespace-separated tokens, with double quotes grouping a token that
//! may contain spaces:
//!
//! ```text
//! ship "Kestrel"
//! 	bunks 12
//! 	weapon "Blaster"
//! ```
//!
//! Parsing produces a [`Document`] owning a tree of [`Node`]s, one per
//! line. Every node keeps its verbatim source line, so writing a document
//! back out reproduces the input byte for byte, comments and quoting
//! style and stray whitespace included.
//!
//! The grammar is deliberately permissive. There is no reject path:
//! unterminated quotes, mixed tabs and spaces, and other oddities all
//! still produce exactly one node per line. The only failure mode when
//! loading is the underlying stream erroring out.
//!
//! # Usage
//!
//! ```ignore
//! use grove::parser::Document;
//!
//! let doc = Document::load("data/ships.txt")?;
//! for node in doc.nodes() {
//!     if node.size() >= 2 && node.token(0) == "ship" {
//!         println!("found ship: {}", node.token(1));
//!     }
//! }
//! ```

mod document;
mod node;
mod tokens;
mod value;

pub use document::Document;
pub use node::Node;
pub use value::parse_number;
