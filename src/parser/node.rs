//! Tree nodes for parsed data files.

use std::io::{self, Write};

use super::value::parse_number;

/// One entry in a parsed data file.
///
/// A node corresponds to a single non-blank, non-comment source line. It
/// holds the verbatim line text, the tokens scanned from it, and the
/// entries nested under it by indentation. The tree is read-only once
/// loading completes; children own their subtrees exclusively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    raw: String,
    tokens: Vec<String>,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(raw: String, tokens: Vec<String>) -> Self {
        Self {
            raw,
            tokens,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Number of tokens on this node's line.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// The token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`. An out-of-range index is a caller
    /// bug, not a data error; callers are expected to check `size()`
    /// first.
    pub fn token(&self, index: usize) -> &str {
        assert!(
            index < self.tokens.len(),
            "token index {} out of range for node with {} tokens",
            index,
            self.tokens.len()
        );
        &self.tokens[index]
    }

    /// The token at `index` coerced to a number.
    ///
    /// Parses the longest numeric prefix of the token: `"3.5ly"` yields
    /// `3.5`, `"-2"` yields `-2.0`. A token with no numeric prefix at all
    /// yields NaN; callers must branch on that sentinel explicitly.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`, same contract as [`Node::token`].
    pub fn value(&self, index: usize) -> f64 {
        assert!(
            index < self.tokens.len(),
            "token index {} out of range for node with {} tokens",
            index,
            self.tokens.len()
        );
        parse_number(&self.tokens[index])
    }

    /// All tokens in line order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The verbatim source line, including its original leading
    /// whitespace, quoting, and any trailing comment text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Direct children in source order. Deeper traversal is recursive
    /// descent over each child's own children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Write this node's raw line followed by its subtree, in order.
    ///
    /// The raw text is emitted verbatim, not reconstructed from tokens,
    /// so a loaded document writes back out line-for-line identical to
    /// its source.
    pub fn write(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.raw)?;
        for child in &self.children {
            child.write(out)?;
        }
        Ok(())
    }
}
