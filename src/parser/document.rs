//! Data file loading.
//!
//! A document is built in a single forward pass over its lines. The
//! builder keeps a stack of pending ancestors paired with the indentation
//! depth each was seen at; a new line at depth `n` attaches to the
//! nearest pending ancestor with a strictly smaller depth. Blank lines
//! and comment lines are dropped before the stack is touched, so they
//! never re-parent the lines around them.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{GroveError, Result};

use super::node::Node;
use super::tokens::scan_line;

/// A parsed data file: an ordered tree of tokenized lines.
///
/// The synthetic root that owns the top-level entries is internal; it has
/// no tokens and no raw text and is never exposed as a real entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Load a data file from disk.
    ///
    /// The file is opened, read fully, and closed within this call. A
    /// stream failure surfaces as an error with no partial tree.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GroveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to open data file: {}", e),
        })?;

        Self::from_reader(BufReader::new(file))
    }

    /// Load a data file from an already-open reader.
    ///
    /// For callers that manage the underlying resource themselves.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut builder = TreeBuilder::new();

        for line in reader.lines() {
            builder.push_line(line?);
        }

        Ok(Self {
            root: builder.finish(),
        })
    }

    /// Parse a document already held in memory.
    ///
    /// The grammar has no reject path: every input produces a tree, so
    /// once the text is in memory there is nothing left to fail and this
    /// entry point is infallible.
    pub fn parse(source: &str) -> Self {
        let mut builder = TreeBuilder::new();

        for line in source.lines() {
            builder.push_line(line.to_string());
        }

        Self {
            root: builder.finish(),
        }
    }

    /// Top-level entries in source order.
    pub fn nodes(&self) -> &[Node] {
        self.root.children()
    }

    /// Whether the document has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    /// Write every entry back out, reproducing the source line for line.
    ///
    /// Blank and comment-only lines were dropped at load time; everything
    /// else round-trips byte-exact because each node emits its verbatim
    /// raw text.
    pub fn write(&self, out: &mut impl Write) -> io::Result<()> {
        for node in self.root.children() {
            node.write(out)?;
        }
        Ok(())
    }
}

/// Transient construction state. The parent back-references live only
/// here; the finished tree has strictly downward ownership.
struct TreeBuilder {
    /// Pending nodes paired with the indentation depth each was seen at.
    /// The bottom entry is the synthetic root at sentinel depth -1, which
    /// no real line can match, so the stack never fully empties.
    stack: Vec<(isize, Node)>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![(-1, Node::default())],
        }
    }

    fn push_line(&mut self, line: String) {
        let mut white = 0usize;
        let mut first = None;
        for ch in line.chars() {
            // Tab and space (and any other control character) weigh the
            // same: indentation is a raw count of leading characters at
            // or below the space code point.
            if ch <= ' ' {
                white += 1;
            } else {
                first = Some(ch);
                break;
            }
        }

        // Blank and comment-only lines produce no node and leave the
        // pending ancestors untouched.
        match first {
            None | Some('#') => return,
            Some(_) => {}
        }

        // Close out every pending node at this depth or deeper; the new
        // line becomes a child of the nearest shallower ancestor.
        while self
            .stack
            .last()
            .is_some_and(|(depth, _)| *depth >= white as isize)
        {
            self.attach_top();
        }

        let tokens = scan_line(&line, white);
        self.stack.push((white as isize, Node::new(line, tokens)));
    }

    /// Pop the deepest pending node and attach it to its parent, which is
    /// the next entry down the stack.
    fn attach_top(&mut self) {
        if let Some((_, node)) = self.stack.pop() {
            if let Some((_, parent)) = self.stack.last_mut() {
                parent.push_child(node);
            }
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.attach_top();
        }

        match self.stack.pop() {
            Some((_, root)) => root,
            None => Node::default(),
        }
    }
}
