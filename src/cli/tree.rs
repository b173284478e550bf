//! Tree command implementation.
//!
//! Prints the parsed structure of a data file to stdout, one node per
//! line with nesting shown by indentation, or as JSON with `--json`.

use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::{Document, Node};

/// Print the parsed structure of a data file
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Data file to print
    pub file: PathBuf,

    /// Emit the tree as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TreeArgs) -> Result<()> {
    let document = Document::load(&args.file)?;

    if args.json {
        let value = document_to_json(&document);
        let text = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
        println!("{}", text);
    } else {
        for node in document.nodes() {
            print_node(node, 0);
        }
    }

    Ok(())
}

fn print_node(node: &Node, depth: usize) {
    println!("{}{:?}", "  ".repeat(depth), node.tokens());
    for child in node.children() {
        print_node(child, depth + 1);
    }
}

/// Render a document as a JSON array of `{tokens, children}` objects.
pub fn document_to_json(document: &Document) -> serde_json::Value {
    serde_json::Value::Array(document.nodes().iter().map(node_to_json).collect())
}

fn node_to_json(node: &Node) -> serde_json::Value {
    serde_json::json!({
        "tokens": node.tokens(),
        "children": node.children().iter().map(node_to_json).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_to_json_shape() {
        let doc = Document::parse("ship \"Kestrel\"\n\tbunks 12\n");

        let value = document_to_json(&doc);

        let ship = &value[0];
        assert_eq!(ship["tokens"][0], "ship");
        assert_eq!(ship["tokens"][1], "Kestrel");
        assert_eq!(ship["children"][0]["tokens"][1], "12");
    }

    #[test]
    fn test_empty_document_is_empty_array() {
        let doc = Document::parse("# nothing here\n");

        let value = document_to_json(&doc);

        assert_eq!(value, serde_json::json!([]));
    }
}
