//! Stats command implementation.
//!
//! Discovers data files and prints aggregate counts.

use std::io;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::output::Printer;
use crate::parser::Node;

/// Summarize the data files in a project
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Emit stats as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Stats {
    files: usize,
    nodes: usize,
    tokens: usize,
    max_depth: usize,
}

pub fn run(args: StatsArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let files = discovery.into_files()?;

    let mut stats = Stats {
        files: files.len(),
        ..Default::default()
    };

    for file in &files {
        for node in file.document.nodes() {
            tally(node, 1, &mut stats);
        }
    }

    if args.json {
        let text = serde_json::to_string_pretty(&stats).map_err(io::Error::other)?;
        println!("{}", text);
    } else {
        printer.info("Files", &stats.files.to_string());
        printer.info("Nodes", &stats.nodes.to_string());
        printer.info("Tokens", &stats.tokens.to_string());
        printer.info("Depth", &stats.max_depth.to_string());
    }

    Ok(())
}

fn tally(node: &Node, depth: usize, stats: &mut Stats) {
    stats.nodes += 1;
    stats.tokens += node.size();
    stats.max_depth = stats.max_depth.max(depth);

    for child in node.children() {
        tally(child, depth + 1, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Document;

    #[test]
    fn test_tally_counts_nodes_tokens_depth() {
        let doc = Document::parse("ship \"Kestrel\"\n\tbunks 12\n\t\tnote deep\nalso\n");

        let mut stats = Stats::default();
        for node in doc.nodes() {
            tally(node, 1, &mut stats);
        }

        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.tokens, 7);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_run_over_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ships.txt"), "ship X\n\tbunks 2\n").unwrap();

        let args = StatsArgs {
            paths: vec![dir.path().to_path_buf()],
            json: false,
        };

        run(args, &Printer::new()).unwrap();
    }
}
