//! Validate command implementation.
//!
//! Parses data files and reports lint warnings. The parser accepts
//! everything, so validation can only fail in strict mode (or on
//! unreadable files).

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{GroveError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::{Document, Node};
use crate::validation::{print_diagnostics, validate_source};

/// Validate data files and report lint warnings
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let strict = args.strict || discovery.manifest.strict;

    let mut files = 0usize;
    let mut nodes = 0usize;
    let mut warnings = 0usize;

    for path in &discovery.scan.files {
        let source = fs::read_to_string(path).map_err(|e| GroveError::Io {
            path: path.clone(),
            message: format!("Failed to read data file: {}", e),
        })?;

        let name = display_path(path);
        printer.status("Validating", &name);

        let document = Document::parse(&source);
        files += 1;
        nodes += count_nodes(document.nodes());

        let result = validate_source(&source);
        if !result.is_ok() {
            print_diagnostics(&name, &result);
        }
        warnings += result.warning_count();
    }

    printer.status(
        "Validated",
        &format!(
            "{}, {}",
            plural(files, "file", "files"),
            plural(nodes, "node", "nodes")
        ),
    );

    if warnings > 0 {
        printer.warning("Warnings", &plural(warnings, "lint warning", "lint warnings"));

        if strict {
            return Err(GroveError::Validation {
                message: format!("{} in strict mode", plural(warnings, "warning", "warnings")),
                help: Some("Fix the warnings above, or drop --strict".to_string()),
            });
        }
    }

    Ok(())
}

fn count_nodes(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(n.children())).sum()
}
