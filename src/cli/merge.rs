//! Merge command implementation.
//!
//! Concatenates the top-level entries of several data files into one
//! output, in argument order. Nodes emit their verbatim raw lines, so
//! the merged file is a byte-exact concatenation of the inputs minus
//! their blank and comment lines.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{GroveError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::Document;

/// Concatenate data files into one, preserving raw lines
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Input data files, merged in argument order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: MergeArgs, printer: &Printer) -> Result<()> {
    let mut merged: Vec<u8> = Vec::new();
    let mut entries = 0usize;

    for file in &args.files {
        let document = Document::load(file)?;
        entries += document.nodes().len();
        document.write(&mut merged)?;
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &merged).map_err(|e| GroveError::Io {
                path: path.clone(),
                message: format!("Failed to write output: {}", e),
            })?;

            printer.status(
                "Merged",
                &format!(
                    "{} {} {}",
                    plural(entries, "entry", "entries"),
                    printer.dim("->"),
                    display_path(path)
                ),
            );
        }
        None => {
            io::stdout().write_all(&merged)?;
        }
    }

    Ok(())
}
