pub mod completions;
pub mod merge;
pub mod stats;
pub mod tree;
pub mod validate;

use clap::{Parser, Subcommand};

/// grove - Indentation-structured data file toolkit
#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate data files and report lint warnings
    Validate(validate::ValidateArgs),

    /// Print the parsed structure of a data file
    Tree(tree::TreeArgs),

    /// Concatenate data files into one, preserving raw lines
    Merge(merge::MergeArgs),

    /// Summarize the data files in a project
    Stats(stats::StatsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
