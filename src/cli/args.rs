use crate::graph::{PropagationMode, UnknownSourcePolicy};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chainrank", version, about = "Rank items by transition mass over ordered sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log pipeline diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Configuration file (defaults to ./chainrank.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the transition graph, propagate, and print the rank table
    Rank {
        #[command(flatten)]
        inputs: InputArgs,
        /// Propagation steps (overrides config)
        #[arg(long)]
        steps: Option<usize>,
        /// Propagation recurrence (overrides config)
        #[arg(long, value_enum)]
        mode: Option<PropagationMode>,
        /// Rows shown in the report, 0 for all (overrides config)
        #[arg(long)]
        top: Option<usize>,
        /// Write the full rank table as JSON to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Print JSON instead of the coloured report
        #[arg(long)]
        json: bool,
    },
    /// Print the weighted edge table as JSON
    Edges {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Input tables handed over by the ETL layer.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON array of sequence rows (group + item columns)
    #[arg(long, value_name = "FILE")]
    pub sequences: PathBuf,
    /// JSON array of index rows (item + index columns, extras kept)
    #[arg(long, value_name = "FILE")]
    pub index: PathBuf,
    /// Handling of transitions whose source item is not indexed (overrides config)
    #[arg(long, value_enum)]
    pub unknown_source: Option<UnknownSourcePolicy>,
}

/// Arguments for the Rank command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct RankArgs {
    pub steps: Option<usize>,
    pub mode: Option<PropagationMode>,
    pub top: Option<usize>,
    pub out: Option<PathBuf>,
    pub json: bool,
}
