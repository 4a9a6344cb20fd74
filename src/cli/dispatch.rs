//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Commands, RankArgs},
    handlers::{handle_config, handle_edges, handle_rank},
};
use crate::exit::ChainRankExit;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<ChainRankExit> {
    match command {
        Commands::Rank { inputs, steps, mode, top, out, json } => handle_rank(
            config_path,
            &inputs,
            RankArgs { steps, mode, top, out, json },
        ),
        Commands::Edges { inputs } => handle_edges(config_path, &inputs),
        Commands::Config => handle_config(config_path),
    }
}
