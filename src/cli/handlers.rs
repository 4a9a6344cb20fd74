// src/cli/handlers.rs
use crate::cli::args::{InputArgs, RankArgs};
use crate::config::Config;
use crate::exit::ChainRankExit;
use crate::graph::{prepare_transitions, PropagationMode};
use crate::io;
use crate::pipeline::{self, RankRun};
use crate::reporting;
use crate::table::{IndexTable, Record, SequenceTable};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// JSON shape of `rank --json`.
#[derive(Debug, Serialize)]
struct RankOutput {
    items: usize,
    transitions: usize,
    steps: usize,
    mode: PropagationMode,
    trace: Vec<f64>,
    ranks: Vec<Record>,
}

impl RankOutput {
    fn new(run: &RankRun, config: &Config) -> Self {
        Self {
            items: run.dimension(),
            transitions: run.edges.len(),
            steps: config.propagation.steps,
            mode: config.propagation.mode,
            trace: run.propagation.trace.clone(),
            ranks: run.ranks.iter().map(|r| r.to_record(&config.columns.item)).collect(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn load_tables(inputs: &InputArgs, config: &Config) -> Result<(SequenceTable, IndexTable)> {
    let sequence_records = io::read_records(&inputs.sequences)
        .with_context(|| format!("reading sequences from {}", inputs.sequences.display()))?;
    let index_records = io::read_records(&inputs.index)
        .with_context(|| format!("reading index from {}", inputs.index.display()))?;

    let sequences = SequenceTable::from_records(&sequence_records, &config.columns)?;
    let index = IndexTable::from_records(&index_records, &config.columns)?;
    Ok((sequences, index))
}

fn apply_input_overrides(config: &mut Config, inputs: &InputArgs) {
    if let Some(policy) = inputs.unknown_source {
        config.propagation.unknown_source = policy;
    }
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if inputs cannot be loaded or violate a precondition.
pub fn handle_rank(
    config_path: Option<&Path>,
    inputs: &InputArgs,
    args: RankArgs,
) -> Result<ChainRankExit> {
    let mut config = load_config(config_path)?;
    apply_input_overrides(&mut config, inputs);
    if let Some(steps) = args.steps {
        config.propagation.steps = steps;
    }
    if let Some(mode) = args.mode {
        config.propagation.mode = mode;
    }
    if let Some(top) = args.top {
        config.report.top = top;
    }

    let (sequences, index) = load_tables(inputs, &config)?;
    let started = Instant::now();
    let run = pipeline::run(&sequences, &index, &config)?;
    let elapsed = started.elapsed();

    if let Some(out) = &args.out {
        io::write_rank_table(out, &run.ranks, &config.columns.item)?;
    }

    if args.json {
        reporting::print_json(&RankOutput::new(&run, &config))?;
    } else {
        reporting::print_report(&run, &config.report, elapsed);
        if let Some(out) = &args.out {
            println!("{} Rank table written to {}", "->".blue(), out.display());
        }
    }

    Ok(ChainRankExit::Success)
}

/// Handles the edges command.
///
/// # Errors
/// Returns error if inputs cannot be loaded or violate a precondition.
pub fn handle_edges(config_path: Option<&Path>, inputs: &InputArgs) -> Result<ChainRankExit> {
    let mut config = load_config(config_path)?;
    apply_input_overrides(&mut config, inputs);

    let (sequences, index) = load_tables(inputs, &config)?;
    let edges = prepare_transitions(&sequences, &index, config.propagation.unknown_source)?;
    reporting::print_json(&edges)?;
    Ok(ChainRankExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the configuration cannot be loaded or rendered.
pub fn handle_config(config_path: Option<&Path>) -> Result<ChainRankExit> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(ChainRankExit::Success)
}
