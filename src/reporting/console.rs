use crate::config::ReportConfig;
use crate::pipeline::RankRun;
use crate::reporting::shared::{format_mass, format_trace, pluralize, visible_rows};
use colored::Colorize;
use std::time::Duration;

/// Prints graph statistics, the divergence trace, and the top of the rank table.
pub fn print_report(run: &RankRun, config: &ReportConfig, elapsed: Duration) {
    print_graph_stats(run);
    if config.show_trace {
        print_trace(&run.propagation.trace);
    }
    print_rank_table(run, config.top);
    print_summary(run, elapsed);
}

fn print_graph_stats(run: &RankRun) {
    let n = run.dimension();
    println!("{}", "GRAPH".cyan().bold());
    println!("   {} {} {}", "=".blue(), n, pluralize("item", n));
    println!(
        "   {} {} {}",
        "=".blue(),
        run.edges.len(),
        pluralize("transition", run.edges.len())
    );
    println!(
        "   {} {} seeded {}, {} dangling",
        "=".blue(),
        run.seeded(),
        pluralize("source", run.seeded()),
        run.matrix.dangling_rows().len()
    );
    println!("   {} {} nonzero coordinates", "=".blue(), run.matrix.nnz());
    println!();
}

fn print_trace(trace: &[f64]) {
    println!("{}", "TRACE".cyan().bold());
    if trace.is_empty() {
        println!("   {} {}", "|".blue(), "no propagation steps".dimmed());
    } else {
        println!("   {} {}", "|".blue(), format_trace(trace).dimmed());
    }
    println!();
}

fn print_rank_table(run: &RankRun, top: usize) {
    let shown = visible_rows(run.ranks.len(), top);
    println!("{}", "RANKS".cyan().bold());
    println!(
        "   {:>5}  {:>10}  {:>7}  {}",
        "rank".dimmed(),
        "mass".dimmed(),
        "index".dimmed(),
        "item".dimmed()
    );

    for record in run.ranks.iter().take(shown) {
        let mass = format_mass(record.mass);
        let mass = if record.mass > 0.0 { mass.green() } else { mass.dimmed() };
        println!(
            "   {:>5}  {:>10}  {:>7}  {}",
            record.rank.to_string().yellow(),
            mass,
            record.index,
            record.item
        );
    }

    let hidden = run.ranks.len() - shown;
    if hidden > 0 {
        println!(
            "   {}",
            format!("... {hidden} more {}", pluralize("item", hidden)).dimmed()
        );
    }
    println!();
}

fn print_summary(run: &RankRun, elapsed: Duration) {
    let n = run.dimension();
    if n == 0 {
        println!("{} No items to rank ({elapsed:?}).", "~".yellow().bold());
        return;
    }
    if run.edges.is_empty() {
        println!(
            "{} Ranked {n} {} but found no transitions ({elapsed:?}).",
            "~".yellow().bold(),
            pluralize("item", n)
        );
        return;
    }
    println!(
        "{} Ranked {n} {} in {elapsed:?}.",
        "OK".green().bold(),
        pluralize("item", n)
    );
}
