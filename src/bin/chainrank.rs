use chainrank_core::cli::{self, Cli};
use chainrank_core::exit::ChainRankExit;
use clap::Parser;
use colored::Colorize;

fn main() -> ChainRankExit {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(ChainRankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            ChainRankExit::for_error(&e)
        }
    }
}
