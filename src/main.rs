use anyhow::Result;
use clap::Parser;
use methodloc::cli::Cli;
use methodloc::commands::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    methodloc::observability::init_tracing(cli.verbosity)?;

    let current_dir = std::env::current_dir()?;
    let mut config = methodloc::config::load_config(cli.config.as_deref(), &current_dir)?;
    if cli.no_parallel {
        config.parallel = false;
    }

    handle_analyze(AnalyzeConfig {
        path: cli.path,
        config,
    })
}
