use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod cli;
mod core;
mod indices;
mod matching;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("precedent_matcher=debug,info")
    } else {
        EnvFilter::new("precedent_matcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::precedents::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Indices(args) => {
            cli::indices::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Archive(args) => {
            cli::archive::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
