use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use streams_cli::commands::{add, entries, import, streams};
use streams_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout();

    match &cli.command {
        Some(Commands::Streams { json }) => {
            let config = load_config(cli.config.as_deref())?;
            streams::run(&mut stdout, &config, *json)?;
        }
        Some(Commands::Entries(args)) => {
            let config = load_config(cli.config.as_deref())?;
            entries::run(&mut stdout, args, &config)?;
        }
        Some(Commands::Add(args)) => {
            let config = load_config(cli.config.as_deref())?;
            add::run(&mut stdout, args, &config)?;
        }
        Some(Commands::Import(args)) => {
            let config = load_config(cli.config.as_deref())?;
            import::run(&mut stdout, args, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
