mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icsgen")]
#[command(about = "Build iCalendar (.ics) files from event descriptions")]
struct Cli {
    /// Config file (defaults to ~/.config/icsgen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a calendar file from a TOML file of [[events]]
    Build(commands::build::BuildArgs),
    /// Print a calendar containing a single event
    Event(commands::event::EventArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout can carry the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build(args) => commands::build::run(&cfg, args),
        Commands::Event(args) => commands::event::run(&cfg, args),
    }
}
