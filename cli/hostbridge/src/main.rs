//! hostbridge CLI — report the build target of the native extension and check
//! it against the project manifest.

mod commands;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hostbridge", version, about = "hostbridge build target inspection")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the platform and architecture this binary was built for
    Target {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check the build target against hostbridge.toml
    Check {
        /// Path to a manifest (default: search upward for hostbridge.toml)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// List recognized platform and architecture tags
    Tags,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Target { json } => commands::target::run(json),
        Commands::Check { manifest } => commands::check::run(&cwd, manifest.as_deref()),
        Commands::Tags => commands::tags::run(),
    }
}
