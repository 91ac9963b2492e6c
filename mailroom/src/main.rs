//! Interactive donor tracker.
//!
//! Seeds the registry from `mailroom.toml` (or the built-in donor history),
//! then runs the menu loop on stdin/stdout until the user quits.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use mailroom::core::registry::Registry;
use mailroom::exit_codes;
use mailroom::io::config::{DEFAULT_CONFIG_FILE, load_config};
use mailroom::logging;
use mailroom::shell::Shell;

#[derive(Parser)]
#[command(
    name = "mailroom",
    version,
    about = "Record donations, print donor reports and write thank-you letters"
)]
struct Cli {
    /// Configuration file; skipped if it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory for thank-you letters (default: system temp directory).
    #[arg(long)]
    letters_dir: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let seeds = config.seeds()?;
    let registry = Registry::seeded(&seeds).context("seed donor registry")?;
    let letters_dir = cli.letters_dir.unwrap_or_else(|| config.letters_dir());
    debug!(
        donors = registry.len(),
        letters_dir = %letters_dir.display(),
        "starting session"
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(registry, letters_dir, stdin.lock(), io::stdout());
    shell.run()
}
