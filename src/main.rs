use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::{info, warn};

use live_scoreboard::config::{Config, OutputFormat};
use live_scoreboard::script::ScriptRunner;
use live_scoreboard::{report, Match, MatchRegistry};

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let script = match &config.script {
        Some(path) => {
            info!("Replaying script {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?
        }
        None => {
            info!("Replaying script from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let mut registry = MatchRegistry::new();
    let outcome = ScriptRunner::new(&mut registry, config.keep_going).run(&script)?;

    for snapshot in &outcome.snapshots {
        print_summary(snapshot, config.format)?;
    }
    print_summary(&outcome.final_summary, config.format)?;

    if !outcome.rejected.is_empty() {
        warn!("{} command(s) were rejected", outcome.rejected.len());
    }

    Ok(())
}

fn print_summary(summary: &[Match], format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => report::render_text(summary),
        OutputFormat::Json => report::render_json(summary)?,
    };
    println!("{}", rendered);
    Ok(())
}
