//! Aula theme admin CLI.
//!
//! One-off administrative invocations against a JSON-file config store:
//! seeding default settings, inspecting the effective display filter, and
//! dry-running the email-vs-theme matching.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use aula_kernel::config::{self, JsonFileConfigStore};
use aula_kernel::profile::DisplayFilter;
use aula_kernel::theme;

#[derive(Parser)]
#[command(name = "aula", about = "Aula theme layer admin commands")]
struct Cli {
    /// Path to the JSON config store.
    #[arg(long, default_value = "aula-config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the default theme settings into the config store.
    Seed,
    /// Print the effective display filter for the current settings.
    Filter,
    /// Print which theme the email-vs-theme mapping would assign.
    MatchTheme {
        /// Email address to match against the stored mapping.
        #[arg(long)]
        email: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = JsonFileConfigStore::load(&cli.config)
        .with_context(|| format!("failed to open config store {}", cli.config.display()))?;

    match cli.command {
        Command::Seed => {
            let written = aula_kernel::setup::seed_default_settings(&store);
            store.save().context("failed to save config store")?;
            println!("seeded {written} setting(s) into {}", store.path().display());
        }
        Command::Filter => {
            let filter = DisplayFilter::from_config(&store);
            println!("simplified profile page: {}", filter.is_simplified());
            for probe in ["report", "tool", "badges", "forum"] {
                println!("  component {probe}: {}", verdict(filter.allows(probe, None)));
            }
            for (component, module) in [("mod", "forum"), ("tool", "mobile")] {
                println!(
                    "  module {component}_{module}: {}",
                    verdict(filter.allows(component, Some(module)))
                );
            }
        }
        Command::MatchTheme { email } => {
            let mapping = config::email_theme_map(&store);
            // A dry run has no theme registry; treat every mapped theme as
            // installed.
            let installed: Vec<String> = mapping.iter().map(|(_, t)| t.clone()).collect();
            match theme::theme_for_email(&mapping, &email, &installed) {
                Some(theme) => println!("{email} -> {theme}"),
                None => println!("{email} -> no match"),
            }
        }
    }

    Ok(())
}

fn verdict(allowed: bool) -> &'static str {
    if allowed { "shown" } else { "excluded" }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
