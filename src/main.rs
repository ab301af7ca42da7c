//! InputGate CLI
//!
//! Command-line interface for the input watcher. Provides a one-shot check
//! of the enablement rule and an interactive TUI demo.

use clap::{Parser, Subcommand};
use console::style;
use inputgate::{compute_disabled, WatchConfig};
use std::path::PathBuf;

/// InputGate - search-input watcher
///
/// Gates a search button's disabled attribute on whether the adjacent
/// text input holds a non-blank query.
#[derive(Parser)]
#[command(name = "inputgate")]
#[command(author = "InputGate Contributors")]
#[command(version)]
#[command(about = "Search-input watcher with an interactive demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive TUI demo
    Demo {
        /// Path to a JSON config file with element ids
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Id of the watched text input
        #[arg(long)]
        input_id: Option<String>,

        /// Id of the gated button
        #[arg(long)]
        button_id: Option<String>,
    },

    /// Evaluate the enablement rule for a single value
    Check {
        /// Input value to check (use -- before the value if it starts with -)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() {
    // Initialize logging
    inputgate::logging::init();
    inputgate::logging::info("MAIN", "InputGate starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo {
            config,
            input_id,
            button_id,
        } => cmd_demo(config, input_id, button_id),

        Commands::Check { value, output } => cmd_check(&value, &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Demo command implementation
fn cmd_demo(
    config_path: Option<PathBuf>,
    input_id: Option<String>,
    button_id: Option<String>,
) -> inputgate::Result<()> {
    let mut config = match config_path {
        Some(path) => WatchConfig::load(&path)?,
        None => WatchConfig::default(),
    };

    if let Some(id) = input_id {
        config.input_id = id;
    }
    if let Some(id) = button_id {
        config.button_id = id;
    }

    inputgate::logging::separator("demo session");
    inputgate::tui::run(config)?;
    inputgate::logging::flush();
    Ok(())
}

/// Check command implementation
fn cmd_check(value: &str, output_format: &str) -> inputgate::Result<()> {
    let disabled = compute_disabled(value);

    if output_format == "json" {
        println!(
            "{}",
            serde_json::json!({
                "value": value,
                "trimmed": value.trim(),
                "disabled": disabled,
            })
        );
    } else if disabled {
        println!(
            "{} '{}' is blank - search button stays {}",
            style("\u{2717}").red().bold(),
            value,
            style("disabled").red()
        );
    } else {
        println!(
            "{} '{}' - search button becomes {}",
            style("\u{2713}").green().bold(),
            value,
            style("enabled").green()
        );
    }

    Ok(())
}
