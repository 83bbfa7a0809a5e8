//! Minimal CLI entrypoint for SignalSim.
//! Drives the ingestion pipeline for one pasted Telegram message and prints
//! the resulting rows the way the demo table renders them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use signalsim::config::Config;
use signalsim::lookup::CoinLookupTable;
use signalsim::pipeline::IngestionPipeline;
use signalsim::shell::ShellState;
use signalsim::utils::logging::init_logging;
use signalsim::utils::types::DisplayRow;

#[derive(Debug, Parser)]
#[command(name = "signalsim", author, version, about = "SignalSim CLI", long_about = None)]
struct Args {
    /// Path to the configuration file (TOML)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Print the default configuration to stdout and exit
    #[arg(long)]
    print_default_config: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one Telegram message through the ingestion pipeline
    Simulate {
        /// Message text; read from stdin when omitted
        #[arg(long)]
        message: Option<String>,
    },
    /// Generate a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "config.toml")]
        config: String,
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        println!("{}", Config::default_toml()?);
        return Ok(());
    }

    match args.command {
        Some(Command::Init { config, force }) => {
            let path = Path::new(&config);
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", config);
            }
            Config::default()
                .save(path)
                .context("writing default configuration")?;
            println!("Wrote default configuration to {}", config);
            Ok(())
        }
        Some(Command::Simulate { message }) => {
            let config = load_config(&args.config)?;
            init_logging(&config.app.log_level);
            simulate(&config, message).await
        }
        None => anyhow::bail!("no command given (try --help)"),
    }
}

fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Config::load(path).with_context(|| format!("loading {}", path))
    } else {
        Ok(Config::default())
    }
}

async fn simulate(config: &Config, message: Option<String>) -> Result<()> {
    let message = match message {
        Some(m) => m,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading message from stdin")?;
            buf
        }
    };

    let coins = match &config.coins.dataset_path {
        Some(path) => CoinLookupTable::from_path(path)
            .with_context(|| format!("loading coin dataset {}", path))?,
        None => CoinLookupTable::bundled().clone(),
    };

    let pipeline = IngestionPipeline::new(
        &config.services.inference_url,
        &config.services.processing_url,
        coins,
    )?;

    let mut shell = ShellState::new();
    shell.set_telegram_message(message.trim());
    shell.simulate(&pipeline).await;

    if let Some(note) = shell.take_notification() {
        eprintln!("{}", note.text.red());
        std::process::exit(1);
    }

    print_rows(shell.rows());
    println!("{}", "Simulation complete.".green());
    Ok(())
}

fn print_rows(rows: &[DisplayRow]) {
    println!(
        "{:<8} {:<8} {:<14} {:>14} {:>10} {:>10} {:>10} {:>14} {:>8}",
        "Signal", "Token", "Token ID", "Current", "TP1", "TP2", "SL", "Exit", "P&L"
    );
    for row in rows {
        println!(
            "{:<8} {:<8} {:<14} {:>14} {:>10} {:>10} {:>10} {:>14} {:>8}",
            row.signal.as_deref().unwrap_or("-"),
            row.token_symbol.as_deref().unwrap_or("-"),
            row.token_id.as_deref().unwrap_or("-"),
            fmt_price(row.current_price),
            fmt_price(row.tp1),
            fmt_price(row.tp2),
            fmt_price(row.sl),
            fmt_value(row.exit_price.as_ref()),
            fmt_value(row.p_and_l.as_ref()),
        );
    }
}

fn fmt_price(value: Option<f64>) -> String {
    value
        .map(|p| format!("{:.6}", p))
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
