use anyhow::Result;
use clap::{Parser, Subcommand};
use dcalc::OutputFormat;
use dcalc::commands;
use dcalc::config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dcalc")]
#[command(about = "Compute the time between two MM/DD/YY, HH:MM:SS AM/PM timestamps")]
#[command(version)]
struct Cli {
    /// Log filter (overrides the config file; RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for timestamps until told to stop (default)
    Interactive,

    /// Calculate a single duration
    Calc {
        #[arg(help = "Start timestamp, e.g. \"5/22/25, 9:54:05 AM\"")]
        start: String,
        #[arg(help = "End timestamp, e.g. \"5/22/25, 1:06:07 PM\"")]
        end: String,
        #[arg(long, value_enum, help = "Output format (defaults to output.format)")]
        format: Option<OutputFormat>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(&level);

    if let Err(e) = &loaded {
        tracing::warn!("Ignoring config file, using defaults: {:#}", e);
    }

    match &cli.command {
        None | Some(Commands::Interactive) => {
            commands::interactive::run(&config.prompt)?;
        }
        Some(Commands::Calc { start, end, format }) => {
            let format = format.unwrap_or(config.output.format);
            if !commands::calc::calc(start, end, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
