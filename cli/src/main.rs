mod config;
mod report;
mod tui;

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use ecohabit_core::{Analytics, AnalyticsService};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "ecohabit")]
#[command(about = "Track eco-friendly habits and chart them in the terminal", long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug", "ecohabit_core=trace"); overrides ECOHABIT_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory for ecohabit.log; overrides ECOHABIT_LOG_DIR
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Record the given habits in order and print the analytics
    /// (usage: report "Saved Water" 3 3 1)
    Report {
        /// Category labels, or their 1-based numbers from `categories`
        habits: Vec<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the tracked categories
    Categories,
}

fn open_log_file(config: &Config) -> Result<File> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log dir {}", config.log_dir.display()))?;
    let path = config.log_file();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Logs go to the file because the TUI owns stdout. When the file is
/// unusable the command still runs, with logging discarded.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("warning: invalid log filter '{}' ({}), using 'info'", config.log_filter, e);
        EnvFilter::new("info")
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match open_log_file(config) {
        Ok(file) => subscriber.with_writer(Mutex::new(file)).init(),
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            subscriber.with_writer(io::sink).init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.log_dir, cli.log_level)?;
    init_logging(&config);

    let mut service = AnalyticsService::default();

    match cli.command {
        Some(Commands::Report { habits, json }) => {
            report::replay(&mut service, &habits)?;

            match service.analytics() {
                Analytics::NoData(notice) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&notice)?);
                    } else {
                        eprintln!("{}: {}", notice.title, notice.message);
                    }
                }
                Analytics::Report(r) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&r)?);
                    } else {
                        report::print_report(&r);
                    }
                }
            }
        }
        Some(Commands::Categories) => {
            for (i, label) in service.categories().iter().enumerate() {
                println!("{:>2}. {}", i + 1, label);
            }
        }
        Some(Commands::Tui) | None => {
            tracing::info!("starting tui");
            tui::run(service, config.tick_rate)?;
        }
    }
    Ok(())
}
