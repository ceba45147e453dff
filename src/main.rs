use std::io::{self, BufRead, Read};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;

use grift::backend::client::HttpAnalysisClient;
use grift::config::Config;
use grift::output::terminal;
use grift::session::{SessionStore, Status};

/// Grift: scam-message risk analysis from the terminal.
///
/// Paste any email / SMS / chat message and get a 0-100 risk score, a
/// verdict, and the model's reasons, scored by a remote classification
/// service.
#[derive(Parser)]
#[command(name = "grift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single message
    Analyze {
        /// The message text (reads stdin when omitted)
        text: Option<String>,

        /// Emit the normalized result as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: analyze messages line by line
    Session,

    /// Check that the scoring backend is reachable
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grift=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { text, json } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };

            let client = HttpAnalysisClient::new(&config.api_url, config.timeout)?;
            let mut store = SessionStore::new(Box::new(client));

            let spinner = start_spinner("Analyzing...");
            store.submit(&text).await;
            spinner.finish_and_clear();

            let state = store.snapshot();
            if state.status == Status::Failed {
                anyhow::bail!(state.last_error.unwrap_or_default());
            }
            if let Some(result) = &state.latest_result {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    terminal::display_result(result);
                }
            }
        }

        Commands::Session => {
            let client = HttpAnalysisClient::new(&config.api_url, config.timeout)?;
            let mut store = SessionStore::new(Box::new(client));

            println!(
                "{}",
                "Paste a message and press Enter to analyze it.".bold()
            );
            println!("{}", "Commands: :history  :clear  :quit".dimmed());

            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read from stdin")?;

                match line.trim() {
                    ":quit" | ":q" => break,
                    ":history" => terminal::display_history(&store.state().history),
                    ":clear" => {
                        store.clear();
                        println!("Session cleared. History kept.");
                    }
                    _ => {
                        let spinner = start_spinner("Analyzing...");
                        store.submit(&line).await;
                        spinner.finish_and_clear();

                        let state = store.snapshot();
                        if let Some(error) = &state.last_error {
                            eprintln!("{}", error.red());
                        } else if let Some(result) = &state.latest_result {
                            terminal::display_result(result);
                        }
                    }
                }
            }

            terminal::display_history(&store.state().history);
        }

        Commands::Ping => {
            let client = HttpAnalysisClient::new(&config.api_url, config.timeout)?;
            match client.health().await {
                Ok(health) => {
                    println!(
                        "Backend at {} is {}",
                        config.api_url,
                        "up".green().bold()
                    );
                    if !health.message.is_empty() {
                        println!("  {}", health.message.dimmed());
                    }
                }
                Err(e) => {
                    anyhow::bail!("Backend at {} is unreachable: {e}", config.api_url);
                }
            }
        }
    }

    Ok(())
}

/// Read the whole of stdin as the message text.
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read message from stdin")?;
    Ok(text)
}

/// Spinner shown while an analysis is in flight.
fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
