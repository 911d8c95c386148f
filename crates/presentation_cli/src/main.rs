//! PackPilot CLI
//!
//! Command-line interface for generating weather-aware packing checklists.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::ChecklistService;
use clap::{Parser, Subcommand};
use domain::TripRequest;
use infrastructure::{AppConfig, CompletionAdapter, WeatherAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PackPilot CLI
#[derive(Parser)]
#[command(name = "packpilot")]
#[command(author, version, about = "Weather-aware trip packing assistant", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a packing checklist for a trip
    Pack {
        /// Destination (free-text place name, e.g. "Paris, France")
        location: String,

        /// Trip length in days
        #[arg(short, long, default_value_t = 7)]
        days: u32,

        /// Trip category (e.g. leisure, business, hiking)
        #[arg(short, long, default_value = "leisure")]
        trip_type: String,
    },

    /// Check that both providers are reachable
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format a checklist item as a checkbox line
fn checkbox_line(item: &str) -> String {
    format!("  [ ] {item}")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let weather = WeatherAdapter::new(config.weather)?;
    let completion = CompletionAdapter::new(config.completion)?;
    let service = ChecklistService::new(Arc::new(weather), Arc::new(completion))
        .with_truncation_policy(config.checklist.truncation);

    match cli.command {
        Commands::Pack {
            location,
            days,
            trip_type,
        } => {
            let request = TripRequest::new(location, days, &trip_type)?;

            println!("🧳 Packing for {request}...");

            let list = service.generate(&request).await;

            if list.is_placeholder() {
                for item in &list {
                    println!("❌ {item}");
                }
                std::process::exit(1);
            }

            println!();
            for item in &list {
                println!("{}", checkbox_line(item));
            }
            println!();
            println!("📋 {} items", list.len());
        },

        Commands::Health => {
            let weather_ok = service.weather_available().await;
            let completion_ok = service.completion_available().await;

            println!(
                "{} Weather provider",
                if weather_ok { "✅" } else { "❌" }
            );
            println!(
                "{} Recommendation provider",
                if completion_ok { "✅" } else { "❌" }
            );

            if !(weather_ok && completion_ok) {
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
