mod extract;
mod fetch;
mod output;
mod profile;
mod record;

use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use crate::fetch::PageFetcher;
use crate::profile::{ClinicProfile, PROFILE_NAMES};

#[derive(Parser)]
#[command(
    name = "clinic_scraper",
    about = "Clinic website scraper for prompt-generation snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape one clinic profile and write its JSON snapshot
    Run {
        /// Profile name (see `profiles`)
        profile: String,
    },
    /// List known clinic profiles
    Profiles,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { profile } => run(&profile).await,
        Commands::Profiles => {
            for name in PROFILE_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("Scraping failed: {:#}", e);
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn run(name: &str) -> Result<()> {
    let profile = ClinicProfile::by_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown profile '{}' (known: {})",
            name,
            PROFILE_NAMES.join(", ")
        )
    })?;

    let fetcher = PageFetcher::new()?;
    let record = extract::run_profile(&fetcher, &profile).await;

    output::save_json(&record, &profile.output_file)?;
    output::print_summary(&record);

    Ok(())
}
