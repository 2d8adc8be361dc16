//! # DP Headline Tracker
//!
//! A scraper that records the top headline of The Daily Pennsylvanian's
//! News section into a persistent, date-keyed JSON archive.
//!
//! ## Features
//!
//! - Two-hop scrape: discovers the News section URL from the homepage,
//!   then extracts the lead headline from the News page
//! - Append-only, per-date archive: each run adds at most one headline
//!   under today's date, preserving everything recorded before
//! - Forgiving load path: a missing or corrupt archive file starts the
//!   run with an empty archive instead of failing
//!
//! ## Usage
//!
//! ```sh
//! dp_headline_tracker -d ./data
//! ```
//!
//! ## Architecture
//!
//! Each run is one sequential pass:
//! 1. **Bootstrap**: Ensure the data directory exists and is writable
//! 2. **Load**: Read the existing archive (empty if missing or corrupt)
//! 3. **Scrape**: Fetch homepage → News section → lead headline
//! 4. **Persist**: Append under today's date and rewrite the archive
//!
//! A run with no headline found is still a successful run; only an
//! unwritable data directory or a failed archive write exits non-zero.
//! Scheduling the run (e.g. once daily) is left to cron or similar.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod models;
mod scrapers;
mod store;
mod utils;

use cli::Cli;
use store::LoadOutcome;
use utils::{ensure_writable_dir, today_key};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_tracker starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.data_dir, ?args.archive_file, ?args.homepage_url, "Parsed CLI arguments");

    // Early check: ensure the data directory is writable
    if let Err(e) = ensure_writable_dir(Path::new(&args.data_dir)).await {
        error!(
            path = %args.data_dir,
            error = %e,
            "Data directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Load the archive ----
    let archive_path = args.archive_path();
    let (mut archive, outcome) = store::load(&archive_path).await;
    if outcome == LoadOutcome::Corrupt {
        warn!(
            path = %archive_path.display(),
            "Previous archive contents are unusable; the next write replaces them"
        );
    }

    // ---- Scrape ----
    let headline = match scrapers::thedp::scrape_top_headline(&args.homepage_url).await {
        Ok(found) => found,
        Err(e) => {
            warn!(error = %e, "Scrape failed; recording nothing for this run");
            None
        }
    };

    // ---- Record and persist ----
    match headline {
        Some(text) => {
            let date = today_key();
            archive.record(&date, &text);

            if let Err(e) = store::persist(&archive, &archive_path).await {
                error!(
                    path = %archive_path.display(),
                    error = %e,
                    "Failed to persist archive; today's observation is lost"
                );
                return Err(e);
            }

            let observations_today = archive.headlines_for(&date).map_or(0, <[String]>::len);
            info!(
                %date,
                headline = %text,
                observations_today,
                dates = archive.date_count(),
                headlines = archive.headline_count(),
                "Recorded today's headline"
            );
        }
        None => {
            info!("No headline observed; archive left untouched");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Run complete"
    );

    Ok(())
}
