//! Command-line interface definitions for the headline tracker.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. The defaults reproduce the standard layout
//! (`data/daily_pennsylvanian_headlines.json`, scraping
//! `https://www.thedp.com`), so a bare invocation needs no flags.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the headline tracker.
///
/// # Examples
///
/// ```sh
/// # Standard run: scrape thedp.com, append to data/daily_pennsylvanian_headlines.json
/// dp_headline_tracker
///
/// # Keep the archive somewhere else
/// dp_headline_tracker -d /var/lib/headlines
///
/// # Point at a local fixture server while developing
/// dp_headline_tracker --homepage-url http://localhost:8000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the archive file (created if absent)
    #[arg(short, long, default_value = "data")]
    pub data_dir: String,

    /// Archive file name inside the data directory
    #[arg(long, default_value = "daily_pennsylvanian_headlines.json")]
    pub archive_file: String,

    /// Homepage to start the scrape from
    #[arg(long, env = "DP_HOMEPAGE_URL", default_value = "https://www.thedp.com")]
    pub homepage_url: String,
}

impl Cli {
    /// Full path of the backing archive file.
    pub fn archive_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.archive_file)
    }
}
