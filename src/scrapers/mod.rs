//! Site scraping for discovering and extracting the tracked headline.
//!
//! The scraper follows a two-phase pattern:
//!
//! 1. **Discovery**: Find the News section URL from the site's homepage
//! 2. **Extraction**: Fetch the News page and pull out its lead headline
//!
//! # Common Patterns
//!
//! The [`thedp`] module exports:
//! - `scrape_top_headline()`: End-to-end fetch + traversal, returning an
//!   optional headline
//! - Pure parsing functions (`find_news_link`, `extract_top_headline`)
//!   that are testable offline against HTML fixtures
//!
//! Scrapers use:
//! - Graceful error handling (missing elements and non-success statuses
//!   are logged and reported as "nothing found", never as failures)
//! - Structured `tracing` fields for every request URL and status code

pub mod thedp;
