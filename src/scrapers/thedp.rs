//! The Daily Pennsylvanian headline scraper.
//!
//! This module scrapes the top News headline from
//! [The Daily Pennsylvanian](https://www.thedp.com) in two hops: the
//! homepage is fetched first to discover the current "News" section URL,
//! then the News page itself is fetched and its lead headline extracted.
//!
//! # Traversal
//!
//! The News page is navigated as a chain of optional lookups, each scoped
//! to the previous match:
//!
//! ```text
//! div.main.section → h3.standard-link → a → trimmed text
//! ```
//!
//! A miss at any step means "no headline this run", never an error.

use reqwest::get;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// Path fragment identifying the News section link on the homepage.
const NEWS_PATH_MARKER: &str = "section/news";

/// Scrape the current top News headline.
///
/// Fetches the homepage, follows the first hyperlink whose target contains
/// [`NEWS_PATH_MARKER`], and extracts the lead headline from the News page.
///
/// # Returns
///
/// * `Ok(Some(text))` - the trimmed headline text
/// * `Ok(None)` - a fetch returned a non-success status, or an expected
///   element was missing; nothing to record this run
/// * `Err(_)` - a transport-level failure (DNS, connect, body read)
#[instrument(level = "info", skip_all, fields(%homepage_url))]
pub async fn scrape_top_headline(homepage_url: &str) -> Result<Option<String>, Box<dyn Error>> {
    let base_url = Url::parse(homepage_url)?;

    let response = get(homepage_url).await?;
    let status = response.status();
    info!(url = %homepage_url, %status, "Fetched homepage");
    if !status.is_success() {
        warn!(%status, "Homepage fetch returned non-success status");
        return Ok(None);
    }
    let html = response.text().await?;

    let Some(news_url) = find_news_link(&html, &base_url) else {
        warn!(marker = NEWS_PATH_MARKER, "Homepage has no News section link");
        return Ok(None);
    };

    let response = get(news_url.as_str()).await?;
    let status = response.status();
    info!(url = %news_url, %status, "Fetched News section");
    if !status.is_success() {
        warn!(%status, "News section fetch returned non-success status");
        return Ok(None);
    }
    let html = response.text().await?;

    let headline = extract_top_headline(&html);
    match &headline {
        Some(text) => info!(headline = %text, "Top headline"),
        None => warn!("News page is missing the expected headline structure"),
    }

    Ok(headline)
}

/// Find the News section link on the homepage.
///
/// Returns the first `a[href]` in document order whose target contains
/// [`NEWS_PATH_MARKER`], resolved against the homepage URL so relative
/// hrefs work too.
pub fn find_news_link(html: &str, base_url: &Url) -> Option<Url> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| href.contains(NEWS_PATH_MARKER))
        .and_then(|href| base_url.join(href).ok())
}

/// Extract the lead headline from the News section page.
///
/// Walks `div.main.section` → first `h3.standard-link` → first embedded
/// `a`, and returns that anchor's trimmed text. Whitespace-only text
/// counts as absent.
pub fn extract_top_headline(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let container_selector = Selector::parse("div.main.section").unwrap();
    let heading_selector = Selector::parse("h3.standard-link").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let container = document.select(&container_selector).next()?;
    let heading = container.select(&heading_selector).next()?;
    let anchor = heading.select(&anchor_selector).next()?;

    let text = anchor.text().collect::<Vec<_>>().join(" ").trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
