//! Archive persistence: loading and writing the backing JSON file.
//!
//! The archive lives in a single file (by default
//! `data/daily_pennsylvanian_headlines.json`) that is read in full at the
//! start of a run and rewritten in full after a new observation. Loading
//! never fails the run: a missing or unparsable file yields an empty
//! archive, with a [`LoadOutcome`] telling the caller which case it was.
//! Writing does fail the run: losing the observation defeats the point.

use crate::models::HeadlineArchive;
use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// How the backing file was found at load time.
///
/// All three cases produce a usable archive value; `Missing` and
/// `Corrupt` produce an empty one. The distinction exists so corruption
/// can be logged loudly while staying non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and parsed as a valid archive.
    Loaded,
    /// No file yet; first run against this path.
    Missing,
    /// The file existed but could not be read or parsed.
    Corrupt,
}

/// Load the archive from `path`.
///
/// Returns the parsed archive, or an empty one when the file is missing
/// or malformed. Never propagates an error; the [`LoadOutcome`] records
/// which case occurred.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load(path: &Path) -> (HeadlineArchive, LoadOutcome) {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No archive file yet; starting with an empty archive");
            return (HeadlineArchive::default(), LoadOutcome::Missing);
        }
        Err(e) => {
            error!(error = %e, "Failed to read archive file; starting with an empty archive");
            return (HeadlineArchive::default(), LoadOutcome::Corrupt);
        }
    };

    match serde_json::from_str::<HeadlineArchive>(&raw) {
        Ok(archive) => {
            if archive.is_empty() {
                info!("Archive file holds no observations yet");
            } else {
                info!(
                    dates = archive.date_count(),
                    headlines = archive.headline_count(),
                    "Loaded headline archive"
                );
            }
            (archive, LoadOutcome::Loaded)
        }
        Err(e) => {
            error!(error = %e, "Archive file is not valid JSON; starting with an empty archive");
            (HeadlineArchive::default(), LoadOutcome::Corrupt)
        }
    }
}

/// Write the full archive to `path`, replacing any previous content.
///
/// Serializes pretty-printed so the file stays readable and diffable.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails. The caller
/// treats this as fatal.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn persist(archive: &HeadlineArchive, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(archive)?;

    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write archive file");
        return Err(e.into());
    }

    info!(
        dates = archive.date_count(),
        headlines = archive.headline_count(),
        "Wrote headline archive"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_returns_empty_archive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");

        let (archive, outcome) = load(&path).await;
        assert!(archive.is_empty());
        assert_eq!(outcome, LoadOutcome::Missing);
    }

    #[tokio::test]
    async fn test_load_empty_object_is_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");
        std::fs::write(&path, "{}").unwrap();

        let (archive, outcome) = load(&path).await;
        assert!(archive.is_empty());
        assert_eq!(outcome, LoadOutcome::Loaded);
    }

    #[tokio::test]
    async fn test_load_malformed_file_returns_empty_archive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let (archive, outcome) = load(&path).await;
        assert!(archive.is_empty());
        assert_eq!(outcome, LoadOutcome::Corrupt);
    }

    #[tokio::test]
    async fn test_load_wrong_shape_returns_empty_archive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");
        std::fs::write(&path, r#"{"2024-01-01": "not an array"}"#).unwrap();

        let (archive, outcome) = load(&path).await;
        assert!(archive.is_empty());
        assert_eq!(outcome, LoadOutcome::Corrupt);
    }

    #[tokio::test]
    async fn test_persist_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");

        let mut archive = HeadlineArchive::default();
        archive.record("2024-01-01", "Headline A");
        archive.record("2024-01-01", "Headline B");
        archive.record("2024-01-02", "Headline C");

        persist(&archive, &path).await.unwrap();
        let (reloaded, outcome) = load(&path).await;

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reloaded, archive);
    }

    #[tokio::test]
    async fn test_persist_writes_pretty_printed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");

        let mut archive = HeadlineArchive::default();
        archive.record("2024-01-01", "Headline A");
        persist(&archive, &path).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"2024-01-01\": [\n"));
    }

    #[tokio::test]
    async fn test_persist_after_corrupt_load_writes_fresh_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("headlines.json");
        std::fs::write(&path, "garbage that is not json").unwrap();

        let (mut archive, outcome) = load(&path).await;
        assert_eq!(outcome, LoadOutcome::Corrupt);

        archive.record("2024-02-02", "Fresh start");
        persist(&archive, &path).await.unwrap();

        let (reloaded, outcome) = load(&path).await;
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reloaded.date_count(), 1);
        assert_eq!(
            reloaded.headlines_for("2024-02-02"),
            Some(&["Fresh start".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_persist_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("headlines.json");

        let mut archive = HeadlineArchive::default();
        archive.record("2024-01-01", "Headline A");

        assert!(persist(&archive, &path).await.is_err());
    }
}
