//! Helpers for date keys and file system checks.

use chrono::Local;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Today's archive key in the local timezone, as ISO `YYYY-MM-DD`.
///
/// Observations made either side of local midnight land under different
/// keys; that boundary is taken as-is.
pub fn today_key() -> String {
    Local::now().date_naive().to_string()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test
/// by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Data directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_today_key_is_iso_date_shaped() {
        let key = today_key();
        assert_eq!(key.len(), 10);
        assert_eq!(&key[4..5], "-");
        assert_eq!(&key[7..8], "-");
        assert!(key[..4].chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested_path() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("data").join("archive");

        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_removes_probe_file() {
        let tmp = TempDir::new().unwrap();

        ensure_writable_dir(tmp.path()).await.unwrap();
        assert!(!tmp.path().join("..__probe_write__").exists());
    }
}
