use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::automation::vm::ProviderKind;

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    debug!("Writing file: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, content)
}

/// Path a processed config file is moved to: `<Provider>_<timestamp>.conf`
/// in the config's own directory.
pub fn archive_path(config_path: &Path, provider: ProviderKind, timestamp: &str) -> PathBuf {
    config_path.with_file_name(format!("{}_{}.conf", provider.label(), timestamp))
}

/// Rename a processed config file so it is not picked up again.
pub fn archive_config(config_path: &Path, provider: ProviderKind, timestamp: &str) -> Result<PathBuf> {
    let target = archive_path(config_path, provider, timestamp);

    std::fs::rename(config_path, &target).with_context(|| {
        format!(
            "Failed to archive {} as {}",
            config_path.display(),
            target.display()
        )
    })?;

    info!("Archived {} as {}", config_path.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_path_keeps_directory() {
        let path = archive_path(Path::new("configs/GCP.conf"), ProviderKind::Gcp, "2024-01-02;03_04_05");
        assert_eq!(path, Path::new("configs/GCP_2024-01-02;03_04_05.conf"));

        let path = archive_path(Path::new("Azure.conf"), ProviderKind::Azure, "ts");
        assert_eq!(path, Path::new("Azure_ts.conf"));
    }

    #[test]
    fn test_archive_config_renames_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("Azure.conf");
        std::fs::write(&config, "[vm1]\n").unwrap();

        let archived = archive_config(&config, ProviderKind::Azure, "ts").unwrap();

        assert!(!config.exists());
        assert_eq!(std::fs::read_to_string(archived).unwrap(), "[vm1]\n");
    }

    #[test]
    fn test_archive_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = archive_config(&dir.path().join("GCP.conf"), ProviderKind::Gcp, "ts").unwrap_err();
        assert!(err.to_string().starts_with("Failed to archive"));
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/nested/out.txt");

        write_file(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }
}
