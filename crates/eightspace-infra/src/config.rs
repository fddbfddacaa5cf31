//! Configuration loader for The Eight Space.
//!
//! Reads `config.toml` from the data directory (`~/.eightspace/` in
//! production) and deserializes it into [`GalleryConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use eightspace_types::config::GalleryConfig;

/// Resolve the data directory.
///
/// Priority:
/// 1. An explicit override (the `--data-dir` flag or `EIGHTSPACE_DATA_DIR`)
/// 2. `~/.eightspace`
/// 3. `.eightspace` in the current directory
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".eightspace");
    }

    PathBuf::from(".eightspace")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`GalleryConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_gallery_config(data_dir: &Path) -> GalleryConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GalleryConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GalleryConfig::default();
        }
    };

    match toml::from_str::<GalleryConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GalleryConfig::default()
        }
    }
}
