//! Tolerant JSON persistence for the rule and learned stores.
//!
//! Loads prefer availability over strictness: a missing or malformed
//! file becomes the caller's default, with a warning in the log. Saves
//! are plain overwrites, so a reader racing a write can observe a
//! partial document.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Read a JSON document from `path`, substituting `default` when the
/// file is missing, unreadable, or fails to parse.
pub fn load_json<T: DeserializeOwned>(path: &Path, default: T) -> T {
    if !path.exists() {
        return default;
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return default;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed {}: {}", path.display(), e);
            default
        }
    }
}

/// Write `value` to `path` as pretty-printed JSON, creating parent
/// directories as needed and overwriting any existing file.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let contents = serde_json::to_string_pretty(value).context("Failed to serialize store")?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
