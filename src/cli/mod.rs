pub mod render;
pub mod settings;

use std::path::Path;

use anyhow::{Context, Result};
use embed_messages::config::{default_config_path, HostConfig};

/// Resolve the host config: explicit path → default path → built-in defaults.
///
/// An explicit path must exist; a missing default file just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<HostConfig> {
    if let Some(path) = explicit {
        return HostConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => HostConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(HostConfig::default())
        }
    }
}
