//! Host configuration — the slice of the bot config this plugin reads.
//!
//! Keys (host naming, camelCase):
//!   - `threadTimestamps`: global timestamp switch
//!   - `fallbackRoleName`: role shown when a staff member has none
//!   - `em`: plugin overrides, see `settings`
//!
//! Files are JSON, or TOML when the extension is `.toml`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::boolean::parse_custom_boolean;
use crate::constants::{CONFIG_KEY, DEFAULT_FALLBACK_ROLE_NAME};
use crate::error::{EmbedError, EmbedResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    pub thread_timestamps: bool,
    pub fallback_role_name: Option<String>,
    /// Raw `em` section; `None` when the host config has no such key.
    pub em: Option<Map<String, Value>>,
}

impl HostConfig {
    /// Read the relevant keys from a parsed host config.
    /// Malformed values are logged and left at their defaults.
    pub fn from_value(config: &Value) -> Self {
        let mut hc = Self::default();

        if let Some(v) = config.get("threadTimestamps") {
            match parse_custom_boolean(v) {
                Some(b) => hc.thread_timestamps = b,
                None => tracing::warn!(value = %v, "threadTimestamps is not a boolean, using false"),
            }
        }

        match config.get("fallbackRoleName") {
            Some(Value::String(s)) if !s.is_empty() => hc.fallback_role_name = Some(s.clone()),
            Some(Value::String(_)) | Some(Value::Null) | None => {}
            Some(other) => {
                tracing::warn!(value = %other, "fallbackRoleName is not a string, ignoring");
            }
        }

        match config.get(CONFIG_KEY) {
            Some(Value::Object(section)) => hc.em = Some(section.clone()),
            Some(other) => {
                tracing::warn!(value = %other, "'{}' section is not an object, ignoring", CONFIG_KEY);
            }
            None => {}
        }

        hc
    }

    /// Load from a JSON or TOML file.
    pub fn load(path: &Path) -> EmbedResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let value: Value = if is_toml {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        if !value.is_object() {
            return Err(EmbedError::Config(format!(
                "{} must contain a table/object at the top level",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Host config loaded");
        Ok(Self::from_value(&value))
    }

    /// Role name used when a staff message has none.
    pub fn fallback_role_name(&self) -> &str {
        self.fallback_role_name
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_ROLE_NAME)
    }

    /// Overrides to apply, empty when the host has no `em` section.
    pub fn overrides(&self) -> Map<String, Value> {
        self.em.clone().unwrap_or_default()
    }
}

/// Default config file: `$EMBED_MESSAGES_CONFIG`, else
/// `{config_dir}/embed-messages/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("EMBED_MESSAGES_CONFIG") {
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    dirs::config_dir().map(|d| d.join("embed-messages").join("config.json"))
}
