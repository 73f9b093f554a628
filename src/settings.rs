//! Plugin settings — typed, named values seeded with defaults and
//! overridden once from the `em` section of the host config.
//!
//! Each setting declares its kind up front (toggle or color), so overrides
//! are coerced by declaration rather than by inspecting the name.
//! After `load` the store is read-only.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::boolean::parse_custom_boolean;
use crate::color::{parse_color, to_hex};
use crate::constants::MAX_COLOR;

// ============================================================================
// SETTING NAMES
// ============================================================================

/// Boolean settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleSetting {
    StaffReplyDm,
    StaffReplyThread,
    StaffReplyDmTimestamp,
    UserReplyThread,
    SystemReplyDm,
    SystemReplyThread,
    SystemStaff,
}

impl ToggleSetting {
    pub const ALL: [ToggleSetting; 7] = [
        Self::StaffReplyDm,
        Self::StaffReplyThread,
        Self::StaffReplyDmTimestamp,
        Self::UserReplyThread,
        Self::SystemReplyDm,
        Self::SystemReplyThread,
        Self::SystemStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaffReplyDm => "staffReplyDmEnabled",
            Self::StaffReplyThread => "staffReplyThreadEnabled",
            Self::StaffReplyDmTimestamp => "staffReplyDmTimestampEnabled",
            Self::UserReplyThread => "userReplyThreadEnabled",
            Self::SystemReplyDm => "systemReplyDmEnabled",
            Self::SystemReplyThread => "systemReplyThreadEnabled",
            Self::SystemStaff => "systemStaffEnabled",
        }
    }

    pub fn default_value(&self) -> bool {
        true
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 24-bit color settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSetting {
    StaffReplyDm,
    StaffReplyThread,
    UserReplyThread,
    SystemReplyDm,
    SystemReplyThread,
    SystemStaff,
}

impl ColorSetting {
    pub const ALL: [ColorSetting; 6] = [
        Self::StaffReplyDm,
        Self::StaffReplyThread,
        Self::UserReplyThread,
        Self::SystemReplyDm,
        Self::SystemReplyThread,
        Self::SystemStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaffReplyDm => "staffReplyDmColor",
            Self::StaffReplyThread => "staffReplyThreadColor",
            Self::UserReplyThread => "userReplyThreadColor",
            Self::SystemReplyDm => "systemReplyDmColor",
            Self::SystemReplyThread => "systemReplyThreadColor",
            Self::SystemStaff => "systemStaffColor",
        }
    }

    pub fn default_value(&self) -> u32 {
        match self {
            Self::StaffReplyDm | Self::StaffReplyThread => 0x2ECC71,
            Self::UserReplyThread => 0x9C32A8,
            Self::SystemReplyDm | Self::SystemReplyThread => 0x5865F2,
            Self::SystemStaff => 0x1AA4BC,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Any recognized setting, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingName {
    Toggle(ToggleSetting),
    Color(ColorSetting),
}

impl SettingName {
    /// Every setting, in declaration order (toggles first).
    pub fn all() -> impl Iterator<Item = SettingName> {
        ToggleSetting::ALL
            .into_iter()
            .map(Self::Toggle)
            .chain(ColorSetting::ALL.into_iter().map(Self::Color))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toggle(t) => t.as_str(),
            Self::Color(c) => c.as_str(),
        }
    }

    pub fn default_value(&self) -> SettingValue {
        match self {
            Self::Toggle(t) => SettingValue::Toggle(t.default_value()),
            Self::Color(c) => SettingValue::Color(c.default_value()),
        }
    }
}

impl std::fmt::Display for SettingName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingName {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown setting: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    Toggle(bool),
    Color(u32),
}

impl SettingValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Toggle(b) => Value::Bool(*b),
            Self::Color(c) => Value::String(to_hex(*c)),
        }
    }
}

// ============================================================================
// CONFIG ISSUES
// ============================================================================

/// A rejected override. Never fatal: the entry is skipped and the prior
/// value stays in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Setting {name} is not a valid setting")]
    UnknownSetting { name: String },

    #[error("Value {value} is not a valid truthy or falsy value (setting {name})")]
    InvalidBoolean { name: String, value: String },

    #[error("Value {value} is not a valid RGB or HEX color (setting {name})")]
    InvalidColor { name: String, value: String },
}

impl ConfigIssue {
    pub fn setting(&self) -> &str {
        match self {
            Self::UnknownSetting { name }
            | Self::InvalidBoolean { name, .. }
            | Self::InvalidColor { name, .. } => name,
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Loaded settings plus every override that was rejected along the way.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: Settings,
    pub issues: Vec<ConfigIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    toggles: [bool; ToggleSetting::ALL.len()],
    colors: [u32; ColorSetting::ALL.len()],
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    /// The documented default table.
    pub fn defaults() -> Self {
        let mut toggles = [false; ToggleSetting::ALL.len()];
        for t in ToggleSetting::ALL {
            toggles[t.index()] = t.default_value();
        }
        let mut colors = [0; ColorSetting::ALL.len()];
        for c in ColorSetting::ALL {
            colors[c.index()] = c.default_value();
        }
        Self { toggles, colors }
    }

    /// Apply overrides on top of the defaults.
    ///
    /// Unknown names and unparseable values are logged and reported in
    /// `issues`; they never replace a valid value.
    pub fn load(overrides: &Map<String, Value>) -> SettingsLoad {
        let mut settings = Self::defaults();
        let mut issues = Vec::new();

        for (name, value) in overrides {
            if let Err(issue) = settings.apply(name, value) {
                tracing::warn!(setting = %name, value = %display_value(value), "{}", issue);
                issues.push(issue);
            }
        }

        SettingsLoad { settings, issues }
    }

    fn apply(&mut self, name: &str, value: &Value) -> Result<(), ConfigIssue> {
        let setting: SettingName = name.parse().map_err(|_| ConfigIssue::UnknownSetting {
            name: name.to_string(),
        })?;

        match setting {
            SettingName::Toggle(t) => {
                let parsed = parse_custom_boolean(value).ok_or_else(|| ConfigIssue::InvalidBoolean {
                    name: name.to_string(),
                    value: display_value(value),
                })?;
                self.toggles[t.index()] = parsed;
            }
            SettingName::Color(c) => {
                let parsed = parse_color_value(value).ok_or_else(|| ConfigIssue::InvalidColor {
                    name: name.to_string(),
                    value: display_value(value),
                })?;
                self.colors[c.index()] = parsed;
            }
        }

        tracing::debug!(setting = %name, "Override applied");
        Ok(())
    }

    pub fn get(&self, name: SettingName) -> SettingValue {
        match name {
            SettingName::Toggle(t) => SettingValue::Toggle(self.enabled(t)),
            SettingName::Color(c) => SettingValue::Color(self.color(c)),
        }
    }

    pub fn enabled(&self, setting: ToggleSetting) -> bool {
        self.toggles[setting.index()]
    }

    pub fn color(&self, setting: ColorSetting) -> u32 {
        self.colors[setting.index()]
    }

    /// Effective settings keyed by wire name, colors as `#RRGGBB`.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = SettingName::all()
            .map(|name| (name.as_str().to_string(), self.get(name).to_json()))
            .collect();
        Value::Object(map)
    }
}

/// Colors come in as text; integers already in 24-bit range are accepted too.
fn parse_color_value(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => parse_color(s),
        Value::Number(n) => n
            .as_u64()
            .filter(|v| *v <= u64::from(MAX_COLOR))
            .map(|v| v as u32),
        _ => None,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_table() {
        let s = Settings::defaults();
        for t in ToggleSetting::ALL {
            assert!(s.enabled(t), "{} should default to true", t.as_str());
        }
        assert_eq!(s.color(ColorSetting::StaffReplyDm), 0x2ECC71);
        assert_eq!(s.color(ColorSetting::StaffReplyThread), 0x2ECC71);
        assert_eq!(s.color(ColorSetting::UserReplyThread), 0x9C32A8);
        assert_eq!(s.color(ColorSetting::SystemReplyDm), 0x5865F2);
        assert_eq!(s.color(ColorSetting::SystemReplyThread), 0x5865F2);
        assert_eq!(s.color(ColorSetting::SystemStaff), 0x1AA4BC);
    }

    #[test]
    fn test_black_override_is_applied() {
        let load = Settings::load(&overrides(json!({ "staffReplyDmColor": "0,0,0" })));
        assert!(load.issues.is_empty());
        assert_eq!(
            load.settings.get(SettingName::Color(ColorSetting::StaffReplyDm)),
            SettingValue::Color(0)
        );
    }

    #[test]
    fn test_bogus_color_keeps_default() {
        let load = Settings::load(&overrides(json!({ "staffReplyDmColor": "bogus" })));
        assert_eq!(load.settings.color(ColorSetting::StaffReplyDm), 0x2ECC71);
        assert_eq!(
            load.issues,
            vec![ConfigIssue::InvalidColor {
                name: "staffReplyDmColor".into(),
                value: "bogus".into(),
            }]
        );
    }

    #[test]
    fn test_boolean_overrides() {
        let load = Settings::load(&overrides(json!({
            "staffReplyDmEnabled": "off",
            "systemStaffEnabled": false,
            "userReplyThreadEnabled": "maybe",
        })));
        assert!(!load.settings.enabled(ToggleSetting::StaffReplyDm));
        assert!(!load.settings.enabled(ToggleSetting::SystemStaff));
        assert!(load.settings.enabled(ToggleSetting::UserReplyThread));
        assert_eq!(load.issues.len(), 1);
        assert_eq!(load.issues[0].setting(), "userReplyThreadEnabled");
    }

    #[test]
    fn test_unknown_setting_is_reported_and_ignored() {
        let load = Settings::load(&overrides(json!({ "fancyColor": "#fff" })));
        assert_eq!(load.settings, Settings::defaults());
        assert!(matches!(load.issues[0], ConfigIssue::UnknownSetting { .. }));
    }

    #[test]
    fn test_integer_color_override() {
        let load = Settings::load(&overrides(json!({
            "systemStaffColor": 255,
            "systemReplyDmColor": 0x1000000,
        })));
        assert_eq!(load.settings.color(ColorSetting::SystemStaff), 255);
        assert_eq!(load.settings.color(ColorSetting::SystemReplyDm), 0x5865F2);
        assert_eq!(load.issues.len(), 1);
    }

    #[test]
    fn test_setting_name_roundtrip() {
        for name in SettingName::all() {
            let parsed: SettingName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
        assert!("StaffReplyDmColor".parse::<SettingName>().is_err());
    }

    #[test]
    fn test_to_json() {
        let v = Settings::defaults().to_json();
        assert_eq!(v["staffReplyDmColor"], json!("#2ECC71"));
        assert_eq!(v["systemStaffEnabled"], json!(true));
        assert_eq!(v.as_object().unwrap().len(), 13);
    }
}
