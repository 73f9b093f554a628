// === Plugin ===
pub const PLUGIN_VERSION: &str = "1.0.0";
pub const CONFIG_KEY: &str = "em";

// === Avatar cache ===
pub const AVATAR_CACHE_RESET_SECS: u64 = 3_600; // 1h
pub const AVATAR_RESET_TICK_SECS: u64 = 60;

// === Formatting ===
pub const SYSTEM_AUTHOR_NAME: &str = "System";
pub const DEFAULT_FALLBACK_ROLE_NAME: &str = "Staff";
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".gif"];

// === Boolean tokens (case-sensitive) ===
pub const TRUTHY_VALUES: [&str; 3] = ["on", "1", "true"];
pub const FALSY_VALUES: [&str; 4] = ["off", "0", "false", "null"];

// === Colors ===
pub const MAX_COLOR: u32 = 0xFF_FFFF;
