use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC instant.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO 8601 with millisecond precision and a `Z` suffix, the form chat
/// clients expect in embed timestamps.
pub fn to_embed_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an embed timestamp back into a UTC instant.
pub fn from_embed_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    s.parse::<DateTime<Utc>>()
}
