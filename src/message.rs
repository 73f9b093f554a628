use serde::{Deserialize, Serialize};

/// A single message routed through the host's thread system.
///
/// Produced by the host; formatters only read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ThreadMessage {
    pub body: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    /// Attachment URLs, in posting order.
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub message_number: u64,
}

impl ThreadMessage {
    /// Role name, or `fallback` when the host recorded none (or an empty one).
    pub fn role_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.role_name.as_deref() {
            Some(role) if !role.is_empty() => role,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_record() {
        let json = r#"{
            "body": "hello",
            "user_id": "42",
            "user_name": "Ann",
            "role_name": null,
            "is_anonymous": true,
            "attachments": ["https://cdn.example/a.png"],
            "message_number": 7
        }"#;
        let msg: ThreadMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.user_id, "42");
        assert!(msg.is_anonymous);
        assert_eq!(msg.role_name, None);
        assert_eq!(msg.message_number, 7);
    }

    #[test]
    fn test_optional_fields_default() {
        let msg: ThreadMessage =
            serde_json::from_str(r#"{"body":"x","user_id":"1","user_name":"u"}"#).unwrap();
        assert!(msg.attachments.is_empty());
        assert!(!msg.is_anonymous);
    }

    #[test]
    fn test_role_fallback() {
        let mut msg = ThreadMessage::default();
        assert_eq!(msg.role_or("Staff"), "Staff");
        msg.role_name = Some(String::new());
        assert_eq!(msg.role_or("Staff"), "Staff");
        msg.role_name = Some("Moderator".into());
        assert_eq!(msg.role_or("Staff"), "Moderator");
    }
}
