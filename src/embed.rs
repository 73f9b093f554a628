//! Embed payload handed back to the host.
//!
//! Serializes to the chat client's embed schema; absent blocks are omitted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Embed {
    pub description: String,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Embed {
    pub fn new(description: impl Into<String>, color: u32) -> Self {
        Self {
            description: description.into(),
            color,
            ..Default::default()
        }
    }

    /// Append a line to the description.
    pub fn push_line(&mut self, line: &str) {
        self.description.push('\n');
        self.description.push_str(line);
    }
}

/// `{ "embed": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedPayload {
    pub embed: Embed,
}

impl From<Embed> for EmbedPayload {
    fn from(embed: Embed) -> Self {
        Self { embed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_blocks_are_omitted() {
        let payload = EmbedPayload::from(Embed::new("hi", 0x2ECC71));
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v, json!({ "embed": { "description": "hi", "color": 3066993 } }));
    }

    #[test]
    fn test_full_embed_shape() {
        let mut embed = Embed::new("body", 1);
        embed.author = Some(EmbedAuthor {
            name: "System".into(),
            icon_url: "https://cdn.example/bot.png".into(),
        });
        embed.footer = Some(EmbedFooter { text: "#3".into() });
        embed.push_line("https://cdn.example/file.txt");
        let v = serde_json::to_value(EmbedPayload::from(embed)).unwrap();
        assert_eq!(v["embed"]["author"]["icon_url"], json!("https://cdn.example/bot.png"));
        assert_eq!(v["embed"]["footer"]["text"], json!("#3"));
        assert_eq!(v["embed"]["description"], json!("body\nhttps://cdn.example/file.txt"));
        assert!(v["embed"].get("image").is_none());
    }
}
