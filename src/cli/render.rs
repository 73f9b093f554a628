use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use embed_messages::host::{BotIdentity, CachedUser};
use embed_messages::message::ThreadMessage;
use embed_messages::{Direction, EmbedMessages};

use super::load_config;

/// `render` — print the payload one direction would produce for a message.
pub fn run(
    config: Option<&Path>,
    direction: &str,
    message: &Path,
    users: Option<&Path>,
    bot_avatar: &str,
) -> Result<()> {
    let direction: Direction = direction.parse()?;
    let host = load_config(config)?;

    let users: Vec<CachedUser> = match users {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid user list in {}", path.display()))?
        }
        None => Vec::new(),
    };

    let msg: ThreadMessage = serde_json::from_str(&read_input(message)?)
        .context("Invalid thread message JSON")?;

    let plugin = EmbedMessages::new(&host, Arc::new(users), BotIdentity::new(bot_avatar));
    for issue in plugin.issues() {
        eprintln!("warning: {}", issue);
    }
    if !plugin.is_enabled(direction) {
        eprintln!("note: {} is disabled, the host would keep its default format", direction);
    }

    let payload = plugin.formatter(direction).format(&msg)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
