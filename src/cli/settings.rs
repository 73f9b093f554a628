use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use embed_messages::host::{BotIdentity, CachedUser};
use embed_messages::{Direction, EmbedMessages};

use super::load_config;

fn load_plugin(config: Option<&Path>) -> Result<EmbedMessages> {
    let host = load_config(config)?;
    Ok(EmbedMessages::new(
        &host,
        Arc::new(Vec::<CachedUser>::new()),
        BotIdentity::default(),
    ))
}

/// `settings` — effective settings as JSON on stdout, issues on stderr.
pub fn run_show(config: Option<&Path>) -> Result<()> {
    let plugin = load_plugin(config)?;
    println!("{}", serde_json::to_string_pretty(&plugin.settings().to_json())?);

    for issue in plugin.issues() {
        eprintln!("warning: {}", issue);
    }
    Ok(())
}

/// `directions` — one line per direction with its registration state.
pub fn run_directions(config: Option<&Path>) -> Result<()> {
    let plugin = load_plugin(config)?;
    for direction in Direction::ALL {
        let state = if plugin.is_enabled(direction) { "enabled" } else { "disabled" };
        println!("{:<24} {}", direction.as_str(), state);
    }
    Ok(())
}
