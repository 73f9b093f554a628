//! Plugin entry point — config → settings → formatters → host registry.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::avatar::{spawn_reset_task, AvatarCache};
use crate::config::HostConfig;
use crate::constants::{AVATAR_RESET_TICK_SECS, PLUGIN_VERSION};
use crate::error::EmbedResult;
use crate::formatter::{Direction, FormatContext, Formatter};
use crate::host::{BotIdentity, UserDirectory};
use crate::registry::FormatRegistry;
use crate::settings::{ConfigIssue, Settings};

pub struct EmbedMessages {
    ctx: Arc<FormatContext>,
    issues: Vec<ConfigIssue>,
}

impl EmbedMessages {
    /// Load settings from the host config's `em` section.
    ///
    /// Rejected overrides are logged here and kept for `issues()`.
    pub fn new(
        config: &HostConfig,
        directory: Arc<dyn UserDirectory + Send + Sync>,
        bot: BotIdentity,
    ) -> Self {
        Self::with_avatar_cache(config, directory, bot, AvatarCache::default())
    }

    pub fn with_avatar_cache(
        config: &HostConfig,
        directory: Arc<dyn UserDirectory + Send + Sync>,
        bot: BotIdentity,
        avatars: AvatarCache,
    ) -> Self {
        let load = Settings::load(&config.overrides());
        if !load.issues.is_empty() {
            tracing::warn!(count = load.issues.len(), "Some settings were rejected, defaults kept");
        }

        let ctx = Arc::new(FormatContext {
            settings: Arc::new(load.settings),
            avatars: Arc::new(avatars),
            directory,
            bot,
            thread_timestamps: config.thread_timestamps,
            fallback_role_name: config.fallback_role_name().to_string(),
        });

        Self {
            ctx,
            issues: load.issues,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.ctx.settings
    }

    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    pub fn avatar_cache(&self) -> Arc<AvatarCache> {
        self.ctx.avatars.clone()
    }

    /// Formatter for `direction`, regardless of whether it is enabled.
    pub fn formatter(&self, direction: Direction) -> Formatter {
        Formatter::new(direction, self.ctx.clone())
    }

    pub fn is_enabled(&self, direction: Direction) -> bool {
        self.ctx.settings.enabled(direction.profile().enabled)
    }

    /// Hand every enabled formatter to the host. Returns what was registered.
    pub fn register(&self, registry: &mut dyn FormatRegistry) -> Vec<Direction> {
        let mut registered = Vec::new();
        for direction in Direction::ALL {
            if !self.is_enabled(direction) {
                tracing::debug!(direction = %direction, "Formatter disabled, host default kept");
                continue;
            }
            registry.register(direction, self.formatter(direction));
            registered.push(direction);
        }
        tracing::info!(registered = registered.len(), "Version {} loaded", PLUGIN_VERSION);
        registered
    }

    /// Start the background avatar cache reset. Stops when `running` goes false.
    pub fn start_avatar_reset(&self, running: Arc<AtomicBool>) -> EmbedResult<JoinHandle<()>> {
        spawn_reset_task(
            self.ctx.avatars.clone(),
            running,
            Duration::from_secs(AVATAR_RESET_TICK_SECS).min(self.ctx.avatars.reset_interval()),
        )
    }
}
