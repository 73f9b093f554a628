//! Embed formatters — one algorithm, six direction profiles.
//!
//! Each direction differs only in:
//!   - color setting
//!   - author rule (who is shown, which icon)
//!   - footer (`#{message_number}` on staff thread copies)
//!   - timestamp policy (DM-facing directions also honor
//!     `staffReplyDmTimestampEnabled`)
//!
//! Attachment handling and timestamps are shared.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::avatar::AvatarCache;
use crate::constants::{IMAGE_EXTENSIONS, SYSTEM_AUTHOR_NAME};
use crate::embed::{Embed, EmbedAuthor, EmbedFooter, EmbedImage, EmbedPayload};
use crate::error::{EmbedError, EmbedResult};
use crate::host::{BotIdentity, UserDirectory};
use crate::message::ThreadMessage;
use crate::settings::{ColorSetting, Settings, ToggleSetting};
use crate::time_utils;

// ============================================================================
// DIRECTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Staff → user DM
    StaffReplyDm,
    /// Staff reply as shown in the thread channel
    StaffReplyThread,
    /// User → staff thread
    UserReplyThread,
    /// System → user DM
    SystemToUserDm,
    /// System message to the user, as shown in the thread
    SystemToUserThread,
    /// System → staff thread
    SystemToStaff,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Self::StaffReplyDm,
        Self::StaffReplyThread,
        Self::UserReplyThread,
        Self::SystemToUserDm,
        Self::SystemToUserThread,
        Self::SystemToStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaffReplyDm => "staff-reply-dm",
            Self::StaffReplyThread => "staff-reply-thread",
            Self::UserReplyThread => "user-reply-thread",
            Self::SystemToUserDm => "system-to-user-dm",
            Self::SystemToUserThread => "system-to-user-thread",
            Self::SystemToStaff => "system-to-staff",
        }
    }

    pub fn profile(&self) -> DirectionProfile {
        match self {
            Self::StaffReplyDm => DirectionProfile {
                enabled: ToggleSetting::StaffReplyDm,
                color: ColorSetting::StaffReplyDm,
                author: AuthorRule::StaffDm,
                footer: false,
                timestamp: TimestampPolicy::DmGated,
            },
            Self::StaffReplyThread => DirectionProfile {
                enabled: ToggleSetting::StaffReplyThread,
                color: ColorSetting::StaffReplyThread,
                author: AuthorRule::StaffThread,
                footer: true,
                timestamp: TimestampPolicy::Global,
            },
            Self::UserReplyThread => DirectionProfile {
                enabled: ToggleSetting::UserReplyThread,
                color: ColorSetting::UserReplyThread,
                author: AuthorRule::User,
                footer: false,
                timestamp: TimestampPolicy::Global,
            },
            Self::SystemToUserDm => DirectionProfile {
                enabled: ToggleSetting::SystemReplyDm,
                color: ColorSetting::SystemReplyDm,
                author: AuthorRule::System,
                footer: false,
                timestamp: TimestampPolicy::DmGated,
            },
            Self::SystemToUserThread => DirectionProfile {
                enabled: ToggleSetting::SystemReplyThread,
                color: ColorSetting::SystemReplyThread,
                author: AuthorRule::System,
                footer: false,
                timestamp: TimestampPolicy::Global,
            },
            Self::SystemToStaff => DirectionProfile {
                enabled: ToggleSetting::SystemStaff,
                color: ColorSetting::SystemStaff,
                author: AuthorRule::System,
                footer: false,
                timestamp: TimestampPolicy::Global,
            },
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = EmbedError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| EmbedError::UnknownDirection(s.to_string()))
    }
}

/// Who the embed author block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRule {
    /// `"{name} ({role})"`, or just the role when anonymous.
    StaffDm,
    /// `"{name} ({role})"`, or `"{role} ({name}) "` when anonymous.
    StaffThread,
    /// The user's display name.
    User,
    /// `"System"` with the bot avatar.
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// `threadTimestamps` alone.
    Global,
    /// `threadTimestamps` and `staffReplyDmTimestampEnabled`.
    DmGated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionProfile {
    pub enabled: ToggleSetting,
    pub color: ColorSetting,
    pub author: AuthorRule,
    pub footer: bool,
    pub timestamp: TimestampPolicy,
}

// ============================================================================
// FORMATTER
// ============================================================================

/// Everything a formatter reads besides the message. Shared by all six.
pub struct FormatContext {
    pub settings: Arc<Settings>,
    pub avatars: Arc<AvatarCache>,
    pub directory: Arc<dyn UserDirectory + Send + Sync>,
    pub bot: BotIdentity,
    pub thread_timestamps: bool,
    pub fallback_role_name: String,
}

#[derive(Clone)]
pub struct Formatter {
    direction: Direction,
    profile: DirectionProfile,
    ctx: Arc<FormatContext>,
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("direction", &self.direction)
            .field("profile", &self.profile)
            .finish()
    }
}

impl Formatter {
    pub fn new(direction: Direction, ctx: Arc<FormatContext>) -> Self {
        Self {
            direction,
            profile: direction.profile(),
            ctx,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Format with the current clock.
    pub fn format(&self, msg: &ThreadMessage) -> EmbedResult<EmbedPayload> {
        self.format_at(msg, time_utils::now())
    }

    /// Format with an explicit instant for the timestamp.
    pub fn format_at(&self, msg: &ThreadMessage, now: DateTime<Utc>) -> EmbedResult<EmbedPayload> {
        let settings = &self.ctx.settings;
        let mut embed = Embed::new(msg.body.clone(), settings.color(self.profile.color));

        embed.author = Some(self.author(msg)?);

        if self.profile.footer {
            embed.footer = Some(EmbedFooter {
                text: format!("#{}", msg.message_number),
            });
        }

        apply_attachments(&mut embed, &msg.attachments);

        if self.timestamp_enabled() {
            embed.timestamp = Some(time_utils::to_embed_timestamp(&now));
        }

        Ok(embed.into())
    }

    fn author(&self, msg: &ThreadMessage) -> EmbedResult<EmbedAuthor> {
        let role = msg.role_or(&self.ctx.fallback_role_name);
        let bot_icon = || self.ctx.bot.avatar_url.clone();

        let author = match self.profile.author {
            AuthorRule::System => EmbedAuthor {
                name: SYSTEM_AUTHOR_NAME.to_string(),
                icon_url: bot_icon(),
            },
            AuthorRule::User => EmbedAuthor {
                name: msg.user_name.clone(),
                icon_url: self.user_avatar(msg)?,
            },
            AuthorRule::StaffDm | AuthorRule::StaffThread if !msg.is_anonymous => EmbedAuthor {
                name: format!("{} ({})", msg.user_name, role),
                icon_url: self.user_avatar(msg)?,
            },
            AuthorRule::StaffDm => EmbedAuthor {
                name: role.to_string(),
                icon_url: bot_icon(),
            },
            // Trailing space is part of the rendered name.
            AuthorRule::StaffThread => EmbedAuthor {
                name: format!("{} ({}) ", role, msg.user_name),
                icon_url: bot_icon(),
            },
        };
        Ok(author)
    }

    fn user_avatar(&self, msg: &ThreadMessage) -> EmbedResult<String> {
        self.ctx
            .avatars
            .avatar_url(self.ctx.directory.as_ref(), &msg.user_id)
    }

    fn timestamp_enabled(&self) -> bool {
        if !self.ctx.thread_timestamps {
            return false;
        }
        match self.profile.timestamp {
            TimestampPolicy::Global => true,
            TimestampPolicy::DmGated => self
                .ctx
                .settings
                .enabled(ToggleSetting::StaffReplyDmTimestamp),
        }
    }
}

/// A single image becomes the embed image; anything else is listed as
/// links under the body, one per line.
fn apply_attachments(embed: &mut Embed, attachments: &[String]) {
    match attachments {
        [only] if is_image(only) => {
            embed.image = Some(EmbedImage { url: only.clone() });
        }
        _ => {
            for link in attachments {
                embed.push_line(link);
            }
        }
    }
}

/// Extension check only, case-sensitive.
fn is_image(url: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}
