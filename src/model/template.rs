//! Declarative game topology.
//!
//! The template describes every role, the category, every channel and every seed
//! message a game needs. It is read once at startup from a JSON document and shared
//! read-only between all guilds. Default names are the join key between the template
//! and a guild's persisted mirror, so they must be unique.

use serde::Deserialize;
use serenity::all::Permissions;
use std::collections::HashSet;
use std::path::Path;

use crate::error::config::ConfigError;

/// Tier of the guild's base role. Channels with this tier are hubs.
pub const BASE_TIER: i32 = -1;

/// Name of the seed message carrying the join reaction.
pub const RULES_MESSAGE: &str = "rules";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub roles: Vec<RoleTemplate>,
    pub category: CategoryTemplate,
    pub channels: Vec<ChannelTemplate>,
    /// Full access mask granted to the bot user on every channel.
    pub bot_permissions: u64,
    pub social_permissions: u64,
    pub action_permissions: u64,
    #[serde(default)]
    pub messages: Vec<MessageTemplate>,
    /// Emoji that must be added to the rules message to join the game.
    ///
    /// Either a unicode emoji or a custom emoji written as `name:id`.
    pub join_emoji: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTemplate {
    pub name: String,
    pub tier: i32,
    #[serde(default)]
    pub permissions: u64,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl RoleTemplate {
    pub fn is_base(&self) -> bool {
        self.tier == BASE_TIER
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTemplate {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Hub,
    Action,
    Social,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::Action => "action",
            Self::Social => "social",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hub" => Some(Self::Hub),
            "action" => Some(Self::Action),
            "social" => Some(Self::Social),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTemplate {
    pub name: String,
    pub tier: i32,
    pub kind: ChannelKind,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub allow: u64,
    #[serde(default)]
    pub deny: u64,
}

impl ChannelTemplate {
    pub fn is_hub(&self) -> bool {
        self.tier == BASE_TIER
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub name: String,
    /// Default name of the channel the message is posted in.
    pub channel: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTemplate {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl Template {
    /// Reads and validates a template from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::TemplateRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let template: Template = serde_json::from_str(raw)?;
        template.validate()?;
        Ok(template)
    }

    /// Checks the invariants the builder and reconciler rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::InvalidTemplate(msg));

        check_mask("botPermissions", self.bot_permissions)?;
        check_mask("socialPermissions", self.social_permissions)?;
        check_mask("actionPermissions", self.action_permissions)?;

        let mut names = HashSet::new();
        for role in &self.roles {
            check_mask(&format!("role '{}'", role.name), role.permissions)?;
            if !names.insert(role.name.as_str()) {
                return invalid(format!("duplicate role name '{}'", role.name));
            }
            if role.tier < BASE_TIER {
                return invalid(format!("role '{}' has tier below {}", role.name, BASE_TIER));
            }
        }

        let base_roles = self.roles.iter().filter(|r| r.is_base()).count();
        if base_roles != 1 {
            return invalid(format!("expected exactly one base role, found {}", base_roles));
        }

        if self.join_role().is_none() {
            return invalid("no role with tier 0 to assign on join".to_string());
        }

        let mut channels = HashSet::new();
        for channel in &self.channels {
            check_mask(&format!("channel '{}' allow", channel.name), channel.allow)?;
            check_mask(&format!("channel '{}' deny", channel.name), channel.deny)?;
            if !channels.insert(channel.name.as_str()) {
                return invalid(format!("duplicate channel name '{}'", channel.name));
            }
            if channel.tier < BASE_TIER {
                return invalid(format!(
                    "channel '{}' has tier below {}",
                    channel.name, BASE_TIER
                ));
            }
        }

        let mut messages = HashSet::new();
        for message in &self.messages {
            if !messages.insert(message.name.as_str()) {
                return invalid(format!("duplicate message name '{}'", message.name));
            }
            if !channels.contains(message.channel.as_str()) {
                return invalid(format!(
                    "message '{}' targets unknown channel '{}'",
                    message.name, message.channel
                ));
            }
        }

        if !messages.contains(RULES_MESSAGE) {
            return invalid(format!("missing '{}' message", RULES_MESSAGE));
        }

        if self.join_emoji.trim().is_empty() {
            return invalid("join emoji is empty".to_string());
        }

        Ok(())
    }

    /// Game roles, excluding the guild's base role, in template order.
    pub fn game_roles(&self) -> impl Iterator<Item = &RoleTemplate> {
        self.roles.iter().filter(|r| !r.is_base())
    }

    pub fn role(&self, name: &str) -> Option<&RoleTemplate> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Lowest game role, assigned to users joining through the rules message.
    pub fn join_role(&self) -> Option<&RoleTemplate> {
        self.game_roles().find(|r| r.tier == 0)
    }

    pub fn channel(&self, name: &str) -> Option<&ChannelTemplate> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Display position of a channel inside the game category.
    pub fn channel_position(&self, name: &str) -> Option<u16> {
        self.channels
            .iter()
            .position(|c| c.name == name)
            .map(|p| p as u16)
    }

    pub fn messages_for_channel<'a>(
        &'a self,
        channel: &'a str,
    ) -> impl Iterator<Item = &'a MessageTemplate> + 'a {
        self.messages.iter().filter(move |m| m.channel == channel)
    }
}

/// Rejects masks carrying bits Discord does not define. Discord drops them, so
/// the live value would never match.
fn check_mask(owner: &str, mask: u64) -> Result<(), ConfigError> {
    if Permissions::from_bits(mask).is_none() {
        return Err(ConfigError::InvalidTemplate(format!(
            "{} has unknown permission bits {:#x}",
            owner,
            mask & !Permissions::all().bits()
        )));
    }
    Ok(())
}
