//! Platform-side values exchanged with the Discord gateway.
//!
//! These types decouple the builder and reconciler from serenity's models so the
//! game logic can be driven by snapshots and exercised without a live connection.

/// Principal a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverwriteTarget {
    Role(u64),
    Member(u64),
}

impl OverwriteTarget {
    pub fn id(&self) -> u64 {
        match self {
            Self::Role(id) | Self::Member(id) => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Role(_) => "role",
            Self::Member(_) => "member",
        }
    }

    pub fn from_parts(kind: &str, id: u64) -> Option<Self> {
        match kind {
            "role" => Some(Self::Role(id)),
            "member" => Some(Self::Member(id)),
            _ => None,
        }
    }
}

/// Allow/deny pair for one principal on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overwrite {
    pub target: OverwriteTarget,
    pub allow: u64,
    pub deny: u64,
}

impl Overwrite {
    pub fn new(target: OverwriteTarget, allow: u64, deny: u64) -> Self {
        Self {
            target,
            allow,
            deny,
        }
    }
}

/// Desired state of a role when creating or correcting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSettings {
    pub name: String,
    pub permissions: u64,
    pub color: u32,
    pub hoist: bool,
    pub mentionable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelShape {
    Category,
    Text,
}

/// Parameters for creating a channel or category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSettings {
    pub name: String,
    pub shape: ChannelShape,
    pub topic: Option<String>,
    pub parent_id: Option<u64>,
    pub position: Option<u16>,
}

/// Placement correction applied to an existing channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPlacement {
    pub parent_id: u64,
    pub position: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRole {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub permissions: u64,
    pub color: u32,
    pub hoist: bool,
    pub mentionable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveChannel {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub parent_id: Option<u64>,
    pub position: u16,
    pub overwrites: Vec<Overwrite>,
}

/// Snapshot of a guild as delivered when it becomes available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveGuild {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    pub roles: Vec<LiveRole>,
    pub channels: Vec<LiveChannel>,
}

impl LiveGuild {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }

    pub fn channel(&self, channel_id: u64) -> Option<&LiveChannel> {
        self.channels.iter().find(|c| c.id == channel_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub icon: Option<String>,
    pub footer: Option<String>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub title: String,
    pub value: String,
    pub inline: bool,
}
