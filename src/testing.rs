//! Fixtures shared by the service and bot tests.

use crate::model::{
    mirror::{GuildMirror, MirrorRole},
    platform::{LiveChannel, LiveGuild, LiveRole},
    template::Template,
};

pub use crate::platform::mock::BOT_USER_ID;

pub const SAMPLE_TEMPLATE: &str = include_str!("../structure.json");

pub const GUILD_ID: u64 = 1;
pub const OWNER_ID: u64 = 100;

pub fn sample_template() -> Template {
    Template::from_json(SAMPLE_TEMPLATE).unwrap()
}

/// Mirror holding every game role of the template, IDs starting at 101.
pub fn mirror_with_roles(template: &Template) -> GuildMirror {
    let mut mirror = GuildMirror::new(GUILD_ID, GUILD_ID, template.category.name.clone());
    for (i, role) in template.game_roles().enumerate() {
        mirror.roles.insert(
            role.name.clone(),
            MirrorRole {
                role_id: 101 + i as u64,
                tier: role.tier,
                permissions: role.permissions,
                hoist: role.hoist,
                mentionable: role.mentionable,
            },
        );
    }
    mirror
}

/// Guild with only its `@everyone` role, as seen when the bot first joins.
pub fn empty_guild() -> LiveGuild {
    LiveGuild {
        id: GUILD_ID,
        name: "Test Guild".to_string(),
        owner_id: OWNER_ID,
        roles: vec![LiveRole {
            id: GUILD_ID,
            guild_id: GUILD_ID,
            name: "@everyone".to_string(),
            permissions: 0,
            color: 0,
            hoist: false,
            mentionable: false,
        }],
        channels: Vec::new(),
    }
}

/// Live state of a mirrored role matching the template exactly.
pub fn live_role(mirror: &GuildMirror, template: &Template, name: &str) -> LiveRole {
    let recorded = mirror.role(name).unwrap();
    let role = template.role(name).unwrap();
    LiveRole {
        id: recorded.role_id,
        guild_id: mirror.guild_id,
        name: role.name.clone(),
        permissions: role.permissions,
        color: role.color,
        hoist: role.hoist,
        mentionable: role.mentionable,
    }
}

/// Live state of a mirrored channel matching its recorded placement and overwrites.
pub fn live_channel(mirror: &GuildMirror, name: &str) -> LiveChannel {
    let recorded = mirror.channel(name).unwrap();
    LiveChannel {
        id: recorded.channel_id,
        guild_id: mirror.guild_id,
        name: name.to_string(),
        parent_id: mirror.category.channel_id,
        position: recorded.position,
        overwrites: recorded.overwrites.clone(),
    }
}

/// Guild snapshot in which every mirrored object is live and in sync.
pub fn live_guild(mirror: &GuildMirror, template: &Template) -> LiveGuild {
    let mut guild = empty_guild();
    for name in mirror.roles.keys() {
        guild.roles.push(live_role(mirror, template, name));
    }
    if let Some(category_id) = mirror.category.channel_id {
        guild.channels.push(LiveChannel {
            id: category_id,
            guild_id: mirror.guild_id,
            name: mirror.category.name.clone(),
            parent_id: None,
            position: 0,
            overwrites: Vec::new(),
        });
    }
    for name in mirror.channels.keys() {
        guild.channels.push(live_channel(mirror, name));
    }
    guild
}
