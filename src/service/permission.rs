//! Permission overwrite computation for game channels.
//!
//! Tiers model a strict progression. A channel's tier is the minimum role tier
//! needed to use it: the base role is denied everything the bot manages and every
//! game role at or above the channel's tier is granted the channel's type mask.
//! Hub channels (tier -1) grant their masks to the base role directly.

use crate::model::{
    mirror::GuildMirror,
    platform::{Overwrite, OverwriteTarget},
    template::{ChannelKind, ChannelTemplate, Template},
};

/// Permission bits granted on a channel of the given kind.
pub fn type_mask(template: &Template, kind: ChannelKind) -> u64 {
    match kind {
        ChannelKind::Action => template.action_permissions,
        ChannelKind::Social => template.social_permissions,
        ChannelKind::Hub => 0,
    }
}

/// Computes the overwrites a channel should carry.
///
/// Roles missing from the mirror are skipped; they receive their overwrites when
/// they are created and the channel is repaired.
///
/// # Arguments
/// - `template` - Game template providing the permission masks
/// - `channel` - Template entry of the channel
/// - `mirror` - Guild mirror supplying the platform IDs of the roles
/// - `bot_user_id` - User ID of the bot, always granted its full mask
///
/// # Returns
/// - `Vec<Overwrite>` - Base role first, then qualifying roles in template order,
///   then the bot user
pub fn desired_overwrites(
    template: &Template,
    channel: &ChannelTemplate,
    mirror: &GuildMirror,
    bot_user_id: u64,
) -> Vec<Overwrite> {
    let everyone = OverwriteTarget::Role(mirror.everyone_role_id);
    let mut overwrites = Vec::new();

    if channel.is_hub() {
        overwrites.push(Overwrite::new(everyone, channel.allow, channel.deny));
    } else {
        overwrites.push(Overwrite::new(everyone, 0, template.bot_permissions));

        let mask = type_mask(template, channel.kind);
        let allow = channel.allow | mask;
        let deny = (channel.deny | (template.bot_permissions & !mask)) & !allow;

        for role in template.game_roles().filter(|r| r.tier >= channel.tier) {
            if let Some(recorded) = mirror.role(&role.name) {
                overwrites.push(Overwrite::new(
                    OverwriteTarget::Role(recorded.role_id),
                    allow,
                    deny,
                ));
            }
        }
    }

    overwrites.push(Overwrite::new(
        OverwriteTarget::Member(bot_user_id),
        template.bot_permissions,
        0,
    ));

    overwrites
}
