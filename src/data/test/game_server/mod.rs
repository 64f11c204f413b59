use crate::{
    data::game_server::GameServerRepository,
    model::{
        mirror::{GamePlayer, GuildMirror, MirrorChannel, MirrorMessage},
        platform::{Overwrite, OverwriteTarget},
        template::ChannelKind,
    },
    testing::{mirror_with_roles, sample_template},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{game_server::GameServerFactory, game_user::GameUserFactory},
};

mod add_user;
mod create;
mod delete;
mod find_by_guild_id;
mod flag_all_unchecked;
mod remove_user;
mod save;
mod set_playing;

/// Mirror of a fully built guild: three roles, one channel with overwrites, the
/// rules message and one player.
fn sample_mirror(guild_id: u64) -> GuildMirror {
    let template = sample_template();
    let mut mirror = mirror_with_roles(&template);
    mirror.guild_id = guild_id;
    mirror.everyone_role_id = guild_id;
    mirror.playing = true;
    mirror.category.channel_id = Some(200);

    let knight = mirror.role("knight").unwrap().role_id;
    mirror.channels.insert(
        "castle".to_string(),
        MirrorChannel {
            channel_id: 304,
            tier: 2,
            kind: ChannelKind::Action,
            position: 4,
            allow: 0,
            deny: 0,
            overwrites: vec![
                Overwrite::new(OverwriteTarget::Role(guild_id), 0, 2048),
                Overwrite::new(OverwriteTarget::Role(knight), 66624, 0),
                Overwrite::new(OverwriteTarget::Member(4242), 268561488, 0),
            ],
        },
    );
    mirror.messages.insert(
        "rules".to_string(),
        MirrorMessage {
            message_id: 400,
            channel_id: 301,
        },
    );
    mirror.players.push(GamePlayer {
        user_id: 500,
        role_id: mirror.role("villager").unwrap().role_id,
        contribution: 3,
    });

    mirror
}
