use crate::{
    data::game_server::GameServerRepository,
    error::{platform::PlatformError, AppError},
    model::{
        mirror::{GamePlayer, GuildMirror},
        platform::{ChannelShape, LiveRole, Overwrite, OverwriteTarget},
        template::Template,
    },
    platform::mock::{MockPlatform, PlatformCall},
    service::game::{roster::JoinOutcome, GameService},
    testing::{empty_guild, live_channel, live_guild, live_role, sample_template, GUILD_ID},
};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;

mod channel_deleted;
mod channel_updated;

/// Builds the sample game on an empty guild and forgets the calls it took.
async fn built_game(
    db: &DatabaseConnection,
    platform: &MockPlatform,
    template: &Template,
) -> GuildMirror {
    let mirror = GameService::new(db, platform, template)
        .build_server(&empty_guild())
        .await
        .unwrap();
    platform.clear();
    mirror
}

fn is_create_role(call: &PlatformCall) -> bool {
    matches!(call, PlatformCall::CreateRole { .. })
}

fn is_create_channel(call: &PlatformCall) -> bool {
    matches!(call, PlatformCall::CreateChannel { .. })
}

fn is_set_overwrite(call: &PlatformCall) -> bool {
    matches!(call, PlatformCall::SetOverwrite { .. })
}
