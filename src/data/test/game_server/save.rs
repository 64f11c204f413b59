use super::*;

/// Tests persisting a complete mirror.
///
/// Expected: every role, channel, overwrite, message and player read back
#[tokio::test]
async fn persists_complete_mirror() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    let mirror = sample_mirror(42);
    repo.save(&mirror).await?;

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored, mirror);

    Ok(())
}

/// Tests saving the same mirror twice.
///
/// Expected: no duplicated rows
#[tokio::test]
async fn saving_twice_does_not_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    let mirror = sample_mirror(42);
    repo.save(&mirror).await?;
    repo.save(&mirror).await?;

    let servers = entity::prelude::GameServer::find().all(db).await?;
    let roles = entity::prelude::GameRole::find()
        .filter(entity::game_role::Column::GuildId.eq("42"))
        .all(db)
        .await?;
    let overwrites = entity::prelude::GameChannelOverwrite::find().all(db).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(roles.len(), 3);
    assert_eq!(overwrites.len(), 3);

    Ok(())
}

/// Tests replacing a recreated channel's ID.
///
/// Expected: new ID stored, old overwrites replaced
#[tokio::test]
async fn replaces_changed_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    let mut mirror = sample_mirror(42);
    repo.save(&mirror).await?;

    let castle = mirror.channels.get_mut("castle").unwrap();
    castle.channel_id = 999;
    castle.overwrites.truncate(1);
    repo.save(&mirror).await?;

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    let castle = stored.channel("castle").unwrap();
    assert_eq!(castle.channel_id, 999);
    assert_eq!(castle.overwrites.len(), 1);

    Ok(())
}
