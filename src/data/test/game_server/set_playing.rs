use super::*;

/// Tests stopping a running game.
///
/// Expected: playing cleared, everything else kept
#[tokio::test]
async fn clears_playing_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(42)).await?;

    repo.set_playing(42, false).await?;

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert!(!stored.playing);
    assert_eq!(stored.roles.len(), 3);

    Ok(())
}

/// Tests setting the check flag of one guild.
///
/// Expected: only that guild flagged
#[tokio::test]
async fn sets_needs_check_for_one_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GameServerFactory::new(db).guild_id(1).build().await?;
    GameServerFactory::new(db).guild_id(2).build().await?;

    let repo = GameServerRepository::new(db);
    repo.set_needs_check(1, true).await?;

    assert!(repo.find_by_guild_id(1).await?.unwrap().needs_check);
    assert!(!repo.find_by_guild_id(2).await?.unwrap().needs_check);

    Ok(())
}
