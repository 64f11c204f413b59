use super::*;

/// Tests flagging every guild at startup.
///
/// Expected: Ok(count) and every mirror flagged
#[tokio::test]
async fn flags_every_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GameServerFactory::new(db).guild_id(1).build().await?;
    GameServerFactory::new(db).guild_id(2).needs_check(true).build().await?;
    GameServerFactory::new(db).guild_id(3).build().await?;

    let repo = GameServerRepository::new(db);
    let flagged = repo.flag_all_unchecked(true).await?;

    assert_eq!(flagged, 3);
    for guild_id in 1..=3 {
        assert!(repo.find_by_guild_id(guild_id).await?.unwrap().needs_check);
    }

    Ok(())
}

/// Tests flagging with no stored guilds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn flags_nothing_without_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);

    assert_eq!(repo.flag_all_unchecked(true).await?, 0);

    Ok(())
}
