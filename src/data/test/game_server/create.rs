use super::*;

/// Tests creating a mirror for a new guild.
///
/// Expected: Ok with the mirror readable afterwards
#[tokio::test]
async fn creates_new_mirror() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    let mirror = GuildMirror::new(42, 42, "Knights of Discord");
    repo.create(&mirror).await?;

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored, mirror);
    assert!(!stored.playing);

    Ok(())
}

/// Tests creating a second mirror for the same guild.
///
/// Expected: Err(DbErr::Custom) and the first mirror untouched
#[tokio::test]
async fn fails_when_mirror_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.create(&sample_mirror(42)).await?;

    let result = repo.create(&GuildMirror::new(42, 42, "Other")).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored.category.name, "Knights of Discord");
    assert!(stored.playing);

    Ok(())
}
