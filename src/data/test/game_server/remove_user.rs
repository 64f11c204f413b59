use super::*;

/// Tests removing a player on the roster.
///
/// Expected: Ok(true) and the player gone
#[tokio::test]
async fn removes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(42)).await?;

    let removed = repo.remove_user(42, 500).await?;

    assert!(removed);
    assert!(repo.find_by_guild_id(42).await?.unwrap().players.is_empty());

    Ok(())
}

/// Tests removing a user who is not playing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(42)).await?;

    assert!(!repo.remove_user(42, 501).await?);
    assert_eq!(repo.find_by_guild_id(42).await?.unwrap().players.len(), 1);

    Ok(())
}
