use super::*;

/// Tests loading a guild without a mirror.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    let result = repo.find_by_guild_id(123456789).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests loading a mirror inserted by the factories.
///
/// Expected: Ok(Some) with flags, base role and roster parsed from the rows
#[tokio::test]
async fn loads_server_row_and_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = GameServerFactory::new(db)
        .guild_id(42)
        .playing(true)
        .category_id(Some(200))
        .build()
        .await?;
    GameUserFactory::new(db, server.guild_id.clone())
        .user_id(7)
        .role_id(101)
        .contribution(5)
        .build()
        .await?;

    let repo = GameServerRepository::new(db);
    let mirror = repo.find_by_guild_id(42).await?.unwrap();

    assert!(mirror.playing);
    assert_eq!(mirror.everyone_role_id, 42);
    assert_eq!(mirror.category.channel_id, Some(200));
    assert_eq!(
        mirror.players,
        vec![GamePlayer {
            user_id: 7,
            role_id: 101,
            contribution: 5
        }]
    );

    Ok(())
}

/// Tests that mirrors of other guilds are not mixed in.
///
/// Expected: only the requested guild's players returned
#[tokio::test]
async fn scopes_children_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(1)).await?;
    let other = GameServerFactory::new(db).guild_id(2).build().await?;
    GameUserFactory::new(db, other.guild_id).build().await?;

    let mirror = repo.find_by_guild_id(1).await?.unwrap();

    assert_eq!(mirror.players.len(), 1);
    assert_eq!(mirror.players[0].user_id, 500);

    Ok(())
}
