use super::*;

/// Tests adding a player to the roster.
///
/// Expected: player listed on the mirror
#[tokio::test]
async fn adds_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GameServerFactory::new(db).guild_id(42).build().await?;

    let repo = GameServerRepository::new(db);
    let player = GamePlayer {
        user_id: 7,
        role_id: 101,
        contribution: 0,
    };
    repo.add_user(42, &player).await?;

    let mirror = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(mirror.player(7), Some(&player));

    Ok(())
}
