use super::*;

/// Tests deleting a mirror with children.
///
/// Expected: server row and every child row removed
#[tokio::test]
async fn deletes_mirror_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(42)).await?;

    repo.delete(42).await?;

    assert!(repo.find_by_guild_id(42).await?.is_none());
    assert!(entity::prelude::GameRole::find().all(db).await?.is_empty());
    assert!(entity::prelude::GameChannel::find().all(db).await?.is_empty());
    assert!(entity::prelude::GameChannelOverwrite::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::GameMessage::find().all(db).await?.is_empty());
    assert!(entity::prelude::GameUser::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting one guild among several.
///
/// Expected: other guild's mirror kept
#[tokio::test]
async fn keeps_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameServerRepository::new(db);
    repo.save(&sample_mirror(1)).await?;
    repo.save(&sample_mirror(2)).await?;

    repo.delete(1).await?;

    assert!(repo.find_by_guild_id(1).await?.is_none());
    assert_eq!(repo.find_by_guild_id(2).await?.unwrap().roles.len(), 3);

    Ok(())
}
