use super::*;

/// Tests recreating a deleted channel.
///
/// Expected: exactly one channel created, named tavern, and the mirror pointing
/// at the new ID
#[tokio::test]
async fn recreates_deleted_tavern() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;
    let old_id = mirror.channel("tavern").unwrap().channel_id;

    GameService::new(db, &platform, &template)
        .channel_deleted(GUILD_ID, old_id)
        .await
        .unwrap();

    let created: Vec<_> = platform
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            PlatformCall::CreateChannel { settings, id, .. } => Some((settings, id)),
            _ => None,
        })
        .collect();
    assert_eq!(created.len(), 1);
    let (settings, new_id) = &created[0];
    assert_eq!(settings.name, "tavern");
    assert_eq!(settings.parent_id, mirror.category.channel_id);

    let stored = GameServerRepository::new(db)
        .find_by_guild_id(GUILD_ID)
        .await?
        .unwrap();
    let tavern = stored.channel("tavern").unwrap();
    assert_eq!(tavern.channel_id, *new_id);
    assert_eq!(tavern.overwrites, mirror.channel("tavern").unwrap().overwrites);
    assert_eq!(platform.count(is_set_overwrite), tavern.overwrites.len());

    Ok(())
}

/// Tests recreating the channel holding the rules message.
///
/// Expected: rules message posted again with its join reaction
#[tokio::test]
async fn reposts_rules_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;
    let old_rules = *mirror.rules_message().unwrap();

    GameService::new(db, &platform, &template)
        .channel_deleted(GUILD_ID, old_rules.channel_id)
        .await
        .unwrap();

    let stored = GameServerRepository::new(db)
        .find_by_guild_id(GUILD_ID)
        .await?
        .unwrap();
    let rules = stored.rules_message().unwrap();
    assert_ne!(rules.message_id, old_rules.message_id);
    assert_eq!(rules.channel_id, stored.channel("rules").unwrap().channel_id);
    assert!(platform.calls().contains(&PlatformCall::AddReaction {
        channel_id: rules.channel_id,
        message_id: rules.message_id,
        emoji: template.join_emoji.clone(),
    }));

    Ok(())
}

/// Tests recreating a deleted category.
///
/// Expected: only the category is created again
#[tokio::test]
async fn recreates_category_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;

    GameService::new(db, &platform, &template)
        .channel_deleted(GUILD_ID, mirror.category.channel_id.unwrap())
        .await
        .unwrap();

    let calls = platform.calls();
    assert_eq!(calls.len(), 1);
    let PlatformCall::CreateChannel { settings, id, .. } = &calls[0] else {
        panic!("expected a channel creation, got {:?}", calls[0]);
    };
    assert_eq!(settings.shape, ChannelShape::Category);

    let stored = GameServerRepository::new(db)
        .find_by_guild_id(GUILD_ID)
        .await?
        .unwrap();
    assert_eq!(stored.category.channel_id, Some(*id));
    assert_eq!(stored.channels, mirror.channels);

    Ok(())
}

/// Tests deletion of a channel the game does not track.
///
/// Expected: no platform call
#[tokio::test]
async fn ignores_untracked_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    built_game(db, &platform, &template).await;

    GameService::new(db, &platform, &template)
        .channel_deleted(GUILD_ID, 77)
        .await
        .unwrap();

    assert!(platform.calls().is_empty());

    Ok(())
}
