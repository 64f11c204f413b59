use super::*;

/// Tests an update event for a channel in its desired state.
///
/// Expected: no platform call
#[tokio::test]
async fn ignores_channel_in_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;
    let service = GameService::new(db, &platform, &template);

    for name in mirror.channels.keys() {
        service
            .channel_updated(&live_channel(&mirror, name))
            .await
            .unwrap();
    }

    assert!(platform.calls().is_empty());

    Ok(())
}

/// Tests a channel moved out of the category.
///
/// Expected: one edit restoring parent and position
#[tokio::test]
async fn restores_placement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;

    let mut moved = live_channel(&mirror, "castle");
    moved.parent_id = None;
    moved.position = 0;

    GameService::new(db, &platform, &template)
        .channel_updated(&moved)
        .await
        .unwrap();

    let category_id = mirror.category.channel_id.unwrap();
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::EditChannel {
            channel_id: moved.id,
            placement: crate::model::platform::ChannelPlacement {
                parent_id: category_id,
                position: template.channel_position("castle").unwrap(),
            },
        }]
    );

    Ok(())
}

/// Tests overwrite drift in every direction.
///
/// Expected: extra overwrite removed, missing one re-applied, changed one reset
#[tokio::test]
async fn diffs_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;

    let recorded = mirror.channel("tavern").unwrap();
    let villager = OverwriteTarget::Role(mirror.role("villager").unwrap().role_id);
    let knight = OverwriteTarget::Role(mirror.role("knight").unwrap().role_id);
    let stranger = OverwriteTarget::Role(77);

    let mut live = live_channel(&mirror, "tavern");
    live.overwrites.retain(|o| o.target != knight);
    for overwrite in live.overwrites.iter_mut() {
        if overwrite.target == villager {
            overwrite.allow = 0;
        }
    }
    live.overwrites.push(Overwrite::new(stranger, 1024, 0));

    GameService::new(db, &platform, &template)
        .channel_updated(&live)
        .await
        .unwrap();

    let calls = platform.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&PlatformCall::DeleteOverwrite {
        channel_id: live.id,
        target: stranger,
    }));
    assert!(calls.contains(&PlatformCall::SetOverwrite {
        channel_id: live.id,
        overwrite: *recorded.overwrite_for(knight).unwrap(),
    }));
    assert!(calls.contains(&PlatformCall::SetOverwrite {
        channel_id: live.id,
        overwrite: *recorded.overwrite_for(villager).unwrap(),
    }));

    Ok(())
}

/// Tests the same correction arriving twice.
///
/// Expected: the second event, carrying the corrected state, costs nothing
#[tokio::test]
async fn correction_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let template = sample_template();
    let platform = MockPlatform::with_everyone(GUILD_ID);
    let mirror = built_game(db, &platform, &template).await;
    let service = GameService::new(db, &platform, &template);

    let mut moved = live_channel(&mirror, "mead-hall");
    moved.position = 1;
    service.channel_updated(&moved).await.unwrap();
    assert_eq!(platform.calls().len(), 1);

    platform.clear();
    service
        .channel_updated(&live_channel(&mirror, "mead-hall"))
        .await
        .unwrap();

    assert!(platform.calls().is_empty());

    Ok(())
}
