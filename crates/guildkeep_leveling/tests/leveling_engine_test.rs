//! Tests for the leveling engine.

use guildkeep_core::{GuildId, LevelRecord, MemberId};
use guildkeep_error::ErrorCategory;
use guildkeep_leveling::{LevelingEngine, MAX_XP_GRANT, PASSIVE_XP};
use guildkeep_storage::{MemoryTableStore, TableName};
use std::sync::Arc;
use std::time::{Duration, Instant};

const GUILD: GuildId = GuildId(7);
const ALICE: MemberId = MemberId(1);
const BOB: MemberId = MemberId(2);

async fn engine(store: &Arc<MemoryTableStore>) -> LevelingEngine {
    LevelingEngine::open(store.clone()).await.unwrap()
}

#[tokio::test]
async fn test_large_award_rolls_over_two_levels() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;

    let up = engine.add_xp(GUILD, ALICE, 250).await.unwrap();

    assert!(up.leveled_up());
    assert_eq!(up.levels_gained, 2);
    assert_eq!(up.record, LevelRecord { xp: 50, level: 3 });
}

#[tokio::test]
async fn test_small_award_is_not_a_level_up() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;

    let up = engine.add_xp(GUILD, ALICE, 99).await.unwrap();
    assert!(!up.leveled_up());
    assert_eq!(up.record, LevelRecord { xp: 99, level: 1 });
}

#[tokio::test]
async fn test_grant_rejects_out_of_range_amounts() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;

    for amount in [0, MAX_XP_GRANT + 1] {
        let err = engine.grant_xp(GUILD, ALICE, amount).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    }
    assert!(store.document(TableName::Levels).await.is_none());
}

#[tokio::test]
async fn test_message_xp_respects_cooldown() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;
    let cooldown = Duration::from_secs(60);
    let start = Instant::now();

    let first = engine
        .award_message_xp(GUILD, ALICE, cooldown, start)
        .await
        .unwrap()
        .unwrap();
    assert!(PASSIVE_XP.contains(&first.awarded));

    let blocked = engine
        .award_message_xp(GUILD, ALICE, cooldown, start + Duration::from_secs(30))
        .await
        .unwrap();
    assert!(blocked.is_none());

    // Other members have their own window
    assert!(
        engine
            .award_message_xp(GUILD, BOB, cooldown, start)
            .await
            .unwrap()
            .is_some()
    );

    let second = engine
        .award_message_xp(GUILD, ALICE, cooldown, start + cooldown)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.record.xp, first.awarded + second.awarded);
}

#[tokio::test]
async fn test_set_level_resets_xp() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;
    engine.add_xp(GUILD, ALICE, 42).await.unwrap();

    let record = engine.set_level(GUILD, ALICE, 10).await.unwrap();
    assert_eq!(record, LevelRecord { xp: 0, level: 10 });

    let err = engine.set_level(GUILD, ALICE, 0).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert_eq!(engine.stats(GUILD, ALICE).await.unwrap().level, 10);
}

#[tokio::test]
async fn test_stats_creates_and_persists_record() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;

    assert_eq!(
        engine.stats(GUILD, BOB).await.unwrap(),
        LevelRecord::default()
    );

    let raw = store.document(TableName::Levels).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json["7"]["2"]["level"], 1);
    assert_eq!(json["7"]["2"]["xp"], 0);
}

#[tokio::test]
async fn test_leaderboard_order() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;
    engine.set_level(GUILD, MemberId(3), 2).await.unwrap();
    engine.add_xp(GUILD, MemberId(3), 40).await.unwrap();
    engine.set_level(GUILD, MemberId(4), 2).await.unwrap();
    engine.add_xp(GUILD, MemberId(4), 40).await.unwrap();
    engine.set_level(GUILD, MemberId(5), 5).await.unwrap();
    engine.add_xp(GUILD, ALICE, 10).await.unwrap();

    let board = engine.leaderboard(GUILD, 3).await;
    let order: Vec<MemberId> = board.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![MemberId(5), MemberId(3), MemberId(4)]);

    assert_eq!(engine.rank(GUILD, ALICE).await, Some(4));
    assert_eq!(engine.rank(GUILD, BOB).await, None);
    assert!(engine.leaderboard(GuildId(999), 10).await.is_empty());
}

#[tokio::test]
async fn test_reset_guild_only_touches_that_guild() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;
    engine.add_xp(GUILD, ALICE, 10).await.unwrap();
    engine.add_xp(GUILD, BOB, 10).await.unwrap();
    engine.add_xp(GuildId(8), ALICE, 10).await.unwrap();

    assert_eq!(engine.reset_guild(GUILD).await.unwrap(), 2);
    assert!(engine.leaderboard(GUILD, 10).await.is_empty());
    assert_eq!(engine.leaderboard(GuildId(8), 10).await.len(), 1);

    let reopened = LevelingEngine::open(store.clone()).await.unwrap();
    assert!(reopened.leaderboard(GUILD, 10).await.is_empty());
}

#[tokio::test]
async fn test_invariant_holds_across_awards() {
    let store = Arc::new(MemoryTableStore::new());
    let engine = engine(&store).await;
    let mut last_level = 1;

    for amount in [1u64, 150, 0, 999, 12, 5000, 77] {
        let record = engine.add_xp(GUILD, ALICE, amount).await.unwrap().record;
        assert!(record.xp < record.level * 100);
        assert!(record.level >= last_level);
        last_level = record.level;
    }
}
