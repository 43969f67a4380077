//! End-to-end tests for command dispatch.

use guildkeep::{
    ActorSnapshot, Command, CommandContext, ConfigUpdate, DeferredTask, ErrorCategory,
    EscalationAction, GuildId, Guildkeep, LevelRecord, MemberId, MemoryTableStore, Outcome,
    RewardKind, RoleId, TableName,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

const GUILD: GuildId = GuildId(900);
const ADMIN_ROLE: RoleId = RoleId(1);
const MOD_ROLE: RoleId = RoleId(2);

fn owner() -> ActorSnapshot {
    ActorSnapshot::new(MemberId(1)).with_owner(true).with_rank(100)
}

fn admin() -> ActorSnapshot {
    ActorSnapshot::new(MemberId(2))
        .with_role(ADMIN_ROLE)
        .with_rank(50)
}

fn moderator() -> ActorSnapshot {
    ActorSnapshot::new(MemberId(3)).with_role(MOD_ROLE).with_rank(20)
}

fn member(id: u64) -> ActorSnapshot {
    ActorSnapshot::new(MemberId(id)).with_rank(1)
}

fn ctx(actor: ActorSnapshot) -> CommandContext {
    CommandContext::new(GUILD, actor)
}

async fn state() -> (Guildkeep, UnboundedReceiver<DeferredTask>, Arc<MemoryTableStore>) {
    let store = Arc::new(MemoryTableStore::new());
    let (state, due) = Guildkeep::with_store(store.clone()).await.unwrap();
    (state, due, store)
}

async fn configure_roles(state: &Guildkeep) {
    for update in [
        ConfigUpdate::AdminRole(Some(ADMIN_ROLE)),
        ConfigUpdate::ModRole(Some(MOD_ROLE)),
    ] {
        state
            .dispatch(&ctx(owner()), Command::Configure(update))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_unconfigured_roles_guide_setup() {
    let (state, _due, _store) = state().await;

    let err = state
        .dispatch(&ctx(member(9)), Command::ResetLevels)
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::RoleNotConfigured);

    let err = state
        .dispatch(
            &ctx(member(9)),
            Command::RemoveWarning {
                member: MemberId(10),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::RoleNotConfigured);
}

#[tokio::test]
async fn test_tiers_are_enforced() {
    let (state, _due, _store) = state().await;
    configure_roles(&state).await;

    let err = state
        .dispatch(&ctx(moderator()), Command::ResetLevels)
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::PermissionDenied);

    let err = state
        .dispatch(
            &ctx(member(9)),
            Command::Warn {
                target: member(10),
                reason: "spam".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::PermissionDenied);

    // Admin-role holders pass moderator checks
    assert!(
        state
            .dispatch(
                &ctx(admin()),
                Command::Warn {
                    target: member(10),
                    reason: "spam".to_string(),
                },
            )
            .await
            .is_ok()
    );
    assert!(state.dispatch(&ctx(admin()), Command::ResetLevels).await.is_ok());
}

#[tokio::test]
async fn test_warn_scenario() {
    let (state, _due, _store) = state().await;
    configure_roles(&state).await;
    let warn = || Command::Warn {
        target: member(10),
        reason: "spam".to_string(),
    };

    let Outcome::Warned(first) = state.dispatch(&ctx(moderator()), warn()).await.unwrap() else {
        panic!("expected a warning");
    };
    assert_eq!((first.count, first.action), (1, EscalationAction::NoAction));

    state.dispatch(&ctx(moderator()), warn()).await.unwrap();
    let Outcome::Warned(third) = state.dispatch(&ctx(moderator()), warn()).await.unwrap() else {
        panic!("expected a warning");
    };
    assert_eq!((third.count, third.action), (3, EscalationAction::Mute));

    let log = state
        .dispatch(
            &ctx(member(10)),
            Command::Warnings {
                member: MemberId(10),
            },
        )
        .await
        .unwrap();
    let Outcome::WarningLog { count, recent } = log else {
        panic!("expected a warning log");
    };
    assert_eq!(count, 3);
    assert!(recent.iter().all(|entry| entry.starts_with("spam - by 3 - ")));
}

#[tokio::test]
async fn test_moderator_cannot_warn_peer() {
    let (state, _due, _store) = state().await;
    configure_roles(&state).await;

    let err = state
        .dispatch(
            &ctx(moderator()),
            Command::Warn {
                target: admin(),
                reason: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::HierarchyViolation);
}

#[tokio::test]
async fn test_temp_mute_and_early_unmute() {
    let (state, _due, _store) = state().await;
    configure_roles(&state).await;

    let outcome = state
        .dispatch(
            &ctx(moderator()),
            Command::TempMute {
                target: member(10),
                minutes: 30,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Muted {
            member: MemberId(10),
            duration: Duration::from_secs(1800),
        }
    );
    assert_eq!(state.tasks().pending_count(), 1);

    let outcome = state
        .dispatch(
            &ctx(moderator()),
            Command::Unmute {
                member: MemberId(10),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Unmuted {
            member: MemberId(10),
            canceled_pending: true,
        }
    );
    assert_eq!(state.tasks().pending_count(), 0);
}

#[tokio::test]
async fn test_temp_mute_limit() {
    let (state, _due, _store) = state().await;

    let err = state
        .dispatch(
            &ctx(owner()),
            Command::TempMute {
                target: member(10),
                minutes: 40_321,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert_eq!(state.tasks().pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_reminder_is_delivered() {
    let (state, mut due, _store) = state().await;

    let outcome = state
        .dispatch(
            &ctx(member(10)),
            Command::Remind {
                minutes: 5,
                note: "stretch".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::ReminderSet { .. }));

    assert_eq!(
        due.recv().await,
        Some(DeferredTask::Reminder {
            guild: GUILD,
            member: MemberId(10),
            note: "stretch".to_string(),
        })
    );
}

#[tokio::test]
async fn test_claims_respect_cooldown() {
    let (state, _due, _store) = state().await;

    let outcome = state
        .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Daily))
        .await
        .unwrap();
    let Outcome::Claimed { reward, balance } = outcome else {
        panic!("expected a claim");
    };
    assert_eq!((reward.amount, balance), (500, 500));

    let outcome = state
        .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Daily))
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        Outcome::OnCooldown {
            kind: RewardKind::Daily,
            ..
        }
    ));

    // Cooldowns are per reward and per member
    assert!(matches!(
        state
            .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Beg))
            .await
            .unwrap(),
        Outcome::Claimed { .. }
    ));
    assert!(matches!(
        state
            .dispatch(&ctx(member(11)), Command::Claim(RewardKind::Daily))
            .await
            .unwrap(),
        Outcome::Claimed { .. }
    ));
}

#[tokio::test]
async fn test_rejected_claim_keeps_reward_available() {
    let store = Arc::new(MemoryTableStore::new());
    let near_max = u64::MAX - 100;
    store
        .put_document(
            TableName::Money,
            format!(r#"{{"{}":{{"10":{}}}}}"#, GUILD.0, near_max),
        )
        .await;
    let (state, _due) = Guildkeep::with_store(store.clone()).await.unwrap();

    for _ in 0..2 {
        let err = state
            .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Daily))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    }
    assert_eq!(state.ledger().balance(GUILD, MemberId(10)).await, near_max);
}

#[tokio::test]
async fn test_claim_with_failed_save_starts_cooldown() {
    let (state, _due, store) = state().await;

    store.set_fail_writes(true);
    let err = state
        .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Daily))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::IoFailure);
    store.set_fail_writes(false);

    assert_eq!(state.ledger().balance(GUILD, MemberId(10)).await, 500);
    assert!(matches!(
        state
            .dispatch(&ctx(member(10)), Command::Claim(RewardKind::Daily))
            .await
            .unwrap(),
        Outcome::OnCooldown { .. }
    ));
}

#[tokio::test]
async fn test_credit_and_transfer_scenario() {
    let (state, _due, _store) = state().await;

    state
        .dispatch(
            &ctx(owner()),
            Command::AddMoney {
                member: MemberId(10),
                amount: 100,
            },
        )
        .await
        .unwrap();
    state
        .dispatch(
            &ctx(member(10)),
            Command::Transfer {
                recipient: member(11),
                amount: 40,
            },
        )
        .await
        .unwrap();

    let outcome = state
        .dispatch(&ctx(member(10)), Command::Richest { limit: 10 })
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Richest(vec![(MemberId(10), 60), (MemberId(11), 40)])
    );
}

#[tokio::test]
async fn test_message_xp() {
    let (state, _due, _store) = state().await;

    let bot = ActorSnapshot::new(MemberId(77)).with_bot(true);
    assert_eq!(
        state.dispatch(&ctx(bot), Command::MessageXp).await.unwrap(),
        Outcome::Ignored
    );

    let Outcome::MessageXp(Some(first)) = state
        .dispatch(&ctx(member(10)), Command::MessageXp)
        .await
        .unwrap()
    else {
        panic!("expected XP");
    };
    assert!((10..=20).contains(&first.awarded));

    assert_eq!(
        state
            .dispatch(&ctx(member(10)), Command::MessageXp)
            .await
            .unwrap(),
        Outcome::MessageXp(None)
    );
}

#[tokio::test]
async fn test_stats_render_progress() {
    let (state, _due, _store) = state().await;
    state
        .dispatch(
            &ctx(owner()),
            Command::GrantXp {
                member: MemberId(10),
                amount: 180,
            },
        )
        .await
        .unwrap();

    let outcome = state
        .dispatch(
            &ctx(member(10)),
            Command::Stats {
                member: MemberId(10),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Stats {
            member: MemberId(10),
            record: LevelRecord { xp: 80, level: 2 },
            rank: Some(1),
            progress: "[████░░░░░░] 40%".to_string(),
        }
    );
}

#[tokio::test]
async fn test_configure_and_reset() {
    let (state, _due, store) = state().await;

    let err = state
        .dispatch(
            &ctx(owner()),
            Command::Configure(ConfigUpdate::Prefix("too long".to_string())),
        )
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert!(store.document(TableName::Config).await.is_none());

    state
        .dispatch(
            &ctx(owner()),
            Command::Configure(ConfigUpdate::Prefix("?".to_string())),
        )
        .await
        .unwrap();
    let Outcome::Config(config) = state
        .dispatch(&ctx(member(10)), Command::ShowConfig)
        .await
        .unwrap()
    else {
        panic!("expected config");
    };
    assert_eq!(config.prefix(), "?");

    assert_eq!(
        state
            .dispatch(&ctx(owner()), Command::ResetConfig)
            .await
            .unwrap(),
        Outcome::ConfigReset { had_stored: true }
    );
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let (state, _due) = Guildkeep::open(dir.path()).await.unwrap();
        state
            .dispatch(
                &ctx(owner()),
                Command::SetLevel {
                    member: MemberId(10),
                    level: 4,
                },
            )
            .await
            .unwrap();
        state
            .dispatch(
                &ctx(owner()),
                Command::AddMoney {
                    member: MemberId(10),
                    amount: 5,
                },
            )
            .await
            .unwrap();
    }

    let (state, _due) = Guildkeep::open(dir.path()).await.unwrap();
    assert_eq!(
        state.levels().stats(GUILD, MemberId(10)).await.unwrap(),
        LevelRecord { xp: 0, level: 4 }
    );
    assert_eq!(state.ledger().balance(GUILD, MemberId(10)).await, 5);
    assert!(dir.path().join("levels.json").exists());
    assert!(dir.path().join("money.json").exists());
}
