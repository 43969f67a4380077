//! Read-only report for one guild.

use guildkeep::{GuildId, Guildkeep, GuildkeepResult, GuildkeepSettings};
use tracing::instrument;

fn show<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "not configured".to_string(), |v| v.to_string())
}

/// Print `guild`'s resolved configuration, warning totals, and top `top`
/// members by level and by coins.
#[instrument(skip(settings))]
pub async fn run_inspect(
    settings: &GuildkeepSettings,
    guild: u64,
    top: usize,
) -> GuildkeepResult<()> {
    let guild = GuildId(guild);
    let (state, _due) = Guildkeep::open(settings.data_dir()).await?;

    let config = state.config().resolve(guild).await;
    println!("Guild {}", guild);
    println!("  prefix:          {}", config.prefix());
    println!("  admin role:      {}", show(*config.admin_role()));
    println!("  mod role:        {}", show(*config.mod_role()));
    println!("  autorole:        {}", show(*config.autorole()));
    println!("  welcome channel: {}", show(*config.welcome_channel()));
    println!("  goodbye channel: {}", show(*config.goodbye_channel()));
    println!("  xp cooldown:     {}s", config.xp_cooldown().as_secs());

    let counts = state.warnings().counts(guild).await;
    let total: u64 = counts.iter().map(|(_, count)| u64::from(*count)).sum();
    println!();
    println!("Warnings: {} across {} members", total, counts.len());

    println!();
    println!("Top levels:");
    let leaders = state.levels().leaderboard(guild, top).await;
    for (position, (member, record)) in leaders.iter().enumerate() {
        println!(
            "  {:>2}. {} - level {} ({} XP)",
            position + 1,
            member,
            record.level,
            record.xp
        );
    }

    println!();
    println!("Richest:");
    let richest = state.ledger().richest(guild, top).await;
    for (position, (member, coins)) in richest.iter().enumerate() {
        println!("  {:>2}. {} - {} coins", position + 1, member, coins);
    }
    Ok(())
}
