//! Balance mutations over the `money` table.

use crate::Reward;
use guildkeep_core::{ActorSnapshot, GuildId, MemberId, MemberMap};
use guildkeep_error::{
    EconomyError, EconomyErrorKind, GuildkeepError, GuildkeepResult, ValidationError,
};
use guildkeep_storage::{SharedTable, TableName, TableStore};
use std::sync::Arc;
use tracing::{info, instrument};

/// Balances on both sides of a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Amount moved
    pub amount: u64,
    /// Sender's balance afterwards
    pub sender_balance: u64,
    /// Recipient's balance afterwards
    pub recipient_balance: u64,
}

/// Per-guild coin balances. A member with no entry has zero coins.
#[derive(Debug)]
pub struct Ledger {
    table: SharedTable<MemberMap<u64>>,
}

fn positive(field: &str, amount: i64) -> Result<u64, ValidationError> {
    u64::try_from(amount)
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or_else(|| ValidationError::new(field, format!("must be positive, got {}", amount)))
}

fn balance_of(members: Option<&MemberMap<u64>>, member: MemberId) -> u64 {
    members
        .and_then(|members| members.get(&member))
        .copied()
        .unwrap_or(0)
}

impl Ledger {
    /// Load the `money` table.
    pub async fn open(store: Arc<dyn TableStore>) -> GuildkeepResult<Self> {
        let table = SharedTable::open(store, TableName::Money).await?;
        Ok(Self::new(table))
    }

    /// Wrap an already opened table.
    pub fn new(table: SharedTable<MemberMap<u64>>) -> Self {
        Self { table }
    }

    /// `member`'s balance.
    pub async fn balance(&self, guild: GuildId, member: MemberId) -> u64 {
        self.table
            .read(|table| balance_of(table.guild(guild), member))
            .await
    }

    /// Sum of every balance in `guild`.
    pub async fn total(&self, guild: GuildId) -> u64 {
        self.table
            .read(|table| {
                table
                    .guild(guild)
                    .map(|members| members.values().fold(0u64, |sum, b| sum.saturating_add(*b)))
                    .unwrap_or(0)
            })
            .await
    }

    /// Add `amount` coins to `member` and return the new balance.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is not positive or the balance would
    /// overflow.
    #[instrument(skip(self))]
    pub async fn credit(
        &self,
        guild: GuildId,
        member: MemberId,
        amount: i64,
    ) -> GuildkeepResult<u64> {
        let amount = positive("amount", amount)?;
        self.add(guild, member, amount).await
    }

    /// Credit a rolled scheduled reward.
    pub async fn claim(
        &self,
        guild: GuildId,
        member: MemberId,
        reward: Reward,
    ) -> GuildkeepResult<u64> {
        let balance = self.add(guild, member, reward.amount).await?;
        info!(%guild, %member, kind = %reward.kind, amount = reward.amount, "Reward claimed");
        Ok(balance)
    }

    async fn add(&self, guild: GuildId, member: MemberId, amount: u64) -> GuildkeepResult<u64> {
        let balance = self
            .table
            .mutate(|table| {
                let current = balance_of(table.guild(guild), member);
                let updated = current.checked_add(amount).ok_or_else(|| {
                    ValidationError::new("amount", "balance would exceed the maximum")
                })?;
                table.guild_mut(guild).insert(member, updated);
                Ok::<_, GuildkeepError>(updated)
            })
            .await?;

        info!(%guild, %member, amount, balance, "Coins credited");
        Ok(balance)
    }

    /// Take up to `amount` coins from `member` and return the new balance.
    ///
    /// Never fails for lack of funds: the balance bottoms out at zero.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is not positive.
    #[instrument(skip(self))]
    pub async fn remove_money(
        &self,
        guild: GuildId,
        member: MemberId,
        amount: i64,
    ) -> GuildkeepResult<u64> {
        let amount = positive("amount", amount)?;
        let balance = self
            .table
            .mutate(|table| {
                let current = balance_of(table.guild(guild), member);
                let updated = current.saturating_sub(amount);
                table.guild_mut(guild).insert(member, updated);
                Ok::<_, GuildkeepError>(updated)
            })
            .await?;

        info!(%guild, %member, amount, balance, "Coins removed");
        Ok(balance)
    }

    /// Move `amount` coins from `sender` to `recipient`.
    ///
    /// Both balances change inside one table critical section, so the
    /// guild's total is the same before and after.
    ///
    /// # Errors
    ///
    /// - `InsufficientFunds` if `amount` is not positive or exceeds the
    ///   sender's balance
    /// - `InvalidTarget` if the recipient is the sender or an automated account
    #[instrument(skip(self, recipient), fields(recipient = %recipient.member()))]
    pub async fn transfer(
        &self,
        guild: GuildId,
        sender: MemberId,
        recipient: &ActorSnapshot,
        amount: i64,
    ) -> GuildkeepResult<TransferReceipt> {
        let to = recipient.member();
        if to == sender {
            return Err(EconomyError::new(EconomyErrorKind::InvalidTarget(
                "cannot transfer to yourself".to_string(),
            ))
            .into());
        }
        if recipient.is_bot() {
            return Err(EconomyError::new(EconomyErrorKind::InvalidTarget(format!(
                "{} is an automated account",
                to
            )))
            .into());
        }

        let receipt = self
            .table
            .mutate(|table| {
                let available = balance_of(table.guild(guild), sender);
                let amount = u64::try_from(amount)
                    .ok()
                    .filter(|amount| *amount > 0 && *amount <= available)
                    .ok_or_else(|| {
                        EconomyError::new(EconomyErrorKind::InsufficientFunds {
                            requested: amount,
                            available,
                        })
                    })?;
                let recipient_balance = balance_of(table.guild(guild), to)
                    .checked_add(amount)
                    .ok_or_else(|| {
                        ValidationError::new("amount", "recipient balance would exceed the maximum")
                    })?;

                let sender_balance = available - amount;
                let members = table.guild_mut(guild);
                members.insert(sender, sender_balance);
                members.insert(to, recipient_balance);
                Ok::<_, GuildkeepError>(TransferReceipt {
                    amount,
                    sender_balance,
                    recipient_balance,
                })
            })
            .await?;

        info!(%guild, %sender, amount = receipt.amount, "Coins transferred");
        Ok(receipt)
    }

    /// Top `limit` balances; ties go to the lower member id.
    pub async fn richest(&self, guild: GuildId, limit: usize) -> Vec<(MemberId, u64)> {
        let mut ranked: Vec<(MemberId, u64)> = self
            .table
            .read(|table| {
                table
                    .guild(guild)
                    .map(|members| members.iter().map(|(m, b)| (*m, *b)).collect())
                    .unwrap_or_default()
            })
            .await;

        ranked.sort_by(|(a_id, a), (b_id, b)| b.cmp(a).then_with(|| a_id.cmp(b_id)));
        ranked.truncate(limit);
        ranked
    }
}
