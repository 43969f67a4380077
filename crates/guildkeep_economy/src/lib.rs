//! Coin balances for Guildkeep.
//!
//! [`Ledger`] validates and applies credits, administrative removals, and
//! member-to-member transfers. Transfers conserve the guild's total; removals
//! clamp at zero instead of failing.
//!
//! [`RewardKind`] describes the scheduled rewards (`daily`, `work`, `beg`).
//! Rolling the amount and enforcing the cooldown belong to the caller; the
//! ledger only credits the rolled [`Reward`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;
mod reward;

pub use ledger::{Ledger, TransferReceipt};
pub use reward::{Reward, RewardKind};
