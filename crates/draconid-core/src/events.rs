//! Events emitted by the progression ledger for shell feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Achievement, Rank};

/// Progression events for the frontend notification system.
///
/// The ledger queues these as it mutates; callers drain the queue after
/// each operation and render them however they like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressEvent {
    /// XP was added to the ledger.
    XpAwarded { amount: u32, total: u64 },
    /// Cumulative XP crossed a rank threshold upward.
    RankChanged { from: Rank, to: Rank },
    /// An achievement was granted for the first time.
    AchievementGranted { achievement: Achievement, xp: u32 },
}
