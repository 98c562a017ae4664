//! Showdown results: who won how much, and which sub-pots paid them.

use crate::evaluator::HandRank;
use crate::player::PlayerId;
use std::collections::BTreeMap;

/// One contribution level of the pot before showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SidePot {
    /// Cumulative contribution a player needs to have a stake in this pot.
    pub level: u64,
    pub amount: u64,
    /// Everyone who put in at least `level`, folded or not.
    pub contributors: Vec<PlayerId>,
}

/// How one sub-pot was resolved at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PotAward {
    pub level: u64,
    /// Chips collected at this level, before any carry.
    pub amount: u64,
    /// Chips received from higher levels that nobody could win.
    pub carried_in: u64,
    /// Contesting players with a stake at this level.
    pub eligible: Vec<PlayerId>,
    /// Players who shared this pot, in odd-chip order.
    pub winners: Vec<PlayerId>,
}

impl PotAward {
    /// Chips paid out of this pot.
    pub fn paid(&self) -> u64 {
        if self.winners.is_empty() {
            0
        } else {
            self.amount + self.carried_in
        }
    }

    /// True when nobody could win this level and its chips moved down.
    pub fn is_carried_over(&self) -> bool {
        self.eligible.is_empty()
    }
}

/// A winner's total payout and the hand that earned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerWinning {
    pub amount: u64,
    /// Best five-card hand. `None` only when the pot was won uncontested
    /// before the board was complete.
    pub hand_rank: Option<HandRank>,
}

/// Outcome of settling one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    pub(crate) winnings: BTreeMap<PlayerId, PlayerWinning>,
    pub(crate) pots: Vec<PotAward>,
}

impl Settlement {
    pub fn get(&self, id: &PlayerId) -> Option<&PlayerWinning> {
        self.winnings.get(id)
    }

    /// Amount won by `id`, zero for non-winners.
    pub fn amount_for(&self, id: &PlayerId) -> u64 {
        self.winnings.get(id).map_or(0, |w| w.amount)
    }

    pub fn winnings(&self) -> &BTreeMap<PlayerId, PlayerWinning> {
        &self.winnings
    }

    pub fn winners(&self) -> impl Iterator<Item = &PlayerId> {
        self.winnings.keys()
    }

    pub fn pots(&self) -> &[PotAward] {
        &self.pots
    }

    pub fn total_awarded(&self) -> u64 {
        self.winnings.values().map(|w| w.amount).sum()
    }

    pub(crate) fn credit(&mut self, id: &PlayerId, amount: u64, hand_rank: Option<HandRank>) {
        let entry = self
            .winnings
            .entry(id.clone())
            .or_insert(PlayerWinning { amount: 0, hand_rank });
        entry.amount += amount;
    }
}

/// Split `amount` evenly among `winners` (already in odd-chip order); the first
/// `amount % n` winners get one extra chip. Nothing is created or lost.
pub(crate) fn split_evenly<'a>(amount: u64, winners: &'a [PlayerId]) -> Vec<(&'a PlayerId, u64)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u64;
    let per = amount / n;
    let rem = (amount % n) as usize;
    winners.iter().enumerate().map(|(i, id)| (id, per + u64::from(i < rem))).collect()
}
