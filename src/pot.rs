//! Per-hand pot ledger and showdown settlement.
//!
//! Contributions are recorded as they happen (the player's stack is debited
//! immediately). At showdown the pot is cut into one sub-pot per distinct
//! contribution level; each sub-pot goes to the best hand among the
//! contesting players who reached that level.

use crate::chips::ChipsError;
use crate::config::{ConfigError, OddChipPolicy, SettleConfig};
use crate::evaluator::{evaluate_holdem, EvalError, HandRank};
use crate::hand::Board;
use crate::player::{Player, PlayerId, Position};
use crate::settlement::{split_evenly, PotAward, SidePot, Settlement};
use std::collections::{HashMap, HashSet};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PotError {
    #[error("contribution from {player} must be positive, got {amount}")]
    InvalidContribution { player: PlayerId, amount: u64 },
    #[error("contribution of {amount} from {player} would overflow a pot of {total}")]
    Overflow { player: PlayerId, amount: u64, total: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettleError {
    #[error("no contesting players at showdown")]
    EmptyContenders,
    #[error("nothing in the pot to settle")]
    EmptyPot,
    #[error("board incomplete for showdown: expected {expected} cards, got {got}")]
    IncompleteBoard { expected: usize, got: usize },
    #[error("player {0} is seated twice")]
    DuplicatePlayer(PlayerId),
    #[error("contesting player {0} has no hole cards")]
    MissingHoleCards(PlayerId),
    #[error("hand evaluation failed for {player}: {source}")]
    Evaluation {
        player: PlayerId,
        #[source]
        source: EvalError,
    },
    #[error("no contesting player has a stake in the pot")]
    NoEligibleContender,
    #[error("payout mismatch: collected {collected}, awarded {awarded}")]
    Imbalance { collected: u64, awarded: u64 },
    #[error("cannot credit winnings to {player}: {source}")]
    Overflow {
        player: PlayerId,
        #[source]
        source: ChipsError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Stake {
    player: PlayerId,
    amount: u64,
}

/// A contesting player's showdown facts, detached from the `Player` borrow.
#[derive(Debug, Clone)]
struct Contender {
    position: Position,
    rank: HandRank,
}

/// Chips committed by each player during one hand.
///
/// ```
/// use holdem_settle::hand::Board;
/// use holdem_settle::player::Player;
/// use holdem_settle::pot::Pot;
///
/// let mut a = Player::builder().id("a").chips(100).hand("Ah Ad".parse().unwrap()).build().unwrap();
/// let mut b = Player::builder().id("b").chips(100).hand("Kh Kd".parse().unwrap()).build().unwrap();
/// let mut pot = Pot::new();
/// pot.record_contribution(&mut a, 100).unwrap();
/// pot.record_contribution(&mut b, 100).unwrap();
///
/// let board: Board = "2c 7d 9s Jc 3h".parse().unwrap();
/// let mut players = [a, b];
/// let result = pot.settle(&mut players, &board).unwrap();
/// assert_eq!(result.amount_for(players[0].id()), 200);
/// assert_eq!(players[0].chips().get(), 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pot {
    config: SettleConfig,
    /// In order of each player's first contribution.
    stakes: Vec<Stake>,
    /// Sum of `stakes`; every stake and sub-pot amount is bounded by it.
    total: u64,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SettleConfig) -> Self {
        Self { config, stakes: Vec::new(), total: 0 }
    }

    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    /// Move up to `amount` chips from `player`'s stack into the pot.
    ///
    /// A player short of `amount` goes all-in for the rest of their stack.
    /// Returns the chips actually moved. A contribution the pot total cannot
    /// hold is refused before the stack is touched.
    pub fn record_contribution(&mut self, player: &mut Player, amount: u64) -> Result<u64, PotError> {
        if amount == 0 {
            log::warn!("rejected zero contribution from {}", player.id());
            return Err(PotError::InvalidContribution { player: player.id().clone(), amount });
        }

        let taken = amount.min(player.chips().get());
        if taken == 0 {
            log::debug!("{} has no chips left; nothing added to the pot", player.id());
            return Ok(0);
        }
        let Some(total) = self.total.checked_add(taken) else {
            log::warn!("rejected contribution of {taken} from {}: pot total overflows", player.id());
            return Err(PotError::Overflow { player: player.id().clone(), amount: taken, total: self.total });
        };
        if taken < amount {
            log::debug!("{} is all-in for {taken} (asked {amount})", player.id());
        }

        player.chips_mut().subtract(taken);
        self.total = total;
        match self.stakes.iter_mut().find(|s| &s.player == player.id()) {
            Some(stake) => stake.amount += taken,
            None => self.stakes.push(Stake { player: player.id().clone(), amount: taken }),
        }
        log::debug!(
            "{} put {taken} in the pot (now {} this hand, pot {})",
            player.id(),
            self.contribution(player.id()),
            self.total()
        );
        Ok(taken)
    }

    /// Cumulative contribution of `id` this hand.
    pub fn contribution(&self, id: &PlayerId) -> u64 {
        self.stakes.iter().find(|s| &s.player == id).map_or(0, |s| s.amount)
    }

    /// Players who have put chips in, in order of their first contribution.
    pub fn contributors(&self) -> impl Iterator<Item = &PlayerId> {
        self.stakes.iter().map(|s| &s.player)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    /// Clear all contributions for the next hand.
    pub fn reset(&mut self) {
        self.stakes.clear();
        self.total = 0;
    }

    /// Main pot followed by side pots, one per distinct contribution level.
    ///
    /// Each level's pot is `(level - previous level) * contributors at or above level`.
    pub fn breakdown(&self) -> Vec<SidePot> {
        let mut levels: Vec<u64> = self.stakes.iter().map(|s| s.amount).filter(|&a| a > 0).collect();
        levels.sort_unstable();
        levels.dedup();

        let mut prev = 0u64;
        levels
            .into_iter()
            .map(|level| {
                let contributors: Vec<PlayerId> = self
                    .stakes
                    .iter()
                    .filter(|s| s.amount >= level)
                    .map(|s| s.player.clone())
                    .collect();
                // At most the pot total, so this cannot overflow.
                let amount = (level - prev) * contributors.len() as u64;
                prev = level;
                SidePot { level, amount, contributors }
            })
            .collect()
    }

    /// Showdown: decide every sub-pot and pay the winners.
    ///
    /// `players` are the seated players; those still contesting compete.
    /// Contributors missing from `players` count as folded. On success the
    /// winners' stacks are credited and the pot is emptied; on error nothing
    /// changes.
    pub fn settle(&mut self, players: &mut [Player], board: &Board) -> Result<Settlement, SettleError> {
        self.config.validate()?;

        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.id())) {
            return Err(SettleError::DuplicatePlayer(dup.id().clone()));
        }

        let contesting: Vec<&Player> = players.iter().filter(|p| p.is_contesting()).collect();
        if contesting.is_empty() {
            return Err(SettleError::EmptyContenders);
        }
        let collected = self.total();
        if collected == 0 {
            return Err(SettleError::EmptyPot);
        }

        let settlement = if let [sole] = contesting[..] {
            self.award_uncontested(sole, board)
        } else {
            self.resolve_showdown(&contesting, board)?
        };

        let awarded = settlement.total_awarded();
        if awarded != collected {
            return Err(SettleError::Imbalance { collected, awarded });
        }

        // Work out every new balance before touching any of them.
        let credits = players
            .iter()
            .enumerate()
            .filter(|(_, p)| settlement.amount_for(p.id()) > 0)
            .map(|(i, p)| {
                p.chips()
                    .checked_add(settlement.amount_for(p.id()))
                    .map(|balance| (i, balance))
                    .map_err(|source| SettleError::Overflow { player: p.id().clone(), source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (i, balance) in credits {
            players[i].chips_mut().set(balance);
        }
        log::info!(
            "settled pot of {collected} across {} sub-pot(s): {}",
            settlement.pots().len(),
            settlement
                .winnings()
                .iter()
                .map(|(id, w)| format!("{id} +{}", w.amount))
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.reset();
        Ok(settlement)
    }

    /// Everyone else folded: the last player takes the whole pot, no comparison.
    fn award_uncontested(&self, sole: &Player, board: &Board) -> Settlement {
        // Shown for the record only when the board is out.
        let hand_rank = if board.len() >= self.config.board_size {
            evaluate_holdem(sole.hand(), board).ok()
        } else {
            None
        };

        let total = self.total();
        let mut settlement = Settlement::default();
        settlement.credit(sole.id(), total, hand_rank);
        settlement.pots.push(PotAward {
            level: self.stakes.iter().map(|s| s.amount).max().unwrap_or(0),
            amount: total,
            carried_in: 0,
            eligible: vec![sole.id().clone()],
            winners: vec![sole.id().clone()],
        });
        log::debug!("{} wins {total} uncontested", sole.id());
        settlement
    }

    fn resolve_showdown(&self, contesting: &[&Player], board: &Board) -> Result<Settlement, SettleError> {
        if board.len() < self.config.board_size {
            return Err(SettleError::IncompleteBoard { expected: self.config.board_size, got: board.len() });
        }

        // Only players with chips at stake can win anything.
        let contenders: HashMap<&PlayerId, Contender> = contesting
            .iter()
            .filter(|p| self.contribution(p.id()) > 0)
            .map(|p| -> Result<_, SettleError> { Ok((p.id(), self.contender(p, board)?)) })
            .collect::<Result<_, SettleError>>()?;

        let mut awards: Vec<PotAward> = self
            .breakdown()
            .into_iter()
            .map(|pot| {
                let mut eligible: Vec<PlayerId> =
                    pot.contributors.into_iter().filter(|id| contenders.contains_key(id)).collect();
                self.order_for_odd_chips(&mut eligible, &contenders);
                PotAward { level: pot.level, amount: pot.amount, carried_in: 0, eligible, winners: Vec::new() }
            })
            .collect();

        self.carry_unwinnable(&mut awards)?;

        let mut settlement = Settlement::default();
        for award in awards.iter_mut() {
            let Some(best) = award.eligible.iter().filter_map(|id| contenders.get(id)).map(|c| c.rank).max()
            else {
                continue;
            };
            award.winners =
                award.eligible.iter().filter(|id| contenders.get(id).is_some_and(|c| c.rank == best)).cloned().collect();

            for (id, share) in split_evenly(award.amount + award.carried_in, &award.winners) {
                settlement.credit(id, share, contenders.get(id).map(|c| c.rank));
            }
            log::debug!(
                "sub-pot at level {} ({} + {} carried) -> {:?} with {}",
                award.level,
                award.amount,
                award.carried_in,
                award.winners,
                best.category
            );
        }
        settlement.pots = awards;
        Ok(settlement)
    }

    fn contender(&self, player: &Player, board: &Board) -> Result<Contender, SettleError> {
        if !player.hand().is_complete() {
            return Err(SettleError::MissingHoleCards(player.id().clone()));
        }
        let rank = evaluate_holdem(player.hand(), board)
            .map_err(|source| SettleError::Evaluation { player: player.id().clone(), source })?;
        Ok(Contender { position: player.position(), rank })
    }

    /// Levels whose every contributor folded have no winner; their chips drop
    /// to the nearest lower level that does.
    fn carry_unwinnable(&self, awards: &mut [PotAward]) -> Result<(), SettleError> {
        for i in (0..awards.len()).rev() {
            if !awards[i].eligible.is_empty() {
                continue;
            }
            let moving = awards[i].amount + awards[i].carried_in;
            awards[i].carried_in = 0;
            let target = (0..i).rev().find(|&j| !awards[j].eligible.is_empty());
            match target {
                Some(j) => {
                    log::warn!(
                        "no contesting player reached level {}; carrying {moving} down to level {}",
                        awards[i].level,
                        awards[j].level
                    );
                    awards[j].carried_in += moving;
                }
                None => return Err(SettleError::NoEligibleContender),
            }
        }
        Ok(())
    }

    fn order_for_odd_chips(&self, ids: &mut [PlayerId], contenders: &HashMap<&PlayerId, Contender>) {
        match self.config.odd_chip_policy {
            OddChipPolicy::TablePosition => ids.sort_by_key(|id| {
                (contenders.get(id).map_or(Position::MAX, |c| c.position), id.clone())
            }),
            OddChipPolicy::PlayerId => ids.sort(),
            OddChipPolicy::ContributionOrder => ids.sort_by_key(|id| {
                self.stakes.iter().position(|s| &s.player == id).unwrap_or(usize::MAX)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;

    fn player(id: &str, chips: u64, hand: &str, position: Position) -> Player {
        Player::builder()
            .id(id)
            .chips(chips)
            .hand(hand.parse().expect("valid hand"))
            .position(position)
            .build()
            .expect("valid player")
    }

    fn board() -> Board {
        "2c 3d 4h 8s Kc".parse().expect("valid board")
    }

    #[test]
    fn zero_contribution_is_rejected() {
        let mut p = player("a", 100, "As Ah", 0);
        let mut pot = Pot::new();
        let err = pot.record_contribution(&mut p, 0).unwrap_err();
        assert!(matches!(err, PotError::InvalidContribution { amount: 0, .. }));
        assert_eq!(p.chips().get(), 100);
        assert!(pot.is_empty());
    }

    #[test]
    fn contribution_is_capped_at_stack() {
        let mut p = player("a", 300, "As Ah", 0);
        let mut pot = Pot::new();
        assert_eq!(pot.record_contribution(&mut p, 500).unwrap(), 300);
        assert_eq!(p.chips().get(), 0);
        assert_eq!(pot.contribution(p.id()), 300);
        assert_eq!(pot.record_contribution(&mut p, 50).unwrap(), 0);
        assert_eq!(pot.total(), 300);
    }

    #[test]
    fn contributions_accumulate_across_rounds() {
        let mut p = player("a", 1000, "As Ah", 0);
        let mut pot = Pot::new();
        pot.record_contribution(&mut p, 10).unwrap();
        pot.record_contribution(&mut p, 90).unwrap();
        pot.record_contribution(&mut p, 200).unwrap();
        assert_eq!(pot.contribution(p.id()), 300);
        assert_eq!(p.chips().get(), 700);
        assert_eq!(pot.contributors().count(), 1);
    }

    #[test]
    fn contribution_that_overflows_the_pot_is_refused() {
        let half = u64::MAX / 2 + 1;
        let mut a = player("a", half, "As Ah", 0);
        let mut b = player("b", half, "Ks Kh", 1);
        let mut pot = Pot::new();
        assert_eq!(pot.record_contribution(&mut a, half).unwrap(), half);

        let err = pot.record_contribution(&mut b, half).unwrap_err();
        assert!(matches!(err, PotError::Overflow { amount, total, .. } if amount == half && total == half));
        assert_eq!(b.chips().get(), half, "stack untouched");
        assert_eq!(pot.contribution(b.id()), 0);

        let mut players = [a, b];
        let result = pot.settle(&mut players, &board()).unwrap();
        assert_eq!(result.total_awarded(), half);
        assert_eq!(players[0].chips().get(), half);
    }

    #[test]
    fn top_up_past_a_full_pot_keeps_the_stack() {
        let mut p = player("a", u64::MAX, "As Ah", 0);
        let mut pot = Pot::new();
        pot.record_contribution(&mut p, u64::MAX).unwrap();
        p.chips_mut().set(10);

        assert!(matches!(pot.record_contribution(&mut p, 10), Err(PotError::Overflow { .. })));
        assert_eq!(p.chips().get(), 10);
        assert_eq!(pot.contribution(p.id()), u64::MAX);
        assert_eq!(pot.total(), u64::MAX);
    }

    #[test]
    fn winnings_that_overflow_a_stack_fail_without_paying_anyone() {
        let mut a = player("a", u64::MAX, "As Ah", 0);
        let mut b = player("b", 100, "7c 6d", 1);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 10).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();

        let mut players = [a, b];
        let err = pot.settle(&mut players, &board()).unwrap_err();
        assert!(matches!(&err, SettleError::Overflow { player, .. } if player.as_str() == "a"));
        assert_eq!(players[0].chips().get(), u64::MAX - 10);
        assert_eq!(players[1].chips().get(), 0);
        assert_eq!(pot.total(), 110);
    }

    #[test]
    fn breakdown_levels() {
        let mut a = player("a", 50, "As Ah", 0);
        let mut b = player("b", 100, "Ks Kh", 1);
        let mut c = player("c", 200, "Qs Qh", 2);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 50).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();
        pot.record_contribution(&mut c, 200).unwrap();

        let pots = pot.breakdown();
        let shape: Vec<(u64, u64, usize)> =
            pots.iter().map(|p| (p.level, p.amount, p.contributors.len())).collect();
        assert_eq!(shape, vec![(50, 150, 3), (100, 100, 2), (200, 100, 1)]);
        assert_eq!(pots.iter().map(|p| p.amount).sum::<u64>(), pot.total());
    }

    #[test]
    fn empty_contenders_is_an_error() {
        let mut a = player("a", 100, "As Ah", 0);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        a.fold();
        let mut players = [a];
        assert_eq!(pot.settle(&mut players, &board()).unwrap_err(), SettleError::EmptyContenders);
        assert_eq!(pot.total(), 100, "failed settle leaves the pot intact");
    }

    #[test]
    fn incomplete_board_is_an_error_and_mutates_nothing() {
        let mut a = player("a", 100, "As Ah", 0);
        let mut b = player("b", 100, "Ks Kh", 1);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();
        let mut players = [a, b];
        let flop: Board = "2c 3d 4h".parse().unwrap();
        assert_eq!(
            pot.settle(&mut players, &flop).unwrap_err(),
            SettleError::IncompleteBoard { expected: 5, got: 3 }
        );
        assert_eq!(players[0].chips().get(), 0);
        assert_eq!(players[1].chips().get(), 0);
        assert_eq!(pot.total(), 200);
    }

    #[test]
    fn missing_hole_cards_is_an_error() {
        let mut a = player("a", 100, "As Ah", 0);
        let mut b = Player::builder().id("b").chips(100).position(1).build().unwrap();
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();
        let mut players = [a, b];
        assert_eq!(
            pot.settle(&mut players, &board()).unwrap_err(),
            SettleError::MissingHoleCards(PlayerId::from("b"))
        );
    }

    #[test]
    fn duplicate_seat_is_an_error() {
        let mut a = player("a", 100, "As Ah", 0);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        let mut players = [a.clone(), a];
        assert!(matches!(pot.settle(&mut players, &board()), Err(SettleError::DuplicatePlayer(_))));
    }

    #[test]
    fn single_contender_on_flop_takes_pot_without_evaluation() {
        let mut a = player("a", 100, "7s 2h", 0);
        let mut b = player("b", 100, "As Ah", 1);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 40).unwrap();
        pot.record_contribution(&mut b, 60).unwrap();
        b.fold();
        let mut players = [a, b];
        let flop: Board = "Ad Kd Qd".parse().unwrap();

        let result = pot.settle(&mut players, &flop).unwrap();
        let win = result.get(players[0].id()).unwrap();
        assert_eq!(win.amount, 100);
        assert!(win.hand_rank.is_none());
        assert_eq!(players[0].chips().get(), 160);
        assert!(pot.is_empty());
    }

    #[test]
    fn all_folded_level_carries_down() {
        // c raises to 300 then folds; a and b only reached 100.
        let mut a = player("a", 100, "As Ah", 0);
        let mut b = player("b", 100, "Js Jh", 1);
        let mut c = player("c", 300, "Qs Qh", 2);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();
        pot.record_contribution(&mut c, 300).unwrap();
        c.fold();
        let mut players = [a, b, c];

        let result = pot.settle(&mut players, &board()).unwrap();
        assert_eq!(result.amount_for(&PlayerId::from("a")), 500);
        assert_eq!(result.pots().len(), 2);
        assert!(result.pots()[1].is_carried_over());
        assert_eq!(result.pots()[0].carried_in, 200);
        assert_eq!(players[0].chips().get(), 500);
    }

    #[test]
    fn contender_with_no_stake_cannot_win() {
        let mut a = player("a", 100, "As Ah", 0);
        let b = player("b", 100, "Ks Kh", 1);
        let mut c = player("c", 100, "Qs Qh", 2);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        pot.record_contribution(&mut c, 100).unwrap();
        a.fold();
        let mut players = [a, b, c];

        let result = pot.settle(&mut players, &board()).unwrap();
        assert_eq!(result.amount_for(&PlayerId::from("c")), 200);
        assert_eq!(result.amount_for(&PlayerId::from("b")), 0);
    }

    #[test]
    fn no_contender_with_stake_is_an_error() {
        let mut a = player("a", 100, "As Ah", 0);
        let b = player("b", 100, "Ks Kh", 1);
        let c = player("c", 100, "Qs Qh", 2);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        a.fold();
        let mut players = [a, b, c];
        assert_eq!(pot.settle(&mut players, &board()).unwrap_err(), SettleError::NoEligibleContender);
        assert_eq!(pot.total(), 100);
    }

    #[test]
    fn odd_chip_policies_pick_different_players() {
        // a and b chop with the board's straight; 3 chips in the pot.
        let straight: Board = "9c Td Jh Qs Kc".parse().unwrap();
        let run = |policy: OddChipPolicy| {
            let mut a = player("z-first", 10, "2s 3h", 1);
            let mut b = player("a-second", 10, "2d 3c", 0);
            let mut c = player("m-folded", 10, "4d 5c", 2);
            let mut pot = Pot::with_config(SettleConfig::default().with_odd_chip_policy(policy));
            pot.record_contribution(&mut a, 1).unwrap();
            pot.record_contribution(&mut b, 1).unwrap();
            pot.record_contribution(&mut c, 1).unwrap();
            c.fold();
            let mut players = [a, b, c];
            let result = pot.settle(&mut players, &straight).unwrap();
            assert_eq!(result.total_awarded(), 3);
            (result.amount_for(&PlayerId::from("z-first")), result.amount_for(&PlayerId::from("a-second")))
        };

        assert_eq!(run(OddChipPolicy::TablePosition), (1, 2));
        assert_eq!(run(OddChipPolicy::PlayerId), (1, 2));
        assert_eq!(run(OddChipPolicy::ContributionOrder), (2, 1));
    }

    #[test]
    fn winners_carry_hand_evidence() {
        let mut a = player("a", 100, "Ks Kh", 0);
        let mut b = player("b", 100, "Qs Qh", 1);
        let mut pot = Pot::new();
        pot.record_contribution(&mut a, 100).unwrap();
        pot.record_contribution(&mut b, 100).unwrap();
        let mut players = [a, b];

        let result = pot.settle(&mut players, &board()).unwrap();
        let rank = result.get(&PlayerId::from("a")).and_then(|w| w.hand_rank).unwrap();
        assert_eq!(rank.category, Category::ThreeOfAKind);
        assert!(result.get(&PlayerId::from("b")).is_none());
    }
}
