// Settlement API boundary. The betting-round layer drives a hand through this
// trait: one `record_contribution` per bet/call/raise/all-in, then exactly one
// `settle` at showdown. It is implemented for the core `Pot` type.

use crate::hand::Board;
use crate::player::Player;
use crate::pot::{PotError, SettleError};
use crate::settlement::Settlement;

pub trait ShowdownEngine {
    // Betting
    fn record_contribution(&mut self, player: &mut Player, amount: u64) -> Result<u64, PotError>;

    // Showdown
    fn settle(&mut self, players: &mut [Player], board: &Board) -> Result<Settlement, SettleError>;

    // Queries
    fn total(&self) -> u64;
}

impl ShowdownEngine for crate::pot::Pot {
    fn record_contribution(&mut self, player: &mut Player, amount: u64) -> Result<u64, PotError> {
        self.record_contribution(player, amount)
    }

    fn settle(&mut self, players: &mut [Player], board: &Board) -> Result<Settlement, SettleError> {
        self.settle(players, board)
    }

    fn total(&self) -> u64 {
        self.total()
    }
}
