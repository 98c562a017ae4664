use crate::cards::{Card, Suit};

/// The flush suit, when all five cards share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == first).then_some(first);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
