//! 52-card deck for dealing simulated hands (simulations and benches only;
//! enabled by the `deck` feature).

use crate::cards::{Card, Rank, Suit};
use crate::hand::{Board, Hand, HOLE_CARDS};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct Deck {
    /// Top of the deck is the end of the vec.
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled, clubs first.
    ///
    /// ```
    /// use holdem_settle::deck::Deck;
    ///
    /// assert_eq!(Deck::standard().len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Shuffled with ChaCha8 from `seed`; the same seed always deals the same cards.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Up to `n` cards; fewer once the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        self.cards.split_off(keep).into_iter().rev().collect()
    }

    /// Two hole cards, or `None` if the deck cannot supply them.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.len() < HOLE_CARDS {
            return None;
        }
        Hand::try_from_cards(&self.draw_n(HOLE_CARDS)).ok()
    }

    /// `n` community cards (3 for a flop, 5 for a full board).
    pub fn deal_board(&mut self, n: usize) -> Option<Board> {
        if self.len() < n {
            return None;
        }
        Board::try_new(self.draw_n(n)).ok()
    }
}
