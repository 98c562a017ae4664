use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Hole cards dealt to each player in Hold'em.
pub const HOLE_CARDS: usize = 2;
/// Community cards on a complete board.
pub const MAX_BOARD_CARDS: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("hand already holds two cards")]
    HandFull,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's private cards: empty before the deal, two after it.
///
/// ```
/// use holdem_settle::cards::{Card, Rank, Suit};
/// use holdem_settle::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(Card::new(Rank::Ace, Suit::Spades)).unwrap();
/// hand.add(Card::new(Rank::King, Suit::Spades)).unwrap();
/// assert!(hand.is_complete());
/// assert!(hand.add(Card::new(Rank::Two, Suit::Clubs)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(HOLE_CARDS) }
    }

    pub fn try_from_cards(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() > HOLE_CARDS {
            return Err(HandError::HoleCount(cards.len()));
        }
        let mut hand = Self::new();
        for &c in cards {
            hand.add(c)?;
        }
        Ok(hand)
    }

    /// Append a dealt card.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= HOLE_CARDS {
            return Err(HandError::HandFull);
        }
        if self.cards.contains(&card) {
            return Err(HandError::DuplicateHoleCards);
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn card_at(&self, idx: usize) -> Option<Card> {
        self.cards.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once both hole cards are present.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == HOLE_CARDS
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_from_cards(&cards)
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use holdem_settle::cards::{Card, Rank, Suit};
/// use holdem_settle::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(MAX_BOARD_CARDS) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Deal one more community card.
    pub fn push(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(self.cards.len() + 1));
        }
        if self.cards.contains(&card) {
            return Err(HandError::DuplicateBoardCards);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Deal several community cards; stops at the first rejected card.
    pub fn extend<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().try_for_each(|c| self.push(c))
    }

    /// Reset between hands.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that a hand and board form a valid Hold'em state.
/// Requires both hole cards; allows 0..=5 board cards. Ensures uniqueness across all cards.
///
/// ```
/// use holdem_settle::hand::{validate_holdem, Board, Hand};
///
/// let hand: Hand = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_holdem(&hand, &board).unwrap();
/// ```
pub fn validate_holdem(hand: &Hand, board: &Board) -> Result<(), HandError> {
    if !hand.is_complete() {
        return Err(HandError::HoleCount(hand.len()));
    }
    if board.len() > MAX_BOARD_CARDS {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if hand.as_slice().iter().any(|c| set.contains(c)) {
        return Err(HandError::Overlap);
    }
    if hand.card_at(0) == hand.card_at(1) {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}
