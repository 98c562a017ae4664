pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

/// Fewest cards that can form a poker hand.
pub const HAND_SIZE: usize = 5;
/// Most cards a Hold'em player can choose from (2 hole + 5 board).
pub const MAX_CARDS: usize = 7;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best five-card hand a player holds: category, the five cards, and the
/// tie-break key that orders hands within the category. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct HandRank {
    pub category: Category,
    pub best_five: [Card; 5],
    key: [Rank; 5],
    key_len: u8,
    value: HandValue,
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandRank {}

impl HandRank {
    pub(crate) fn new(category: Category, best_five: [Card; 5], tiebreak: &[Rank]) -> Self {
        let mut key = [Rank::Two; 5];
        let len = tiebreak.len().min(key.len());
        key[..len].copy_from_slice(&tiebreak[..len]);
        let value = HandValue::from_parts(category, &tiebreak[..len]);
        Self { category, best_five, key, key_len: len as u8, value }
    }

    /// Ranks compared, in order, between two hands of the same category.
    /// e.g. trips: trip rank then two kickers; full house: trips then pair.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.key[..self.key_len as usize]
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, c) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five descending rank tiebreakers into a comparable value.
    /// Missing trailing ranks pack as zero, below any real rank.
    pub fn from_parts(category: Category, ranks_desc: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        // r0 is the primary tiebreaker and must be more significant than r1..r4.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate: {0} (need at least 5)")]
    NotEnoughCards(usize),
    #[error("too many cards to evaluate: {0} (at most 7)")]
    TooManyCards(usize),
}

/// Evaluate a Hold'em hand given hole cards and a board.
/// Validates inputs, combines the hole cards with the board (5..=7 cards),
/// and returns the best five-card rank with category and tiebreaks.
///
/// ```
/// use holdem_settle::evaluator::{evaluate_holdem, Category};
/// use holdem_settle::hand::{Board, Hand};
///
/// let hand: Hand = "Q♣ Q♦".parse().unwrap();
/// let board: Board = "3♥ 7♥ J♠ Q♥ 10♦".parse().unwrap();
///
/// let rank = evaluate_holdem(&hand, &board).unwrap();
/// assert_eq!(rank.category, Category::ThreeOfAKind);
/// ```
pub fn evaluate_holdem(hand: &Hand, board: &Board) -> Result<HandRank, EvalError> {
    validate_holdem(hand, board)?;
    let mut cards = Vec::with_capacity(hand.len() + board.len());
    cards.extend_from_slice(hand.as_slice());
    cards.extend_from_slice(board.as_slice());
    evaluate_cards(&cards)
}

/// Best five-card rank among all `C(n, 5)` subsets of `cards`, for 5 <= n <= 7.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandRank, EvalError> {
    use combinations::Combinations;

    if cards.len() < HAND_SIZE {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }

    let best = Combinations::<HAND_SIZE>::new(cards.len())
        .map(|idx| evaluate_five(&idx.map(|i| cards[i])))
        .max();
    // At least one subset exists once the length checks pass.
    best.ok_or(EvalError::NotEnoughCards(cards.len()))
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted cards, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Categories in priority order (highest to lowest); high card is the floor.
    DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| analysis.build_rank(Category::HighCard, &analysis.ranks))
}

/// Evaluate seven cards (helper for Hold'em style 7-card evaluation).
/// Iterate all 21 five-card combinations from 7 and return the best by value.
pub fn evaluate_seven(cards: &[Card; 7]) -> HandRank {
    use combinations::Combinations;

    Combinations::<HAND_SIZE>::new(MAX_CARDS)
        .map(|idx| evaluate_five(&idx.map(|i| cards[i])))
        .fold(evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]), |best, e| {
            best.max(e)
        })
}

/// Compare two Hold'em hands on a shared board. Returns the ordering or a validation error.
///
/// ```
/// use holdem_settle::evaluator::compare_holdem;
/// use holdem_settle::hand::{Board, Hand};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: Hand = "As Ah".parse().unwrap();
/// let b: Hand = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &Hand, b: &Hand, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}
