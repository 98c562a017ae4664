use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). Discriminants are the face
/// values used in hand keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

const RANK_CHARS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    /// Ascending, so `ALL[v - 2]` has value `v`.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(Self::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    /// Single-character code; Ten is `T`.
    pub const fn to_char(self) -> char {
        RANK_CHARS[(self as u8 - 2) as usize] as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        Rank::ALL
            .into_iter()
            .find(|r| r.to_char() == up)
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// Accepts the one-character codes plus `10` for Ten.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string())),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

/// Suits carry no strength; the derived order (clubs lowest) only keeps
/// sorting deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Glyph as printed on the felt.
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    /// Letter code (either case) or glyph.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let low = c.to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|s| s.to_char() == low || s.symbol() == c)
            .ok_or_else(|| SuitParseError::Invalid(c.to_string()))
    }
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        Suit::ALL
            .into_iter()
            .find(|suit| t.eq_ignore_ascii_case(suit.name()))
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

/// One of the 52 cards.
///
/// Parses from `As`, `10d`, `Td` or the glyph form `Q♥`.
///
/// ```
/// use holdem_settle::cards::{Card, Rank, Suit};
///
/// let card: Card = "Q♥".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
/// assert_eq!(card.to_string(), "Qh");
/// assert_eq!(card.symbol(), "Q♥");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Table notation with the suit glyph and `10` for Ten, e.g. `10♦`.
    pub fn symbol(self) -> String {
        match self.rank {
            Rank::Ten => format!("10{}", self.suit.symbol()),
            r => format!("{}{}", r.to_char(), self.suit.symbol()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // The suit is the final char, which may be a multi-byte glyph.
        let (rank_part, suit_ch) = match t.char_indices().last() {
            Some((at, c)) if at > 0 => (&t[..at], c),
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        Ok(Card::new(rank_part.parse()?, Suit::try_from(suit_ch)?))
    }
}

/// Parse a list of cards separated by whitespace and/or commas.
///
/// ```
/// use holdem_settle::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, K♦ 10c").unwrap();
/// assert_eq!(cards, [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Diamonds),
///     Card::new(Rank::Ten, Suit::Clubs),
/// ]);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}
