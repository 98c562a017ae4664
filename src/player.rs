use crate::chips::Chips;
use crate::hand::Hand;
use std::fmt;

/// Stable identifier of a seated player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Seat position at the table; only used to order odd-chip payouts.
pub type Position = usize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player id is required")]
    MissingId,
    #[error("player id must not be blank")]
    BlankId,
}

/// A seated player as seen by the settlement core.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) chips: Chips,
    pub(crate) hand: Hand,
    pub(crate) contesting: bool,
    pub(crate) position: Position,
}

impl Player {
    /// ```
    /// use holdem_settle::player::Player;
    ///
    /// let p = Player::builder().id("alice").chips(5000).position(2).build().unwrap();
    /// assert_eq!(p.chips().get(), 5000);
    /// assert!(p.is_contesting());
    /// ```
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::default()
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn chips(&self) -> &Chips {
        &self.chips
    }

    pub fn chips_mut(&mut self) -> &mut Chips {
        &mut self.chips
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Still holding cards: eligible to win sub-pots it contributed to.
    pub fn is_contesting(&self) -> bool {
        self.contesting
    }

    pub fn set_contesting(&mut self, contesting: bool) {
        self.contesting = contesting;
    }

    /// Give up the hand. Chips already in the pot stay there.
    pub fn fold(&mut self) {
        self.contesting = false;
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Builder for [`Player`]; only the id is required.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    id: Option<PlayerId>,
    chips: Chips,
    hand: Hand,
    contesting: bool,
    position: Position,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self { id: None, chips: Chips::default(), hand: Hand::new(), contesting: true, position: 0 }
    }
}

impl PlayerBuilder {
    pub fn id(mut self, id: impl Into<PlayerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn chips(mut self, chips: u64) -> Self {
        self.chips = Chips::new(chips);
        self
    }

    pub fn hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    pub fn contesting(mut self, contesting: bool) -> Self {
        self.contesting = contesting;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn build(self) -> Result<Player, PlayerError> {
        let id = self.id.ok_or(PlayerError::MissingId)?;
        if id.as_str().trim().is_empty() {
            return Err(PlayerError::BlankId);
        }
        Ok(Player {
            id,
            chips: self.chips,
            hand: self.hand,
            contesting: self.contesting,
            position: self.position,
        })
    }
}
