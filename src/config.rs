//! Settlement configuration.

use crate::hand::MAX_BOARD_CARDS;
use std::fmt;
use std::str::FromStr;

/// Order in which leftover chips of an uneven split are handed out, one chip each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum OddChipPolicy {
    /// Lowest table position first.
    #[default]
    TablePosition,
    /// Lowest player id first.
    PlayerId,
    /// Whoever put chips in the pot first this hand.
    ContributionOrder,
}

impl OddChipPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            OddChipPolicy::TablePosition => "position",
            OddChipPolicy::PlayerId => "id",
            OddChipPolicy::ContributionOrder => "contribution",
        }
    }
}

impl fmt::Display for OddChipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown odd-chip policy: '{0}'")]
    UnknownOddChipPolicy(String),
    #[error("showdown board size must be 3..=5, got {0}")]
    BoardSize(usize),
}

impl FromStr for OddChipPolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "position" | "table_position" => Ok(OddChipPolicy::TablePosition),
            "id" | "player_id" => Ok(OddChipPolicy::PlayerId),
            "contribution" | "contribution_order" => Ok(OddChipPolicy::ContributionOrder),
            _ => Err(ConfigError::UnknownOddChipPolicy(s.to_string())),
        }
    }
}

/// Knobs for a [`Pot`](crate::pot::Pot)'s settlement.
///
/// ```
/// use holdem_settle::config::{OddChipPolicy, SettleConfig};
///
/// let cfg = SettleConfig::default().with_odd_chip_policy(OddChipPolicy::PlayerId);
/// assert_eq!(cfg.board_size, 5);
/// cfg.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SettleConfig {
    pub odd_chip_policy: OddChipPolicy,
    /// Board cards required before a contested showdown can be settled.
    pub board_size: usize,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self { odd_chip_policy: OddChipPolicy::default(), board_size: MAX_BOARD_CARDS }
    }
}

impl SettleConfig {
    pub fn with_odd_chip_policy(mut self, policy: OddChipPolicy) -> Self {
        self.odd_chip_policy = policy;
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Two hole cards + at least a flop make a five-card hand.
        if !(3..=MAX_BOARD_CARDS).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SettleConfig::default();
        assert_eq!(cfg.odd_chip_policy, OddChipPolicy::TablePosition);
        assert_eq!(cfg.board_size, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn board_size_is_bounded() {
        assert_eq!(
            SettleConfig::default().with_board_size(2).validate(),
            Err(ConfigError::BoardSize(2))
        );
        assert_eq!(
            SettleConfig::default().with_board_size(6).validate(),
            Err(ConfigError::BoardSize(6))
        );
        assert!(SettleConfig::default().with_board_size(3).validate().is_ok());
    }

    #[test]
    fn policy_parses_and_displays() {
        assert_eq!("id".parse::<OddChipPolicy>().unwrap(), OddChipPolicy::PlayerId);
        assert_eq!(
            " Contribution_Order ".parse::<OddChipPolicy>().unwrap(),
            OddChipPolicy::ContributionOrder
        );
        assert!("dealer".parse::<OddChipPolicy>().is_err());
        assert_eq!(OddChipPolicy::TablePosition.to_string(), "position");
    }
}
