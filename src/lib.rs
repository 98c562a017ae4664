//! holdem-settle: Texas Hold'em showdown settlement
//!
//! Goals:
//! - Exact chip accounting: every chip put in is paid back out, nothing more
//! - Correct side pots for any mix of all-ins and folds
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a three-way all-in
//! ```
//! use holdem_settle::hand::Board;
//! use holdem_settle::player::Player;
//! use holdem_settle::pot::Pot;
//!
//! let mut players = vec![
//!     Player::builder().id("short").chips(50).hand("As Ah".parse().unwrap()).build().unwrap(),
//!     Player::builder().id("mid").chips(100).hand("Qs Qh".parse().unwrap()).position(1).build().unwrap(),
//!     Player::builder().id("big").chips(200).hand("7c 6c".parse().unwrap()).position(2).build().unwrap(),
//! ];
//! let mut pot = Pot::new();
//! for p in players.iter_mut() {
//!     let all_in = p.chips().get();
//!     pot.record_contribution(p, all_in).unwrap();
//! }
//!
//! let board: Board = "2c 3d 4h 8s Kc".parse().unwrap();
//! let result = pot.settle(&mut players, &board).unwrap();
//!
//! assert_eq!(result.amount_for(players[0].id()), 150);
//! assert_eq!(result.amount_for(players[1].id()), 100);
//! assert_eq!(result.amount_for(players[2].id()), 100);
//! assert_eq!(pot.total(), 0);
//! ```
//!
//! ## Evaluating hands
//! ```
//! use holdem_settle::evaluator::{evaluate_holdem, Category};
//! use holdem_settle::hand::{Board, Hand};
//!
//! let hand: Hand = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//! let rank = evaluate_holdem(&hand, &board).unwrap();
//! assert_eq!(rank.category, Category::Pair);
//! ```

pub mod cards;
pub mod chips;
pub mod config;
#[cfg(feature = "deck")]
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod pot;
pub mod settlement;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
