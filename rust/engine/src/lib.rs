//! # tricard-engine: Three Card Poker round engine
//!
//! A single player against the house dealer. One round runs ante, deal,
//! play-or-fold decision, dealer reveal and settlement; the session balance
//! carries over between rounds until it can no longer cover the minimum ante.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20
//! - [`hand`] - Three-card hand evaluation and comparison
//! - [`outcome`] - Dealer qualification and showdown resolution
//! - [`payout`] - Ante bonus and settlement credits
//! - [`engine`] - The round state machine
//! - [`shared`] - Thread-safe engine handle
//! - [`events`] - Table events for rendering and audio
//! - [`rules`] - Table limits and action legality
//! - [`logger`] - Round records in JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tricard_engine::hand::{evaluate_hand, Category, Hand};
//!
//! let hand: Hand = "Ah 2h 3h".parse().unwrap();
//! assert_eq!(evaluate_hand(&hand).category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Sessions
//!
//! ```rust
//! use tricard_engine::engine::Engine;
//! use tricard_engine::rules::TableConfig;
//!
//! let mut a = Engine::new(TableConfig::default(), "A", Some(42)).unwrap();
//! let mut b = Engine::new(TableConfig::default(), "B", Some(42)).unwrap();
//! a.place_ante(10).unwrap();
//! b.place_ante(10).unwrap();
//! assert_eq!(a.player_hand(), b.player_hand());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod outcome;
pub mod payout;
pub mod player;
pub mod rules;
pub mod shared;
