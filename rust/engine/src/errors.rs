use thiserror::Error;

use crate::game::{ActionKind, RoundState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{action} is not allowed while {state}")]
    IllegalAction {
        action: ActionKind,
        state: RoundState,
    },
    #[error("Insufficient balance: need {required}, have {available}")]
    InsufficientBalance { required: u32, available: u32 },
    #[error("Ante {amount} is outside the table limits ({min}-{max})")]
    AnteOutOfRange { amount: u32, min: u32, max: u32 },
    #[error("Deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("A hand needs exactly 3 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Session lock poisoned")]
    SessionPoisoned,
}
