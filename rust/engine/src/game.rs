use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Phase of the live round. `GameOver` is session-terminal: only a restart
/// with a fresh balance leaves it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    AwaitingBet,
    HandsDealt,
    AwaitingPlayerDecision,
    Resolving,
    Settled,
    GameOver,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundState::AwaitingBet => "awaiting a bet",
            RoundState::HandsDealt => "hands are being dealt",
            RoundState::AwaitingPlayerDecision => "awaiting the player's decision",
            RoundState::Resolving => "resolving the round",
            RoundState::Settled => "the round is settled",
            RoundState::GameOver => "the game is over",
        };
        f.write_str(s)
    }
}

/// Transition kinds, used for legality checks and error reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Ante,
    FinishDeal,
    Play,
    Fold,
    Reveal,
    NextRound,
    Restart,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Ante => "Ante",
            ActionKind::FinishDeal => "Finish deal",
            ActionKind::Play => "Play",
            ActionKind::Fold => "Fold",
            ActionKind::Reveal => "Reveal",
            ActionKind::NextRound => "Next round",
            ActionKind::Restart => "Restart",
        };
        f.write_str(s)
    }
}

/// The player's answer to the dealt hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Play,
    Fold,
}

/// Round-scoped data, created on the ante and discarded when the next round
/// starts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Round {
    /// Monotonic per session; used to correlate advisory responses
    pub id: u64,
    pub ante: u32,
    pub player: Hand,
    pub dealer: Hand,
    pub decision: Option<Decision>,
}

impl Round {
    /// Total amount wagered so far this round.
    pub fn wagered(&self) -> u32 {
        match self.decision {
            Some(Decision::Play) => self.ante.saturating_mul(2),
            _ => self.ante,
        }
    }
}
