use serde::{Deserialize, Serialize};

use crate::game::ActionKind;

/// An action submitted to the round state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Place the ante and deal
    Ante(u32),
    /// Acknowledge the deal (caller finished showing the cards)
    FinishDeal,
    /// Match the ante with the Play wager
    Play,
    /// Forfeit the ante
    Fold,
    /// Show the dealer hand and settle
    Reveal,
    /// Clear the table for another round
    NextRound,
    /// Start over with a fresh balance after game over
    Restart,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Ante(_) => ActionKind::Ante,
            PlayerAction::FinishDeal => ActionKind::FinishDeal,
            PlayerAction::Play => ActionKind::Play,
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Reveal => ActionKind::Reveal,
            PlayerAction::NextRound => ActionKind::NextRound,
            PlayerAction::Restart => ActionKind::Restart,
        }
    }
}

/// Session-scoped player: name and balance survive across rounds.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    balance: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: u32) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn can_cover(&self, amount: u32) -> bool {
        amount <= self.balance
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Callers check [`Player::can_cover`] first; an uncovered debit leaves the
    /// balance untouched.
    pub fn debit(&mut self, amount: u32) -> bool {
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                true
            }
            None => false,
        }
    }

    pub fn reset_balance(&mut self, balance: u32) {
        self.balance = balance;
    }
}
