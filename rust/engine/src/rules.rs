use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{ActionKind, RoundState};

pub const STARTING_BALANCE: u32 = 1_000;
pub const MIN_ANTE: u32 = 10;
pub const MAX_ANTE: u32 = 100;
/// Keeps balances far from `u32::MAX` so credits never saturate in practice.
pub const MAX_STARTING_BALANCE: u32 = 1_000_000_000;

/// Session constants, fixed when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_balance: u32,
    pub min_ante: u32,
    pub max_ante: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            min_ante: MIN_ANTE,
            max_ante: MAX_ANTE,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_ante == 0 {
            return Err(GameError::InvalidConfig("min_ante must be >= 1".into()));
        }
        if self.min_ante > self.max_ante {
            return Err(GameError::InvalidConfig(format!(
                "min_ante {} exceeds max_ante {}",
                self.min_ante, self.max_ante
            )));
        }
        if self.starting_balance > MAX_STARTING_BALANCE {
            return Err(GameError::InvalidConfig(format!(
                "starting_balance {} exceeds {}",
                self.starting_balance, MAX_STARTING_BALANCE
            )));
        }
        if self.starting_balance < self.min_ante {
            return Err(GameError::InvalidConfig(format!(
                "starting_balance {} is below min_ante {}",
                self.starting_balance, self.min_ante
            )));
        }
        Ok(())
    }
}

/// Validates an ante against the table limits and the available balance.
///
/// # Errors
///
/// - [`GameError::AnteOutOfRange`] - below the minimum or above the maximum
/// - [`GameError::InsufficientBalance`] - more than the player can cover
///
/// # Examples
///
/// ```
/// use tricard_engine::rules::{validate_ante, TableConfig};
/// use tricard_engine::errors::GameError;
///
/// let table = TableConfig::default();
/// assert!(validate_ante(&table, 10, 1000).is_ok());
/// assert!(matches!(
///     validate_ante(&table, 5, 1000),
///     Err(GameError::AnteOutOfRange { .. })
/// ));
/// assert!(matches!(
///     validate_ante(&table, 50, 40),
///     Err(GameError::InsufficientBalance { required: 50, available: 40 })
/// ));
/// ```
pub fn validate_ante(table: &TableConfig, amount: u32, balance: u32) -> Result<(), GameError> {
    if amount < table.min_ante || amount > table.max_ante {
        return Err(GameError::AnteOutOfRange {
            amount,
            min: table.min_ante,
            max: table.max_ante,
        });
    }
    if amount > balance {
        return Err(GameError::InsufficientBalance {
            required: amount,
            available: balance,
        });
    }
    Ok(())
}

/// Actions the state machine accepts in `state`. Balance checks come later.
pub fn legal_actions(state: RoundState) -> &'static [ActionKind] {
    match state {
        RoundState::AwaitingBet => &[ActionKind::Ante],
        RoundState::HandsDealt => &[ActionKind::FinishDeal],
        RoundState::AwaitingPlayerDecision => &[ActionKind::Play, ActionKind::Fold],
        RoundState::Resolving => &[ActionKind::Reveal],
        RoundState::Settled => &[ActionKind::NextRound],
        RoundState::GameOver => &[ActionKind::Restart],
    }
}

pub fn ensure_legal(state: RoundState, action: ActionKind) -> Result<(), GameError> {
    if legal_actions(state).contains(&action) {
        Ok(())
    } else {
        Err(GameError::IllegalAction { action, state })
    }
}
