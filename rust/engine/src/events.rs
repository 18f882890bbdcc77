//! Notifications for the rendering and audio side of the table.
//!
//! The engine queues these while it transitions; callers drain them and decide
//! how to pace animation. Engine state never waits on a consumer.

use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Audio cues, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Deal,
    Flip,
    Chip,
    Win,
    Lose,
    Click,
}

impl SoundCue {
    pub fn key(self) -> &'static str {
        match self {
            SoundCue::Deal => "deal",
            SoundCue::Flip => "flip",
            SoundCue::Chip => "chip",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
            SoundCue::Click => "click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    /// Both hands in positional order. The dealer hand is dealt face down.
    HandsDealt {
        round_id: u64,
        player: Hand,
        dealer: Hand,
    },
    DealerRevealed {
        round_id: u64,
        dealer: Hand,
    },
    PlayerWon {
        round_id: u64,
    },
    PlayerLost {
        round_id: u64,
    },
    TableCleared,
    Sound {
        cue: SoundCue,
    },
}
