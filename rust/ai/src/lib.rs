//! # tricard-ai: advisory hints for the play-or-fold decision
//!
//! An [`Advisor`] looks at the player's three cards and recommends
//! [`Recommendation::StrongPlay`], [`Recommendation::MarginalPlay`] or
//! [`Recommendation::Fold`]. Advice never changes engine state; the player
//! still submits the decision.
//!
//! ## Core Components
//!
//! - [`Advisor`] - Trait implemented by hint sources
//! - [`baseline`] - Table-strategy advisor and an always-play advisor
//! - [`advise_or_fold`] - Degrades a failed lookup to a Fold hint
//! - [`HintSlot`] - Drops hints that arrive after their round moved on
//! - [`create_advisor`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tricard_ai::{create_advisor, advise_or_fold, HintRequest};
//! use tricard_engine::engine::Engine;
//! use tricard_engine::rules::TableConfig;
//!
//! let advisor = create_advisor("baseline").unwrap();
//! let mut engine = Engine::new(TableConfig::default(), "Ada", Some(42)).unwrap();
//! engine.place_ante(10).unwrap();
//! engine.finish_deal().unwrap();
//!
//! let request = HintRequest::for_engine(&engine).expect("deciding");
//! let hint = advise_or_fold(advisor.as_ref(), &request);
//! println!("{}: {}", hint.recommendation, hint.reason);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tricard_engine::engine::Engine;
use tricard_engine::game::{Decision, RoundState};
use tricard_engine::hand::Hand;

pub mod baseline;

/// Reason attached to the degraded hint.
pub const DEGRADED_REASON: &str = "Could not fetch hint due to an error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    StrongPlay,
    MarginalPlay,
    Fold,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StrongPlay => "Strong Play",
            Recommendation::MarginalPlay => "Marginal Play",
            Recommendation::Fold => "Fold",
        }
    }

    /// Decision to submit when following the advice.
    pub fn decision(self) -> Decision {
        match self {
            Recommendation::StrongPlay | Recommendation::MarginalPlay => Decision::Play,
            Recommendation::Fold => Decision::Fold,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the labels case-insensitively, as free-text advisors return them.
impl FromStr for Recommendation {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "strong play" | "strong" => Ok(Recommendation::StrongPlay),
            "marginal play" | "marginal" => Ok(Recommendation::MarginalPlay),
            "fold" => Ok(Recommendation::Fold),
            _ => Err(AdvisoryError::Unavailable(format!(
                "unrecognised recommendation: {}",
                s.trim()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("unknown advisor: {0}")]
    UnknownAdvisor(String),
}

/// What an advisor gets to see: the round and the player's own cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRequest {
    pub round_id: u64,
    pub hand: Hand,
}

impl HintRequest {
    /// `None` unless the engine is waiting on the player's decision.
    pub fn for_engine(engine: &Engine) -> Option<Self> {
        if engine.state() != RoundState::AwaitingPlayerDecision {
            return None;
        }
        Some(Self {
            round_id: engine.round_id()?,
            hand: *engine.player_hand()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub round_id: u64,
    pub recommendation: Recommendation,
    pub reason: String,
}

pub trait Advisor: Send + Sync {
    fn advise(&self, request: &HintRequest) -> Result<Hint, AdvisoryError>;

    fn name(&self) -> &str;
}

/// Asks `advisor`, falling back to a Fold hint when it fails.
pub fn advise_or_fold(advisor: &dyn Advisor, request: &HintRequest) -> Hint {
    match advisor.advise(request) {
        Ok(hint) => hint,
        Err(err) => {
            tracing::warn!(
                advisor = advisor.name(),
                round_id = request.round_id,
                error = %err,
                "advisory lookup failed"
            );
            Hint {
                round_id: request.round_id,
                recommendation: Recommendation::Fold,
                reason: DEGRADED_REASON.to_string(),
            }
        }
    }
}

/// Holds at most one outstanding hint request and the hint it produced.
#[derive(Debug, Default)]
pub struct HintSlot {
    pending: Option<u64>,
    hint: Option<Hint>,
}

impl HintSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a lookup for the engine's current round, replacing any earlier
    /// one. Returns `None` outside the decision phase.
    pub fn request(&mut self, engine: &Engine) -> Option<HintRequest> {
        let request = HintRequest::for_engine(engine)?;
        self.pending = Some(request.round_id);
        self.hint = None;
        Some(request)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Keeps `hint` only if it answers the outstanding request and the engine
    /// is still waiting on that round.
    pub fn accept(&mut self, engine: &Engine, hint: Hint) -> bool {
        if self.pending != Some(hint.round_id) || !engine.awaits_decision_for(hint.round_id) {
            tracing::debug!(
                round_id = hint.round_id,
                pending = ?self.pending,
                "stale hint discarded"
            );
            return false;
        }
        self.pending = None;
        self.hint = Some(hint);
        true
    }

    /// The stored hint, if it still belongs to the round being decided.
    pub fn current(&self, engine: &Engine) -> Option<&Hint> {
        self.hint
            .as_ref()
            .filter(|h| engine.awaits_decision_for(h.round_id))
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.hint = None;
    }
}

/// Advisor names accepted by [`create_advisor`].
pub const ADVISORS: [&str; 2] = ["baseline", "always-play"];

pub fn create_advisor(name: &str) -> Result<Box<dyn Advisor>, AdvisoryError> {
    match name {
        "baseline" => Ok(Box::new(baseline::BaselineAdvisor::new())),
        "always-play" => Ok(Box::new(baseline::AlwaysPlay)),
        other => Err(AdvisoryError::UnknownAdvisor(other.to_string())),
    }
}
