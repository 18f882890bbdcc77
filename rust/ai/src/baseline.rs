//! Rule-based advisors.
//!
//! [`BaselineAdvisor`] follows the usual table strategy for this game: play any
//! pair or better, play Queen-6-4 or better, fold the rest.

use crate::{Advisor, AdvisoryError, Hint, HintRequest, Recommendation};
use tricard_engine::cards::Rank;
use tricard_engine::hand::{evaluate_hand, Category, HandEvaluation};

/// Weakest high-card hand still worth playing.
pub const PLAY_THRESHOLD: [u8; 3] = [12, 6, 4];

/// # Example
///
/// ```rust
/// use tricard_ai::baseline::BaselineAdvisor;
/// use tricard_ai::{Advisor, HintRequest, Recommendation};
///
/// let advisor = BaselineAdvisor::new();
/// let request = HintRequest { round_id: 1, hand: "Qs 7d 2c".parse().unwrap() };
/// let hint = advisor.advise(&request).unwrap();
/// assert_eq!(hint.recommendation, Recommendation::MarginalPlay);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAdvisor;

impl BaselineAdvisor {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, eval: &HandEvaluation) -> Recommendation {
        if eval.category > Category::HighCard {
            Recommendation::StrongPlay
        } else if eval.values.as_slice() >= PLAY_THRESHOLD.as_slice() {
            Recommendation::MarginalPlay
        } else {
            Recommendation::Fold
        }
    }

    fn reason(&self, eval: &HandEvaluation, rec: Recommendation) -> String {
        match rec {
            Recommendation::StrongPlay => format!(
                "{} is a strong hand. Play any pair or better.",
                eval.category
            ),
            Recommendation::MarginalPlay => {
                "Queen-6-4 or better is worth playing. The dealer needs Queen high just to qualify."
                    .to_string()
            }
            Recommendation::Fold => {
                let top = Rank::from_value(eval.top_value())
                    .map(|r| format!("{:?}", r))
                    .unwrap_or_default();
                format!(
                    "{} high is below Queen-6-4. A qualifying dealer beats it too often.",
                    top
                )
            }
        }
    }
}

impl Advisor for BaselineAdvisor {
    fn advise(&self, request: &HintRequest) -> Result<Hint, AdvisoryError> {
        let eval = evaluate_hand(&request.hand);
        let recommendation = self.recommend(&eval);
        tracing::debug!(
            round_id = request.round_id,
            category = %eval.category,
            recommendation = %recommendation,
            "baseline advice"
        );
        Ok(Hint {
            round_id: request.round_id,
            recommendation,
            reason: self.reason(&eval, recommendation),
        })
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

/// Plays every hand. Useful as a reference line in simulations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPlay;

impl Advisor for AlwaysPlay {
    fn advise(&self, request: &HintRequest) -> Result<Hint, AdvisoryError> {
        Ok(Hint {
            round_id: request.round_id,
            recommendation: Recommendation::StrongPlay,
            reason: "Always plays.".to_string(),
        })
    }

    fn name(&self) -> &str {
        "always-play"
    }
}
