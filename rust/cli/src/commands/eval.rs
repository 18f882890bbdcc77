use std::io::Write;

use tricard_ai::{advise_or_fold, create_advisor, Advisor, HintRequest};
use tricard_engine::hand::{evaluate_hand, Hand};
use tricard_engine::outcome::dealer_qualifies;
use tricard_engine::payout::ante_bonus_multiplier;

use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;

/// `eval`: category, tie-break values, ante bonus and advice for one hand.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let advisor = create_advisor(&cfg.advisor)?;
    evaluate_with(cards, advisor.as_ref(), out)
}

/// An advisor failure degrades to the Fold hint instead of failing the command.
fn evaluate_with(
    cards: &[String],
    advisor: &dyn Advisor,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let text = cards.join(" ");
    let hand: Hand = text
        .parse()
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", text, e)))?;
    let eval = evaluate_hand(&hand);

    let hint = advise_or_fold(advisor, &HintRequest { round_id: 0, hand });

    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Category: {}", eval.category)?;
    writeln!(out, "Values: {:?}", eval.values)?;
    match ante_bonus_multiplier(eval.category) {
        0 => writeln!(out, "Ante bonus: none")?,
        m => writeln!(out, "Ante bonus: {} to 1", m)?,
    }
    writeln!(
        out,
        "As dealer: {}",
        if dealer_qualifies(&eval) {
            "qualifies"
        } else {
            "does not qualify"
        }
    )?;
    writeln!(out, "Advice ({}): {} - {}", advisor.name(), hint.recommendation, hint.reason)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricard_ai::{AdvisoryError, Hint, DEGRADED_REASON};

    struct Offline;

    impl Advisor for Offline {
        fn advise(&self, _request: &HintRequest) -> Result<Hint, AdvisoryError> {
            Err(AdvisoryError::Unavailable("connection refused".into()))
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    #[test]
    fn unavailable_advisor_still_prints_the_evaluation() {
        let cards = vec!["Ah".to_string(), "Ad".to_string(), "3c".to_string()];
        let mut out = Vec::new();
        evaluate_with(&cards, &Offline, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Category: Pair"), "{out}");
        assert!(
            out.contains(&format!("Advice (offline): Fold - {}", DEGRADED_REASON)),
            "{out}"
        );
    }
}
