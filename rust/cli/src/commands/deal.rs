//! `deal`: one round at the minimum ante, both hands face up, as if the player
//! had played. A Play wager the balance cannot cover is folded instead.

use std::io::Write;

use tricard_ai::baseline::BaselineAdvisor;
use tricard_engine::engine::Engine;
use tricard_engine::errors::GameError;
use tricard_engine::hand::evaluate_hand;
use tricard_engine::outcome::dealer_qualifies;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_evaluation, format_hand};

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let table = cfg.table();
    let mut engine = Engine::new(table, cfg.player.clone(), seed.or(cfg.seed))?;

    engine.place_ante(table.min_ante)?;
    engine.finish_deal()?;
    let player = *engine
        .player_hand()
        .ok_or_else(|| CliError::InvalidInput("no hand dealt".to_string()))?;
    let player_eval = evaluate_hand(&player);
    let advice = BaselineAdvisor::new().recommend(&player_eval);

    let covered = match engine.play() {
        Ok(()) => true,
        Err(GameError::InsufficientBalance { .. }) => false,
        Err(e) => return Err(e.into()),
    };
    let settlement = if covered {
        engine.reveal()?
    } else {
        engine.fold()?
    };
    let dealer_eval = evaluate_hand(&settlement.dealer_hand);

    writeln!(out, "Seed: {}", engine.seed())?;
    writeln!(
        out,
        "{}: {} {}",
        engine.player_name(),
        format_hand(&player),
        format_evaluation(&player_eval)
    )?;
    writeln!(
        out,
        "Dealer: {} {} ({})",
        format_hand(&settlement.dealer_hand),
        format_evaluation(&dealer_eval),
        if dealer_qualifies(&dealer_eval) {
            "qualifies"
        } else {
            "does not qualify"
        }
    )?;
    writeln!(out, "Advice: {}", advice)?;
    if covered {
        writeln!(
            out,
            "If played at ante {}: {} (net {:+})",
            settlement.ante,
            settlement.message,
            settlement.net()
        )?;
    } else {
        writeln!(
            out,
            "Balance cannot cover the Play wager of {}; folded: {} (net {:+})",
            settlement.ante,
            settlement.message,
            settlement.net()
        )?;
    }
    Ok(())
}
