//! Automated sessions that follow an advisor's recommendation every round.
//!
//! The session stops after `rounds` rounds, at game over, or as soon as the
//! balance can no longer cover the chosen ante. A Play recommendation the
//! balance cannot cover is folded instead.

use std::io::Write;
use std::path::PathBuf;

use tricard_ai::{advise_or_fold, create_advisor, HintRequest};
use tricard_engine::engine::{Engine, Settlement};
use tricard_engine::errors::GameError;
use tricard_engine::game::Decision;
use tricard_engine::logger::RoundLogger;
use tricard_engine::rules::validate_ante;

use crate::commands::stats::RoundTally;
use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;

pub struct SimArgs {
    pub rounds: u64,
    pub seed: Option<u64>,
    pub ante: Option<u32>,
    pub advisor: Option<String>,
    pub output: Option<String>,
}

pub fn handle_sim_command(args: SimArgs, out: &mut dyn Write) -> Result<(), CliError> {
    if args.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load()?;
    let table = cfg.table();
    let ante = args.ante.unwrap_or(table.min_ante);
    validate_ante(&table, ante, table.starting_balance)?;
    let advisor_name = args.advisor.unwrap_or(cfg.advisor.clone());
    let advisor = create_advisor(&advisor_name)?;

    let mut engine = Engine::new(table, cfg.player.clone(), args.seed.or(cfg.seed))?;
    let seed = engine.seed();

    let mut logger = match &args.output {
        Some(p) => {
            let path = PathBuf::from(p);
            ensure_parent_dir(&path).map_err(CliError::InvalidInput)?;
            RoundLogger::create(&path)?
        }
        None => RoundLogger::detached(&chrono::Utc::now().format("%Y%m%d").to_string()),
    };

    tracing::info!(rounds = args.rounds, seed, ante, advisor = %advisor_name, "simulation started");

    let mut tally = RoundTally::default();
    let mut stop_reason = "rounds completed";
    for _ in 0..args.rounds {
        if engine.is_game_over() {
            stop_reason = "game over";
            break;
        }
        match engine.place_ante(ante) {
            Ok(_) => {}
            Err(GameError::InsufficientBalance { .. }) => {
                stop_reason = "balance below ante";
                break;
            }
            Err(e) => return Err(e.into()),
        }
        engine.finish_deal()?;
        let settlement = decide(&mut engine, advisor.as_ref())?;
        let rec = logger.record(Some(seed), &settlement)?;
        tally.add(&rec);
        engine.drain_events();
        engine.next_round()?;
    }
    if engine.is_game_over() {
        stop_reason = "game over";
    }

    let mut summary = tally.to_json();
    if let Some(obj) = summary.as_object_mut() {
        obj.insert("seed".into(), seed.into());
        obj.insert("ante".into(), ante.into());
        obj.insert("advisor".into(), advisor_name.into());
        obj.insert("final_balance".into(), engine.balance().into());
        obj.insert("stopped".into(), stop_reason.into());
    }
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?
    )?;
    Ok(())
}

fn decide(engine: &mut Engine, advisor: &dyn tricard_ai::Advisor) -> Result<Settlement, CliError> {
    let request = HintRequest::for_engine(engine).ok_or_else(|| {
        CliError::InvalidInput("engine is not awaiting a decision".to_string())
    })?;
    let hint = advise_or_fold(advisor, &request);
    if hint.recommendation.decision() == Decision::Play {
        match engine.play() {
            Ok(()) => return Ok(engine.reveal()?),
            Err(GameError::InsufficientBalance { .. }) => {
                tracing::debug!(round_id = request.round_id, "play wager uncovered, folding");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(engine.fold()?)
}
