//! Aggregate statistics over JSONL round records.
//!
//! Reads a single history file (`.jsonl` or `.jsonl.zst`) or every history
//! file below a directory and prints totals as JSON. A final line without a
//! trailing newline that fails to parse is treated as an interrupted write and
//! skipped; any other unparseable line counts as corrupted.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tricard_engine::game::Decision;
use tricard_engine::logger::RoundRecord;
use tricard_engine::outcome::Winner;

use crate::error::CliError;
use crate::io_utils::{collect_history_files, read_text_auto};
use crate::ui;

/// Running totals over settled rounds.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RoundTally {
    pub rounds: u64,
    pub plays: u64,
    pub folds: u64,
    pub player_wins: u64,
    pub dealer_wins: u64,
    pub pushes: u64,
    /// Played rounds the player won because the dealer did not qualify
    pub dealer_not_qualified: u64,
    pub bonus_paid: u64,
    pub wagered: u64,
    pub credited: u64,
}

impl RoundTally {
    pub fn add(&mut self, rec: &RoundRecord) {
        self.rounds += 1;
        match rec.decision {
            Decision::Play => self.plays += 1,
            Decision::Fold => self.folds += 1,
        }
        match rec.winner {
            Some(Winner::Player) => {
                self.player_wins += 1;
                if !rec.dealer_qualified {
                    self.dealer_not_qualified += 1;
                }
            }
            Some(Winner::Dealer) => self.dealer_wins += 1,
            Some(Winner::Push) => self.pushes += 1,
            None => {}
        }
        self.bonus_paid += u64::from(rec.bonus);
        self.wagered += u64::from(rec.wagered);
        self.credited += u64::from(rec.credited);
    }

    pub fn net(&self) -> i64 {
        self.credited as i64 - self.wagered as i64
    }

    /// Credited per unit wagered; 0 when nothing was wagered.
    pub fn return_ratio(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.credited as f64 / self.wagered as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut v = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = v.as_object_mut() {
            obj.insert("net".into(), self.net().into());
            obj.insert(
                "return_ratio".into(),
                serde_json::json!((self.return_ratio() * 10_000.0).round() / 10_000.0),
            );
        }
        v
    }
}

#[derive(Debug, Default)]
struct ReadState {
    tally: RoundTally,
    skipped: u64,
    corrupted: u64,
}

impl ReadState {
    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<RoundRecord>(line) {
                Ok(rec) => self.tally.add(&rec),
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => self.skipped += 1,
                Err(_) => self.corrupted += 1,
            }
        }
    }
}

pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    if !path.exists() {
        return Err(CliError::InvalidInput(format!("{} does not exist", input)));
    }

    let mut state = ReadState::default();
    for file in collect_history_files(path) {
        match read_text_auto(&file) {
            Ok(content) => state.consume(&content),
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", file.display(), e))?;
                return Err(CliError::InvalidInput(format!(
                    "failed to read {}",
                    file.display()
                )));
            }
        }
    }

    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} incomplete trailing record(s)", state.skipped),
        )?;
    }
    if state.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    tracing::debug!(
        rounds = state.tally.rounds,
        corrupted = state.corrupted,
        "stats aggregated"
    );

    let mut summary = state.tally.to_json();
    if let Some(obj) = summary.as_object_mut() {
        obj.insert("corrupted".into(), state.corrupted.into());
        obj.insert("skipped".into(), state.skipped.into());
    }
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?
    )?;
    Ok(())
}
