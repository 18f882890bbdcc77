use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::Settlement;
use crate::game::Decision;
use crate::hand::{evaluate_hand, Category, Hand};
use crate::outcome::Winner;

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` form
    pub round_id: String,
    /// Session seed; replaying the session reproduces every deck
    pub seed: Option<u64>,
    pub ante: u32,
    pub player: Hand,
    pub dealer: Hand,
    pub decision: Decision,
    pub player_category: Category,
    pub dealer_category: Category,
    /// Absent when the player folded
    #[serde(default)]
    pub winner: Option<Winner>,
    /// Always false on a fold; the dealer hand is never turned over
    pub dealer_qualified: bool,
    pub bonus: u32,
    pub wagered: u32,
    pub credited: u32,
    pub balance_after: u32,
    /// RFC3339, filled in by the logger when missing
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_settlement(round_id: String, seed: Option<u64>, s: &Settlement) -> Self {
        let dealer_eval = evaluate_hand(&s.dealer_hand);
        Self {
            round_id,
            seed,
            ante: s.ante,
            player: s.player_hand,
            dealer: s.dealer_hand,
            decision: s.decision,
            player_category: s.player_category,
            dealer_category: dealer_eval.category,
            winner: s.result.as_ref().map(|r| r.winner),
            dealer_qualified: s.result.as_ref().is_some_and(|r| r.dealer_qualified),
            bonus: s.bonus,
            wagered: s.wagered,
            credited: s.credited,
            balance_after: s.balance_after,
            ts: None,
        }
    }

    pub fn net(&self) -> i64 {
        i64::from(self.credited) - i64::from(self.wagered)
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends round records to a JSONL file, LF line endings only.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids, with a fixed date.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn record(
        &mut self,
        seed: Option<u64>,
        settlement: &Settlement,
    ) -> std::io::Result<RoundRecord> {
        let rec = RoundRecord::from_settlement(self.next_id(), seed, settlement);
        self.write(&rec)?;
        Ok(rec)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
