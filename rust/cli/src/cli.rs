//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tricard",
    version,
    about = "Three Card Poker against the house dealer"
)]
pub struct TricardCli {
    /// Log engine transitions to stderr (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session on stdin
    Play {
        /// Ante per round (defaults to the table minimum)
        #[arg(long)]
        ante: Option<u32>,
        /// Stop after this many rounds
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        name: Option<String>,
        /// Append settled rounds to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one round and show both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a three-card hand, e.g. `tricard eval Ah 2c 3d`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play rounds automatically, following an advisor
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ante: Option<u32>,
        #[arg(long)]
        advisor: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate JSONL round records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Print hand rankings and pay tables
    Rules,
}

impl Commands {
    pub const NAMES: &'static [&'static str] =
        &["play", "deal", "eval", "sim", "stats", "cfg", "rules"];
}
