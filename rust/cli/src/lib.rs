//! # Tricard CLI Library
//!
//! Command-line front end for the `tricard-engine` Three Card Poker engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output streams are injected so the whole CLI can be
//! driven from tests.
//!
//! ```
//! use std::io;
//! let args = ["tricard", "eval", "Ah", "2c", "3d"];
//! let code = tricard_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: interactive session on stdin
//! - `deal`: deal one round and show both hands
//! - `eval`: evaluate a three-card hand
//! - `sim`: automated session following an advisor
//! - `stats`: aggregate JSONL round records
//! - `cfg`: show the resolved configuration
//! - `rules`: hand rankings and pay tables

use std::io::Write;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, TricardCli};
use commands::{
    PlayArgs, SimArgs, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command, handle_rules_command, handle_sim_command, handle_stats_command,
};
pub use error::CliError;

/// Parses `args`, runs the subcommand and returns the exit code:
/// `0` on success, `2` on errors, `130` when input closed mid-round.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TricardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: tricard <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in Commands::NAMES {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: tricard --help");
            return exit_code::ERROR;
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            ante,
            rounds,
            seed,
            name,
            log,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let args = PlayArgs {
                ante,
                rounds,
                seed,
                name,
                log,
            };
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Sim {
            rounds,
            seed,
            ante,
            advisor,
            output,
        } => handle_sim_command(
            SimArgs {
                rounds,
                seed,
                ante,
                advisor,
                output,
            },
            out,
        ),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Rules => handle_rules_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}
