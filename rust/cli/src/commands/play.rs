//! # Play Command
//!
//! Interactive session against the dealer on stdin.
//!
//! Between rounds the player deals with the current ante (empty line or
//! `deal`) or changes it with `ante N`. With the hand dealt they answer
//! `play`, `fold` or ask for a `hint`. `q` leaves the table. The session also
//! ends after `--rounds` rounds or at game over.

use std::io::{BufRead, Write};

use tricard_ai::{advise_or_fold, create_advisor, Advisor, HintSlot};
use tricard_engine::engine::Engine;
use tricard_engine::game::RoundState;
use tricard_engine::logger::RoundLogger;

use crate::config;
use crate::error::CliError;
use crate::formatters::format_event;
use crate::io_utils::{ensure_parent_dir, read_stdin_line};
use crate::ui;
use crate::validation::{parse_table_input, ParseResult, TableInput};

pub struct PlayArgs {
    pub ante: Option<u32>,
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub log: Option<String>,
}

struct Table<'a> {
    engine: Engine,
    advisor: Box<dyn Advisor>,
    hints: HintSlot,
    logger: Option<RoundLogger>,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

enum Step {
    Continue,
    Quit,
}

pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if args.rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load()?;
    let table = cfg.table();
    let name = args.name.unwrap_or(cfg.player.clone());
    let engine = Engine::new(table, name, args.seed.or(cfg.seed))?;
    let advisor = create_advisor(&cfg.advisor)?;
    let logger = match &args.log {
        Some(p) => {
            let path = std::path::Path::new(p);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    writeln!(
        out,
        "play: player={} balance={} ante={}-{} seed={}",
        engine.player_name(),
        engine.balance(),
        table.min_ante,
        table.max_ante,
        engine.seed()
    )?;

    let mut t = Table {
        engine,
        advisor,
        hints: HintSlot::new(),
        logger,
        out,
        err,
    };
    t.run(args.ante.unwrap_or(table.min_ante), args.rounds, stdin)
}

impl Table<'_> {
    fn run(
        &mut self,
        mut ante: u32,
        rounds: Option<u32>,
        stdin: &mut dyn BufRead,
    ) -> Result<(), CliError> {
        let start = self.engine.balance();
        let mut played = 0u32;
        writeln!(self.out, "{}", self.engine.last_message())?;

        loop {
            if rounds.is_some_and(|r| played >= r) {
                break;
            }
            match self.engine.state() {
                RoundState::GameOver => {
                    writeln!(self.out, "{}", self.engine.last_message())?;
                    break;
                }
                RoundState::AwaitingBet => {
                    write!(self.out, "Ante {} (enter to deal, 'ante N', q): ", ante)?;
                    self.out.flush()?;
                    let Some(line) = read_stdin_line(stdin) else {
                        break;
                    };
                    match parse_table_input(&line) {
                        ParseResult::Input(TableInput::Deal) => {
                            self.deal(ante)?;
                        }
                        ParseResult::Input(TableInput::Ante(amount)) => {
                            if self.deal(amount)? {
                                ante = amount;
                            }
                        }
                        ParseResult::Input(_) => {
                            ui::write_error(self.err, "No hand in play; deal first")?;
                        }
                        ParseResult::Quit => break,
                        ParseResult::Invalid(msg) => ui::write_error(self.err, &msg)?,
                    }
                }
                RoundState::AwaitingPlayerDecision => {
                    write!(self.out, "Action (play/fold/hint/q): ")?;
                    self.out.flush()?;
                    let Some(line) = read_stdin_line(stdin) else {
                        return Err(CliError::Interrupted(
                            "input closed during a round".to_string(),
                        ));
                    };
                    if let Step::Quit = self.decide(&line)? {
                        writeln!(self.out, "Round abandoned; the ante is forfeited.")?;
                        break;
                    }
                }
                RoundState::Settled => {
                    played += 1;
                    self.engine.next_round()?;
                    self.hints.clear();
                    self.flush_events()?;
                    if !self.engine.is_game_over() {
                        writeln!(self.out, "{}", self.engine.last_message())?;
                    }
                }
                RoundState::HandsDealt | RoundState::Resolving => {
                    // deal() and decide() always leave these states
                    return Err(CliError::InvalidInput(format!(
                        "unexpected state: {}",
                        self.engine.state()
                    )));
                }
            }
        }

        let balance = self.engine.balance();
        writeln!(
            self.out,
            "Session over: rounds={} balance={} net={:+}",
            played,
            balance,
            i64::from(balance) - i64::from(start)
        )?;
        Ok(())
    }

    /// Returns false when the ante was rejected and no hand was dealt.
    fn deal(&mut self, ante: u32) -> Result<bool, CliError> {
        if let Err(e) = self.engine.place_ante(ante) {
            ui::write_error(self.err, &e.to_string())?;
            return Ok(false);
        }
        self.flush_events()?;
        self.engine.finish_deal()?;
        writeln!(
            self.out,
            "{} (balance {})",
            self.engine.last_message(),
            self.engine.balance()
        )?;
        Ok(true)
    }

    fn decide(&mut self, line: &str) -> Result<Step, CliError> {
        match parse_table_input(line) {
            ParseResult::Input(TableInput::Play) => {
                if let Err(e) = self.engine.play() {
                    ui::write_error(self.err, &e.to_string())?;
                    return Ok(Step::Continue);
                }
                self.flush_events()?;
                let settlement = self.engine.reveal()?;
                self.settled(&settlement)?;
            }
            ParseResult::Input(TableInput::Fold) => {
                let settlement = self.engine.fold()?;
                self.settled(&settlement)?;
            }
            ParseResult::Input(TableInput::Hint) => {
                if let Some(request) = self.hints.request(&self.engine) {
                    let hint = advise_or_fold(self.advisor.as_ref(), &request);
                    if self.hints.accept(&self.engine, hint)
                        && let Some(hint) = self.hints.current(&self.engine)
                    {
                        writeln!(self.out, "Hint: {} - {}", hint.recommendation, hint.reason)?;
                    }
                }
            }
            ParseResult::Input(TableInput::Deal | TableInput::Ante(_)) => {
                ui::write_error(self.err, "A hand is already in play; play or fold")?;
            }
            ParseResult::Quit => return Ok(Step::Quit),
            ParseResult::Invalid(msg) => ui::write_error(self.err, &msg)?,
        }
        Ok(Step::Continue)
    }

    fn settled(&mut self, s: &tricard_engine::engine::Settlement) -> Result<(), CliError> {
        self.flush_events()?;
        writeln!(self.out, "{}", s.message)?;
        writeln!(self.out, "Net {:+}, balance {}", s.net(), s.balance_after)?;
        if let Some(logger) = self.logger.as_mut() {
            logger.record(Some(self.engine.seed()), s)?;
        }
        Ok(())
    }

    fn flush_events(&mut self) -> Result<(), CliError> {
        for event in self.engine.drain_events() {
            tracing::trace!(?event, "table event");
            if let Some(line) = format_event(&event, self.engine.player_name()) {
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }
}
