//! Command handlers, one module per subcommand.
//!
//! Each handler takes its parsed arguments plus injected output streams and
//! returns `Result<(), CliError>`; [`crate::run`] turns the result into an
//! exit code and prints the error once.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod rules;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayArgs, handle_play_command};
pub use rules::handle_rules_command;
pub use sim::{SimArgs, handle_sim_command};
pub use stats::handle_stats_command;
