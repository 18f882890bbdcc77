//! `cfg`: print the resolved configuration as JSON, each value paired with
//! its source (`default`, `file` or `env`).
//!
//! ```json
//! {
//!   "min_ante": { "value": 10, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "min_ante": {
            "value": config.min_ante,
            "source": sources.min_ante,
        },
        "max_ante": {
            "value": config.max_ante,
            "source": sources.max_ante,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "advisor": {
            "value": config.advisor,
            "source": sources.advisor,
        },
        "player": {
            "value": config.player,
            "source": sources.player,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
