//! `cfg`: prints the resolved configuration as JSON, each value with its source.
//!
//! ```json
//! {
//!   "starting_stack": { "value": 1000, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = config::load_with_sources()?;
    tracing::debug!(?sources, "resolved configuration");
    let display = serde_json::json!({
        "starting_stack": { "value": config.starting_stack, "source": sources.starting_stack },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "seed": { "value": config.seed, "source": sources.seed },
        "bot": { "value": config.bot, "source": sources.bot },
        "bot_delay_ms": { "value": config.bot_delay_ms, "source": sources.bot_delay_ms },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
