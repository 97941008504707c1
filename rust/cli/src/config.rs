//! Layered CLI configuration.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables, then command-line
//! flags. Every value remembers which layer set it so `cfg` can report it.

use std::fs;

use holdem_ai::POLICY_NAMES;
use holdem_engine::config::TableConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const STACK_ENV: &str = "HOLDEM_STACK";
pub const BOT_ENV: &str = "HOLDEM_BOT";
pub const BOT_DELAY_ENV: &str = "HOLDEM_BOT_DELAY_MS";

/// Delay before an automated seat acts in `play`.
pub const DEFAULT_BOT_DELAY_MS: u64 = 1_500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub bot: String,
    pub bot_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_stack: table.starting_stack,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            seed: None,
            bot: "random".into(),
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            starting_stack: self.starting_stack,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub bot: ValueSource,
    pub bot_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            bot: ValueSource::Default,
            bot_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub starting_stack: Option<u32>,
    pub bot: Option<String>,
    pub bot_delay_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bot: Option<String>,
    #[serde(default)]
    bot_delay_ms: Option<u64>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&Overrides::default())
}

pub fn load_with_overrides(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path = %path, "loaded config file");
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bot {
            cfg.bot = v;
            sources.bot = ValueSource::File;
        }
        if let Some(v) = f.bot_delay_ms {
            cfg.bot_delay_ms = v;
            sources.bot_delay_ms = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env_value(STACK_ENV) {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", STACK_ENV, stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(bot) = env_value(BOT_ENV) {
        cfg.bot = bot;
        sources.bot = ValueSource::Env;
    }
    if let Some(delay) = env_value(BOT_DELAY_ENV) {
        cfg.bot_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", BOT_DELAY_ENV, delay)))?;
        sources.bot_delay_ms = ValueSource::Env;
    }

    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Cli;
    }
    if let Some(v) = &overrides.bot {
        cfg.bot = v.clone();
        sources.bot = ValueSource::Cli;
    }
    if let Some(v) = overrides.bot_delay_ms {
        cfg.bot_delay_ms = v;
        sources.bot_delay_ms = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if !POLICY_NAMES.contains(&cfg.bot.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown bot '{}' (expected one of {})",
            cfg.bot,
            POLICY_NAMES.join(", ")
        )));
    }
    Ok(())
}
