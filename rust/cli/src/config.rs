//! Layered session configuration: built-in defaults, then a TOML file named
//! by `TRICARD_CONFIG`, then `TRICARD_*` environment variables. Command-line
//! flags are applied on top by each command.

use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};
use tricard_ai::ADVISORS;
use tricard_engine::rules::{TableConfig, MAX_ANTE, MIN_ANTE, STARTING_BALANCE};

pub const ENV_CONFIG: &str = "TRICARD_CONFIG";
pub const ENV_SEED: &str = "TRICARD_SEED";
pub const ENV_STARTING_BALANCE: &str = "TRICARD_STARTING_BALANCE";
pub const ENV_MIN_ANTE: &str = "TRICARD_MIN_ANTE";
pub const ENV_MAX_ANTE: &str = "TRICARD_MAX_ANTE";
pub const ENV_ADVISOR: &str = "TRICARD_ADVISOR";
pub const ENV_PLAYER: &str = "TRICARD_PLAYER";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub min_ante: u32,
    pub max_ante: u32,
    pub seed: Option<u64>,
    pub advisor: String,
    pub player: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            min_ante: MIN_ANTE,
            max_ante: MAX_ANTE,
            seed: None,
            advisor: "baseline".into(),
            player: "Player".into(),
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            starting_balance: self.starting_balance,
            min_ante: self.min_ante,
            max_ante: self.max_ante,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub min_ante: ValueSource,
    pub max_ante: ValueSource,
    pub seed: ValueSource,
    pub advisor: ValueSource,
    pub player: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            min_ante: ValueSource::Default,
            max_ante: ValueSource::Default,
            seed: ValueSource::Default,
            advisor: ValueSource::Default,
            player: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path = %path, "config file loaded");
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.min_ante {
            cfg.min_ante = v;
            sources.min_ante = ValueSource::File;
        }
        if let Some(v) = f.max_ante {
            cfg.max_ante = v;
            sources.max_ante = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.advisor {
            cfg.advisor = v;
            sources.advisor = ValueSource::File;
        }
        if let Some(v) = f.player {
            cfg.player = v;
            sources.player = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(ENV_SEED) {
        cfg.seed = Some(parse_env(ENV_SEED, &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_STARTING_BALANCE) {
        cfg.starting_balance = parse_env(ENV_STARTING_BALANCE, &v)?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_MIN_ANTE) {
        cfg.min_ante = parse_env(ENV_MIN_ANTE, &v)?;
        sources.min_ante = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_MAX_ANTE) {
        cfg.max_ante = parse_env(ENV_MAX_ANTE, &v)?;
        sources.max_ante = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_ADVISOR) {
        cfg.advisor = v;
        sources.advisor = ValueSource::Env;
    }
    if let Some(v) = env_value(ENV_PLAYER) {
        cfg.player = v;
        sources.player = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    min_ante: Option<u32>,
    #[serde(default)]
    max_ante: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    advisor: Option<String>,
    #[serde(default)]
    player: Option<String>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, raw)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if !ADVISORS.contains(&cfg.advisor.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown advisor {} (expected one of {})",
            cfg.advisor,
            ADVISORS.join(", ")
        )));
    }
    if cfg.player.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player name must not be empty".into(),
        ));
    }
    Ok(())
}
