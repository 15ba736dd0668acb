use referee_engine::engine::{MAX_SEATS, TableConfig};
use serde::{Deserialize, Serialize};
use std::fs;

/// Match settings for the `sim` driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub ante: u32,
    pub hands: u64,
    pub seed: Option<u64>,
    /// Provider name per seat, in seating order
    pub players: Vec<String>,
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
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub ante: ValueSource,
    pub hands: ValueSource,
    pub seed: ValueSource,
    pub players: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            ante: ValueSource::Default,
            hands: ValueSource::Default,
            seed: ValueSource::Default,
            players: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_stack: 1000,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            ante: table.ante,
            hands: 100,
            seed: None,
            players: vec!["baseline".into(), "baseline".into(), "calling".into()],
        }
    }
}

impl Config {
    /// Table stakes for this match, seated for as many players as the table allows.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            ante: self.ante,
            max_players: MAX_SEATS,
            seed: self.seed,
        }
    }
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Invalid configuration: cannot read file: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid configuration: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

/// Resolves the configuration from defaults, the file named by
/// `REFEREE_CONFIG`, then `REFEREE_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// [`load_with_sources`] reading variables through `env` instead of the
/// process environment.
pub fn load_from(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env("REFEREE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
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
        if let Some(v) = f.ante {
            cfg.ante = v;
            sources.ante = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
    }

    if let Some(seed) = env("REFEREE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid seed {seed:?}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(hands) = env("REFEREE_HANDS")
        && !hands.is_empty()
    {
        cfg.hands = hands
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid hands {hands:?}")))?;
        sources.hands = ValueSource::Env;
    }
    if let Some(stack) = env("REFEREE_STARTING_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid starting_stack {stack:?}")))?;
        sources.starting_stack = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    ante: Option<u32>,
    #[serde(default)]
    hands: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<Vec<String>>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid("starting_stack must be >0".into()));
    }
    if cfg.hands == 0 {
        return Err(ConfigError::Invalid("hands must be >=1".into()));
    }
    if !(2..=MAX_SEATS).contains(&cfg.players.len()) {
        return Err(ConfigError::Invalid(format!(
            "players must list 2 to {MAX_SEATS} providers, got {}",
            cfg.players.len()
        )));
    }
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
