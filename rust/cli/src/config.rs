use serde::{Deserialize, Serialize};
use std::fs;

/// Largest slot count the CLI accepts for counting and listing.
pub const MAX_SLOTS: u32 = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub slots: u32,
    pub ascii: bool,
    pub limit: usize,
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
    pub seed: ValueSource,
    pub slots: ValueSource,
    pub ascii: ValueSource,
    pub limit: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            slots: ValueSource::Default,
            ascii: ValueSource::Default,
            limit: ValueSource::Default,
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
        Self {
            seed: None,
            slots: 5,
            ascii: false,
            limit: 50,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `POKERSUM_CONFIG`, then `POKERSUM_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKERSUM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.slots {
            cfg.slots = v;
            sources.slots = ValueSource::File;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
        if let Some(v) = f.limit {
            cfg.limit = v;
            sources.limit = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("POKERSUM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(slots) = std::env::var("POKERSUM_SLOTS")
        && !slots.is_empty()
    {
        cfg.slots = slots
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid slots".into()))?;
        sources.slots = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var("POKERSUM_ASCII")
        && !ascii.is_empty()
    {
        cfg.ascii = parse_bool(&ascii).ok_or_else(|| ConfigError::Invalid("Invalid ascii".into()))?;
        sources.ascii = ValueSource::Env;
    }
    if let Ok(limit) = std::env::var("POKERSUM_LIMIT")
        && !limit.is_empty()
    {
        cfg.limit = limit
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid limit".into()))?;
        sources.limit = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    slots: Option<u32>,
    #[serde(default)]
    ascii: Option<bool>,
    #[serde(default)]
    limit: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.slots == 0 || cfg.slots > MAX_SLOTS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: slots must be in 1..={}",
            MAX_SLOTS
        )));
    }
    if cfg.limit == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: limit must be >0".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 5] = [
        "POKERSUM_CONFIG",
        "POKERSUM_SEED",
        "POKERSUM_SLOTS",
        "POKERSUM_ASCII",
        "POKERSUM_LIMIT",
    ];

    fn clear_env() {
        for v in VARS {
            // SAFETY: tests touching the environment run serially
            unsafe { std::env::remove_var(v) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run serially
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.slots, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "slots = 3\nseed = 7\nascii = true").unwrap();
        set_env("POKERSUM_CONFIG", file.path().to_str().unwrap());
        set_env("POKERSUM_SEED", "99");

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.slots, 3);
        assert_eq!(resolved.sources.slots, ValueSource::File);
        assert!(resolved.config.ascii);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.limit, ValueSource::Default);
        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_values() {
        clear_env();
        set_env("POKERSUM_SLOTS", "0");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        set_env("POKERSUM_SLOTS", "4");
        set_env("POKERSUM_LIMIT", "0");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        set_env("POKERSUM_LIMIT", "abc");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn unreadable_file_is_an_io_error() {
        clear_env();
        set_env("POKERSUM_CONFIG", "/nonexistent/pokersum.toml");
        assert!(matches!(load(), Err(ConfigError::Io(_))));
        clear_env();
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
