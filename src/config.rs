use crate::category::CategoryTable;
use crate::classifier::DEFAULT_NOISE_WORDS;
use crate::confidence::ConfidenceThresholds;
use crate::error::{Error, Result};
use crate::price::{PricePattern, default_price_patterns};

/// Tables the parsing pipeline reads from. Built once at startup and only
/// ever shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub price_patterns: Vec<PricePattern>,
    pub noise_words: Vec<String>,
    pub categories: CategoryTable,
    pub thresholds: ConfidenceThresholds,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            price_patterns: default_price_patterns(),
            noise_words: DEFAULT_NOISE_WORDS.iter().map(|w| w.to_string()).collect(),
            categories: CategoryTable::default(),
            thresholds: ConfidenceThresholds::default(),
        }
    }
}

impl ParserConfig {
    pub fn with_thresholds(thresholds: ConfidenceThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            ..Self::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Filter used when `RUST_LOG` is unset or unparseable.
    pub log_level: String,
    pub thresholds: ConfidenceThresholds,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source (the process env in production).
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfidenceThresholds::default();
        let thresholds = ConfidenceThresholds {
            volume_saturation: parse_var(&var, "MENU_PARSER_VOLUME_SATURATION")?
                .unwrap_or(defaults.volume_saturation),
            max_plausible_price: parse_var(&var, "MENU_PARSER_MAX_PRICE")?
                .unwrap_or(defaults.max_plausible_price),
            min_name_len: parse_var(&var, "MENU_PARSER_MIN_NAME_LEN")?
                .unwrap_or(defaults.min_name_len),
            max_name_len: parse_var(&var, "MENU_PARSER_MAX_NAME_LEN")?
                .unwrap_or(defaults.max_name_len),
        };
        thresholds.validate()?;

        Ok(Self {
            bind_address: var("MENU_PARSER_BIND").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&var, "MENU_PARSER_PORT")?.unwrap_or(8000),
            log_level: var("MENU_PARSER_LOG").unwrap_or_else(|| "info".to_string()),
            thresholds,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidSetting {
                key: key.to_string(),
                value,
            }),
    }
}
