use std::env;
use std::fmt;
use std::time::Duration;

use game_core::FeedbackMode;

pub const HINT_SERVICE_API_KEY: &str = "HINT_SERVICE_API_KEY";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Hint service credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct HintCredential(String);

impl HintCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_present(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Debug for HintCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HintCredential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub hint_api_key: HintCredential,
    pub hint_service_url: Option<String>,
    pub feedback_mode: FeedbackMode,
    pub request_timeout: Duration,
    pub hint_timeout: Duration,
    pub rng_seed: Option<u64>,
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value,
    })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let hint_api_key = lookup(HINT_SERVICE_API_KEY)
            .map(HintCredential::new)
            .filter(HintCredential::is_present)
            .ok_or_else(|| ConfigError::MissingEnvVars(vec![HINT_SERVICE_API_KEY.to_string()]))?;

        let feedback_mode: FeedbackMode = lookup("FEEDBACK_MODE")
            .map(|value| {
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "FEEDBACK_MODE".to_string(),
                    value,
                })
            })
            .transpose()?
            .unwrap_or_default();

        let rng_seed: Option<u64> = lookup("RNG_SEED")
            .map(|value| {
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "RNG_SEED".to_string(),
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", "8080")?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://block_guesser.db?mode=rwc".to_string()),
            hint_api_key,
            hint_service_url: lookup("HINT_SERVICE_URL").filter(|url| !url.trim().is_empty()),
            feedback_mode,
            request_timeout: Duration::from_millis(parse_var(&lookup, "REQUEST_TIMEOUT_MS", "5000")?),
            hint_timeout: Duration::from_millis(parse_var(&lookup, "HINT_TIMEOUT_MS", "2000")?),
            rng_seed,
        })
    }

    /// Re-check the settings a running server depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hint_api_key.is_present() {
            return Err(ConfigError::MissingEnvVars(vec![
                HINT_SERVICE_API_KEY.to_string(),
            ]));
        }
        Ok(())
    }
}
