//! Runtime configuration
//!
//! Settings are layered, lowest precedence first: built-in defaults, a JSON
//! file, `OATH_DIALECTS_*` environment variables, then command-line flags.
//!
//! ```json
//! { "seed": 42, "flourishes": true, "deterministic": false }
//! ```

use crate::error::{DialectError, DialectResult};
use crate::random::{RandomSource, RngSource, Silent};
use serde::{Deserialize, Serialize};

pub const ENV_SEED: &str = "OATH_DIALECTS_SEED";
pub const ENV_FLOURISHES: &str = "OATH_DIALECTS_FLOURISHES";
pub const ENV_DETERMINISTIC: &str = "OATH_DIALECTS_DETERMINISTIC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for a reproducible generator; `None` uses the thread generator
    pub seed: Option<u64>,
    /// When false, openers and interjections are never added
    pub flourishes: bool,
    /// When true, no probabilistic step ever fires
    pub deterministic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            flourishes: true,
            deterministic: false,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> DialectResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DialectError::Config(format!("Invalid configuration file: {}", e)))
    }

    /// Layer the `OATH_DIALECTS_*` environment variables over `self`
    pub fn with_env(self) -> DialectResult<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Layer variables resolved through `lookup` over `self`
    pub fn with_lookup<F>(mut self, lookup: F) -> DialectResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse::<u64>().map_err(|_| {
                DialectError::Config(format!(
                    "{} must be an unsigned integer, got '{}'",
                    ENV_SEED, value
                ))
            })?;
            self.seed = Some(seed);
        }
        if let Some(value) = lookup(ENV_FLOURISHES) {
            self.flourishes = parse_flag(ENV_FLOURISHES, &value)?;
        }
        if let Some(value) = lookup(ENV_DETERMINISTIC) {
            self.deterministic = parse_flag(ENV_DETERMINISTIC, &value)?;
        }
        Ok(self)
    }

    /// Apply command-line flags; flags only ever tighten the configuration
    pub fn with_flags(mut self, seed: Option<u64>, no_flourish: bool, plain: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if no_flourish {
            self.flourishes = false;
        }
        if plain {
            self.deterministic = true;
        }
        self
    }

    /// Random source matching this configuration
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        if self.deterministic {
            return Box::new(Silent);
        }
        match self.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::thread()),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> DialectResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DialectError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
