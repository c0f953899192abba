//! Dialect dispatch
//!
//! The [`Dispatcher`] owns one translator per known dialect plus the random
//! source they draw from. It resolves selectors, translates through one
//! dialect, or runs a batch through every dialect where a failure in one
//! dialect is logged and recorded without stopping the rest.
//!
//! # Example
//!
//! ```ignore
//! use oath_dialects::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new();
//! println!("{}", dispatcher.translate("grukk", "I will fight the enemy!")?);
//!
//! for entry in dispatcher.translate_all("Hello friend") {
//!     match &entry.result {
//!         Ok(text) => println!("{}: {}", entry.dialect, text),
//!         Err(e) => eprintln!("{}: {}", entry.dialect, e),
//!     }
//! }
//! ```

use crate::config::Config;
use crate::dialects::Dialect;
use crate::engine::{DialectEngine, Translator};
use crate::error::{DialectError, DialectResult};
use crate::random::RandomSource;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

/// One dialect's outcome in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub dialect: Dialect,
    pub result: DialectResult<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serializable view of a [`BatchEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub dialect: Dialect,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&BatchEntry> for BatchRecord {
    fn from(entry: &BatchEntry) -> Self {
        let (translation, error) = match &entry.result {
            Ok(text) => (Some(text.clone()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        BatchRecord {
            dialect: entry.dialect,
            name: entry.dialect.display_name(),
            translation,
            error,
        }
    }
}

/// Routes text to dialect translators
pub struct Dispatcher {
    translators: BTreeMap<Dialect, Box<dyn Translator>>,
    /// Dialects whose engine failed to build, with the build error
    unavailable: BTreeMap<Dialect, DialectError>,
    rng: Box<dyn RandomSource>,
}

impl Dispatcher {
    /// Every compiled-in dialect, default configuration
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::build(config, DialectEngine::for_dialect)
    }

    fn build<F>(config: &Config, build_engine: F) -> Self
    where
        F: Fn(Dialect) -> DialectResult<DialectEngine>,
    {
        let mut translators: BTreeMap<Dialect, Box<dyn Translator>> = BTreeMap::new();
        let mut unavailable = BTreeMap::new();

        for dialect in Dialect::ALL {
            match build_engine(dialect) {
                Ok(engine) => {
                    let engine = if config.flourishes {
                        engine
                    } else {
                        engine.without_flourishes()
                    };
                    translators.insert(dialect, Box::new(engine));
                }
                Err(e) => {
                    error!(dialect = %dialect, error = %e, "failed to build dialect engine");
                    let reason = format!("{}: {}", dialect, e);
                    unavailable.insert(dialect, DialectError::EngineUnavailable(reason));
                }
            }
        }

        Dispatcher {
            translators,
            unavailable,
            rng: config.random_source(),
        }
    }

    /// Replace the random source
    pub fn with_random(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Replace the translator serving `translator.dialect()`
    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        let dialect = translator.dialect();
        self.unavailable.remove(&dialect);
        self.translators.insert(dialect, translator);
        self
    }

    /// Dialects with a working translator, in registry order
    pub fn available(&self) -> Vec<Dialect> {
        self.translators.keys().copied().collect()
    }

    /// Closing line for an interactive session, if the translator has one
    pub fn farewell(&self, dialect: Dialect) -> Option<&str> {
        self.translators.get(&dialect).and_then(|t| t.farewell())
    }

    /// Translate through the dialect named by `selector` (case-insensitive)
    pub fn translate(&mut self, selector: &str, text: &str) -> DialectResult<String> {
        let dialect: Dialect = selector.parse()?;
        self.translate_with(dialect, text)
    }

    pub fn translate_with(&mut self, dialect: Dialect, text: &str) -> DialectResult<String> {
        match self.translators.get(&dialect) {
            Some(translator) => translator.translate(text, self.rng.as_mut()),
            None => Err(self.unavailable.get(&dialect).cloned().unwrap_or_else(|| {
                DialectError::EngineUnavailable(format!("{}: no translator registered", dialect))
            })),
        }
    }

    /// Translate through every known dialect
    ///
    /// Always returns exactly one entry per dialect in registry order.
    /// Only `Err` results are isolated: a translator that panics aborts the batch.
    pub fn translate_all(&mut self, text: &str) -> Vec<BatchEntry> {
        info!(
            dialects = Dialect::ALL.len(),
            chars = text.chars().count(),
            "starting batch translation"
        );

        let entries: Vec<BatchEntry> = Dialect::ALL
            .iter()
            .map(|&dialect| {
                let result = self.translate_with(dialect, text);
                if let Err(e) = &result {
                    let translator = self.translators.get(&dialect).map(|t| t.name());
                    warn!(
                        dialect = %dialect,
                        translator = translator.unwrap_or("unavailable"),
                        error = %e,
                        "dialect failed in batch, continuing"
                    );
                }
                BatchEntry { dialect, result }
            })
            .collect();

        let succeeded = entries.iter().filter(|e| e.is_ok()).count();
        info!(
            succeeded,
            failed = entries.len() - succeeded,
            "batch translation complete"
        );
        entries
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
