//! Dialect engine and the translator trait
//!
//! A [`DialectEngine`] owns one immutable [`DialectDefinition`] and runs the
//! full pipeline over a piece of text:
//!
//! 1. **Normalize** - lower-case the input
//! 2. **Rule Table** - lexical substitution, category by category
//! 3. **Grammar** - structural transforms in the dialect's order
//! 4. **Flourish** - opener and interjection, drawn from the random source
//! 5. **Finalize** - collapse whitespace, capitalize sentences
//!
//! # Example
//!
//! ```ignore
//! use oath_dialects::{Dialect, DialectEngine, RngSource, Translator};
//!
//! let engine = DialectEngine::for_dialect(Dialect::Grukk)?;
//! let mut rng = RngSource::thread();
//! let text = engine.translate("I will fight the enemy!", &mut rng)?;
//! println!("{}", text);
//! ```

use crate::dialects::Dialect;
use crate::error::DialectResult;
use crate::finalize::{collapse_whitespace, finalize};
use crate::flourish::Flourish;
use crate::grammar::Transform;
use crate::random::RandomSource;
use crate::rules::RuleTable;
use tracing::{debug, trace};

/// Anything that can translate text under one dialect
///
/// The dispatcher only talks to this trait, so engines can be swapped for
/// test doubles.
pub trait Translator {
    /// The dialect this translator produces
    fn dialect(&self) -> Dialect;

    /// Human-readable name, used in logs
    fn name(&self) -> &str;

    /// Translate `text`, drawing any randomness from `rng`
    fn translate(&self, text: &str, rng: &mut dyn RandomSource) -> DialectResult<String>;

    /// Line to print when an interactive session ends
    fn farewell(&self) -> Option<&str> {
        None
    }
}

/// Everything that defines one dialect's behavior
#[derive(Debug, Clone)]
pub struct DialectDefinition {
    pub dialect: Dialect,
    pub rules: RuleTable,
    pub grammar: Vec<Transform>,
    pub flourish: Flourish,
    /// Line printed when an interactive session in this dialect ends
    pub farewell: &'static str,
}

/// Runs the translation pipeline for one dialect
#[derive(Debug, Clone)]
pub struct DialectEngine {
    definition: DialectDefinition,
}

impl DialectEngine {
    pub fn new(definition: DialectDefinition) -> Self {
        DialectEngine { definition }
    }

    /// Build the engine for a compiled-in dialect
    pub fn for_dialect(dialect: Dialect) -> DialectResult<Self> {
        Ok(DialectEngine::new(dialect.definition()?))
    }

    /// Same engine with flourish probabilities forced to zero
    ///
    /// Grammar transforms still draw from the random source (compounding,
    /// diminutives, repetition, random question endings), so output is only
    /// reproducible with a seeded or [`Silent`](crate::random::Silent) source.
    pub fn without_flourishes(mut self) -> Self {
        self.definition.flourish = self.definition.flourish.disabled();
        self
    }

    pub fn definition(&self) -> &DialectDefinition {
        &self.definition
    }

    /// Lexical substitution and grammar transforms, before any flourish
    fn transform(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        let mut result = self.definition.rules.apply(&text.to_lowercase());
        for transform in &self.definition.grammar {
            result = transform.apply(&result, rng);
            trace!(
                dialect = %self.definition.dialect,
                transform = transform.name(),
                text = %result,
                "applied transform"
            );
        }
        collapse_whitespace(&result)
    }

    /// Full pipeline without flourishes, finalized
    pub fn translate_unadorned(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        finalize(&self.transform(text, rng))
    }
}

impl Translator for DialectEngine {
    fn dialect(&self) -> Dialect {
        self.definition.dialect
    }

    fn name(&self) -> &str {
        self.definition.dialect.display_name()
    }

    fn translate(&self, text: &str, rng: &mut dyn RandomSource) -> DialectResult<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        debug!(
            dialect = %self.definition.dialect,
            chars = text.chars().count(),
            rules = self.definition.rules.rule_count(),
            transforms = self.definition.grammar.len(),
            "translating text"
        );

        let body = self.transform(text, rng);
        let decorated = self.definition.flourish.apply(&body, rng);
        Ok(finalize(&decorated))
    }

    fn farewell(&self) -> Option<&str> {
        Some(self.definition.farewell)
    }
}
