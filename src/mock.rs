//! Deterministic stand-ins for testing the translation pipeline
//!
//! [`MockRandom`] replaces the random source so flourishes and
//! probabilistic transforms become reproducible. [`MockTranslator`] replaces
//! a dialect engine so dispatcher behavior (including failure isolation in
//! batch mode) can be tested without depending on rule tables.
//!
//! # Example
//!
//! ```ignore
//! use oath_dialects::mock::MockRandom;
//! use oath_dialects::random::RandomSource;
//!
//! let mut rng = MockRandom::never();
//! assert!(!rng.chance(0.99));
//! ```

use crate::dialects::Dialect;
use crate::engine::Translator;
use crate::error::{DialectError, DialectResult};
use crate::random::RandomSource;

/// Draw behavior for [`MockRandom`]
#[derive(Debug, Clone)]
enum Draws {
    /// Every draw is 1.0: no probability ever triggers
    Never,
    /// Every draw is 0.0: every non-zero probability triggers
    Always,
    /// Draws cycle through a fixed sequence
    Sequence { values: Vec<f64>, position: usize },
}

/// Random source with scripted draws
#[derive(Debug, Clone)]
pub struct MockRandom {
    draws: Draws,
}

impl MockRandom {
    /// No probabilistic decision ever fires; pools pick their first entry
    pub fn never() -> Self {
        Self {
            draws: Draws::Never,
        }
    }

    /// Every probabilistic decision fires; pools pick their first entry
    pub fn always() -> Self {
        Self {
            draws: Draws::Always,
        }
    }

    /// Draws cycle through `values`; `pick` maps a draw `v` to `floor(v * len)`
    ///
    /// An empty sequence behaves like [`MockRandom::never`].
    pub fn sequence(values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::never();
        }
        Self {
            draws: Draws::Sequence {
                values,
                position: 0,
            },
        }
    }
}

impl RandomSource for MockRandom {
    fn next_f64(&mut self) -> f64 {
        match &mut self.draws {
            Draws::Never => 1.0,
            Draws::Always => 0.0,
            Draws::Sequence { values, position } => {
                let value = values[*position % values.len()];
                *position += 1;
                value
            }
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        if !matches!(self.draws, Draws::Sequence { .. }) {
            return 0;
        }
        let draw = self.next_f64().clamp(0.0, 1.0);
        ((draw * len as f64) as usize).min(len - 1)
    }
}

/// Mock translation modes for testing dispatcher scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the dialect id: "hello" → "hello_grukk"
    Suffix,

    /// Return the input unchanged
    NoOp,

    /// Fail every translation with the given message
    Error(String),
}

/// Translator that stands in for a dialect engine
#[derive(Debug, Clone)]
pub struct MockTranslator {
    dialect: Dialect,
    mode: MockMode,
}

impl MockTranslator {
    pub fn new(dialect: Dialect, mode: MockMode) -> Self {
        Self { dialect, mode }
    }

    /// Mock that always fails with `message`
    pub fn failing(dialect: Dialect, message: &str) -> Self {
        Self::new(dialect, MockMode::Error(message.to_string()))
    }
}

impl Translator for MockTranslator {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn name(&self) -> &str {
        "Mock Translator"
    }

    fn translate(&self, text: &str, _rng: &mut dyn RandomSource) -> DialectResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, self.dialect.id())),
            MockMode::NoOp => Ok(text.to_string()),
            MockMode::Error(msg) => Err(DialectError::TranslationError(msg.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_blocks_every_probability() {
        let mut rng = MockRandom::never();
        assert!(!rng.chance(0.0));
        assert!(!rng.chance(0.7));
        assert!(!rng.chance(1.0));
        assert_eq!(rng.pick(4), 0);
    }

    #[test]
    fn test_always_fires_non_zero_probabilities() {
        let mut rng = MockRandom::always();
        assert!(rng.chance(0.15));
        assert!(!rng.chance(0.0));
        assert_eq!(rng.pick(4), 0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut rng = MockRandom::sequence(vec![0.1, 0.9]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.1);
    }

    #[test]
    fn test_sequence_pick_maps_draw_to_index() {
        let mut rng = MockRandom::sequence(vec![0.0, 0.5, 0.99]);
        assert_eq!(rng.pick(4), 0);
        assert_eq!(rng.pick(4), 2);
        assert_eq!(rng.pick(4), 3);
    }

    #[test]
    fn test_empty_sequence_is_never() {
        let mut rng = MockRandom::sequence(vec![]);
        assert!(!rng.chance(0.5));
    }

    #[test]
    fn test_suffix_mode() {
        let mock = MockTranslator::new(Dialect::Wild, MockMode::Suffix);
        let mut rng = MockRandom::never();
        assert_eq!(mock.translate("hello", &mut rng).unwrap(), "hello_wild");
    }

    #[test]
    fn test_noop_mode() {
        let mock = MockTranslator::new(Dialect::Tiny, MockMode::NoOp);
        let mut rng = MockRandom::never();
        assert_eq!(mock.translate("Hello world", &mut rng).unwrap(), "Hello world");
    }

    #[test]
    fn test_error_mode() {
        let mock = MockTranslator::failing(Dialect::Lord, "rule table missing");
        let mut rng = MockRandom::never();
        match mock.translate("hello", &mut rng) {
            Err(DialectError::TranslationError(msg)) => assert_eq!(msg, "rule table missing"),
            other => panic!("Expected TranslationError, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(Dialect::Grukk, MockMode::NoOp);
        assert_eq!(mock.name(), "Mock Translator");
        assert_eq!(mock.dialect(), Dialect::Grukk);
    }
}
