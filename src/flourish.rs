//! Randomized decoration applied after grammar transforms
//!
//! Flourishes carry no translation content. A dialect may prepend an opener
//! phrase ("Verily, ...") and may append an interjection ("... WAAAGH!"),
//! each with its own probability and pool.

use crate::random::RandomSource;

/// Trailing interjection policy
#[derive(Debug, Clone)]
pub struct Interjections {
    pool: Vec<String>,
    probability: f64,
}

impl Interjections {
    pub fn new(pool: &[&str], probability: f64) -> Self {
        Interjections {
            pool: pool.iter().map(|s| s.to_string()).collect(),
            probability,
        }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Leading opener policy
#[derive(Debug, Clone)]
pub struct OpenerPolicy {
    pool: Vec<String>,
    probability: f64,
    skip_questions: bool,
    excluded_prefixes: Vec<String>,
    excluded_fragments: Vec<String>,
}

impl OpenerPolicy {
    pub fn new(pool: &[&str], probability: f64) -> Self {
        OpenerPolicy {
            pool: pool.iter().map(|s| s.to_string()).collect(),
            probability,
            skip_questions: false,
            excluded_prefixes: Vec::new(),
            excluded_fragments: Vec::new(),
        }
    }

    /// Never open a text that contains `?`
    pub fn skipping_questions(mut self) -> Self {
        self.skip_questions = true;
        self
    }

    /// Never open a text starting with one of `prefixes` (case-insensitive)
    pub fn excluding_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.excluded_prefixes = prefixes.iter().map(|p| p.to_lowercase()).collect();
        self
    }

    /// Never open a text containing one of `fragments` (case-insensitive)
    pub fn excluding_fragments(mut self, fragments: &[&str]) -> Self {
        self.excluded_fragments = fragments.iter().map(|f| f.to_lowercase()).collect();
        self
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    fn admits(&self, text: &str) -> bool {
        if self.pool.is_empty() || text.is_empty() {
            return false;
        }
        if self.skip_questions && text.contains('?') {
            return false;
        }
        let lowered = text.trim().to_lowercase();
        if self.excluded_prefixes.iter().any(|p| lowered.starts_with(p)) {
            return false;
        }
        !self.excluded_fragments.iter().any(|f| lowered.contains(f))
    }
}

/// A dialect's flourish policy
#[derive(Debug, Clone, Default)]
pub struct Flourish {
    opener: Option<OpenerPolicy>,
    interjections: Option<Interjections>,
}

impl Flourish {
    pub fn new() -> Self {
        Flourish::default()
    }

    pub fn with_opener(mut self, opener: OpenerPolicy) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn with_interjections(mut self, interjections: Interjections) -> Self {
        self.interjections = Some(interjections);
        self
    }

    pub fn opener(&self) -> Option<&OpenerPolicy> {
        self.opener.as_ref()
    }

    pub fn interjections(&self) -> Option<&Interjections> {
        self.interjections.as_ref()
    }

    /// Same pools, every probability forced to zero
    pub fn disabled(mut self) -> Self {
        if let Some(opener) = self.opener.as_mut() {
            opener.probability = 0.0;
        }
        if let Some(interjections) = self.interjections.as_mut() {
            interjections.probability = 0.0;
        }
        self
    }

    /// Opener first, then interjection
    pub fn apply(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        let mut result = text.to_string();

        if let Some(opener) = &self.opener {
            if opener.admits(&result) && rng.chance(opener.probability) {
                let phrase = &opener.pool[rng.pick(opener.pool.len())];
                result = prepend_lowered(phrase, &result);
            }
        }

        if let Some(interjections) = &self.interjections {
            if !interjections.pool.is_empty() && rng.chance(interjections.probability) {
                let interjection = &interjections.pool[rng.pick(interjections.pool.len())];
                result = format!("{} {}", result, interjection);
            }
        }

        result
    }
}

/// `phrase` followed by `text` with its first character lower-cased
fn prepend_lowered(phrase: &str, text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", phrase, first.to_lowercase(), chars.as_str()),
        None => phrase.to_string(),
    }
}
