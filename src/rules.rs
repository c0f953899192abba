//! Lexical substitution rules
//!
//! A rule maps an alternation of trigger words to one replacement token.
//! Rules are grouped into categories, and a [`RuleTable`] applies the
//! categories in declaration order, each rule performing a global
//! case-insensitive whole-word substitution.
//!
//! Later rules see the output of earlier ones, so a replacement token can be
//! re-matched by a later category. That is accepted behavior.
//!
//! # Example
//!
//! ```ignore
//! use oath_dialects::rules::{Category, Rule};
//!
//! let rule = Rule::new(Category::Pronouns, &["i", "me", "my", "myself"], "Grukk")?;
//! assert_eq!(rule.apply("me and my axe"), "Grukk and Grukk axe");
//! ```

use crate::error::{DialectError, DialectResult};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// Semantic grouping of substitution rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pronouns,
    NaturalReferences,
    Nouns,
    Verbs,
    Adjectives,
    Particles,
    Honorifics,
    Directions,
    TimeReferences,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Pronouns => "pronouns",
            Category::NaturalReferences => "natural references",
            Category::Nouns => "nouns",
            Category::Verbs => "verbs",
            Category::Adjectives => "adjectives",
            Category::Particles => "particles",
            Category::Honorifics => "honorifics",
            Category::Directions => "directions",
            Category::TimeReferences => "time references",
        };
        write!(f, "{}", name)
    }
}

/// Trigger words paired with their replacement, as declared in a dialect table
pub type RuleEntry = (&'static [&'static str], &'static str);

/// Build a whole-word, case-insensitive alternation over `words`
///
/// Fails if `words` is empty or any word is empty: an empty alternative
/// would match between every pair of characters.
pub fn word_alternation(words: &[&str]) -> DialectResult<Regex> {
    if words.is_empty() {
        return Err(DialectError::InvalidRule(
            "Rule has no trigger words".to_string(),
        ));
    }
    if let Some(position) = words.iter().position(|w| w.trim().is_empty()) {
        return Err(DialectError::InvalidRule(format!(
            "Trigger word {} of [{}] is empty",
            position,
            words.join(", ")
        )));
    }

    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern)
        .map_err(|e| DialectError::InvalidRule(format!("Failed to compile '{}': {}", pattern, e)))
}

/// One substitution rule: trigger words → replacement
#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(category: Category, triggers: &[&str], replacement: &str) -> DialectResult<Self> {
        let pattern = word_alternation(triggers)?;
        Ok(Rule {
            category,
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every whole-word occurrence of a trigger with the replacement
    pub fn apply(&self, text: &str) -> String {
        match self.pattern.replace_all(text, NoExpand(&self.replacement)) {
            Cow::Borrowed(_) => text.to_string(),
            Cow::Owned(replaced) => {
                trace!(category = %self.category, replacement = %self.replacement, "rule matched");
                replaced
            }
        }
    }
}

/// Ordered rules of one category
#[derive(Debug, Clone)]
pub struct RuleCategory {
    category: Category,
    rules: Vec<Rule>,
}

impl RuleCategory {
    pub fn new(category: Category) -> Self {
        RuleCategory {
            category,
            rules: Vec::new(),
        }
    }

    /// Build a category from declared `(triggers, replacement)` entries
    pub fn from_entries(category: Category, entries: &[RuleEntry]) -> DialectResult<Self> {
        let mut result = RuleCategory::new(category);
        for (triggers, replacement) in entries {
            result.push(Rule::new(category, triggers, replacement)?);
        }
        Ok(result)
    }

    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Replacement tokens of this category, in declaration order
    pub fn replacements(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.replacement()).collect()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }
}

/// All lexical rules of a dialect, applied category by category
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    categories: Vec<RuleCategory>,
}

impl RuleTable {
    pub fn new() -> Self {
        RuleTable::default()
    }

    pub fn with_category(mut self, category: RuleCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn category(&self, category: Category) -> Option<&RuleCategory> {
        self.categories.iter().find(|c| c.category() == category)
    }

    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules().len()).sum()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for category in &self.categories {
            result = category.apply(&result);
        }
        result
    }

    /// Snapshot of everything this table can recognize, for heuristics that
    /// must leave already-translated words alone
    pub fn recognizer(&self) -> Recognizer {
        let rules = self.categories.iter().flat_map(|c| c.rules());
        let mut patterns = Vec::new();
        let mut tokens = HashSet::new();
        for rule in rules {
            patterns.push(rule.pattern().clone());
            tokens.insert(rule.replacement().to_lowercase());
        }
        Recognizer { patterns, tokens }
    }
}

/// Answers whether a word is known to a rule table
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    patterns: Vec<Regex>,
    tokens: HashSet<String>,
}

impl Recognizer {
    /// Also recognize `tokens`, e.g. words a grammar transform introduces
    pub fn with_tokens(mut self, tokens: &[&str]) -> Self {
        self.tokens.extend(tokens.iter().map(|t| t.to_lowercase()));
        self
    }

    /// True if a trigger pattern matches inside `word`, or `word` (ignoring
    /// surrounding punctuation) is one of the replacement tokens
    pub fn recognizes(&self, word: &str) -> bool {
        if self.patterns.iter().any(|p| p.is_match(word)) {
            return true;
        }
        let bare = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-');
        self.tokens.contains(&bare.to_lowercase())
    }
}
