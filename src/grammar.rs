//! Structural rewrites applied after lexical substitution
//!
//! Every [`Transform`] maps text to text. Most are deterministic regex
//! rewrites; compounding, repetition, diminutives, intensifiers and the
//! random question suffix draw from the [`RandomSource`] they are handed.
//!
//! The tense, plural and possessive rules are suffix and adjacency
//! heuristics, not lexicon lookups. They misfire on words that merely look
//! like past tenses or plurals ("red" becomes "r-did", "bus" becomes "buz"),
//! and that is the intended behavior.

use crate::error::{DialectError, DialectResult};
use crate::random::RandomSource;
use crate::rules::Recognizer;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static ARTICLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:the|a|an)\b").unwrap());
static PAST_TENSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\w+)ed\b").unwrap());
static FUTURE_TENSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bwill\s+(\w+)\b").unwrap());
static PLURAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\w+)s\b").unwrap());
static NEGATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bnot\b").unwrap());
static REPEATABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:big|small|good|bad|fast|slow|happy|sad)\b").unwrap()
});

const DIMINUTIVE_ENDINGS: [&str; 4] = ["y", "ie", "let", "ling"];
const NON_NOUN_ENDINGS: [&str; 6] = ["ing", "ed", "ly", "est", "er", "ful"];

/// Escape `$` so a literal can be embedded in a regex replacement template
fn template_literal(text: &str) -> String {
    text.replace('$', "$$")
}

fn compile(pattern: &str) -> DialectResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| DialectError::InvalidRule(format!("Failed to compile '{}': {}", pattern, e)))
}

/// `(a|b|c)` capture group over escaped tokens
fn token_group(tokens: &[&str]) -> DialectResult<String> {
    if tokens.is_empty() || tokens.iter().any(|t| t.is_empty()) {
        return Err(DialectError::InvalidRule(
            "Token list for grammar transform is empty".to_string(),
        ));
    }
    let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    Ok(format!("({})", escaped.join("|")))
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Split `word` into its body and any closing punctuation
fn split_closing(word: &str) -> (&str, &str) {
    let body = word
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"' | ')'));
    (body, &word[body.len()..])
}

/// How a dialect marks questions
#[derive(Debug, Clone)]
pub enum QuestionStyle {
    /// Strip every `?` and append one fixed marker
    Suffix(String),
    /// Strip every `?` and append one marker drawn from the pool
    RandomSuffix(Vec<String>),
    /// Strip every `?` and swap `<pronoun> <hyphenated-word>` pairs
    Inversion(Regex),
}

/// A single post-lexical rewrite
#[derive(Debug, Clone)]
pub enum Transform {
    RemoveArticles,
    PresentContinuous {
        pattern: Regex,
        replacement: String,
    },
    PastTense {
        replacement: String,
    },
    FutureTense {
        replacement: String,
    },
    Plural {
        replacement: String,
    },
    /// Clitic marker between a pronoun token and the following word
    Possessive {
        pattern: Regex,
        replacement: String,
    },
    /// `<pronoun>'s` → `<pronoun><marker>`
    PossessiveSuffix {
        pattern: Regex,
        replacement: String,
    },
    VerbFormality {
        pattern: Regex,
        replacement: String,
    },
    Question(QuestionStyle),
    Negation {
        replacement: String,
    },
    Compound {
        probability: f64,
        max_len: usize,
    },
    Intensifiers {
        pattern: Regex,
        pool: Vec<String>,
    },
    Repetition {
        probability: f64,
    },
    Diminutives {
        probability: f64,
        recognizer: Recognizer,
    },
}

impl Transform {
    /// `am|are|is|<copula> <stem>ing` → `<copula> <stem>in'`
    pub fn present_continuous(copula: &str) -> DialectResult<Self> {
        let pattern = compile(&format!(
            r"(?i)\b(?:am|are|is|{})\s+(\w+)ing\b",
            regex::escape(copula)
        ))?;
        Ok(Transform::PresentContinuous {
            pattern,
            replacement: format!("{} ${{1}}in'", template_literal(copula)),
        })
    }

    /// `<stem>ed` → `<stem><marker>`
    pub fn past_tense(marker: &str) -> Self {
        Transform::PastTense {
            replacement: format!("${{1}}{}", template_literal(marker)),
        }
    }

    /// `will <word>` → `<modal> <word>`
    pub fn future_tense(modal: &str) -> Self {
        Transform::FutureTense {
            replacement: format!("{} ${{1}}", template_literal(modal)),
        }
    }

    /// `<stem>s` → `<stem><marker>`
    pub fn plural(marker: &str) -> Self {
        Transform::Plural {
            replacement: format!("${{1}}{}", template_literal(marker)),
        }
    }

    /// `<pronoun> <word>` → `<pronoun><marker> <word>`; pronouns match case-sensitively
    pub fn possessive(pronouns: &[&str], marker: &str) -> DialectResult<Self> {
        let pattern = compile(&format!(r"\b{}\s+(\w+)\b", token_group(pronouns)?))?;
        Ok(Transform::Possessive {
            pattern,
            replacement: format!("${{1}}{} ${{2}}", template_literal(marker)),
        })
    }

    pub fn possessive_suffix(pronouns: &[&str], marker: &str) -> DialectResult<Self> {
        let pattern = compile(&format!(r"(?i)\b{}'s\b", token_group(pronouns)?))?;
        Ok(Transform::PossessiveSuffix {
            pattern,
            replacement: format!("${{1}}{}", template_literal(marker)),
        })
    }

    /// Append `suffix` to every verb token
    pub fn verb_formality(verbs: &[&str], suffix: &str) -> DialectResult<Self> {
        let pattern = compile(&format!(r"(?i)\b{}\b", token_group(verbs)?))?;
        Ok(Transform::VerbFormality {
            pattern,
            replacement: format!("${{1}}{}", template_literal(suffix)),
        })
    }

    pub fn question_suffix(marker: &str) -> Self {
        Transform::Question(QuestionStyle::Suffix(marker.to_string()))
    }

    pub fn question_random_suffix(pool: &[&str]) -> Self {
        Transform::Question(QuestionStyle::RandomSuffix(
            pool.iter().map(|m| m.to_string()).collect(),
        ))
    }

    /// Question by inversion: `<pronoun> <a-b>` → `<a-b>, <pronoun>`
    pub fn question_inversion(pronouns: &[&str]) -> DialectResult<Self> {
        let pattern = compile(&format!(r"\b{}\s+(\w+-\w+)\b", token_group(pronouns)?))?;
        Ok(Transform::Question(QuestionStyle::Inversion(pattern)))
    }

    pub fn negation(replacement: &str) -> Self {
        Transform::Negation {
            replacement: replacement.to_string(),
        }
    }

    pub fn compound(probability: f64, max_len: usize) -> Self {
        Transform::Compound {
            probability,
            max_len,
        }
    }

    /// `<trigger> <word>` → `<intensifier> <word>`; one intensifier is drawn per call
    pub fn intensifiers(triggers: &[&str], pool: &[&str]) -> DialectResult<Self> {
        let triggers = token_group(triggers)?;
        let pattern = compile(&format!(r"(?i)\b{}\s+(\w+)\b", triggers))?;
        Ok(Transform::Intensifiers {
            pattern,
            pool: pool.iter().map(|p| p.to_string()).collect(),
        })
    }

    pub fn repetition(probability: f64) -> Self {
        Transform::Repetition { probability }
    }

    /// Diminutives skip every word `recognizer` knows
    pub fn diminutives(probability: f64, recognizer: Recognizer) -> Self {
        Transform::Diminutives {
            probability,
            recognizer,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Transform::RemoveArticles => "remove-articles",
            Transform::PresentContinuous { .. } => "present-continuous",
            Transform::PastTense { .. } => "past-tense",
            Transform::FutureTense { .. } => "future-tense",
            Transform::Plural { .. } => "plural",
            Transform::Possessive { .. } => "possessive",
            Transform::PossessiveSuffix { .. } => "possessive-suffix",
            Transform::VerbFormality { .. } => "verb-formality",
            Transform::Question(_) => "question",
            Transform::Negation { .. } => "negation",
            Transform::Compound { .. } => "compound",
            Transform::Intensifiers { .. } => "intensifiers",
            Transform::Repetition { .. } => "repetition",
            Transform::Diminutives { .. } => "diminutives",
        }
    }

    pub fn apply(&self, text: &str, rng: &mut dyn RandomSource) -> String {
        match self {
            Transform::RemoveArticles => ARTICLES.replace_all(text, "").into_owned(),
            Transform::PresentContinuous {
                pattern,
                replacement,
            }
            | Transform::Possessive {
                pattern,
                replacement,
            }
            | Transform::PossessiveSuffix {
                pattern,
                replacement,
            }
            | Transform::VerbFormality {
                pattern,
                replacement,
            } => pattern.replace_all(text, replacement.as_str()).into_owned(),
            Transform::PastTense { replacement } => PAST_TENSE
                .replace_all(text, replacement.as_str())
                .into_owned(),
            Transform::FutureTense { replacement } => FUTURE_TENSE
                .replace_all(text, replacement.as_str())
                .into_owned(),
            Transform::Plural { replacement } => {
                PLURAL.replace_all(text, replacement.as_str()).into_owned()
            }
            Transform::Question(style) => format_question(text, style, rng),
            Transform::Negation { replacement } => NEGATION
                .replace_all(text, NoExpand(replacement))
                .into_owned(),
            Transform::Compound {
                probability,
                max_len,
            } => compound_words(text, *probability, *max_len, rng),
            Transform::Intensifiers { pattern, pool } => {
                if pool.is_empty() || !pattern.is_match(text) {
                    return text.to_string();
                }
                let choice = &pool[rng.pick(pool.len())];
                // group 1 is the trigger, group 2 the intensified word
                let replacement = format!("{} ${{2}}", template_literal(choice));
                pattern
                    .replace_all(text, replacement.as_str())
                    .into_owned()
            }
            Transform::Repetition { probability } => repeat_words(text, *probability, rng),
            Transform::Diminutives {
                probability,
                recognizer,
            } => add_diminutives(text, *probability, recognizer, rng),
        }
    }
}

fn format_question(text: &str, style: &QuestionStyle, rng: &mut dyn RandomSource) -> String {
    if !text.contains('?') {
        return text.to_string();
    }
    let body = text.replace('?', "");
    match style {
        QuestionStyle::Suffix(marker) => body + marker,
        QuestionStyle::RandomSuffix(pool) => {
            if pool.is_empty() {
                return body;
            }
            body + &pool[rng.pick(pool.len())]
        }
        QuestionStyle::Inversion(pattern) => {
            pattern.replace_all(&body, "${2}, ${1}").into_owned()
        }
    }
}

/// Fuse adjacent short, unhyphenated words into `a-b` compounds
fn compound_words(
    text: &str,
    probability: f64,
    max_len: usize,
    rng: &mut dyn RandomSource,
) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let mut i = 0;
    while i + 1 < words.len() {
        let short = char_len(&words[i]) < max_len && char_len(&words[i + 1]) < max_len;
        if short
            && rng.chance(probability)
            && !words[i].contains('-')
            && !words[i + 1].contains('-')
        {
            let next = words.remove(i + 1);
            words[i] = format!("{}-{}", words[i], next);
        } else {
            i += 1;
        }
    }
    words.join(" ")
}

fn repeat_words(text: &str, probability: f64, rng: &mut dyn RandomSource) -> String {
    text.split_whitespace()
        .map(|word| {
            let (body, closing) = split_closing(word);
            let candidate =
                char_len(body) > 3 && (body.ends_with('y') || REPEATABLE.is_match(body));
            if candidate && rng.chance(probability) {
                format!("{}-{}{}", body, body, closing)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn add_diminutives(
    text: &str,
    probability: f64,
    recognizer: &Recognizer,
    rng: &mut dyn RandomSource,
) -> String {
    text.split_whitespace()
        .map(|word| {
            let (body, closing) = split_closing(word);
            if DIMINUTIVE_ENDINGS.iter().any(|e| body.ends_with(e)) || recognizer.recognizes(body)
            {
                return word.to_string();
            }
            if char_len(body) > 3
                && !NON_NOUN_ENDINGS.iter().any(|e| body.ends_with(e))
                && rng.chance(probability)
            {
                let stem = body.strip_suffix('e').unwrap_or(body);
                format!("{}ie{}", stem, closing)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRandom;
    use crate::rules::{Category, RuleCategory, RuleTable};

    fn never(transform: &Transform, text: &str) -> String {
        transform.apply(text, &mut MockRandom::never())
    }

    fn always(transform: &Transform, text: &str) -> String {
        transform.apply(text, &mut MockRandom::always())
    }

    #[test]
    fn test_transform_names() {
        assert_eq!(Transform::RemoveArticles.name(), "remove-articles");
        assert_eq!(Transform::repetition(0.25).name(), "repetition");
        assert_eq!(
            Transform::diminutives(0.3, Recognizer::default()).name(),
            "diminutives"
        );
    }

    #[test]
    fn test_remove_articles() {
        let result = never(&Transform::RemoveArticles, "the orc has a club and an axe");
        assert_eq!(result, " orc has  club and  axe");
        // Not inside longer words
        assert_eq!(never(&Transform::RemoveArticles, "theory anvil"), "theory anvil");
    }

    #[test]
    fn test_past_tense_marker() {
        let t = Transform::past_tense("-did");
        assert_eq!(never(&t, "Grukk walked home"), "Grukk walk-did home");
        // Heuristic: anything ending in "ed" counts
        assert_eq!(never(&t, "red bed"), "r-did b-did");
    }

    #[test]
    fn test_future_tense() {
        let t = Transform::future_tense("when-comes");
        assert_eq!(never(&t, "This-one will   hunt"), "This-one when-comes hunt");
        assert_eq!(never(&t, "goodwill stays"), "goodwill stays");
    }

    #[test]
    fn test_plural() {
        let t = Transform::plural("z");
        assert_eq!(never(&t, "dogs and cats"), "dogz and catz");
        assert_eq!(never(&t, "s"), "s");
    }

    #[test]
    fn test_possessive_marker() {
        let t = Transform::possessive(&["Grukk", "Gakh", "Grukkaz"], "'z").unwrap();
        assert_eq!(never(&t, "Grukkaz krumper"), "Grukkaz'z krumper");
        assert_eq!(never(&t, "Grukk  shinyz"), "Grukk'z shinyz");
        // Case-sensitive and needs a following word
        assert_eq!(never(&t, "grukk shinyz"), "grukk shinyz");
        assert_eq!(never(&t, "Grukk."), "Grukk.");
    }

    #[test]
    fn test_possessive_suffix() {
        let t = Transform::possessive_suffix(&["Eth", "Atem"], "-iel").unwrap();
        assert_eq!(never(&t, "Atem's domicile"), "Atem-iel domicile");
        assert_eq!(never(&t, "Eth domicile"), "Eth domicile");
    }

    #[test]
    fn test_verb_formality() {
        let t = Transform::verb_formality(&["exist", "contest"], "eth").unwrap();
        assert_eq!(never(&t, "Eth exist and contest"), "Eth existeth and contesteth");
        assert_eq!(never(&t, "existence"), "existence");
    }

    #[test]
    fn test_present_continuous() {
        let t = Transform::present_continuous("bein'").unwrap();
        assert_eq!(never(&t, "Littl'un bein' running"), "Littl'un bein' runnin'");
        assert_eq!(never(&t, "they are singing"), "they bein' singin'");
    }

    #[test]
    fn test_question_suffix_strips_and_appends_once() {
        let t = Transform::question_suffix(", pray tell?");
        let result = never(&t, "exist Vos? allyar?");
        assert_eq!(result, "exist Vos allyar, pray tell?");
        assert_eq!(result.matches('?').count(), 1);
        assert_eq!(never(&t, "no question."), "no question.");
    }

    #[test]
    fn test_question_random_suffix() {
        let t = Transform::question_random_suffix(&[", righto?", ", yes-no?"]);
        assert_eq!(never(&t, "bein' Goodfellow?"), "bein' Goodfellow, righto?");
        let mut rng = MockRandom::sequence(vec![0.75]);
        assert_eq!(t.apply("bein' Goodfellow?", &mut rng), "bein' Goodfellow, yes-no?");
    }

    #[test]
    fn test_question_inversion() {
        let t = Transform::question_inversion(&["This-one", "That-one", "Pack"]).unwrap();
        assert_eq!(
            never(&t, "That-one Lives-as hungry?"),
            "Lives-as, That-one hungry"
        );
        // Nothing to invert: only the question mark goes
        assert_eq!(never(&t, "Pack hunts?"), "Pack hunts");
    }

    #[test]
    fn test_negation() {
        let t = Transform::negation("not-");
        assert_eq!(never(&t, "This-one not afraid"), "This-one not- afraid");
        assert_eq!(never(&t, "nothing"), "nothing");
    }

    #[test]
    fn test_compound_fuses_short_pairs() {
        let t = Transform::compound(0.3, 8);
        assert_eq!(always(&t, "red fox runs"), "red-fox runs");
        assert_eq!(never(&t, "red fox runs"), "red fox runs");
        // Hyphenated or long words never fuse
        assert_eq!(always(&t, "Sky-fire burns bright"), "Sky-fire burns-bright");
        assert_eq!(always(&t, "enormous mountains"), "enormous mountains");
    }

    #[test]
    fn test_intensifiers() {
        let t = Transform::intensifiers(
            &["very", "quite-quite"],
            &["quite-quite", "super-duper", "extra-much"],
        )
        .unwrap();
        let mut rng = MockRandom::sequence(vec![0.5]);
        assert_eq!(t.apply("quite-quite smilesome", &mut rng), "super-duper smilesome");
        assert_eq!(never(&t, "plain words"), "plain words");
    }

    #[test]
    fn test_repetition() {
        let t = Transform::repetition(0.25);
        assert_eq!(always(&t, "cosy happy ant"), "cosy-cosy happy-happy ant");
        assert_eq!(never(&t, "cosy happy ant"), "cosy happy ant");
        assert_eq!(always(&t, "so happy!"), "so happy-happy!");
    }

    #[test]
    fn test_diminutives_skip_known_words() {
        let entries: &[crate::rules::RuleEntry] = &[(&["house", "home"], "snughole")];
        let table = RuleTable::new()
            .with_category(RuleCategory::from_entries(Category::Nouns, entries).unwrap());
        let t = Transform::diminutives(0.3, table.recognizer());
        assert_eq!(
            always(&t, "snughole near stone walking bunny"),
            "snughole nearie stonie walking bunny"
        );
        assert_eq!(never(&t, "near stone"), "near stone");
        // Closing punctuation stays outside the diminutive
        assert_eq!(always(&t, "the stone, friend?"), "the stonie, friendie?");
    }

    #[test]
    fn test_transforms_survive_odd_input() {
        let table = RuleTable::new();
        let transforms = vec![
            Transform::RemoveArticles,
            Transform::past_tense("-did"),
            Transform::future_tense("gonna"),
            Transform::plural("z"),
            Transform::question_suffix(" gah?"),
            Transform::negation("not-"),
            Transform::compound(0.3, 8),
            Transform::repetition(0.25),
            Transform::diminutives(0.3, table.recognizer()),
        ];
        for input in ["", "?!.,", "ALL CAPS SHOUTED", "ÜBER naïve café"] {
            for t in &transforms {
                let _ = always(t, input);
                let _ = never(t, input);
            }
        }
    }

    #[test]
    fn test_empty_token_list_rejected() {
        assert!(Transform::possessive(&[], "'z").is_err());
        assert!(Transform::verb_formality(&["exist", ""], "eth").is_err());
        assert!(Transform::intensifiers(&[], &["x"]).is_err());
    }
}
