//! Grukk: orcish war-speech
//!
//! Articles vanish, plurals end in `z`, pronouns take a `'z` clitic before
//! the next word, and questions end in ` gah?`.

use crate::engine::DialectDefinition;
use crate::error::DialectResult;
use crate::flourish::{Flourish, Interjections};
use crate::grammar::Transform;
use crate::rules::{Category, RuleCategory, RuleEntry, RuleTable};

use super::Dialect;

const PRONOUNS: &[RuleEntry] = &[
    (&["i", "me", "my", "myself"], "Grukk"),
    (&["you", "your", "yourself"], "Gakh"),
    (&["we", "us", "our", "ourselves"], "Grukkaz"),
    (&["they", "them", "their", "themselves"], "Skumz"),
    (&["he", "him", "his", "himself"], "Grok"),
    (&["she", "her", "hers", "herself"], "Grakka"),
    (&["it", "its", "itself"], "Zit"),
];

const NOUNS: &[RuleEntry] = &[
    (&["person", "people"], "greenskin"),
    (&["friend", "ally"], "warbroth"),
    (&["enemy", "foe"], "skulltak"),
    (&["leader", "boss", "chief"], "warboss"),
    (&["warrior", "fighter", "soldier"], "krumpa"),
    (&["food", "meal"], "grubnosh"),
    (&["weapon"], "krumper"),
    (&["home", "house", "shelter"], "burrow"),
    (&["money", "gold", "coin"], "shinyz"),
    (&["talk", "speech", "words"], "wordspew"),
];

const VERBS: &[RuleEntry] = &[
    (&["am", "are", "is", "was", "were"], "iz"),
    (&["have", "has", "had"], "got"),
    (&["go", "goes", "went", "going"], "stompa"),
    (&["see", "sees", "saw", "seeing"], "eyeball"),
    (&["hear", "hears", "heard", "hearing"], "eardrum"),
    (&["eat", "eats", "ate", "eating"], "chomp"),
    (&["fight", "fights", "fought", "fighting"], "krump"),
    (&["kill", "kills", "killed", "killing"], "skullsplat"),
    (&["think", "thinks", "thought", "thinking"], "headpain"),
    (&["like", "likes", "liked", "liking"], "grin-at"),
    (&["hate", "hates", "hated", "hating"], "rage-at"),
];

const ADJECTIVES: &[RuleEntry] = &[
    (&["good"], "mosh"),
    (&["bad"], "skrag"),
    (&["big", "large"], "hugga"),
    (&["small", "tiny"], "runty"),
    (&["strong", "powerful"], "mighty"),
    (&["weak", "feeble"], "puny"),
    (&["fast", "quick"], "speedchop"),
    (&["slow"], "slugga"),
    (&["smart", "clever", "intelligent"], "kunnin"),
    (&["stupid", "dumb"], "numbskull"),
];

const PARTICLES: &[RuleEntry] = &[
    (&["yes"], "zug"),
    (&["no"], "nub"),
    (&["very", "really"], "blood"),
    (&["maybe", "perhaps"], "mightbe"),
    (&["hello", "hi", "hey"], "WAAAGH!"),
    (&["goodbye", "bye"], "skeddadle"),
    (&["please"], "gib-now"),
    (&["thank you", "thanks"], "gud-gib"),
    (&["sorry", "apologies"], "grovel"),
];

/// Pronoun tokens that take the possessive clitic; `Zit` never does
const POSSESSORS: &[&str] = &["Grukk", "Gakh", "Grukkaz", "Skumz", "Grok", "Grakka"];

const INTERJECTIONS: &[&str] = &["WAAAGH!", "ZOG!", "KRUMP!", "GRAH!", "SKRAG IT!"];

pub fn definition() -> DialectResult<DialectDefinition> {
    let rules = RuleTable::new()
        .with_category(RuleCategory::from_entries(Category::Pronouns, PRONOUNS)?)
        .with_category(RuleCategory::from_entries(Category::Nouns, NOUNS)?)
        .with_category(RuleCategory::from_entries(Category::Verbs, VERBS)?)
        .with_category(RuleCategory::from_entries(Category::Adjectives, ADJECTIVES)?)
        .with_category(RuleCategory::from_entries(Category::Particles, PARTICLES)?);

    let grammar = vec![
        Transform::RemoveArticles,
        Transform::past_tense("-did"),
        Transform::future_tense("gonna"),
        Transform::plural("z"),
        Transform::possessive(POSSESSORS, "'z")?,
        Transform::question_suffix(" gah?"),
    ];

    Ok(DialectDefinition {
        dialect: Dialect::Grukk,
        rules,
        grammar,
        flourish: Flourish::new().with_interjections(Interjections::new(INTERJECTIONS, 0.25)),
        farewell: "Skeddadle!",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DialectEngine, Translator};
    use crate::mock::MockRandom;

    fn translate(text: &str) -> String {
        let engine = DialectEngine::new(definition().unwrap());
        engine.translate(text, &mut MockRandom::never()).unwrap()
    }

    #[test]
    fn test_warrior_sentence() {
        let result = translate("I am a warrior and I will fight.");
        assert_eq!(result, "Grukk'z iz krumpa and Grukk'z gonna krump.");
        assert!(!result.split_whitespace().any(|w| w == "a"));
    }

    #[test]
    fn test_plural_and_past() {
        assert_eq!(translate("The dogs barked"), "Dogz bark-did");
    }

    #[test]
    fn test_question_marker() {
        assert_eq!(translate("Are you hungry?"), "Iz Gakh'z hungry gah?");
    }

    #[test]
    fn test_greeting_becomes_war_cry() {
        assert_eq!(translate("hello"), "WAAAGH!");
    }

    #[test]
    fn test_interjection_flourish() {
        let engine = DialectEngine::new(definition().unwrap());
        let result = engine.translate("I fight", &mut MockRandom::always()).unwrap();
        assert_eq!(result, "Grukk'z krump WAAAGH!");
    }
}
