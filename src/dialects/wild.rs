//! Wildspeak: feral, nature-bound speech
//!
//! Everything becomes a hyphenated compound of natural imagery. Questions
//! are asked by inversion, the future is `when-comes`, and short word pairs
//! sometimes fuse into new compounds.

use crate::engine::DialectDefinition;
use crate::error::DialectResult;
use crate::flourish::{Flourish, Interjections, OpenerPolicy};
use crate::grammar::Transform;
use crate::rules::{Category, RuleCategory, RuleEntry, RuleTable};

use super::Dialect;

const PRONOUNS: &[RuleEntry] = &[
    (&["i", "me", "my", "myself"], "This-one"),
    (&["you", "your", "yourself"], "That-one"),
    (&["we", "us", "our", "ourselves"], "Pack"),
    (&["they", "them", "their", "themselves"], "Other-kind"),
    (&["he", "him", "his", "himself"], "Male-one"),
    (&["she", "her", "hers", "herself"], "Female-one"),
    (&["it", "its", "itself"], "Thing-being"),
];

const NATURAL_REFERENCES: &[RuleEntry] = &[
    (&["sun"], "Sky-fire"),
    (&["moon"], "Night-eye"),
    (&["stars", "star"], "Sky-sparks"),
    (&["sky", "heaven"], "Above-world"),
    (&["earth", "ground", "soil"], "Under-foot"),
    (&["water", "lake", "river"], "Life-flow"),
    (&["fire", "flame"], "Bright-hunger"),
    (&["wind", "breeze"], "Sky-breath"),
    (&["tree", "trees"], "Tall-green"),
    (&["rock", "stone", "boulder"], "Forever-hard"),
];

const NOUNS: &[RuleEntry] = &[
    (&["person", "people", "human", "humans"], "Two-leg"),
    (&["friend", "ally"], "Path-walker"),
    (&["enemy", "foe", "adversary"], "Shadow-bringer"),
    (&["leader", "chief", "guide"], "Way-shower"),
    (&["warrior", "fighter", "soldier"], "Fang-fighter"),
    (&["food", "meal"], "Life-fill"),
    (&["weapon", "sword", "spear"], "Claw-metal"),
    (&["home", "house", "shelter"], "Sleep-place"),
    (&["money", "gold", "coin"], "Strange-metal"),
    (&["talk", "speech", "words"], "Wind-send"),
];

const VERBS: &[RuleEntry] = &[
    (&["am", "are", "is", "was", "were"], "Lives-as"),
    (&["have", "has", "had"], "Holds"),
    (&["go", "goes", "went", "going"], "Moves"),
    (&["see", "sees", "saw", "seeing"], "Eye-catches"),
    (&["hear", "hears", "heard", "hearing"], "Ear-takes"),
    (&["eat", "eats", "ate", "eating"], "Fills-belly"),
    (&["drink", "drinks", "drank", "drinking"], "Takes-water"),
    (&["fight", "fights", "fought", "fighting"], "Shows-fangs"),
    (&["kill", "kills", "killed", "killing"], "Ends-breath"),
    (&["think", "thinks", "thought", "thinking"], "Mind-sees"),
    (&["feel", "feels", "felt", "feeling"], "Blood-knows"),
    (&["like", "likes", "liked", "liking"], "Heart-warms"),
    (&["hate", "hates", "hated", "hating"], "Skin-crawls"),
];

const ADJECTIVES: &[RuleEntry] = &[
    (&["good"], "Sun-bright"),
    (&["bad"], "Root-rot"),
    (&["big", "large"], "Many-spans"),
    (&["small", "tiny"], "Seed-size"),
    (&["strong", "powerful"], "Storm-might"),
    (&["weak", "feeble"], "Leaf-bend"),
    (&["fast", "quick"], "Wind-quick"),
    (&["slow"], "Stone-pace"),
    (&["smart", "clever", "intelligent"], "Deep-think"),
    (&["stupid", "dumb", "foolish"], "Cloud-head"),
    (&["old", "ancient", "aged"], "Many-seasons"),
    (&["young", "new", "fresh"], "New-sprout"),
];

const PARTICLES: &[RuleEntry] = &[
    (&["yes"], "So-flows"),
    (&["no"], "Against-current"),
    (&["very", "really"], "Deep"),
    (&["maybe", "perhaps"], "Mist-see"),
    (&["hello", "hi", "hey"], "See-you"),
    (&["goodbye", "bye"], "Until-next-sun"),
    (&["please"], "Ask-favor"),
    (&["thanks", "thank you"], "Good-given"),
    (&["sorry", "apologies"], "Wrong-path"),
];

const DIRECTIONS: &[RuleEntry] = &[
    (&["north"], "Cold-direction"),
    (&["south"], "Warm-direction"),
    (&["east"], "Sun-rise"),
    (&["west"], "Sun-fall"),
    (&["up", "above"], "Sky-toward"),
    (&["down", "below"], "Earth-toward"),
    (&["left"], "Heart-side"),
    (&["right"], "Spear-side"),
];

const TIME_REFERENCES: &[RuleEntry] = &[
    (&["morning", "dawn"], "Sun-rise-time"),
    (&["noon", "midday"], "High-sun"),
    (&["evening", "dusk"], "Sun-fall-time"),
    (&["night", "midnight"], "Dark-time"),
    (&["day", "today"], "Sun-circle"),
    (&["yesterday"], "Last-sun"),
    (&["tomorrow"], "Next-sun"),
    (&["week"], "Seven-suns"),
    (&["month"], "One-moon-cycle"),
    (&["year"], "Season-circle"),
];

/// Pronoun tokens a question may be inverted around
const INVERTIBLE: &[&str] = &["This-one", "That-one", "Pack", "Other-kind"];

const OPENERS: &[&str] = &[
    "Sun-bright, ",
    "Night-eye watching, ",
    "When wind-speaks, ",
    "Under sky-spark light, ",
    "As leaves-fall, ",
];

const INTERJECTIONS: &[&str] = &[
    "Sky-crack!",
    "Root-deep!",
    "Thorn-step!",
    "Wind-take!",
    "Blood-rush!",
    "Stone-still!",
];

pub fn definition() -> DialectResult<DialectDefinition> {
    let rules = RuleTable::new()
        .with_category(RuleCategory::from_entries(Category::Pronouns, PRONOUNS)?)
        .with_category(RuleCategory::from_entries(
            Category::NaturalReferences,
            NATURAL_REFERENCES,
        )?)
        .with_category(RuleCategory::from_entries(Category::Nouns, NOUNS)?)
        .with_category(RuleCategory::from_entries(Category::Verbs, VERBS)?)
        .with_category(RuleCategory::from_entries(Category::Adjectives, ADJECTIVES)?)
        .with_category(RuleCategory::from_entries(Category::Particles, PARTICLES)?)
        .with_category(RuleCategory::from_entries(Category::Directions, DIRECTIONS)?)
        .with_category(RuleCategory::from_entries(
            Category::TimeReferences,
            TIME_REFERENCES,
        )?);

    let grammar = vec![
        Transform::RemoveArticles,
        Transform::past_tense("-before"),
        Transform::future_tense("when-comes"),
        Transform::question_inversion(INVERTIBLE)?,
        Transform::negation("not-"),
        Transform::compound(0.3, 8),
    ];

    // Texts already naming a sunrise or the night get no scene-setting opener
    let opener = OpenerPolicy::new(OPENERS, 0.4).excluding_fragments(&[
        "sun-rise",
        "night-eye",
        "dark-time",
    ]);

    Ok(DialectDefinition {
        dialect: Dialect::Wild,
        rules,
        grammar,
        flourish: Flourish::new()
            .with_opener(opener)
            .with_interjections(Interjections::new(INTERJECTIONS, 0.15)),
        farewell: "Until-next-sun. May paths cross again.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DialectEngine, Translator};
    use crate::mock::MockRandom;

    fn engine() -> DialectEngine {
        DialectEngine::new(definition().unwrap())
    }

    #[test]
    fn test_question_inversion() {
        let result = engine()
            .translate("Are you strong?", &mut MockRandom::never())
            .unwrap();
        assert_eq!(result, "Lives-as Storm-might, That-one");
    }

    #[test]
    fn test_negation_and_pronoun() {
        let result = engine()
            .translate("I am not afraid", &mut MockRandom::never())
            .unwrap();
        assert_eq!(result, "This-one Lives-as not- afraid");
    }

    #[test]
    fn test_future_and_directions() {
        let result = engine()
            .translate("The wolf will run to the east", &mut MockRandom::never())
            .unwrap();
        assert_eq!(result, "Wolf when-comes run to Sun-rise");
    }

    #[test]
    fn test_sunrise_text_gets_no_opener() {
        let result = engine()
            .translate("The wolf will run to the east", &mut MockRandom::always())
            .unwrap();
        assert_eq!(result, "Wolf when-comes run-to Sun-rise Sky-crack!");
    }

    #[test]
    fn test_later_categories_rematch_tokens() {
        // "sun" → "Sky-fire", then the sky and fire rules rewrite both halves
        let result = engine().translate("the sun", &mut MockRandom::never()).unwrap();
        assert_eq!(result, "Above-world-Bright-hunger");
    }

    #[test]
    fn test_opener_and_interjection() {
        let result = engine().translate("I hunt", &mut MockRandom::always()).unwrap();
        assert_eq!(result, "Sun-bright, this-one hunt Sky-crack!");
    }

    #[test]
    fn test_past_tense_marker() {
        let result = engine()
            .translate("the wolf howled", &mut MockRandom::never())
            .unwrap();
        assert_eq!(result, "Wolf howl-before");
    }
}
