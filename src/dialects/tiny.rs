//! Tinyspeak: cosy halfling chatter
//!
//! Words grow `-ie` diminutives, cosy adjectives repeat themselves,
//! continuous verbs drop their `g`, and questions trail off into `righto?`
//! or `yes-no?`.

use crate::engine::DialectDefinition;
use crate::error::DialectResult;
use crate::flourish::{Flourish, Interjections};
use crate::grammar::Transform;
use crate::rules::{Category, RuleCategory, RuleEntry, RuleTable};

use super::Dialect;

const PRONOUNS: &[RuleEntry] = &[
    (&["i", "me", "my", "myself"], "Littl'un"),
    (&["you", "your", "yourself"], "Goodfellow"),
    (&["we", "us", "our", "ourselves"], "Folksy"),
    (&["they", "them", "their", "themselves"], "Them'uns"),
    (&["he", "him", "his", "himself"], "Lad'o"),
    (&["she", "her", "hers", "herself"], "Lass'ie"),
    (&["it", "its", "itself"], "Bitsy"),
];

const NOUNS: &[RuleEntry] = &[
    (&["person", "people"], "folk"),
    (&["friend", "ally"], "heartkin"),
    (&["enemy", "foe"], "troubler"),
    (&["leader", "boss", "chief"], "bigtalker"),
    (&["warrior", "fighter", "soldier"], "bravefolk"),
    (&["food", "meal"], "nummies"),
    (&["drink", "beverage"], "sipsy"),
    (&["weapon"], "pointystick"),
    (&["home", "house", "shelter"], "snughole"),
    (&["money", "gold", "coin"], "shinyclinkies"),
    (&["talk", "speech", "words"], "chitterchatter"),
];

const VERBS: &[RuleEntry] = &[
    (&["am", "are", "is", "was", "were"], "bein'"),
    (&["have", "has", "had"], "keepin'"),
    (&["go", "goes", "went", "going"], "tottle"),
    (&["see", "sees", "saw", "seeing"], "peepie"),
    (&["hear", "hears", "heard", "hearing"], "earful"),
    (&["eat", "eats", "ate", "eating"], "munchie"),
    (&["drink", "drinks", "drank", "drinking"], "sipsie"),
    (&["fight", "fights", "fought", "fighting"], "tussle"),
    (&["hurt", "hurts", "hurting"], "ouchie"),
    (&["think", "thinks", "thought", "thinking"], "ponderie"),
    (&["like", "likes", "liked", "liking"], "heartswell"),
    (&["hate", "hates", "hated", "hating"], "frownface"),
];

const ADJECTIVES: &[RuleEntry] = &[
    (&["good"], "cosylike"),
    (&["bad"], "bothersome"),
    (&["big", "large"], "biggish"),
    (&["small", "tiny"], "teeny-weeny"),
    (&["strong", "powerful"], "toughsome"),
    (&["weak", "feeble"], "wobbleish"),
    (&["fast", "quick"], "quickity"),
    (&["slow"], "gentlepace"),
    (&["smart", "clever", "intelligent"], "cleverhead"),
    (&["stupid", "dumb"], "plainfolk"),
    (&["happy", "glad", "joyful"], "smilesome"),
    (&["sad", "unhappy", "upset"], "teardrop"),
];

const PARTICLES: &[RuleEntry] = &[
    (&["yes"], "surely-so"),
    (&["no"], "nope-nope"),
    (&["very", "really"], "quite-quite"),
    (&["maybe", "perhaps"], "mightbe"),
    (&["hello", "hi", "hey"], "merry-day"),
    (&["goodbye", "bye"], "bye-bye-now"),
    (&["please"], "kindlydo"),
    (&["thanks", "thank you"], "muchgrateful"),
    (&["sorry", "apologies"], "apologie-bits"),
];

const QUESTION_ENDINGS: &[&str] = &[", righto?", ", yes-no?"];

const INTENSIFIERS: &[&str] = &["quite-quite", "super-duper", "extra-much"];

const INTERJECTIONS: &[&str] = &[
    "Goodness-gracious!",
    "Oh-my-my!",
    "Fiddle-faddle!",
    "Butter-biscuits!",
    "Sweet-as-pie!",
    "Teacups-tumbled!",
];

pub fn definition() -> DialectResult<DialectDefinition> {
    let rules = RuleTable::new()
        .with_category(RuleCategory::from_entries(Category::Pronouns, PRONOUNS)?)
        .with_category(RuleCategory::from_entries(Category::Nouns, NOUNS)?)
        .with_category(RuleCategory::from_entries(Category::Verbs, VERBS)?)
        .with_category(RuleCategory::from_entries(Category::Adjectives, ADJECTIVES)?)
        .with_category(RuleCategory::from_entries(Category::Particles, PARTICLES)?);

    let grammar = vec![
        Transform::present_continuous("bein'")?,
        Transform::past_tense("-ed-up"),
        Transform::future_tense("gonna"),
        Transform::question_random_suffix(QUESTION_ENDINGS),
        Transform::intensifiers(&["very", "quite-quite"], INTENSIFIERS)?,
        Transform::repetition(0.25),
        Transform::diminutives(0.3, rules.recognizer().with_tokens(&["righto", "yes-no"])),
    ];

    Ok(DialectDefinition {
        dialect: Dialect::Tiny,
        rules,
        grammar,
        flourish: Flourish::new().with_interjections(Interjections::new(INTERJECTIONS, 0.2)),
        farewell: "Bye-bye-now, heartkin!",
    })
}
