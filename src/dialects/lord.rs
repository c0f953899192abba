//! Lordspeak: courtly high speech
//!
//! Verbs take a formal `-eth`, the future is `shall`, possessed pronouns
//! take `-iel`, questions close with `, pray tell?` and most statements
//! open with a solemn phrase.

use crate::engine::DialectDefinition;
use crate::error::DialectResult;
use crate::flourish::{Flourish, OpenerPolicy};
use crate::grammar::Transform;
use crate::rules::{Category, RuleCategory, RuleEntry, RuleTable};

use super::Dialect;

const PRONOUNS: &[RuleEntry] = &[
    (&["i", "me", "my", "myself"], "Eth"),
    // Superior address by default
    (&["you", "your", "yourself"], "Vos"),
    (&["we", "us", "our", "ourselves"], "Ethran"),
    (&["they", "them", "their", "themselves"], "Vosran"),
    (&["he", "him", "his", "himself"], "Vir"),
    (&["she", "her", "hers", "herself"], "Damé"),
    (&["it", "its", "itself"], "Atem"),
];

const NOUNS: &[RuleEntry] = &[
    (&["person", "people"], "personage"),
    (&["friend", "ally"], "allyar"),
    (&["enemy", "opponent"], "adversar"),
    (&["leader", "ruler"], "sovereign"),
    (&["warrior", "soldier"], "valorant"),
    (&["food", "meal"], "repast"),
    (&["weapon"], "armament"),
    (&["home", "house", "dwelling"], "domicile"),
    (&["money", "currency"], "coinage"),
    (&["talk", "discussion", "conversation"], "discourse"),
];

const VERBS: &[RuleEntry] = &[
    (&["am", "are", "is", "was", "were"], "exist"),
    (&["have", "has", "had"], "possess"),
    (&["go", "goes", "went", "going"], "proceed"),
    (&["see", "sees", "saw", "seeing"], "observe"),
    (&["hear", "hears", "heard", "hearing"], "attend"),
    (&["eat", "eats", "ate", "eating"], "partake"),
    (&["fight", "fights", "fought", "fighting"], "contest"),
    (&["kill", "kills", "killed", "killing"], "vanquish"),
    (&["think", "thinks", "thought", "thinking"], "contemplate"),
    (&["like", "likes", "liked", "liking"], "favor"),
    (&["hate", "hates", "hated", "hating"], "disfavor"),
];

const ADJECTIVES: &[RuleEntry] = &[
    (&["good"], "beneth"),
    (&["bad"], "malath"),
    (&["big", "large"], "grandiose"),
    (&["small", "tiny"], "diminutive"),
    (&["strong", "powerful"], "formidable"),
    (&["weak", "feeble"], "infirm"),
    (&["fast", "quick"], "expeditious"),
    (&["slow"], "deliberate"),
    (&["smart", "clever", "intelligent"], "erudite"),
    (&["stupid", "dumb"], "unversed"),
];

const PARTICLES: &[RuleEntry] = &[
    (&["yes"], "affirm"),
    (&["no"], "declin"),
    (&["very", "really"], "most"),
    (&["maybe", "perhaps"], "perchance"),
    (&["hello", "hi", "hey"], "salutations"),
    (&["goodbye", "bye"], "adjournment"),
    (&["please"], "wouldst"),
    (&["thanks", "thank you"], "gratitudes"),
    (&["sorry", "apologies"], "contrition"),
];

const HONORIFICS: &[RuleEntry] = &[
    (&["lord", "noble"], "Hault"),
    (&["lady", "noblewoman"], "Hautesse"),
    (&["scholar", "professor"], "Sapient"),
    (&["warrior", "soldier"], "Valorant"),
    (&["elder", "old one"], "Venra"),
    (&["merchant", "trader"], "Mercanti"),
    (&["artisan", "craftsman"], "Artisan"),
    (&["commoner", "peasant"], "Mundane"),
];

const OPENERS: &[&str] = &["Indeed, ", "Verily, ", "Most assuredly, ", "Without question, "];

pub fn definition() -> DialectResult<DialectDefinition> {
    let pronouns = RuleCategory::from_entries(Category::Pronouns, PRONOUNS)?;
    let verbs = RuleCategory::from_entries(Category::Verbs, VERBS)?;

    let grammar = vec![
        Transform::possessive_suffix(&pronouns.replacements(), "-iel")?,
        Transform::past_tense("-ed"),
        Transform::future_tense("shall"),
        Transform::verb_formality(&verbs.replacements(), "eth")?,
        Transform::question_suffix(", pray tell?"),
    ];

    let rules = RuleTable::new()
        .with_category(pronouns)
        .with_category(RuleCategory::from_entries(Category::Nouns, NOUNS)?)
        .with_category(verbs)
        .with_category(RuleCategory::from_entries(Category::Adjectives, ADJECTIVES)?)
        .with_category(RuleCategory::from_entries(Category::Particles, PARTICLES)?)
        .with_category(RuleCategory::from_entries(Category::Honorifics, HONORIFICS)?);

    let opener = OpenerPolicy::new(OPENERS, 0.7)
        .skipping_questions()
        .excluding_prefixes(&["Let", "Pray"]);

    Ok(DialectDefinition {
        dialect: Dialect::Lord,
        rules,
        grammar,
        flourish: Flourish::new().with_opener(opener),
        farewell: "Adjournment, good personage!",
    })
}
