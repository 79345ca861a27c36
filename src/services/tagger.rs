//! Single-token part-of-speech tagging.
//!
//! Words are tagged in isolation, never in sentence context. The backend sits
//! behind the [`Tagger`] trait so filter logic never depends on a concrete model.
//!
//! [`RuleTagger`] resolves a token in this order:
//! 1. lexical table: the loaded model dictionary layered over built-in
//!    closed-class and irregular entries
//! 2. non-alphabetic tokens are [`Tag::Unknown`]
//! 3. suffix rules
//! 4. capitalized nouns are promoted to proper nouns

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, WordbankError};

/// Penn Treebank tags the classifier cares about, plus `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    NounPlural,
    ProperNoun,
    ProperNounPlural,
    Verb,
    VerbPast,
    VerbGerund,
    VerbPastParticiple,
    VerbNonThirdPerson,
    VerbThirdPersonSingular,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Cardinal,
    Modal,
    Interjection,
    Unknown,
}

impl Tag {
    pub fn penn(self) -> &'static str {
        match self {
            Tag::Noun => "NN",
            Tag::NounPlural => "NNS",
            Tag::ProperNoun => "NNP",
            Tag::ProperNounPlural => "NNPS",
            Tag::Verb => "VB",
            Tag::VerbPast => "VBD",
            Tag::VerbGerund => "VBG",
            Tag::VerbPastParticiple => "VBN",
            Tag::VerbNonThirdPerson => "VBP",
            Tag::VerbThirdPersonSingular => "VBZ",
            Tag::Adjective => "JJ",
            Tag::Adverb => "RB",
            Tag::Pronoun => "PRP",
            Tag::Determiner => "DT",
            Tag::Preposition => "IN",
            Tag::Conjunction => "CC",
            Tag::Cardinal => "CD",
            Tag::Modal => "MD",
            Tag::Interjection => "UH",
            Tag::Unknown => "UNK",
        }
    }

    pub fn from_penn(code: &str) -> Option<Tag> {
        let tag = match code {
            "NN" => Tag::Noun,
            "NNS" => Tag::NounPlural,
            "NNP" => Tag::ProperNoun,
            "NNPS" => Tag::ProperNounPlural,
            "VB" => Tag::Verb,
            "VBD" => Tag::VerbPast,
            "VBG" => Tag::VerbGerund,
            "VBN" => Tag::VerbPastParticiple,
            "VBP" => Tag::VerbNonThirdPerson,
            "VBZ" => Tag::VerbThirdPersonSingular,
            "JJ" => Tag::Adjective,
            "RB" => Tag::Adverb,
            "PRP" => Tag::Pronoun,
            "DT" => Tag::Determiner,
            "IN" => Tag::Preposition,
            "CC" => Tag::Conjunction,
            "CD" => Tag::Cardinal,
            "MD" => Tag::Modal,
            "UH" => Tag::Interjection,
            "UNK" => Tag::Unknown,
            _ => return None,
        };
        Some(tag)
    }

    /// Plural common noun, plural proper noun, or third-person-singular present verb.
    pub fn is_plural_like(self) -> bool {
        matches!(
            self,
            Tag::NounPlural | Tag::ProperNounPlural | Tag::VerbThirdPersonSingular
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.penn())
    }
}

/// Tags one token in isolation.
pub trait Tagger {
    fn tag(&self, word: &str) -> Tag;
}

// Plurals that suffix rules miss or would call singular.
const IRREGULAR_PLURALS: &[&str] = &[
    "children", "people", "men", "women", "feet", "teeth", "geese", "mice", "lice", "oxen",
    "dice", "criteria", "phenomena", "alumni", "cacti", "fungi", "nuclei", "stimuli", "radii",
    "syllabi", "indices", "matrices", "vertices", "appendices", "menus", "emus", "gnus", "tutus",
    "gurus", "skis", "taxis", "alibis", "kiwis", "bikinis", "safaris", "yetis", "visas",
];

// Singular or uncountable words that end in "s".
const SINGULAR_ENDING_IN_S: &[&str] = &[
    "gas", "lens", "news", "series", "species", "means", "chaos", "ethos", "pathos", "atlas",
    "canvas", "bias", "alias", "christmas", "physics", "mathematics", "economics", "politics",
    "athletics", "ethics", "measles", "mumps", "diabetes", "herpes", "rabies", "scabies",
];

const THIRD_PERSON_IRREGULAR: &[&str] = &["is", "has", "does", "goes"];

const CLOSED_CLASS: &[(&str, Tag)] = &[
    ("was", Tag::VerbPast),
    ("were", Tag::VerbPast),
    ("are", Tag::VerbNonThirdPerson),
    ("am", Tag::VerbNonThirdPerson),
    ("this", Tag::Determiner),
    ("these", Tag::Determiner),
    ("those", Tag::Determiner),
    ("his", Tag::Pronoun),
    ("hers", Tag::Pronoun),
    ("its", Tag::Pronoun),
    ("ours", Tag::Pronoun),
    ("yours", Tag::Pronoun),
    ("theirs", Tag::Pronoun),
    ("us", Tag::Pronoun),
    ("thus", Tag::Adverb),
    ("always", Tag::Adverb),
    ("perhaps", Tag::Adverb),
    ("sometimes", Tag::Adverb),
    ("nevertheless", Tag::Adverb),
    ("afterwards", Tag::Adverb),
    ("as", Tag::Preposition),
    ("towards", Tag::Preposition),
    ("across", Tag::Preposition),
    ("besides", Tag::Preposition),
    ("unless", Tag::Preposition),
    ("whereas", Tag::Preposition),
    ("yes", Tag::Interjection),
    ("well", Tag::Adverb),
    ("family", Tag::Noun),
    ("supply", Tag::Noun),
    ("reply", Tag::Noun),
    ("rally", Tag::Noun),
    ("belly", Tag::Noun),
    ("jelly", Tag::Noun),
    ("bully", Tag::Noun),
    ("italy", Tag::ProperNoun),
];

// Base forms used to tell "walks" the verb from "cats" the noun.
const BASE_VERBS: &[&str] = &[
    "run", "eat", "walk", "talk", "see", "go", "do", "sing", "bring", "fly", "try", "cry",
    "study", "watch", "fix", "teach", "push", "catch", "pass", "make", "take", "give", "come",
    "know", "think", "say", "get", "find", "tell", "become", "leave", "feel", "seem", "keep",
    "begin", "help", "show", "hear", "play", "move", "live", "believe", "happen", "write",
    "sit", "stand", "lose", "pay", "meet", "include", "continue", "learn", "change", "lead",
    "understand", "follow", "stop", "create", "speak", "read", "allow", "spend", "grow",
    "open", "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die", "send",
    "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise",
    "require", "report", "decide", "pull", "want", "need", "mean", "seek", "ask", "carry",
    "apply", "deny", "reply", "worry", "marry", "hurry", "rely", "vary", "copy", "deliver",
    "provide", "produce", "describe", "explain", "prefer", "contain", "depend", "exist",
    "occur", "refer", "involve", "indicate", "ensure", "enjoy", "sleep", "drink", "swim",
    "drive", "ride", "climb", "jump", "laugh", "smile", "cook", "wash", "wish", "finish",
    "touch", "mix", "relax",
];

// Suffix → tag for words with no lexical entry. First match wins.
const SUFFIX_RULES: &[(&str, Tag)] = &[
    ("ness", Tag::Noun),
    ("less", Tag::Adjective),
    ("ous", Tag::Adjective),
    ("ss", Tag::Noun),
    ("us", Tag::Noun),
    ("is", Tag::Noun),
    ("ful", Tag::Adjective),
    ("ive", Tag::Adjective),
    ("able", Tag::Adjective),
    ("ible", Tag::Adjective),
    ("ly", Tag::Adverb),
    ("ing", Tag::VerbGerund),
    ("ed", Tag::VerbPast),
];

/// Lexicon-plus-suffix tagger for isolated English tokens.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexical: HashMap<String, Tag>,
    base_verbs: HashSet<&'static str>,
}

impl RuleTagger {
    /// Built-in tables and rules only.
    pub fn builtin() -> Self {
        let mut lexical = HashMap::new();
        for &word in IRREGULAR_PLURALS {
            lexical.insert(word.to_string(), Tag::NounPlural);
        }
        for &word in SINGULAR_ENDING_IN_S {
            lexical.insert(word.to_string(), Tag::Noun);
        }
        for &word in THIRD_PERSON_IRREGULAR {
            lexical.insert(word.to_string(), Tag::VerbThirdPersonSingular);
        }
        for &(word, tag) in CLOSED_CLASS {
            lexical.insert(word.to_string(), tag);
        }

        RuleTagger {
            lexical,
            base_verbs: BASE_VERBS.iter().copied().collect(),
        }
    }

    /// Built-in tables overlaid with a `word<TAB>TAG` model file.
    ///
    /// A missing model is a setup failure: nothing can be classified without it.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| WordbankError::on_open("tagging model", path, e))?;

        let mut tagger = RuleTagger::builtin();
        let mut entries = 0;
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, code) = parse_model_line(line).ok_or_else(|| WordbankError::TaggerModel {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("expected `word<TAB>TAG`, got {:?}", line),
            })?;
            let tag = Tag::from_penn(code).ok_or_else(|| WordbankError::TaggerModel {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("unknown tag {:?}", code),
            })?;
            tagger.insert(word, tag);
            entries += 1;
        }

        info!("Loaded {} tagging model entries from {}", entries, path.display());
        Ok(tagger)
    }

    pub fn insert(&mut self, word: &str, tag: Tag) {
        self.lexical.insert(word.to_lowercase(), tag);
    }

    fn is_base_verb(&self, word: &str) -> bool {
        self.base_verbs.contains(word)
    }

    /// Tag a lowercase token ending in "s" that no table knows.
    fn tag_s_form(&self, lower: &str) -> Tag {
        let stem = &lower[..lower.len() - 1];
        let mut bases = vec![stem.to_string()];
        if let Some(root) = lower.strip_suffix("ies") {
            bases.push(format!("{}y", root));
        }
        if let Some(root) = lower.strip_suffix("es") {
            bases.push(root.to_string());
        }

        if bases.iter().any(|b| self.is_base_verb(b)) {
            Tag::VerbThirdPersonSingular
        } else {
            Tag::NounPlural
        }
    }

    fn tag_common(&self, lower: &str) -> Tag {
        if let Some(&tag) = self.lexical.get(lower) {
            return tag;
        }
        if !lower.chars().all(char::is_alphabetic) {
            return Tag::Unknown;
        }
        if self.is_base_verb(lower) {
            return Tag::Verb;
        }
        for &(suffix, tag) in SUFFIX_RULES {
            if lower.len() > suffix.len() && lower.ends_with(suffix) {
                return tag;
            }
        }
        if lower.len() > 1 && lower.ends_with('s') {
            return self.tag_s_form(lower);
        }
        Tag::Noun
    }
}

fn parse_model_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t').map(str::trim);
    let word = fields.next().filter(|w| !w.is_empty())?;
    let code = fields.next().filter(|c| !c.is_empty())?;
    if fields.next().is_some() {
        return None;
    }
    Some((word, code))
}

impl Default for RuleTagger {
    fn default() -> Self {
        RuleTagger::builtin()
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, word: &str) -> Tag {
        if word.is_empty() {
            return Tag::Unknown;
        }
        let lower = word.to_lowercase();
        let tag = self.tag_common(&lower);

        let capitalized = word.chars().next().map_or(false, char::is_uppercase);
        let tag = match tag {
            Tag::Noun if capitalized => Tag::ProperNoun,
            Tag::NounPlural if capitalized => Tag::ProperNounPlural,
            other => other,
        };
        debug!("tagged {:?} as {}", word, tag);
        tag
    }
}
