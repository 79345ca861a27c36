use serde::{Deserialize, Serialize};
use std::fmt;

/// One persisted bank of same-length words.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wordbank {
    pub unused_words: Vec<String>,
    pub used_words: Vec<String>,
}

impl Wordbank {
    pub fn with_unused(unused_words: Vec<String>) -> Self {
        Wordbank {
            unused_words,
            used_words: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.unused_words.len() + self.used_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why a candidate word was kept out of the wordbanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectReason {
    TooShort,
    PluralForm,
    NotInLexicon,
}

impl RejectReason {
    /// Rule order of the admission filter.
    pub const ALL: [RejectReason; 3] = [
        RejectReason::TooShort,
        RejectReason::PluralForm,
        RejectReason::NotInLexicon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::TooShort => "too_short",
            RejectReason::PluralForm => "plural_form",
            RejectReason::NotInLexicon => "not_in_lexicon",
        }
    }

    /// File stem of the inspection log collecting this reason.
    pub fn log_stem(self) -> &'static str {
        match self {
            RejectReason::TooShort => "too_short",
            RejectReason::PluralForm => "plurals",
            RejectReason::NotInLexicon => "not_scrabble",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running a candidate through the admission filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Word kept, in the casing the caller supplied.
    Admitted { word: String, len: usize },
    Rejected(RejectReason),
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}
