use log::debug;

use super::classifier::is_plural_form;
use super::lexicon::Lexicon;
use super::tagger::Tagger;
use crate::models::{Admission, RejectReason};
use crate::utils::word_len;

/// Words this short never enter a wordbank.
pub const MAX_REJECTED_LEN: usize = 3;

/// Decides whether a candidate word may enter a wordbank.
///
/// Rules run in a fixed order and the first failure is the reported reason:
/// 1. length of 3 characters or fewer
/// 2. plural noun or third-person-singular verb
/// 3. absent from the lexicon (case-insensitive)
pub struct AdmissionFilter<'a> {
    lexicon: &'a Lexicon,
    tagger: &'a dyn Tagger,
}

impl<'a> AdmissionFilter<'a> {
    pub fn new(lexicon: &'a Lexicon, tagger: &'a dyn Tagger) -> Self {
        AdmissionFilter { lexicon, tagger }
    }

    pub fn admit(&self, word: &str) -> Admission {
        let len = word_len(word);

        let verdict = if len <= MAX_REJECTED_LEN {
            Admission::Rejected(RejectReason::TooShort)
        } else if is_plural_form(self.tagger, word) {
            Admission::Rejected(RejectReason::PluralForm)
        } else if !self.lexicon.contains(word) {
            Admission::Rejected(RejectReason::NotInLexicon)
        } else {
            Admission::Admitted {
                word: word.to_string(),
                len,
            }
        };

        debug!("{:?} -> {:?}", word, verdict);
        verdict
    }
}
