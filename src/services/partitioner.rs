use std::collections::{BTreeMap, HashSet};

use log::debug;

use super::filter::AdmissionFilter;
use crate::models::{Admission, RejectReason, Wordbank};

/// Result of one generation pass.
#[derive(Debug, Default)]
pub struct Partition {
    /// Fresh banks keyed by word length; `used_words` always empty.
    pub banks: BTreeMap<usize, Wordbank>,
    /// Admitted words in input order.
    pub admitted: Vec<String>,
    /// Rejected words in input order.
    pub rejected: Vec<(String, RejectReason)>,
}

impl Partition {
    pub fn lengths(&self) -> Vec<usize> {
        self.banks.keys().copied().collect()
    }
}

/// Filter raw candidates and bucket the survivors by length, keeping first-seen order.
///
/// Repeated tokens are only considered once.
pub fn partition<'w, I>(filter: &AdmissionFilter, words: I) -> Partition
where
    I: IntoIterator<Item = &'w str>,
{
    let mut seen = HashSet::new();
    let mut out = Partition::default();

    for word in words {
        if !seen.insert(word) {
            debug!("skipping repeated candidate {:?}", word);
            continue;
        }
        match filter.admit(word) {
            Admission::Admitted { word, len } => {
                out.banks
                    .entry(len)
                    .or_default()
                    .unused_words
                    .push(word.clone());
                out.admitted.push(word);
            }
            Admission::Rejected(reason) => out.rejected.push((word.to_string(), reason)),
        }
    }

    out
}

/// Keep the played words of a bank that is being regenerated.
///
/// Fresh words that were already played are left out of `unused_words`.
pub fn carry_over_used(fresh: Wordbank, existing: Option<Wordbank>) -> Wordbank {
    let used_words = match existing {
        Some(bank) => bank.used_words,
        None => return fresh,
    };
    let used: HashSet<&str> = used_words.iter().map(String::as_str).collect();
    let unused_words = fresh
        .unused_words
        .into_iter()
        .filter(|w| !used.contains(w.as_str()))
        .collect();

    Wordbank {
        unused_words,
        used_words,
    }
}
