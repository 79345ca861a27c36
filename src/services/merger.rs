use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::{debug, info};

use super::filter::AdmissionFilter;
use super::store::WordbankStore;
use crate::error::Result;
use crate::models::{Admission, RejectReason, Wordbank};

/// Union `admitted` into the bank's unused words and sort them.
///
/// Words already recorded as used stay used and are not offered again.
pub fn merge_bank<I>(existing: &Wordbank, admitted: I) -> Wordbank
where
    I: IntoIterator<Item = String>,
{
    let used: HashSet<&str> = existing.used_words.iter().map(String::as_str).collect();

    let mut unused: BTreeSet<String> = existing.unused_words.iter().cloned().collect();
    unused.extend(admitted.into_iter().filter(|w| !used.contains(w.as_str())));

    Wordbank {
        unused_words: unused.into_iter().collect(),
        used_words: existing.used_words.clone(),
    }
}

/// Admit-and-merge outcome for one run.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// New unused words per length that had a bank on disk.
    pub added: BTreeMap<usize, usize>,
    /// Admitted words per length that had no bank and were dropped.
    pub skipped: BTreeMap<usize, usize>,
    pub rejected: Vec<(String, RejectReason)>,
}

/// Re-filter `candidates` and group the admitted ones by length.
pub fn filter_candidates(
    filter: &AdmissionFilter,
    candidates: &BTreeSet<String>,
) -> (BTreeMap<usize, BTreeSet<String>>, Vec<(String, RejectReason)>) {
    let mut by_length: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        match filter.admit(candidate) {
            Admission::Admitted { word, len } => {
                by_length.entry(len).or_default().insert(word);
            }
            Admission::Rejected(reason) => rejected.push((candidate.clone(), reason)),
        }
    }

    (by_length, rejected)
}

/// Merged banks computed against the store, not yet written.
#[derive(Debug)]
pub struct MergePlan {
    updates: Vec<(usize, Wordbank)>,
    pub report: MergeReport,
}

impl MergePlan {
    /// Write every changed bank. Nothing has touched the store before this.
    pub fn apply(self, store: &WordbankStore) -> Result<MergeReport> {
        for (len, bank) in &self.updates {
            store.save(*len, bank)?;
        }
        Ok(self.report)
    }
}

/// Re-filter `candidates` and merge them against every bank they touch.
///
/// All banks are read before any is written, so an unreadable bank aborts
/// with the store untouched. Lengths with no bank on disk are never created.
pub fn plan_merge(
    store: &WordbankStore,
    filter: &AdmissionFilter,
    candidates: &BTreeSet<String>,
) -> Result<MergePlan> {
    let (by_length, rejected) = filter_candidates(filter, candidates);
    let mut report = MergeReport {
        rejected,
        ..MergeReport::default()
    };

    let mut loaded = Vec::with_capacity(by_length.len());
    for (len, words) in by_length {
        match store.load(len)? {
            Some(existing) => loaded.push((len, existing, words)),
            None => {
                debug!("No {}-letter bank; dropping {} candidates", len, words.len());
                report.skipped.insert(len, words.len());
            }
        }
    }

    let mut updates = Vec::new();
    for (len, existing, words) in loaded {
        let merged = merge_bank(&existing, words);
        let added = merged.unused_words.len() - existing_unique_unused(&existing);
        info!("{}-letter bank: {} new unused words", len, added);
        report.added.insert(len, added);
        if merged != existing {
            updates.push((len, merged));
        }
    }

    Ok(MergePlan { updates, report })
}

/// Merge candidates into the banks already present in `store`.
pub fn merge_candidates(
    store: &WordbankStore,
    filter: &AdmissionFilter,
    candidates: &BTreeSet<String>,
) -> Result<MergeReport> {
    plan_merge(store, filter, candidates)?.apply(store)
}

fn existing_unique_unused(bank: &Wordbank) -> usize {
    bank.unused_words.iter().collect::<HashSet<_>>().len()
}
