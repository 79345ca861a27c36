use std::collections::HashSet;

use crate::models::Wordbank;
use crate::utils::word_len;

/// Invariant violations found in one bank.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BankIssues {
    pub wrong_length: Vec<String>,
    pub duplicates: Vec<String>,
    /// Present in both `unused_words` and `used_words`.
    pub used_and_unused: Vec<String>,
}

impl BankIssues {
    pub fn is_clean(&self) -> bool {
        self.wrong_length.is_empty() && self.duplicates.is_empty() && self.used_and_unused.is_empty()
    }

    pub fn count(&self) -> usize {
        self.wrong_length.len() + self.duplicates.len() + self.used_and_unused.len()
    }
}

pub fn inspect(len: usize, bank: &Wordbank) -> BankIssues {
    let mut issues = BankIssues::default();
    let used: HashSet<&str> = bank.used_words.iter().map(String::as_str).collect();

    // Repeats are counted within each list; overlap is reported below.
    for list in [&bank.unused_words, &bank.used_words] {
        let mut seen = HashSet::new();
        for word in list {
            if word_len(word) != len {
                issues.wrong_length.push(word.clone());
            }
            if !seen.insert(word.as_str()) {
                issues.duplicates.push(word.clone());
            }
        }
    }
    for word in &bank.unused_words {
        if used.contains(word.as_str()) {
            issues.used_and_unused.push(word.clone());
        }
    }

    issues
}

/// Drop wrong-length words, repeats, and unused words that were already played.
///
/// Matching is exact, so case variants such as "Tree" and "tree" both stay.
pub fn repair(len: usize, bank: &Wordbank) -> Wordbank {
    let mut seen = HashSet::new();
    let used_words: Vec<String> = bank
        .used_words
        .iter()
        .filter(|w| word_len(w) == len && seen.insert(w.as_str()))
        .cloned()
        .collect();

    let unused_words = bank
        .unused_words
        .iter()
        .filter(|w| word_len(w) == len && seen.insert(w.as_str()))
        .cloned()
        .collect();

    Wordbank {
        unused_words,
        used_words,
    }
}
