use log::{info, warn};

use crate::config::Paths;
use crate::error::{Result, WordbankError};
use crate::services::store::WordbankStore;
use crate::services::verifier::{inspect, repair};
use crate::utils::{shuffle_seeded, word_len};

#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    pub fix: bool,
    /// Reorder `unused_words` of rewritten banks with this seed.
    pub shuffle_seed: Option<u64>,
}

/// Check every bank for wrong-length words, repeats and words both used and unused.
///
/// Fails with [`WordbankError::VerificationFailed`] when a bank is left broken.
pub fn run(paths: &Paths, opts: VerifyOptions) -> Result<()> {
    let store = WordbankStore::new(&paths.wordbanks_dir);
    let mut failed = 0;

    for len in store.lengths()? {
        let path = store.path_for(len);
        let bank = match store.load(len) {
            Ok(Some(bank)) => bank,
            Ok(None) => continue,
            Err(WordbankError::Json { source, .. }) => {
                warn!("{}: unrecognized wordbank format: {}", path.display(), source);
                failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let issues = inspect(len, &bank);
        for word in &issues.wrong_length {
            warn!("{}: '{}' (length: {})", path.display(), word, word_len(word));
        }
        for word in &issues.duplicates {
            warn!("{}: '{}' appears more than once", path.display(), word);
        }
        for word in &issues.used_and_unused {
            warn!("{}: '{}' is both used and unused", path.display(), word);
        }

        if !opts.fix {
            if !issues.is_clean() {
                failed += 1;
            }
            continue;
        }

        let mut fixed = repair(len, &bank);
        if let Some(seed) = opts.shuffle_seed {
            shuffle_seeded(&mut fixed.unused_words, seed);
        }
        if fixed != bank {
            store.save(len, &fixed)?;
            info!("{}: removed {} invalid entries", path.display(), bank.len() - fixed.len());
        }
    }

    if failed > 0 {
        return Err(WordbankError::VerificationFailed { banks: failed });
    }
    info!("All wordbanks in {} verified", store.dir().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wordbank;
    use std::fs;

    fn bank(unused: &[&str], used: &[&str]) -> Wordbank {
        Wordbank {
            unused_words: unused.iter().map(|s| s.to_string()).collect(),
            used_words: used.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_clean_banks_pass() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_data_dir(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        store.save(4, &bank(&["tree", "lamp"], &["kiwi"])).unwrap();

        run(&paths, VerifyOptions::default()).unwrap();
    }

    #[test]
    fn test_broken_bank_fails_without_fix() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_data_dir(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        let broken = bank(&["tree", "quick", "tree"], &[]);
        store.save(4, &broken).unwrap();

        let err = run(&paths, VerifyOptions::default()).unwrap_err();
        assert!(matches!(err, WordbankError::VerificationFailed { banks: 1 }));
        assert_eq!(store.load(4).unwrap().unwrap(), broken);
    }

    #[test]
    fn test_fix_rewrites_bank() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_data_dir(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        store.save(4, &bank(&["tree", "quick", "tree", "kiwi"], &["kiwi"])).unwrap();

        let opts = VerifyOptions {
            fix: true,
            shuffle_seed: None,
        };
        run(&paths, opts).unwrap();
        assert_eq!(store.load(4).unwrap().unwrap(), bank(&["tree"], &["kiwi"]));
    }

    #[test]
    fn test_fix_with_seed_is_reproducible() {
        let words: Vec<String> = ["able", "bake", "cake", "dare", "earn", "fare", "gate", "hare"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let original = Wordbank::with_unused(words);
        let opts = VerifyOptions {
            fix: true,
            shuffle_seed: Some(42),
        };

        let mut results = Vec::new();
        for _ in 0..2 {
            let dir = tempfile::tempdir().unwrap();
            let paths = Paths::from_data_dir(dir.path());
            let store = WordbankStore::new(&paths.wordbanks_dir);
            store.save(4, &original).unwrap();
            run(&paths, opts).unwrap();
            results.push(store.load(4).unwrap().unwrap());
        }

        assert_eq!(results[0], results[1]);
        let mut sorted = results[0].unused_words.clone();
        sorted.sort();
        assert_eq!(sorted, original.unused_words);
    }

    #[test]
    fn test_legacy_format_is_reported_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_data_dir(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        fs::create_dir_all(store.dir()).unwrap();
        let legacy = "{\n  \"words\": [\"apple\"]\n}";
        fs::write(store.path_for(5), legacy).unwrap();

        let opts = VerifyOptions {
            fix: true,
            shuffle_seed: None,
        };
        let err = run(&paths, opts).unwrap_err();
        assert!(matches!(err, WordbankError::VerificationFailed { banks: 1 }));
        assert_eq!(fs::read_to_string(store.path_for(5)).unwrap(), legacy);
    }
}
