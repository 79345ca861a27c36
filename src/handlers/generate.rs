use log::info;

use crate::config::{Paths, GENERATE_LOG_PREFIX};
use crate::error::{Result, WordbankError};
use crate::models::RejectReason;
use crate::services::filter::AdmissionFilter;
use crate::services::lexicon::Lexicon;
use crate::services::partitioner::{carry_over_used, partition};
use crate::services::rejection_log::RejectionLog;
use crate::services::store::WordbankStore;
use crate::services::tagger::RuleTagger;
use crate::utils::{read_lines, write_lines};

/// Build one bank per word length from the frequency-ranked corpus.
pub fn run(paths: &Paths) -> Result<()> {
    let lexicon = Lexicon::load_with_overlays(
        &paths.lexicon,
        &paths.lexicon_insertions,
        &paths.lexicon_deletions,
    )?;
    let tagger = RuleTagger::load(&paths.tagger_model)?;
    let words = read_lines(&paths.corpus)
        .map_err(|e| WordbankError::on_open("candidate word list", &paths.corpus, e))?;
    info!("Read {} candidate words from {}", words.len(), paths.corpus.display());

    let filter = AdmissionFilter::new(&lexicon, &tagger);
    let out = partition(&filter, words.iter().map(String::as_str));
    let lengths = out.lengths();

    // Read every bank this run replaces before writing anything.
    let store = WordbankStore::new(&paths.wordbanks_dir);
    let mut banks = Vec::with_capacity(out.banks.len());
    for (len, fresh) in out.banks {
        banks.push((len, carry_over_used(fresh, store.load(len)?)));
    }

    let mut rejections =
        RejectionLog::create(&paths.english_words_dir, GENERATE_LOG_PREFIX, &RejectReason::ALL)?;
    rejections.record_all(&out.rejected)?;
    rejections.finish()?;

    write_lines(&paths.filtered_words, &out.admitted)
        .map_err(|e| WordbankError::io(&paths.filtered_words, e))?;

    for (len, bank) in &banks {
        let path = store.save(*len, bank)?;
        info!(
            "Wrote {} ({} unused, {} used)",
            path.display(),
            bank.unused_words.len(),
            bank.used_words.len()
        );
    }

    info!("Generated wordbanks for lengths: {:?}", lengths);
    info!("Total filtered words: {}", out.admitted.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wordbank;
    use std::fs;
    use std::path::Path;

    fn seed_inputs(data_dir: &Path) -> Paths {
        let paths = Paths::from_data_dir(data_dir);
        fs::create_dir_all(&paths.english_words_dir).unwrap();
        fs::write(&paths.corpus, "tree\ncats\nxq\nzzzzz\nquick\nruns\nabcd\n").unwrap();
        fs::write(&paths.lexicon, "TREE\nZZZZZ\nQUICK\nCATS\nRUNS\n").unwrap();
        fs::write(&paths.tagger_model, "# word\ttag\n").unwrap();
        paths
    }

    #[test]
    fn test_generate_writes_banks_and_logs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_inputs(dir.path());

        run(&paths).unwrap();

        let store = WordbankStore::new(&paths.wordbanks_dir);
        assert_eq!(store.lengths().unwrap(), vec![4, 5]);
        assert_eq!(store.load(4).unwrap().unwrap(), Wordbank::with_unused(vec!["tree".into()]));
        assert_eq!(store.load(5).unwrap().unwrap().unused_words, vec!["zzzzz", "quick"]);

        let log = |name: &str| fs::read_to_string(paths.english_words_dir.join(name)).unwrap();
        assert_eq!(log("filtered_too_short.txt"), "xq\n");
        assert_eq!(log("filtered_plurals.txt"), "cats\nruns\n");
        assert_eq!(log("filtered_not_scrabble.txt"), "abcd\n");
        assert_eq!(fs::read_to_string(&paths.filtered_words).unwrap(), "tree\nzzzzz\nquick\n");
    }

    #[test]
    fn test_regeneration_keeps_used_words() {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_inputs(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        store
            .save(
                5,
                &Wordbank {
                    unused_words: vec!["stale".into()],
                    used_words: vec!["quick".into()],
                },
            )
            .unwrap();

        run(&paths).unwrap();

        let bank = store.load(5).unwrap().unwrap();
        assert_eq!(bank.unused_words, vec!["zzzzz"]);
        assert_eq!(bank.used_words, vec!["quick"]);
    }

    #[test]
    fn test_unreadable_bank_aborts_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_inputs(dir.path());
        let store = WordbankStore::new(&paths.wordbanks_dir);
        let four = Wordbank {
            unused_words: vec!["lamp".into()],
            used_words: vec!["kiwi".into()],
        };
        store.save(4, &four).unwrap();
        fs::write(store.path_for(5), "{\"words\": [\"apple\"]}").unwrap();

        let err = run(&paths).unwrap_err();
        assert!(matches!(err, WordbankError::Json { .. }));
        assert_eq!(store.load(4).unwrap().unwrap(), four);
        assert!(!paths.filtered_words.exists());
        assert!(!paths.english_words_dir.join("filtered_plurals.txt").exists());
    }

    #[test]
    fn test_missing_tagging_model_aborts_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_inputs(dir.path());
        fs::remove_file(&paths.tagger_model).unwrap();

        let err = run(&paths).unwrap_err();
        assert!(matches!(err, WordbankError::MissingResource { what: "tagging model", .. }));
        assert!(!paths.wordbanks_dir.exists());
        assert!(!paths.filtered_words.exists());
    }

    #[test]
    fn test_missing_corpus_is_setup_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed_inputs(dir.path());
        fs::remove_file(&paths.corpus).unwrap();

        assert!(matches!(
            run(&paths).unwrap_err(),
            WordbankError::MissingResource { what: "candidate word list", .. }
        ));
    }
}
