use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./data";

/// Rejection log file prefix for the `generate` stage.
pub const GENERATE_LOG_PREFIX: &str = "filtered_";
/// Rejection log file prefix for the `merge` stage.
pub const MERGE_LOG_PREFIX: &str = "merge_filtered_";

/// Fixed input/output locations, all relative to one data root.
#[derive(Debug, Clone)]
pub struct Paths {
    pub english_words_dir: PathBuf,
    pub wordbanks_dir: PathBuf,
    pub original_wordbanks_dir: PathBuf,
    pub corpus: PathBuf,
    pub lexicon: PathBuf,
    pub lexicon_insertions: PathBuf,
    pub lexicon_deletions: PathBuf,
    pub tagger_model: PathBuf,
    pub filtered_words: PathBuf,
}

impl Paths {
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let english_words_dir = data_dir.join("english_words");

        Paths {
            corpus: english_words_dir.join("google-10000-english-no-swears.txt"),
            lexicon: english_words_dir.join("sowpods.txt"),
            lexicon_insertions: english_words_dir.join("insertions.txt"),
            lexicon_deletions: english_words_dir.join("deletions.txt"),
            tagger_model: english_words_dir.join("pos_tags.tsv"),
            filtered_words: english_words_dir.join("google-10000-english-no-swears-filtered.txt"),
            wordbanks_dir: data_dir.join("wordbanks"),
            original_wordbanks_dir: data_dir.join("wordbanks_original"),
            english_words_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_data_dir() {
        let paths = Paths::from_data_dir("/srv/game");
        assert_eq!(paths.lexicon, PathBuf::from("/srv/game/english_words/sowpods.txt"));
        assert_eq!(paths.wordbanks_dir, PathBuf::from("/srv/game/wordbanks"));
        assert_eq!(
            paths.original_wordbanks_dir,
            PathBuf::from("/srv/game/wordbanks_original")
        );
        assert_eq!(
            paths.tagger_model,
            PathBuf::from("/srv/game/english_words/pos_tags.tsv")
        );
    }
}
