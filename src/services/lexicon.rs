use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::error::{Result, WordbankError};
use crate::utils::read_lines;

/// Set of legal game words, stored lowercase. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

/// Load words from a plain text file (one word per line), lowercased
fn load_words(file_path: &Path) -> std::io::Result<HashSet<String>> {
    Ok(read_lines(file_path)?
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect())
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Lexicon {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let words = load_words(path).map_err(|e| WordbankError::on_open("lexicon", path, e))?;
        info!("Loaded {} lexicon words from {}", words.len(), path.display());
        Ok(Lexicon { words })
    }

    /// Load the main lexicon, then apply the optional insertions and deletions overlays.
    pub fn load_with_overlays(path: &Path, insertions: &Path, deletions: &Path) -> Result<Self> {
        let mut lexicon = Lexicon::load(path)?;

        if insertions.exists() {
            let custom = load_words(insertions).map_err(|e| WordbankError::io(insertions, e))?;
            info!("Inserted {} words into lexicon.", custom.len());
            lexicon.words.extend(custom);
        }

        if deletions.exists() {
            let censored = load_words(deletions).map_err(|e| WordbankError::io(deletions, e))?;
            info!("Deleted {} words from lexicon.", censored.len());
            for word in censored {
                lexicon.words.remove(&word);
            }
        }

        info!("Total lexicon words: {}", lexicon.words.len());
        Ok(lexicon)
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
