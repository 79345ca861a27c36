use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Result, WordbankError};
use crate::models::Wordbank;

const BANK_SUFFIX: &str = "_letter_words.json";

/// Directory of `<len>_letter_words.json` files.
#[derive(Debug, Clone)]
pub struct WordbankStore {
    dir: PathBuf,
}

/// Parse the word length out of a `<len>_letter_words.json` name.
pub fn bank_length(path: &Path) -> Option<usize> {
    let name = path.file_name()?.to_str()?;
    name.strip_suffix(BANK_SUFFIX)?.parse().ok()
}

fn read_bank(path: &Path) -> Result<Wordbank> {
    let content = fs::read_to_string(path).map_err(|e| WordbankError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| WordbankError::json(path, e))
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| WordbankError::on_open("wordbank directory", dir, e))? {
        let path = entry.map_err(|e| WordbankError::io(dir, e))?.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

impl WordbankStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        WordbankStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, len: usize) -> PathBuf {
        self.dir.join(format!("{}{}", len, BANK_SUFFIX))
    }

    /// `None` when no bank exists yet for this length.
    pub fn load(&self, len: usize) -> Result<Option<Wordbank>> {
        let path = self.path_for(len);
        if !path.exists() {
            return Ok(None);
        }
        read_bank(&path).map(Some)
    }

    /// Pretty-printed, two-space indent, `unused_words` before `used_words`.
    pub fn save(&self, len: usize, bank: &Wordbank) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| WordbankError::io(&self.dir, e))?;
        let path = self.path_for(len);
        let mut json = serde_json::to_string_pretty(bank).map_err(|e| WordbankError::json(&path, e))?;
        json.push('\n');
        fs::write(&path, json).map_err(|e| WordbankError::io(&path, e))?;
        Ok(path)
    }

    /// Lengths that have a bank on disk, ascending. A missing directory has none.
    pub fn lengths(&self) -> Result<Vec<usize>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut lengths = Vec::new();
        for path in json_files(&self.dir)? {
            match bank_length(&path) {
                Some(len) => lengths.push(len),
                None => warn!("Ignoring {}: not a wordbank file name", path.display()),
            }
        }
        lengths.sort_unstable();
        Ok(lengths)
    }

    pub fn load_all(&self) -> Result<BTreeMap<usize, Wordbank>> {
        let mut banks = BTreeMap::new();
        for len in self.lengths()? {
            banks.insert(len, read_bank(&self.path_for(len))?);
        }
        Ok(banks)
    }
}

/// Every `unused_words` entry across all JSON snapshots in `dir`, deduplicated.
pub fn read_snapshot_words(dir: &Path) -> Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    let files = json_files(dir)?;
    for path in &files {
        let bank = read_bank(path)?;
        words.extend(bank.unused_words);
    }
    info!(
        "Collected {} distinct snapshot words from {} files in {}",
        words.len(),
        files.len(),
        dir.display()
    );
    Ok(words)
}
