use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, WordbankError};
use crate::models::RejectReason;

/// Per-reason inspection files, one rejected word per line.
///
/// Files are truncated on creation. Handles close when the log is dropped;
/// call [`RejectionLog::finish`] to flush and surface write errors.
pub struct RejectionLog {
    files: BTreeMap<RejectReason, (PathBuf, BufWriter<File>)>,
    counts: BTreeMap<RejectReason, usize>,
}

impl RejectionLog {
    /// Open `<dir>/<prefix><stem>.txt` for each reason.
    pub fn create(dir: &Path, prefix: &str, reasons: &[RejectReason]) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| WordbankError::io(dir, e))?;

        let mut files = BTreeMap::new();
        for &reason in reasons {
            let path = dir.join(format!("{}{}.txt", prefix, reason.log_stem()));
            let file = File::create(&path).map_err(|e| WordbankError::io(&path, e))?;
            files.insert(reason, (path, BufWriter::new(file)));
        }

        Ok(RejectionLog {
            files,
            counts: BTreeMap::new(),
        })
    }

    /// Reasons without an open file are counted but not written.
    pub fn record(&mut self, word: &str, reason: RejectReason) -> Result<()> {
        *self.counts.entry(reason).or_insert(0) += 1;
        if let Some((path, out)) = self.files.get_mut(&reason) {
            writeln!(out, "{}", word).map_err(|e| WordbankError::io(path, e))?;
        }
        Ok(())
    }

    pub fn record_all<'w, I>(&mut self, rejected: I) -> Result<()>
    where
        I: IntoIterator<Item = &'w (String, RejectReason)>,
    {
        for (word, reason) in rejected {
            self.record(word, *reason)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<BTreeMap<RejectReason, usize>> {
        for (path, out) in self.files.values_mut() {
            out.flush().map_err(|e| WordbankError::io(path, e))?;
        }
        for (reason, count) in &self.counts {
            info!("Rejected {} words as {}", count, reason);
        }
        Ok(self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_file_per_reason() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RejectionLog::create(dir.path(), "filtered_", &RejectReason::ALL).unwrap();
        log.record("xq", RejectReason::TooShort).unwrap();
        log.record("cats", RejectReason::PluralForm).unwrap();
        log.record("dogs", RejectReason::PluralForm).unwrap();
        let counts = log.finish().unwrap();

        assert_eq!(counts.get(&RejectReason::PluralForm), Some(&2));
        assert_eq!(counts.get(&RejectReason::NotInLexicon), None);
        assert_eq!(
            fs::read_to_string(dir.path().join("filtered_plurals.txt")).unwrap(),
            "cats\ndogs\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("filtered_too_short.txt")).unwrap(),
            "xq\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("filtered_not_scrabble.txt")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_create_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge_filtered_plurals.txt");
        fs::write(&path, "stale\n").unwrap();

        let log = RejectionLog::create(dir.path(), "merge_filtered_", &RejectReason::ALL).unwrap();
        drop(log);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_unlogged_reason_is_only_counted() {
        let dir = tempfile::tempdir().unwrap();
        let mut log =
            RejectionLog::create(dir.path(), "merge_filtered_", &[RejectReason::PluralForm]).unwrap();
        log.record("ox", RejectReason::TooShort).unwrap();
        let counts = log.finish().unwrap();

        assert_eq!(counts.get(&RejectReason::TooShort), Some(&1));
        assert!(!dir.path().join("merge_filtered_too_short.txt").exists());
    }
}
