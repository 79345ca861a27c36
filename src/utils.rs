use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Word length as the game counts it: characters, not bytes.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Read a one-entry-per-line text file, trimming and skipping blank lines.
pub fn read_lines(file_path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if !entry.is_empty() {
            lines.push(entry.to_string());
        }
    }

    Ok(lines)
}

/// Write one entry per line, overwriting `file_path`.
pub fn write_lines<S: AsRef<str>>(file_path: &Path, lines: &[S]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(file_path)?);
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Deterministic shuffle for presentation order.
pub fn shuffle_seeded(words: &mut [String], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    words.shuffle(&mut rng);
}
