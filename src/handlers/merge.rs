use log::info;

use crate::config::{Paths, MERGE_LOG_PREFIX};
use crate::error::Result;
use crate::models::RejectReason;
use crate::services::filter::AdmissionFilter;
use crate::services::lexicon::Lexicon;
use crate::services::merger::plan_merge;
use crate::services::rejection_log::RejectionLog;
use crate::services::store::{read_snapshot_words, WordbankStore};
use crate::services::tagger::RuleTagger;

/// Fold the unused words of the snapshot banks back into the live banks.
pub fn run(paths: &Paths) -> Result<()> {
    let lexicon = Lexicon::load_with_overlays(
        &paths.lexicon,
        &paths.lexicon_insertions,
        &paths.lexicon_deletions,
    )?;
    let tagger = RuleTagger::load(&paths.tagger_model)?;
    let candidates = read_snapshot_words(&paths.original_wordbanks_dir)?;

    let filter = AdmissionFilter::new(&lexicon, &tagger);
    let store = WordbankStore::new(&paths.wordbanks_dir);
    let plan = plan_merge(&store, &filter, &candidates)?;

    let mut rejections =
        RejectionLog::create(&paths.english_words_dir, MERGE_LOG_PREFIX, &RejectReason::ALL)?;
    rejections.record_all(&plan.report.rejected)?;
    rejections.finish()?;

    let report = plan.apply(&store)?;

    for (len, count) in &report.skipped {
        info!("No {}-letter bank on disk; dropped {} admitted words", len, count);
    }
    info!(
        "Merged {} new words into {} banks, filtered and deduplicated.",
        report.added.values().sum::<usize>(),
        report.added.len()
    );
    Ok(())
}
