// src/progress.rs
use crate::error::ScrapeError;
use crate::specs::profile::SkippedField;

/// Lightweight progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first institution, with the limit (if any).
    fn begin(&mut self, _limit: Option<usize>) {}

    /// An institution is about to be fetched and parsed.
    fn item_started(&mut self, _index: usize, _institution: &str) {}

    /// A field had no label and was left out of the record.
    fn field_skipped(&mut self, _skipped: &SkippedField) {}

    /// An institution could not be processed.
    fn item_failed(&mut self, _institution: &str, _err: &ScrapeError) {}

    /// Called at the end of a successful run.
    fn finish(&mut self, _records: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
