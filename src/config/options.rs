// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub cache: CacheOptions,
}

/// What to do when a profile page lacks the expected containers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run at the first broken page.
    #[default]
    Abort,
    /// Report the institution and carry on without its record.
    SkipInstitution,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Prefix for the relative profile links found on the index page.
    pub base_url: String,
    pub index_url: String,
    /// Stop after this many institutions. `None` = all of them.
    pub limit: Option<usize>,
    pub on_structure_error: FailurePolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DOMAIN),
            index_url: s!(INDEX_PAGE),
            limit: None,
            on_structure_error: FailurePolicy::Abort,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub delimiter: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { enabled: true, dir: PathBuf::from(CACHE_DIR) }
    }
}

impl CacheOptions {
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}
