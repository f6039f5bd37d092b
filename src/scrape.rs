// src/scrape.rs
use crate::{
    config::options::{FailurePolicy, ScrapeOptions},
    core::net::{Fetcher, resolve},
    error::ScrapeError,
    progress::Progress,
    record::Record,
    specs::{listing, profile},
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// In processing order.
    pub records: Vec<Record>,
    /// Institutions left out under `FailurePolicy::SkipInstitution`.
    pub failed: Vec<(String, ScrapeError)>,
    /// Total label-less fields dropped across all pages.
    pub skipped_fields: usize,
}

/// Walk the index page and extract one record per institution, strictly in sequence.
///
/// Fetch errors always abort. Structure errors on a profile page abort or skip that
/// institution depending on `scrape.on_structure_error`. Either way the failing
/// institution is reported to `progress` first.
pub fn collect_records(
    fetcher: &Fetcher,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let listing = listing::list_institutions(fetcher, &scrape.index_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.limit);
    }

    let mut summary = RunSummary::default();

    for (i, entry) in listing.institutions().enumerate() {
        if scrape.limit == Some(i) {
            logf!("limit of {i} reached");
            break;
        }
        let institution = entry?;

        if let Some(p) = progress.as_deref_mut() {
            p.item_started(i, &institution.name);
        }
        logf!("[{i}] {} ({})", institution.name, institution.href);

        match scrape_one(fetcher, scrape, &institution) {
            Ok(extraction) => {
                for skipped in &extraction.skipped {
                    logw!("no label for {} - {}", skipped.institution, skipped.excerpt);
                    if let Some(p) = progress.as_deref_mut() {
                        p.field_skipped(skipped);
                    }
                }
                summary.skipped_fields += extraction.skipped.len();
                summary.records.push(extraction.record);
            }
            Err(e) => {
                loge!("{}: {e}", institution.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&institution.name, &e);
                }
                let skip = e.is_structure()
                    && scrape.on_structure_error == FailurePolicy::SkipInstitution;
                if !skip {
                    return Err(e);
                }
                summary.failed.push((institution.name, e));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(summary.records.len());
    }
    Ok(summary)
}

fn scrape_one(
    fetcher: &Fetcher,
    scrape: &ScrapeOptions,
    institution: &listing::InstitutionRef,
) -> Result<profile::Extraction, ScrapeError> {
    let url = resolve(&scrape.base_url, &institution.href)?;
    let doc = fetcher.get_document(&url)?;
    profile::extract_record(&doc, &institution.name)
}
