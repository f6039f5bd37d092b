// src/cli.rs
use clap::Parser;

use crate::{
    config::options::AppOptions,
    core::{Cache, DiskCache, Fetcher, HttpClient, NoCache},
    error::ScrapeError,
    file,
    progress::Progress,
    scrape::{self, RunSummary},
    specs::profile::SkippedField,
};

/// Scrape the CETAF institutional profiles into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "cetaf_scrape", version, about)]
pub struct Args {
    /// Number of institutions to process (default: all).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.limit = self.limit;
        opts
    }
}

/// Console progress: one line per institution on stdout, warnings on stderr.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn item_started(&mut self, _index: usize, institution: &str) {
        println!("Parsing:  {institution}");
    }
    fn field_skipped(&mut self, skipped: &SkippedField) {
        eprintln!("No label for {} - {}", skipped.institution, skipped.excerpt);
    }
    fn item_failed(&mut self, institution: &str, err: &ScrapeError) {
        eprintln!("Failed on {institution}: {err}");
    }
}

pub fn run(args: Args) -> Result<RunSummary, ScrapeError> {
    let opts = args.into_options();
    crate::log::init(&opts.cache.log_path());
    logf!("run started: {:?}", opts);

    let cache: Box<dyn Cache> = if opts.cache.enabled {
        Box::new(DiskCache::new(&opts.cache.dir))
    } else {
        Box::new(NoCache)
    };
    let fetcher = Fetcher::new(Box::new(HttpClient::new()?), cache);

    let mut progress = ConsoleProgress;
    let summary = scrape::collect_records(&fetcher, &opts.scrape, Some(&mut progress))?;

    let path = file::write_export(&summary.records, &opts.export)?;
    println!("Wrote {} institutions to {}", summary.records.len(), path.display());
    Ok(summary)
}
