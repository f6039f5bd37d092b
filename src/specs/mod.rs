// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping rules for cetaf.org. Each module covers a single
//! page type and encodes *where the ground truth lives in the HTML* and *how to
//! pull it out*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched documents (`listing` for the
//!   institutional-profiles index, `profile` for one institution's passport page).
//! - **Selector choice** and the label-composition rules for nested / indented fields.
//! - **Light shaping** into `InstitutionRef`s and `record::Record`s.
//!
//! ## What does **not** live here
//! - **Fetching and caching** – `core::net::Fetcher` and `core::cache`.
//! - **Looping, limits, failure policy, console output** – `scrape::collect_records`.
//! - **Export formatting** – `csv` and `file`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_records → listing::list_institutions (Fetcher)
//!                              ↘ Fetcher::get_document → profile::extract_record
//!     → file::write_export → csv::write_records
//! ```
//!
//! ## Conventions & invariants
//! - A missing *container* (`section#…`, `div#zone_fields`, `div.tabcontent`) is a
//!   `ScrapeError::Structure`; callers decide whether that ends the run.
//! - A missing *label* only drops that one field and is reported back as a
//!   `profile::SkippedField`; specs never print.
//! - Output order is document order everywhere.
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML fixtures.
pub mod listing;
pub mod profile;
