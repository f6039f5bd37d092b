// src/config/consts.rs

// Net config
pub const DOMAIN: &str = "http://cetaf.org";
pub const INDEX_PAGE: &str = "http://cetaf.org/services/institutional-profiles";
pub const USER_AGENT: &str = concat!("cetaf_scrape/", env!("CARGO_PKG_VERSION"));

// Local cache
pub const CACHE_DIR: &str = ".cetaf_cache";
pub const CACHE_EXT: &str = "html";
pub const LOG_FILE: &str = "scrape.log";

// Page structure
pub const LISTING_SECTION_ID: &str = "block-views-passports-per-countries-block";
pub const INSTITUTION_LABEL: &str = "Institution";
pub const ORIGINAL_NAME_LABEL: &str = "Institution (Original name)";
pub const LABEL_SEP: &str = " - ";

// Export
pub const DEFAULT_OUT_FILE: &str = "cetaf-institutions.csv";
pub const DEFAULT_DELIMITER: u8 = b',';
