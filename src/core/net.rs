// src/core/net.rs
// Blocking HTTP GET with a cache in front. One request at a time.

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::core::cache::Cache;
use crate::error::ScrapeError;

/// Where page bodies come from when the cache misses.
pub trait Transport {
    /// GET `url` and return the body. Non-2xx is an error.
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ScrapeError::Client { source })?;
        Ok(Self { inner })
    }
}

impl Transport for HttpClient {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let transport = |source| ScrapeError::Transport { url: s!(url), source };

        let resp = self.inner.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}

/// Transport + cache. Everything that needs a page goes through here.
pub struct Fetcher {
    transport: Box<dyn Transport>,
    cache: Box<dyn Cache>,
}

impl Fetcher {
    pub fn new(transport: Box<dyn Transport>, cache: Box<dyn Cache>) -> Self {
        Self { transport, cache }
    }

    /// Body of `url`, from the cache when present.
    /// Only successful responses are cached; a failed cache write is logged and ignored.
    pub fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        if let Some(body) = self.cache.load(url) {
            logd!("cache hit {url}");
            return Ok(body);
        }

        logd!("GET {url}");
        let body = self.transport.get(url)?;
        if let Err(e) = self.cache.store(url, &body) {
            loge!("cache write for {url} failed: {e}");
        }
        Ok(body)
    }

    pub fn get_document(&self, url: &str) -> Result<Html, ScrapeError> {
        let body = self.get_text(url)?;
        Ok(Html::parse_document(&body))
    }
}

/// Resolve a listing href against the site root.
/// Relative paths are appended to `base`; absolute URLs pass through.
pub fn resolve(base: &str, href: &str) -> Result<String, ScrapeError> {
    let base = Url::parse(base)
        .map_err(|source| ScrapeError::Url { input: s!(base), source })?;
    let full = base
        .join(href)
        .map_err(|source| ScrapeError::Url { input: s!(href), source })?;
    Ok(full.into())
}
