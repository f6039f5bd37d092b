// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be set up (TLS backend, proxy config).
    #[error("cannot build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// An element the page layout depends on is missing.
    #[error("{page}: {what} not found")]
    Structure { page: String, what: String },

    #[error("cannot resolve {input:?}: {source}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub fn structure(page: impl Into<String>, what: impl Into<String>) -> Self {
        Self::Structure { page: page.into(), what: what.into() }
    }

    /// Network-level failures. These always end the run.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Client { .. } | Self::Transport { .. } | Self::Status { .. })
    }

    pub fn is_structure(&self) -> bool {
        matches!(self, Self::Structure { .. })
    }
}
