// src/core/cache.rs
// Response bodies keyed by URL. No eviction, no TTL: delete the directory to refresh.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use sha2::{Digest, Sha256};

use crate::config::consts::CACHE_EXT;

pub trait Cache {
    fn load(&self, url: &str) -> Option<String>;
    fn store(&self, url: &str, body: &str) -> io::Result<()>;
}

/// One file per URL, named by the SHA-256 of the URL.
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.dir.join(format!("{}.{}", hex::encode(digest), CACHE_EXT))
    }
}

impl Cache for DiskCache {
    fn load(&self, url: &str) -> Option<String> {
        fs::read_to_string(self.path_for(url)).ok()
    }

    fn store(&self, url: &str, body: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        // Write aside then rename, so an interrupted run never leaves half a page behind.
        let path = self.path_for(url);
        let tmp = path.with_extension("part");
        fs::write(&tmp, body)?;
        fs::rename(tmp, path)
    }
}

#[derive(Default)]
pub struct MemoryCache {
    pages: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a page, e.g. from a saved fixture.
    pub fn with_page(self, url: &str, body: &str) -> Self {
        if let Ok(mut pages) = self.pages.lock() {
            pages.insert(s!(url), s!(body));
        }
        self
    }
}

impl Cache for MemoryCache {
    fn load(&self, url: &str) -> Option<String> {
        self.pages.lock().ok()?.get(url).cloned()
    }

    fn store(&self, url: &str, body: &str) -> io::Result<()> {
        if let Ok(mut pages) = self.pages.lock() {
            pages.insert(s!(url), s!(body));
        }
        Ok(())
    }
}

/// Always misses.
pub struct NoCache;

impl Cache for NoCache {
    fn load(&self, _url: &str) -> Option<String> {
        None
    }

    fn store(&self, _url: &str, _body: &str) -> io::Result<()> {
        Ok(())
    }
}
