// src/core/mod.rs

pub mod cache;
pub mod html;
pub mod net;
pub mod sanitize;

pub use cache::{Cache, DiskCache, MemoryCache, NoCache};
pub use net::{Fetcher, HttpClient, Transport};
