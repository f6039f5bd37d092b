// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_records;
use crate::error::ScrapeError;
use crate::record::Record;

/// Write all records to `export.out_path` (created/truncated).
/// Returns the final path written to.
pub fn write_export(records: &[Record], export: &ExportOptions) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(&path)?);
    write_records(&mut out, records, export.delimiter)?;
    out.flush()?;
    logf!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
