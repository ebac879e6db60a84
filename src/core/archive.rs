//! Archiver: one markdown file per broadcast, named for the UTC minute it
//! was written. A second broadcast in the same minute overwrites the first.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::schema::broadcast::BroadcastRecord;

pub const ARCHIVE_EXTENSION: &str = "md";

/// `YYYY-MM-DD-HHmm.md`
pub fn archive_file_name(at: DateTime<Utc>) -> String {
    format!("{}.{ARCHIVE_EXTENSION}", at.format("%Y-%m-%d-%H%M"))
}

/// A directory of archived broadcasts.
#[derive(Debug, Clone)]
pub struct Archive {
    dir: PathBuf,
}

impl Archive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `record` under the name for `at`, creating the directory if
    /// needed. Returns the path written.
    pub fn store(&self, record: &BroadcastRecord, at: DateTime<Utc>) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(archive_file_name(at));
        fs::write(&path, record.full_text())?;
        info!(path = %path.display(), bytes = record.header.len() + record.body.len(), "broadcast archived");
        Ok(path)
    }

    /// Write `record` under the current UTC minute.
    pub fn store_now(&self, record: &BroadcastRecord) -> std::io::Result<PathBuf> {
        self.store(record, Utc::now())
    }
}
