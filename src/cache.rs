//! Presence-check book cache backed by a CSV file.
//!
//! If the file exists it is loaded as-is: there is no freshness check and no
//! invalidation. Delete the file to force a re-fetch.

use std::path::{Path, PathBuf};

use crate::error::{CacheError, CacheResult};
use crate::model::BookRecord;

const HEADER: [&str; 3] = ["title", "authors", "description"];

pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every record. Empty cells and missing columns become empty strings.
    pub fn load(&self) -> CacheResult<Vec<BookRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.read_error(e))?;

        let records = reader
            .deserialize()
            .collect::<Result<Vec<BookRecord>, _>>()
            .map_err(|e| self.read_error(e))?;

        tracing::info!(path = %self.path.display(), records = records.len(), "loaded book cache");
        Ok(records)
    }

    /// Write `records`, replacing any existing file.
    ///
    /// Rows go to a temporary file next to the cache which is then renamed
    /// over it, so an interrupted write never leaves a truncated cache that
    /// the next run would trust.
    pub fn save(&self, records: &[BookRecord]) -> CacheResult<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(|e| CacheError::Write {
                    path: self.path.display().to_string(),
                    message: format!("create dir {}: {e}", parent.display()),
                })?;
                parent
            }
            None => Path::new("."),
        };

        let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| self.write_error(e))?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(staged.as_file_mut());
            writer.write_record(HEADER).map_err(|e| self.write_error(e))?;
            for record in records {
                writer.serialize(record).map_err(|e| self.write_error(e))?;
            }
            writer.flush().map_err(|e| self.write_error(e))?;
        }
        staged.as_file().sync_all().map_err(|e| self.write_error(e))?;
        staged.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        tracing::info!(path = %self.path.display(), records = records.len(), "wrote book cache");
        Ok(())
    }

    fn read_error(&self, e: impl std::fmt::Display) -> CacheError {
        CacheError::Read {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }

    fn write_error(&self, e: impl std::fmt::Display) -> CacheError {
        CacheError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}
