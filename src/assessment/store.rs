use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use super::record::ResultRow;

/// Append failure reported by a result store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open results store: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write results row: {0}")]
    Serialize(#[from] csv::Error),
    #[error("results store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for finalized assessment rows.
///
/// The core only ever appends; rows are never updated or deleted, and two
/// submissions for the same country and period simply coexist.
pub trait ResultStore: Send + Sync {
    fn append(&self, rows: &[ResultRow]) -> Result<(), StoreError>;
}

/// Append-only CSV file standing in for the shared results spreadsheet.
pub struct CsvResultStore {
    path: PathBuf,
}

impl CsvResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultStore for CsvResultStore {
    fn append(&self, rows: &[ResultRow]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
