//! Durable export of constructed polynomials, independent of evaluation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Receives each constructed polynomial for durable storage.
///
/// The pipeline treats the sink as an injectable collaborator; evaluation does
/// not depend on whether records are kept.
pub trait RecordSink {
    /// Persists one polynomial record. Failures propagate as fatal.
    fn record(&mut self, polynomial: &Polynomial) -> Result<()>;
}

/// Appends one tagged JSON record per polynomial to a file.
///
/// Each record is a single line of the form
/// `{"type":"Linear","a":2.0,"b":3.0}`. The file is opened in append mode for
/// the duration of each [`record`](RecordSink::record) call, so the handle
/// never outlives the operation.
pub struct JsonLinesExporter {
    path: PathBuf,
}

impl JsonLinesExporter {
    /// Opens an exporter at `path`, removing any record file left over from a
    /// previous run.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            debug!("removing stale record file {}", path.display());
            fs::remove_file(&path)
                .map_err(|source| PolyError::io("remove record file", &path, source))?;
        }
        Ok(Self { path })
    }

    /// Path the records are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for JsonLinesExporter {
    fn record(&mut self, polynomial: &Polynomial) -> Result<()> {
        let record = serde_json::to_string(polynomial)?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| PolyError::io("open record file", &self.path, source))?;
        writeln!(file, "{record}")
            .map_err(|source| PolyError::io("append record file", &self.path, source))
    }
}
