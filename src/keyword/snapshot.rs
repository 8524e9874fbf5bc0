//! Durable JSON snapshot of the keyword corpus.
//!
//! The snapshot stores the raw documents and their tokenizations so the
//! index can come back up without re-tokenizing. The BM25 statistics are not
//! persisted; they are rebuilt from the tokenizations on load.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XiphosError};

/// Serialized form of the keyword corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct IndexSnapshot {
    pub documents: Vec<String>,
    pub tokenized_docs: Vec<Vec<String>>,
}

/// Write the snapshot to `path`, replacing any existing file.
pub(crate) fn save(path: &Path, snapshot: &IndexSnapshot) -> Result<()> {
    let bytes = serde_json::to_vec(snapshot)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Load a snapshot from `path`.
///
/// Returns `Ok(None)` when no snapshot file exists. A snapshot whose
/// documents and tokenizations disagree in length is reported as corrupt.
pub(crate) fn load(path: &Path) -> Result<Option<IndexSnapshot>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let snapshot: IndexSnapshot = serde_json::from_slice(&bytes)?;
    if snapshot.documents.len() != snapshot.tokenized_docs.len() {
        return Err(XiphosError::storage(format!(
            "snapshot corrupt: {} documents but {} tokenizations",
            snapshot.documents.len(),
            snapshot.tokenized_docs.len()
        )));
    }

    Ok(Some(snapshot))
}

/// Delete the snapshot file if present.
pub(crate) fn delete(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
