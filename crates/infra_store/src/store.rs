//! JSON document store
//!
//! File discipline: load opens, reads fully, and closes; save writes the
//! whole document to a temp file in the target directory and renames it
//! over the old one, so a failed save leaves the previous document intact.
//!
//! Load is deliberately forgiving: a missing file, unparseable JSON, or a
//! document without the expected top-level keys yields the empty default,
//! logged as a warning (corrupt store -> start fresh). Save-side errors,
//! by contrast, always surface.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use domain_directory::Directory;
use domain_ledger::Ledger;

use crate::documents::{DirectoryDocument, LedgerDocument};
use crate::error::StoreError;

fn load_document<D>(path: &Path) -> D
where
    D: DeserializeOwned + Default,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no store document yet, starting empty");
            return D::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "store unreadable, starting empty");
            return D::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "store document malformed, starting empty"
            );
            D::default()
        }
    }
}

fn save_document<D>(path: &Path, document: &D) -> Result<(), StoreError>
where
    D: Serialize,
{
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };

    let json = serde_json::to_string_pretty(document)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

    info!(path = %path.display(), bytes = json.len(), "store document written");
    Ok(())
}

/// Loads the ledger store, degrading to an empty ledger on any read or
/// parse failure
pub fn load_ledger(path: &Path) -> Ledger {
    load_document::<LedgerDocument>(path).into()
}

/// Atomically rewrites the ledger store
pub fn save_ledger(path: &Path, ledger: &Ledger) -> Result<(), StoreError> {
    save_document(path, &LedgerDocument::from(ledger))
}

/// Loads the directory store, degrading to an empty directory on any read
/// or parse failure
pub fn load_directory(path: &Path) -> Directory {
    load_document::<DirectoryDocument>(path).into()
}

/// Atomically rewrites the directory store
pub fn save_directory(path: &Path, directory: &Directory) -> Result<(), StoreError> {
    save_document(path, &DirectoryDocument::from(directory))
}
