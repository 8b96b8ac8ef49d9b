//! # Retention
//!
//! A freshly created note is only worth keeping if the user changed it. Before the editor
//! runs we take a SHA-512 digest of the note; afterwards we take another. Matching digests
//! mean the content is byte-identical to the template, and with pruning enabled the note
//! is deleted.
//!
//! The comparison is content-only: saving the file without changing a byte is the same as
//! not touching it.

use crate::error::{NoteTemplateError, Result};
use sha2::{Digest, Sha512};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// SHA-512 digest of a file's content.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentHash(Vec<u8>);

impl ContentHash {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(Sha512::digest(bytes).to_vec())
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}

/// Streams the file through SHA-512.
pub fn hash_file(path: &Path) -> Result<ContentHash> {
    let note_err = |source| NoteTemplateError::Note {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(note_err)?;
    let mut hasher = Sha512::new();
    io::copy(&mut file, &mut hasher).map_err(note_err)?;
    Ok(ContentHash(hasher.finalize().to_vec()))
}

/// Terminal state of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    Kept,
    Discarded,
}

/// Keeps or deletes the note after editing. Only prunes when `prune` is set and the
/// content still hashes to `before`.
pub fn decide(prune: bool, before: &ContentHash, note_path: &Path) -> Result<Retention> {
    if !prune {
        return Ok(Retention::Kept);
    }

    let after = hash_file(note_path)?;
    if &after != before {
        debug!(note = %note_path.display(), "note modified, keeping");
        return Ok(Retention::Kept);
    }

    fs::remove_file(note_path).map_err(|source| NoteTemplateError::Note {
        path: note_path.to_path_buf(),
        source,
    })?;
    info!(note = %note_path.display(), "File not modified, removing.");
    Ok(Retention::Discarded)
}
