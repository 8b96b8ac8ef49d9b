//! # Notes
//!
//! Each template gets its own directory under `notes_dir`, and every invocation adds one
//! file to it named after the local time the note was created:
//!
//! ```text
//! <notes_dir>/daily/2026-10-15T09:12:44.318201
//! ```
//!
//! Two notes created within the same clock tick would get the same name. Notes are created
//! with create-new semantics and a `-1`, `-2`, ... suffix is added until the name is free,
//! so an existing note is never overwritten.

use crate::config::{ensure_dir, Configuration};
use crate::error::{NoteTemplateError, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// The file name used for a note created at `at`.
pub fn timestamp_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Directory holding the notes of one template.
pub fn note_dir(notes_dir: &Path, template_name: &str) -> PathBuf {
    notes_dir.join(template_name)
}

/// Copies the template into a new note and returns the note's path.
///
/// Any I/O failure is a [`NoteTemplateError::Copy`]; a note that was created but could not
/// be filled is removed again.
pub fn materialize(
    config: &Configuration,
    template_path: &Path,
    template_name: &str,
) -> Result<PathBuf> {
    materialize_at(config, template_path, template_name, &Local::now())
}

pub fn materialize_at<Tz: TimeZone>(
    config: &Configuration,
    template_path: &Path,
    template_name: &str,
    at: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    let dir = note_dir(&config.notes_dir, template_name);
    ensure_dir(&dir, true)?;

    let copy_err = |note: &Path, source| NoteTemplateError::Copy {
        template: template_path.to_path_buf(),
        note: note.to_path_buf(),
        source,
    };

    let base = timestamp_name(at);
    let mut template =
        File::open(template_path).map_err(|e| copy_err(dir.join(&base).as_path(), e))?;
    let (note_path, mut note) =
        create_unique(&dir, &base).map_err(|(path, e)| copy_err(path.as_path(), e))?;

    if let Err(e) = io::copy(&mut template, &mut note) {
        drop(note);
        if let Err(remove_err) = fs::remove_file(&note_path) {
            warn!(
                note = %note_path.display(),
                error = %remove_err,
                "could not remove partial note"
            );
        }
        return Err(copy_err(note_path.as_path(), e));
    }

    debug!(
        template = %template_path.display(),
        note = %note_path.display(),
        "materialized note"
    );
    Ok(note_path)
}

/// Creates `dir/base`, or `dir/base-N` for the smallest free `N`. On failure returns the
/// path that could not be created.
fn create_unique(
    dir: &Path,
    base: &str,
) -> std::result::Result<(PathBuf, File), (PathBuf, io::Error)> {
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            base.to_string()
        } else {
            format!("{}-{}", base, attempt)
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(note = %path.display(), "note name taken, trying next suffix");
                attempt += 1;
            }
            Err(e) => return Err((path, e)),
        }
    }
}
