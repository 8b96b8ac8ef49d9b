use crate::error::{NoteTemplateError, Result};
use crate::retention::{hash_file, ContentHash};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Something that lets the user edit a file in place and returns once they are done.
pub trait Editor {
    fn edit(&self, path: &Path) -> Result<()>;
}

impl<F> Editor for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn edit(&self, path: &Path) -> Result<()> {
        self(path)
    }
}

/// Runs the configured editor program with the file as its only argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for ExternalEditor {
    /// Blocks until the editor exits. The exit status is not inspected.
    fn edit(&self, path: &Path) -> Result<()> {
        debug!(editor = %self.command, file = %path.display(), "launching editor");
        let status = Command::new(&self.command)
            .arg(path)
            .status()
            .map_err(|source| NoteTemplateError::EditorLaunch {
                editor: self.command.clone(),
                source,
            })?;
        debug!(editor = %self.command, %status, "editor exited");
        Ok(())
    }
}

/// Hashes the note, then hands it to the editor. Returns the pre-edit hash.
pub fn edit_note<E: Editor + ?Sized>(editor: &E, note_path: &Path) -> Result<ContentHash> {
    let before = hash_file(note_path)?;
    editor.edit(note_path)?;
    Ok(before)
}
