//! Creates one note per template name and walks each through its lifecycle:
//!
//! ```text
//! Located -> Materialized -> Editing -> Kept | Discarded
//! ```
//!
//! Templates are handled one after the other, in argument order. The first failure stops
//! the run; notes finished before it are left as they are.

use crate::commands::{CmdMessage, CmdResult, NoteOutcome};
use crate::config::Configuration;
use crate::editor::{edit_note, Editor};
use crate::error::{NoteTemplateError, Result};
use crate::note::materialize;
use crate::retention::{decide, Retention};
use crate::template::locate;
use std::fs;
use tracing::{info_span, warn};

pub fn run<E, I>(config: &Configuration, editor: &E, names: &[I]) -> Result<CmdResult>
where
    E: Editor + ?Sized,
    I: AsRef<str>,
{
    let mut result = CmdResult::default();
    for name in names {
        let outcome = run_one(config, editor, name.as_ref())?;
        result.add_message(outcome_message(&outcome));
        result.add_note(outcome);
    }
    Ok(result)
}

pub fn run_one<E>(config: &Configuration, editor: &E, name: &str) -> Result<NoteOutcome>
where
    E: Editor + ?Sized,
{
    let _span = info_span!("template", name).entered();

    let template_path = locate(&config.templates_dir, name)?;
    let note_path = materialize(config, &template_path, name)?;

    let before = match edit_note(editor, &note_path) {
        Ok(hash) => hash,
        Err(err @ NoteTemplateError::EditorLaunch { .. }) => {
            // The note is still an untouched copy of the template.
            if let Err(e) = fs::remove_file(&note_path) {
                warn!(note = %note_path.display(), error = %e, "could not remove note");
            }
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let retention = decide(config.dont_save_note_if_no_changes, &before, &note_path)?;

    Ok(NoteOutcome {
        template_name: name.to_string(),
        template_path,
        note_path,
        retention,
    })
}

fn outcome_message(outcome: &NoteOutcome) -> CmdMessage {
    match outcome.retention {
        Retention::Kept => CmdMessage::success(format!(
            "Saved {} note: {}",
            outcome.template_name,
            outcome.note_path.display()
        )),
        Retention::Discarded => CmdMessage::info(format!(
            "{} note not modified, removed {}",
            outcome.template_name,
            outcome.note_path.display()
        )),
    }
}
