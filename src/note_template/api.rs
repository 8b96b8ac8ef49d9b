//! # API Facade
//!
//! [`NoteTemplateApi`] is the single entry point a front end talks to. It owns the resolved
//! [`Configuration`] and an [`Editor`], and dispatches to the command layer.
//!
//! Constructing the API checks the templates and notes directories, so a missing directory
//! is reported before any template is touched.
//!
//! ## Generic Over Editor
//!
//! - Production: `NoteTemplateApi<ExternalEditor>`
//! - Testing: any `Fn(&Path) -> Result<()>`
//!
//! Like the commands it wraps, the API never prints and never exits.

use crate::commands::{self, CmdResult};
use crate::config::Configuration;
use crate::editor::{Editor, ExternalEditor};
use crate::error::Result;
use crate::template;
use std::path::PathBuf;

pub struct NoteTemplateApi<E: Editor> {
    config: Configuration,
    editor: E,
}

impl NoteTemplateApi<ExternalEditor> {
    /// Uses the editor named in the configuration.
    pub fn from_config(config: Configuration) -> Result<Self> {
        let editor = ExternalEditor::new(config.editor.clone());
        Self::new(config, editor)
    }
}

impl<E: Editor> NoteTemplateApi<E> {
    pub fn new(config: Configuration, editor: E) -> Result<Self> {
        config.ensure_directories()?;
        Ok(Self { config, editor })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Creates, edits and keeps or discards one note per template name.
    pub fn new_notes<I: AsRef<str>>(&self, names: &[I]) -> Result<CmdResult> {
        commands::new::run(&self.config, &self.editor, names)
    }

    pub fn locate_template(&self, name: &str) -> Result<PathBuf> {
        template::locate(&self.config.templates_dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteTemplateError;
    use crate::retention::Retention;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_in(root: &Path) -> Configuration {
        let mut config = Configuration::with_base_dirs(
            root.join("data"),
            root.join("config"),
            root.join("cache"),
            root.join("state"),
        );
        config.templates_dir = root.join("templates");
        config.notes_dir = root.join("notes");
        config
    }

    fn noop(_: &Path) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_new_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config = config_in(temp.path());
        let api = NoteTemplateApi::new(config.clone(), noop).unwrap();

        assert!(config.templates_dir.is_dir());
        assert!(config.notes_dir.is_dir());
        assert_eq!(api.config(), &config);
    }

    #[test]
    fn test_new_fails_when_templates_dir_missing_and_creation_disabled() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(temp.path());
        config.create_default_directories = false;

        match NoteTemplateApi::new(config.clone(), noop) {
            Err(NoteTemplateError::Directory { path, .. }) => {
                assert_eq!(path, config.templates_dir)
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a directory error"),
        }
        assert!(!config.notes_dir.exists());
    }

    #[test]
    fn test_locate_template() {
        let temp = TempDir::new().unwrap();
        let api = NoteTemplateApi::new(config_in(temp.path()), noop).unwrap();
        fs::write(api.config().templates_dir.join("daily.md"), "d").unwrap();

        assert_eq!(
            api.locate_template("daily").unwrap(),
            api.config().templates_dir.join("daily.md")
        );
    }

    #[test]
    fn test_new_notes_dispatches() {
        let temp = TempDir::new().unwrap();
        let api = NoteTemplateApi::new(config_in(temp.path()), noop).unwrap();
        fs::write(api.config().templates_dir.join("daily.md"), "d").unwrap();

        let result = api.new_notes(&["daily"]).unwrap();
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].retention, Retention::Discarded);
    }

    #[test]
    fn test_from_config_uses_configured_editor() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(temp.path());
        config.editor = "note-template-no-such-editor".into();
        let api = NoteTemplateApi::from_config(config).unwrap();
        fs::write(api.config().templates_dir.join("daily.md"), "d").unwrap();

        assert!(matches!(
            api.new_notes(&["daily"]),
            Err(NoteTemplateError::EditorLaunch { .. })
        ));
    }
}
