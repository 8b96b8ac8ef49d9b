use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteTemplateError {
    #[error("Config file error in {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidSetting { key: String, value: String },

    #[error("Directory error for {}: {reason}", path.display())]
    Directory { path: PathBuf, reason: String },

    #[error("Template '{name}' not found: {}", path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("Failed to copy template {} to {}: {source}", template.display(), note.display())]
    Copy {
        template: PathBuf,
        note: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },

    #[error("Note error for {}: {source}", path.display())]
    Note {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl NoteTemplateError {
    pub(crate) fn directory(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        NoteTemplateError::Directory {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteTemplateError>;
