use crate::retention::Retention;
use std::path::PathBuf;

pub mod new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// What happened to one template argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutcome {
    pub template_name: String,
    pub template_path: PathBuf,
    pub note_path: PathBuf,
    pub retention: Retention,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub notes: Vec<NoteOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_note(&mut self, outcome: NoteOutcome) {
        self.notes.push(outcome);
    }

    pub fn kept(&self) -> impl Iterator<Item = &NoteOutcome> {
        self.notes
            .iter()
            .filter(|n| n.retention == Retention::Kept)
    }
}
