//! # note-template
//!
//! Creates a note from a named template, opens it in the user's editor, and throws it away
//! again if nothing was changed.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, main.rs)                                     │
//! │  - Parses flags, prints outcomes, owns the exit code        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Holds the resolved Configuration and the Editor          │
//! │  - Checks the templates and notes directories up front      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/new.rs)                                 │
//! │  - One note per template name, strictly in order            │
//! │  - Located → Materialized → Editing → Kept | Discarded      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Steps                                                      │
//! │  template.rs · note.rs · editor.rs · retention.rs           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward writes to stdout/stderr or exits the process; diagnostics go
//! through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the binary
//! - [`commands`]: The per-template lifecycle and its result types
//! - [`config`]: Layered configuration (defaults, `EDITOR`, TOML file, environment, flags)
//! - [`template`]: Finding a template by file name or stem
//! - [`note`]: Copying a template into a timestamped note
//! - [`editor`]: Running the editor
//! - [`retention`]: Content hashing and the keep/discard decision
//! - [`logging`]: Subscriber set-up
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod note;
pub mod retention;
pub mod template;
