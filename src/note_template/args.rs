use clap::builder::BoolishValueParser;
use clap::Parser;
use note_template::config::ConfigLayer;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "note-template", version)]
#[command(
    about = "Create a note from a template and open it in your editor",
    long_about = None
)]
pub struct Cli {
    /// Template names, with or without extension
    #[arg(required = true, num_args = 1..)]
    pub templates: Vec<String>,

    /// Config file (default: $NOTE_TEMPLATE_CONFIG_FILE, then <config dir>/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Data directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config directory
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Cache directory
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// State directory
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Log directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Templates directory
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Notes directory
    #[arg(long, value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Text editor
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Show additional information
    #[arg(short, long, overrides_with = "no_verbose")]
    pub verbose: bool,

    #[arg(long, hide = true, overrides_with = "verbose")]
    pub no_verbose: bool,

    /// Show debug information, including the resolved configuration
    #[arg(short, long, overrides_with = "no_debug")]
    pub debug: bool,

    #[arg(long, hide = true, overrides_with = "debug")]
    pub no_debug: bool,

    /// Create the templates and notes directories when missing
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub create_default_directories: Option<bool>,

    /// Delete the note again when it was not modified
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub dont_save_note_if_no_changes: Option<bool>,
}

/// `--flag` / `--no-flag` pairs; neither given means no override.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    /// The flags as the highest-precedence configuration layer.
    pub fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            data_dir: self.data_dir.clone(),
            config_dir: self.config_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            state_dir: self.state_dir.clone(),
            log_dir: self.log_dir.clone(),
            templates_dir: self.templates_dir.clone(),
            notes_dir: self.notes_dir.clone(),
            editor: self.editor.clone(),
            verbose: toggle(self.verbose, self.no_verbose),
            debug: toggle(self.debug, self.no_debug),
            create_default_directories: self.create_default_directories,
            dont_save_note_if_no_changes: self.dont_save_note_if_no_changes,
        }
    }
}
