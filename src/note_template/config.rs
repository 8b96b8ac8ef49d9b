//! # Configuration
//!
//! A [`Configuration`] is resolved once per invocation and never changes afterwards.
//! Each source produces a [`ConfigLayer`] (every option optional), and [`ConfigBuilder`]
//! stacks them on top of the platform defaults.
//!
//! ## Precedence
//!
//! Lowest to highest, later layers win:
//! 1. **Platform defaults**: [`platform_defaults`], from the `directories` crate.
//! 2. **`EDITOR`**: the generic editor convention (editor only).
//! 3. **Config file**: TOML at `NOTE_TEMPLATE_CONFIG_FILE`, or `<config_dir>/config.toml`.
//! 4. **Environment**: `NOTE_TEMPLATE_CONFIG_<OPTION>`, e.g. `NOTE_TEMPLATE_CONFIG_NOTES_DIR`.
//!    Variable names are matched ASCII case-insensitively.
//! 5. **Command-line flags**.
//!
//! Resolution runs before logging is set up, since the log level is itself a setting, so
//! it emits no events. `--debug` dumps the resolved result instead.
//!
//! ## Available Settings
//!
//! | Key | Default |
//! |-----|---------|
//! | `data_dir` | OS data directory |
//! | `config_dir` | OS config directory |
//! | `cache_dir` | OS cache directory |
//! | `state_dir` | OS state directory (local data directory where there is none) |
//! | `log_dir` | `<cache_dir>/log` |
//! | `templates_dir` | `<state_dir>/default_templates_dir` |
//! | `notes_dir` | `<state_dir>/default_notes_dir` |
//! | `editor` | `vim` |
//! | `verbose`, `debug` | `false` |
//! | `create_default_directories` | `true` |
//! | `dont_save_note_if_no_changes` | `true` |

use crate::error::{NoteTemplateError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_NAME: &str = "note-template";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_FILE_ENV: &str = "NOTE_TEMPLATE_CONFIG_FILE";
pub const ENV_PREFIX: &str = "NOTE_TEMPLATE_CONFIG_";
pub const EDITOR_ENV: &str = "EDITOR";

const DEFAULT_EDITOR: &str = "vim";
const FALLBACK_BASE_DIR: &str = ".note-template";

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub notes_dir: PathBuf,
    pub editor: String,
    pub verbose: bool,
    pub debug: bool,
    pub create_default_directories: bool,
    pub dont_save_note_if_no_changes: bool,
}

/// OS-convention defaults for every option.
///
/// Falls back to a relative `.note-template/` tree when no home directory is known.
pub fn platform_defaults() -> Configuration {
    match ProjectDirs::from("", "", APP_NAME) {
        Some(dirs) => {
            let state_dir = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
            Configuration::with_base_dirs(
                dirs.data_dir(),
                dirs.config_dir(),
                dirs.cache_dir(),
                state_dir,
            )
        }
        None => {
            let base = PathBuf::from(FALLBACK_BASE_DIR);
            Configuration::with_base_dirs(
                base.join("data"),
                base.join("config"),
                base.join("cache"),
                base.join("state"),
            )
        }
    }
}

impl Configuration {
    /// Builds the default configuration from the four base directories; the rest is derived.
    pub fn with_base_dirs(
        data_dir: impl Into<PathBuf>,
        config_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
        state_dir: impl Into<PathBuf>,
    ) -> Self {
        let cache_dir = cache_dir.into();
        let state_dir = state_dir.into();
        Self {
            data_dir: data_dir.into(),
            config_dir: config_dir.into(),
            log_dir: cache_dir.join("log"),
            templates_dir: state_dir.join("default_templates_dir"),
            notes_dir: state_dir.join("default_notes_dir"),
            cache_dir,
            state_dir,
            editor: DEFAULT_EDITOR.to_string(),
            verbose: false,
            debug: false,
            create_default_directories: true,
            dont_save_note_if_no_changes: true,
        }
    }

    /// Makes sure the templates and notes directories exist, creating them when allowed.
    pub fn ensure_directories(&self) -> Result<()> {
        ensure_dir(&self.templates_dir, self.create_default_directories)?;
        ensure_dir(&self.notes_dir, self.create_default_directories)
    }

    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(v) = layer.data_dir {
            self.data_dir = v;
        }
        if let Some(v) = layer.config_dir {
            self.config_dir = v;
        }
        if let Some(v) = layer.cache_dir {
            self.cache_dir = v;
        }
        if let Some(v) = layer.state_dir {
            self.state_dir = v;
        }
        if let Some(v) = layer.log_dir {
            self.log_dir = v;
        }
        if let Some(v) = layer.templates_dir {
            self.templates_dir = v;
        }
        if let Some(v) = layer.notes_dir {
            self.notes_dir = v;
        }
        if let Some(v) = layer.editor {
            self.editor = v;
        }
        if let Some(v) = layer.verbose {
            self.verbose = v;
        }
        if let Some(v) = layer.debug {
            self.debug = v;
        }
        if let Some(v) = layer.create_default_directories {
            self.create_default_directories = v;
        }
        if let Some(v) = layer.dont_save_note_if_no_changes {
            self.dont_save_note_if_no_changes = v;
        }
    }
}

/// Ensures `path` is a directory. Missing directories are created only when `create` is set.
pub fn ensure_dir(path: &Path, create: bool) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(NoteTemplateError::directory(
            path,
            "exists but is not a directory",
        ));
    }
    if !create {
        return Err(NoteTemplateError::directory(
            path,
            "does not exist and directory creation is disabled",
        ));
    }
    fs::create_dir_all(path).map_err(|e| NoteTemplateError::directory(path, e))?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// One source of settings. Unset fields fall through to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub data_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub state_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub notes_dir: Option<PathBuf>,
    pub editor: Option<String>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
    pub create_default_directories: Option<bool>,
    pub dont_save_note_if_no_changes: Option<bool>,
}

impl ConfigLayer {
    /// Parses a TOML document. Unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a config file. A missing file is an empty layer unless `required` is set.
    pub fn load_file(path: &Path, required: bool) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(NoteTemplateError::ConfigFile {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        Self::from_toml_str(&content).map_err(|e| NoteTemplateError::ConfigFile {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Reads `NOTE_TEMPLATE_CONFIG_<OPTION>` variables. Empty values and unknown names are skipped.
    pub fn from_env<K, V>(vars: &[(K, V)]) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layer = Self::default();
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            let Some(option) = strip_prefix_ignore_case(key, ENV_PREFIX) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let path = || Some(PathBuf::from(value));
            match option.to_ascii_lowercase().as_str() {
                "data_dir" => layer.data_dir = path(),
                "config_dir" => layer.config_dir = path(),
                "cache_dir" => layer.cache_dir = path(),
                "state_dir" => layer.state_dir = path(),
                "log_dir" => layer.log_dir = path(),
                "templates_dir" => layer.templates_dir = path(),
                "notes_dir" => layer.notes_dir = path(),
                "editor" => layer.editor = Some(value.to_string()),
                "verbose" => layer.verbose = Some(parse_bool(key, value)?),
                "debug" => layer.debug = Some(parse_bool(key, value)?),
                "create_default_directories" => {
                    layer.create_default_directories = Some(parse_bool(key, value)?)
                }
                "dont_save_note_if_no_changes" => {
                    layer.dont_save_note_if_no_changes = Some(parse_bool(key, value)?)
                }
                _ => {}
            }
        }
        Ok(layer)
    }

    /// The generic `EDITOR` convention, as a layer carrying only the editor.
    pub fn editor_convention<K, V>(vars: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let editor = vars
            .iter()
            .find(|(key, value)| key.as_ref() == EDITOR_ENV && !value.as_ref().is_empty())
            .map(|(_, value)| value.as_ref().to_string());
        Self {
            editor,
            ..Self::default()
        }
    }
}

fn strip_prefix_ignore_case<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &key[prefix.len()..])
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(NoteTemplateError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Stacks layers over a base configuration; each added layer outranks the previous ones.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base: Configuration,
    layers: Vec<ConfigLayer>,
}

impl ConfigBuilder {
    pub fn new(base: Configuration) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    pub fn layer(mut self, layer: ConfigLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn build(self) -> Configuration {
        let mut config = self.base;
        for layer in self.layers {
            config.apply(layer);
        }
        config
    }
}

/// Where the config file lives: `--config-file`, then `NOTE_TEMPLATE_CONFIG_FILE`,
/// then `<default config_dir>/config.toml`. Only the last one may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileLocation {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigFileLocation {
    pub fn resolve<K, V>(explicit: Option<PathBuf>, defaults: &Configuration, vars: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if let Some(path) = explicit {
            return Self {
                path,
                required: true,
            };
        }
        let from_env = vars
            .iter()
            .find(|(key, value)| {
                key.as_ref().eq_ignore_ascii_case(CONFIG_FILE_ENV) && !value.as_ref().is_empty()
            })
            .map(|(_, value)| PathBuf::from(value.as_ref()));
        match from_env {
            Some(path) => Self {
                path,
                required: true,
            },
            None => Self {
                path: defaults.config_dir.join(CONFIG_FILENAME),
                required: false,
            },
        }
    }
}

/// Snapshot of the process environment. Variables that are not valid UTF-8 are skipped.
pub fn env_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Resolves the configuration against the real process environment.
pub fn resolve(flags: ConfigLayer, config_file: Option<PathBuf>) -> Result<Configuration> {
    resolve_with(platform_defaults(), &env_vars(), flags, config_file)
}

/// Resolves the configuration from explicit inputs.
pub fn resolve_with<K, V>(
    defaults: Configuration,
    vars: &[(K, V)],
    flags: ConfigLayer,
    config_file: Option<PathBuf>,
) -> Result<Configuration>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let location = ConfigFileLocation::resolve(config_file, &defaults, vars);
    let file_layer = ConfigLayer::load_file(&location.path, location.required)?;
    let env_layer = ConfigLayer::from_env(vars)?;

    Ok(ConfigBuilder::new(defaults)
        .layer(ConfigLayer::editor_convention(vars))
        .layer(file_layer)
        .layer(env_layer)
        .layer(flags)
        .build())
}
