//! # Template Lookup
//!
//! Templates are plain files sitting directly in the templates directory. A template can
//! be referred to by its full file name (`daily.md`) or by its stem, the file name with
//! the final extension removed (`daily`).
//!
//! Lookup is a linear scan of the directory's immediate entries, visited in file name
//! order so that the result does not depend on the filesystem. An exact file name match
//! beats a stem match; among stem matches the first in that order wins. Directories are
//! never templates.

use crate::error::{NoteTemplateError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The file name with its final extension removed. `a.b.md` -> `a.b`, `.bashrc` -> ``,
/// `README` -> `README`.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

/// How a directory entry matched a requested template name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateMatch {
    Exact,
    Stem,
}

pub fn match_name(file_name: &str, name: &str) -> Option<TemplateMatch> {
    if file_name == name {
        Some(TemplateMatch::Exact)
    } else if file_stem(file_name) == name {
        Some(TemplateMatch::Stem)
    } else {
        None
    }
}

/// Finds the template file for `name` in `templates_dir`.
pub fn locate(templates_dir: &Path, name: &str) -> Result<PathBuf> {
    let not_found = || NoteTemplateError::TemplateNotFound {
        name: name.to_string(),
        path: templates_dir.join(name),
    };

    if name.is_empty() || name == "." || name == ".." {
        return Err(not_found());
    }

    let entries =
        fs::read_dir(templates_dir).map_err(|e| NoteTemplateError::directory(templates_dir, e))?;

    let mut candidates: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| NoteTemplateError::directory(templates_dir, e))?;
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        if match_name(&file_name, name).is_some() {
            candidates.push((file_name, entry.path()));
        }
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut first_stem = None;
    for (file_name, path) in candidates {
        if !path.is_file() {
            continue;
        }
        match match_name(&file_name, name) {
            Some(TemplateMatch::Exact) => {
                debug!(template = name, path = %path.display(), "matched template by name");
                return Ok(path);
            }
            Some(TemplateMatch::Stem) if first_stem.is_none() => first_stem = Some(path),
            _ => {}
        }
    }

    match first_stem {
        Some(path) => {
            debug!(template = name, path = %path.display(), "matched template by stem");
            Ok(path)
        }
        None => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn templates(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), format!("template {file}")).unwrap();
        }
        dir
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("daily.md"), "daily");
        assert_eq!(file_stem("a.b.md"), "a.b");
        assert_eq!(file_stem("README"), "README");
        assert_eq!(file_stem(".bashrc"), "");
        assert_eq!(file_stem("trailing."), "trailing");
    }

    #[test]
    fn test_match_name() {
        assert_eq!(match_name("daily.md", "daily.md"), Some(TemplateMatch::Exact));
        assert_eq!(match_name("daily.md", "daily"), Some(TemplateMatch::Stem));
        assert_eq!(match_name("daily.md", "dai"), None);
        assert_eq!(match_name("a.b.md", "a"), None);
    }

    #[test]
    fn test_locate_by_stem() {
        let dir = templates(&["daily.md", "weekly.txt"]);
        let path = locate(dir.path(), "daily").unwrap();
        assert_eq!(path, dir.path().join("daily.md"));
    }

    #[test]
    fn test_locate_by_exact_name() {
        let dir = templates(&["daily.md", "weekly.txt"]);
        let path = locate(dir.path(), "weekly.txt").unwrap();
        assert_eq!(path, dir.path().join("weekly.txt"));
    }

    #[test]
    fn test_locate_without_extension() {
        let dir = templates(&["journal"]);
        assert_eq!(
            locate(dir.path(), "journal").unwrap(),
            dir.path().join("journal")
        );
    }

    #[test]
    fn test_exact_match_beats_stem() {
        let dir = templates(&["daily", "daily.md"]);
        assert_eq!(locate(dir.path(), "daily").unwrap(), dir.path().join("daily"));
    }

    #[test]
    fn test_stem_ambiguity_picks_first_by_name() {
        let dir = templates(&["daily.txt", "daily.md", "daily.org"]);
        assert_eq!(
            locate(dir.path(), "daily").unwrap(),
            dir.path().join("daily.md")
        );
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = templates(&["daily.txt"]);
        fs::create_dir(dir.path().join("daily")).unwrap();
        fs::create_dir(dir.path().join("daily.d")).unwrap();
        assert_eq!(
            locate(dir.path(), "daily").unwrap(),
            dir.path().join("daily.txt")
        );
    }

    #[test]
    fn test_not_found_carries_attempted_path() {
        let dir = templates(&["daily.md"]);
        match locate(dir.path(), "weekly").unwrap_err() {
            NoteTemplateError::TemplateNotFound { name, path } => {
                assert_eq!(name, "weekly");
                assert_eq!(path, dir.path().join("weekly"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_not_recursive() {
        let dir = templates(&[]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("daily.md"), "x").unwrap();
        assert!(matches!(
            locate(dir.path(), "daily"),
            Err(NoteTemplateError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_dot_names_never_match() {
        let dir = templates(&["..md"]);
        for name in ["", ".", ".."] {
            assert!(matches!(
                locate(dir.path(), name),
                Err(NoteTemplateError::TemplateNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_missing_templates_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            locate(&missing, "daily"),
            Err(NoteTemplateError::Directory { .. })
        ));
    }
}
