//! Line-oriented persistence for the command store.
//!
//! One name per line, most recent first, no header and no escaping.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostic::LauncherError;

/// Location of the persisted store.
///
/// A `StoreFile` without a path is the degraded mode used when no config
/// directory could be resolved: it loads as empty and refuses to save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFile {
    path: Option<PathBuf>,
}

impl StoreFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the stored names, treating any failure as an empty store.
    pub fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(names) => names,
            Err(LauncherError::NoStorePath) => {
                tracing::debug!("no store path, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "store unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the stored names.
    ///
    /// A missing file is an empty store, not an error.
    pub fn try_load(&self) -> Result<Vec<String>, LauncherError> {
        let path = self.path.as_deref().ok_or(LauncherError::NoStorePath)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "store file missing");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|e| LauncherError::io(path, e.to_string()))?;
        let names = parse(&content);
        tracing::debug!(path = %path.display(), count = names.len(), "loaded store");
        Ok(names)
    }

    /// Overwrites the file with `names`, one per line.
    ///
    /// The content goes to a sibling temporary file first and is renamed
    /// into place, so an interrupted save leaves the previous file readable.
    pub fn save(&self, names: &[String]) -> Result<(), LauncherError> {
        let path = self.path.as_deref().ok_or(LauncherError::NoStorePath)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LauncherError::io(parent, e.to_string()))?;
        }

        let tmp = tmp_path(path);
        fs::write(&tmp, render(names)).map_err(|e| LauncherError::io(&tmp, e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            LauncherError::io(path, e.to_string())
        })?;

        tracing::debug!(path = %path.display(), count = names.len(), "saved store");
        Ok(())
    }
}

/// Splits file content into names, dropping empty lines and repeats.
///
/// Lines are taken verbatim; a `\r` is part of the name.
fn parse(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .split('\n')
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .map(str::to_string)
        .collect()
}

fn render(names: &[String]) -> String {
    let mut out = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
