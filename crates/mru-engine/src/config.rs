//! Launcher configuration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::BarLayout;

/// Store file name inside the config directory.
pub const DB_FILE_NAME: &str = "mrulauncher.txt";

/// Configuration for a launcher session.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Store file location. `None` runs with an in-memory store only.
    pub db_path: Option<PathBuf>,

    /// Bar geometry and decorators.
    pub layout: BarLayout,
}

impl LauncherConfig {
    /// Uses `db_path` with the default bar layout.
    pub fn new(db_path: Option<PathBuf>) -> Self {
        Self {
            db_path,
            layout: BarLayout::default(),
        }
    }
}

impl Default for LauncherConfig {
    /// Resolves the store under `$HOME`, creating `.config` if needed.
    fn default() -> Self {
        Self::new(default_db_path())
    }
}

/// Resolves `$HOME/.config/mrulauncher.txt`.
///
/// Creates `$HOME/.config` when missing. Returns `None` when `HOME` is unset
/// or `.config` exists but is not a directory.
pub fn default_db_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
    db_path_in(Path::new(&home))
}

/// Resolves the store file under `home`.
pub fn db_path_in(home: &Path) -> Option<PathBuf> {
    let dir = home.join(".config");
    match fs::metadata(&dir) {
        Ok(meta) if !meta.is_dir() => {
            tracing::debug!(path = %dir.display(), "config path is not a directory");
            return None;
        }
        Ok(_) => {}
        Err(_) => {
            if let Err(e) = fs::create_dir_all(&dir) {
                tracing::debug!(path = %dir.display(), error = %e, "cannot create config directory");
                return None;
            }
        }
    }
    Some(dir.join(DB_FILE_NAME))
}
