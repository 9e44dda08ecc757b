//! Launcher error types.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur outside the input core.
///
/// The bar itself never fails; these come from persistence, layout
/// construction and process replacement.
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access store file '{}': {message}", path.display())]
    #[diagnostic(code(mrulauncher::io::store_access))]
    Io {
        path: PathBuf,
        message: String,
    },

    #[error("No usable store path")]
    #[diagnostic(
        code(mrulauncher::io::no_store_path),
        help("Set HOME so that $HOME/.config/mrulauncher.txt can be used, or pass --db <path>")
    )]
    NoStorePath,

    // =========================================================================
    // Layout Errors
    // =========================================================================
    #[error("Bar layout does not fit: banner ({banner}) + field ({field}) exceeds capacity ({capacity})")]
    #[diagnostic(code(mrulauncher::layout::overflow))]
    InvalidLayout {
        banner: usize,
        field: usize,
        capacity: usize,
    },

    // =========================================================================
    // Launch Errors
    // =========================================================================
    #[error("Nothing to launch")]
    #[diagnostic(code(mrulauncher::launch::empty_command))]
    EmptyCommand,

    #[error("Failed to launch '{program}': {message}")]
    #[diagnostic(
        code(mrulauncher::launch::exec_failed),
        help("Run `mrulauncher update` to drop commands that no longer exist")
    )]
    Exec {
        program: String,
        message: String,
    },
}

impl LauncherError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}
