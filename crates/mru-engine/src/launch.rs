//! Launch plans: what to run once the user commits.

use crate::diagnostic::LauncherError;

/// Splits typed text into argv words on blanks, dropping empty words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// A resolved command line for a known store entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    argv: Vec<String>,
}

impl LaunchPlan {
    /// Creates a plan from argv words; the first word is the program.
    pub fn new(argv: Vec<String>) -> Result<Self, LauncherError> {
        if argv.is_empty() {
            return Err(LauncherError::EmptyCommand);
        }
        Ok(Self { argv })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Replaces the current process with the planned program.
    ///
    /// The program is looked up on `PATH`. Only returns on failure.
    #[cfg(unix)]
    pub fn exec(self) -> LauncherError {
        use std::os::unix::process::CommandExt;

        tracing::debug!(argv = ?self.argv, "exec");
        let err = std::process::Command::new(self.program())
            .args(self.args())
            .exec();
        LauncherError::Exec {
            program: self.program().to_string(),
            message: err.to_string(),
        }
    }
}
