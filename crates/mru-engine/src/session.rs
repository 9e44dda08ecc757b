//! Interactive session state.
//!
//! A [`Session`] owns the store, its file and the bar for the lifetime of
//! one launcher invocation. The display layer feeds it logical keys and
//! redraws [`Session::bar`] whenever it is told to.

use crate::bar::Bar;
use crate::config::LauncherConfig;
use crate::keys::LogicalKey;
use crate::launch::{tokenize, LaunchPlan};
use crate::store::{CommandStore, StoreFile};

/// What the display layer should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the bar and wait for the next key.
    Redraw,
    /// Close the bar and exit normally.
    Quit,
    /// Close the bar and replace the process with this plan.
    Launch(LaunchPlan),
}

/// Store, store file and bar for one interactive run.
#[derive(Debug)]
pub struct Session {
    store: CommandStore,
    file: StoreFile,
    bar: Bar,
}

impl Session {
    /// Loads the store named by `config` and builds a blank bar.
    pub fn open(config: LauncherConfig) -> Self {
        let file = StoreFile::new(config.db_path);
        let store = CommandStore::new(file.load());
        Self::new(store, file, Bar::new(config.layout))
    }

    pub fn new(store: CommandStore, file: StoreFile, bar: Bar) -> Self {
        Self { store, file, bar }
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn store(&self) -> &CommandStore {
        &self.store
    }

    /// Applies one key.
    pub fn handle_key(&mut self, key: LogicalKey) -> Outcome {
        match key {
            LogicalKey::Char(ch) => self.bar.insert(ch, self.store.entries()),
            LogicalKey::DeleteBackward => self.bar.delete(self.store.entries()),
            LogicalKey::Cycle => self.bar.cycle(),
            LogicalKey::CursorLeft | LogicalKey::CursorRight | LogicalKey::DeleteForward => {}
            LogicalKey::Commit => {
                if let Some(plan) = self.commit() {
                    return Outcome::Launch(plan);
                }
            }
            LogicalKey::Cancel => return Outcome::Quit,
        }
        Outcome::Redraw
    }

    /// Resolves the command line against the store.
    ///
    /// A selected completion counts in full even when the field shows it
    /// clipped. Returns `None` when nothing is typed or the first word is not
    /// a known command; the bar stays as it is. On a match the command is
    /// promoted and the store saved before the plan is returned.
    pub fn commit(&mut self) -> Option<LaunchPlan> {
        let argv = tokenize(self.bar.command_line());
        let program = argv.first()?;
        if !self.store.promote(program) {
            tracing::debug!(program = %program, "not a known command");
            return None;
        }

        if let Err(e) = self.file.save(self.store.entries()) {
            tracing::warn!(error = %e, "failed to save store");
        }

        LaunchPlan::new(argv).ok()
    }
}
