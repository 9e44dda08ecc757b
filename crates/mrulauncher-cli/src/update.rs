//! `mrulauncher update`: rebuild the store from the search path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use mru_engine::{CommandStore, ReconcileReport, StoreFile};

use crate::ui;

const SEARCH_HEADING: &str = "Search in following directories:";
const STATS_HEADING: &str = "Statistics:";

/// Directories to scan: the given ones, or `$PATH` when none are given.
///
/// Empty `$PATH` segments are dropped; the result is sorted and deduplicated.
pub fn search_paths(args: Vec<PathBuf>, env_path: Option<OsString>) -> Vec<PathBuf> {
    let mut paths = if args.is_empty() {
        env_path
            .map(|p| std::env::split_paths(&p).collect::<Vec<_>>())
            .unwrap_or_default()
    } else {
        args
    };
    paths.retain(|p| !p.as_os_str().is_empty());
    paths.sort();
    paths.dedup();
    paths
}

/// Names of the entries directly under `dir`, in file name order.
///
/// A missing or unreadable directory yields nothing.
pub fn discover_in(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name().to_string_lossy().into_owned()),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping entry");
                None
            }
        })
        .collect()
}

/// Names found across all search paths, in path order.
pub fn discover(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().flat_map(|p| discover_in(p)).collect()
}

/// Reconciles the stored list against `discovered` and saves it.
pub fn refresh_store(file: &StoreFile, discovered: Vec<String>) -> ReconcileReport {
    let mut store = CommandStore::new(file.load());
    let report = store.reconcile(discovered);
    tracing::debug!(path = ?file.path(), ?report, "refreshed store");

    if let Err(e) = file.save(store.entries()) {
        tracing::warn!(error = %e, "failed to save store");
        ui::error(&format!("store not saved: {}", e));
    }
    report
}

/// Run the update command.
pub fn run(args: Vec<PathBuf>, file: &StoreFile) -> miette::Result<()> {
    let paths = search_paths(args, std::env::var_os("PATH"));

    ui::heading(SEARCH_HEADING);
    for path in &paths {
        ui::line(&path.display().to_string());
    }

    let spinner = ui::spinner("scanning...");
    let discovered = discover(&paths);
    spinner.finish_and_clear();
    tracing::debug!(count = discovered.len(), "discovered entries");

    ui::rule(SEARCH_HEADING);

    let report = refresh_store(file, discovered);

    ui::heading(STATS_HEADING);
    ui::stat('+', report.added);
    ui::stat('-', report.removed);
    ui::stat('=', report.total);
    ui::rule(STATS_HEADING);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn test_explicit_paths_sorted_and_deduped() {
        let paths = search_paths(
            vec!["/usr/bin".into(), "/bin".into(), "/usr/bin".into()],
            Some("/ignored".into()),
        );
        assert_eq!(paths, [PathBuf::from("/bin"), PathBuf::from("/usr/bin")]);
    }

    #[test]
    fn test_env_path_split() {
        let paths = search_paths(Vec::new(), Some("/usr/bin::/bin:/usr/bin:".into()));
        assert_eq!(paths, [PathBuf::from("/bin"), PathBuf::from("/usr/bin")]);
    }

    #[test]
    fn test_no_env_path() {
        assert!(search_paths(Vec::new(), None).is_empty());
    }

    #[test]
    fn test_discover_lists_direct_children_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), &["vim", "ls"]);
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), &["hidden"]);

        let names = discover_in(dir.path());
        assert_eq!(names, ["ls", "sub", "vim"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(discover_in(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_refresh_store_reconciles_and_saves() {
        let bin = TempDir::new().unwrap();
        let usr = TempDir::new().unwrap();
        touch(bin.path(), &["b", "c"]);
        touch(usr.path(), &["c", "d"]);

        let db = TempDir::new().unwrap();
        let file = StoreFile::at(db.path().join("mrulauncher.txt"));
        file.save(&["a".to_string(), "b".to_string()]).unwrap();

        let discovered = discover(&[bin.path().to_path_buf(), usr.path().to_path_buf()]);
        let report = refresh_store(&file, discovered);

        assert_eq!(report, ReconcileReport { added: 2, removed: 1, total: 3 });
        assert_eq!(file.load(), ["b", "c", "d"]);
    }
}
