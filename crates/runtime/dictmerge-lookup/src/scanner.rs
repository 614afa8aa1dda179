//! Recursive search for files by exact name

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walk `root` and return the absolute path of every file named in `names`.
///
/// Each visited directory is probed for each name, so the same name found in
/// two directories is reported twice. Results follow traversal order
/// (directories sorted by file name). A missing root yields no results.
pub fn files_lookup<S: AsRef<str>>(root: &Path, names: &[S]) -> Vec<PathBuf> {
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    if !root.is_dir() {
        warn!("Lookup root {} is not a directory", root.display());
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        for name in names {
            let candidate = entry.path().join(name.as_ref());
            if candidate.is_file() {
                found.push(candidate);
            }
        }
    }
    found
}
