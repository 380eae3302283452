//! Upward search for the project file

use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `file_name`.
///
/// `start` is checked first, then each parent in turn. The filesystem root is
/// checked too before the search gives up. Relative paths are resolved
/// against the working directory so the walk can reach the real root.
pub fn find_upward(start: &Path, file_name: &str) -> Option<PathBuf> {
    let start = absolutize(start);
    let mut current = start.as_path();
    loop {
        let candidate = current.join(file_name);
        tracing::debug!("Checking {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
}
