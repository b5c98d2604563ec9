//! Depth-first directory traversal with a per-leaf callback.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Walks a directory tree and invokes a callback for every leaf
/// (non-directory) entry.
///
/// The callback receives the leaf's absolute path (the scan root joined with
/// the relative path) and its path relative to the root. Any extra per-scan
/// state belongs in the closure's captures and is shared by every invocation
/// within one scan.
pub struct DirectoryScanner<F> {
    callback: F,
}

impl<F> DirectoryScanner<F>
where
    F: FnMut(&Path, &Path),
{
    /// Create a scanner that invokes `callback` for each leaf.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }

    /// Visit every leaf under `root` exactly once.
    ///
    /// Directories are enumerated in filesystem order, which is not
    /// guaranteed to be sorted. A root that is itself a leaf invokes the
    /// callback once with an empty relative path. Symlinks are followed and
    /// cycles are not detected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadDir`] if a directory cannot be enumerated.
    /// Leaves visited before the failure stay visited; there is no rollback.
    pub fn scan(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        debug!(root = %root.display(), "starting scan");

        // Explicit work stack instead of call-stack recursion, so nesting
        // depth is bounded by heap only.
        let mut pending = vec![(root.to_path_buf(), PathBuf::new())];
        let mut visited = 0usize;

        while let Some((path, relative)) = pending.pop() {
            if path.is_dir() {
                let entries = fs::read_dir(&path).map_err(|source| Error::ReadDir {
                    path: path.clone(),
                    source,
                })?;
                for entry in entries {
                    let entry = entry.map_err(|source| Error::ReadDir {
                        path: path.clone(),
                        source,
                    })?;
                    let name = entry.file_name();
                    pending.push((path.join(&name), relative.join(&name)));
                }
            } else {
                trace!(path = %path.display(), "visiting leaf");
                (self.callback)(&path, &relative);
                visited += 1;
            }
        }

        debug!(root = %root.display(), visited, "scan finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect_relative(root: &Path) -> Vec<String> {
        let mut seen = Vec::new();
        {
            let mut scanner = DirectoryScanner::new(|_abs: &Path, rel: &Path| {
                seen.push(rel.to_string_lossy().into_owned());
            });
            scanner.scan(root).unwrap();
        }
        seen.sort();
        seen
    }

    #[test]
    fn test_scan_visits_every_leaf() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), "b").unwrap();

        let seen = collect_relative(dir.path());
        assert_eq!(seen, vec!["a.txt".to_string(), "sub/b.txt".to_string()]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("d.txt"), "d").unwrap();

        let seen = collect_relative(dir.path());
        assert_eq!(seen, vec!["a/b/c/d.txt".to_string()]);
    }

    #[test]
    fn test_scan_file_root_uses_empty_relative_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("only.txt");
        fs::write(&file, "x").unwrap();

        let mut calls = Vec::new();
        {
            let mut scanner = DirectoryScanner::new(|abs: &Path, rel: &Path| {
                calls.push((abs.to_path_buf(), rel.to_path_buf()));
            });
            scanner.scan(&file).unwrap();
        }

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, file);
        assert_eq!(calls[0].1, PathBuf::new());
    }

    #[test]
    fn test_scan_empty_directory_visits_nothing() {
        let dir = tempdir().unwrap();
        let seen = collect_relative(dir.path());
        assert!(seen.is_empty());
    }

    #[test]
    fn test_absolute_path_is_root_joined_with_relative() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("f.txt"), "f").unwrap();

        let root = dir.path().to_path_buf();
        let mut scanner = DirectoryScanner::new(|abs: &Path, rel: &Path| {
            assert_eq!(abs, root.join(rel));
        });
        scanner.scan(dir.path()).unwrap();
    }

    #[test]
    fn test_callback_captures_extra_state() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "").unwrap();
        fs::write(dir.path().join("b"), "").unwrap();

        let prefix = "seen:";
        let mut log = Vec::new();
        {
            let mut scanner = DirectoryScanner::new(|_abs: &Path, rel: &Path| {
                log.push(format!("{}{}", prefix, rel.display()));
            });
            scanner.scan(dir.path()).unwrap();
        }
        log.sort();
        assert_eq!(log, vec!["seen:a".to_string(), "seen:b".to_string()]);
    }
}
