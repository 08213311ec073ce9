//! Top-down discovery of the source tree.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::ScanError;
use crate::files::{ExcludePatterns, is_hidden, is_private, is_source_file};

/// One directory found while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub absolute_path: PathBuf,
    /// Path relative to the scan root's parent; always starts with the
    /// root's own name.
    pub path_list: Vec<String>,
    /// Visible subdirectory names, sorted.
    pub sub_directories: Vec<String>,
    /// Source file names, sorted.
    pub files: Vec<String>,
}

/// Directories in top-down discovery order.
///
/// Popping from the end yields every directory exactly once, children
/// before their parent.
#[derive(Debug, Clone)]
pub struct WorkList {
    root_path: PathBuf,
    entries: Vec<DirEntry>,
}

impl WorkList {
    /// Parent of the scanned root; `path_list`s are relative to it.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn pop(&mut self) -> Option<DirEntry> {
        self.entries.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Make `path` absolute without resolving symlinks, folding `.` and `..`
/// lexically so exclude patterns see the path as it was given.
fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Walks a source tree and records the directories worth processing.
pub struct Scanner {
    include_private: bool,
    exclude: ExcludePatterns,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `include_private` - Also descend into `_`-prefixed directories
    /// * `exclude` - Directories (full path) and files (name) to leave out
    pub fn new(include_private: bool, exclude: ExcludePatterns) -> Self {
        Self {
            include_private,
            exclude,
        }
    }

    /// Scan `root` and return its work list.
    ///
    /// Unreadable subdirectories are logged and skipped; an unreadable root
    /// is an error.
    pub fn scan(&self, root: &Path) -> Result<WorkList, ScanError> {
        let io_error = |source| ScanError::Io {
            path: root.to_path_buf(),
            source,
        };
        let root = absolute_path(root).map_err(io_error)?;
        if !fs::metadata(&root).map_err(io_error)?.is_dir() {
            return Err(ScanError::NotADirectory(root));
        }
        fs::read_dir(&root).map_err(|source| ScanError::Io {
            path: root.clone(),
            source,
        })?;

        let root_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let root_path = root.parent().map_or_else(|| root.clone(), Path::to_path_buf);

        let mut entries = Vec::new();
        self.scan_directory(&root, vec![root_name], &mut entries);
        tracing::debug!(root = %root.display(), directories = entries.len(), "Scanned source tree");

        Ok(WorkList { root_path, entries })
    }

    fn scan_directory(&self, dir: &Path, path_list: Vec<String>, entries: &mut Vec<DirEntry>) {
        if self.exclude.matches_path(dir) {
            tracing::debug!(path = %dir.display(), "Excluded directory");
            return;
        }
        let listing = match fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "Skipping unreadable directory");
                return;
            }
        };

        let mut sub_directories = Vec::new();
        let mut files = Vec::new();
        for entry in listing.filter_map(Result::ok) {
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 name");
                continue;
            };
            if is_hidden(&name) {
                continue;
            }
            // Symlinked directories are not descended into.
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                if self.include_private || !is_private(&name) {
                    sub_directories.push(name);
                }
            } else if entry.path().is_file() && is_source_file(&name) && !self.exclude.matches(&name) {
                files.push(name);
            }
        }
        sub_directories.sort();
        files.sort();

        let children: Vec<(PathBuf, Vec<String>)> = sub_directories
            .iter()
            .map(|sub| {
                let mut child_list = path_list.clone();
                child_list.push(sub.clone());
                (dir.join(sub), child_list)
            })
            .collect();

        entries.push(DirEntry {
            absolute_path: dir.to_path_buf(),
            path_list,
            sub_directories,
            files,
        });

        for (child_dir, child_list) in children {
            self.scan_directory(&child_dir, child_list, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn scan(root: &Path, include_private: bool, exclude: &[&str]) -> WorkList {
        Scanner::new(include_private, ExcludePatterns::new(exclude).unwrap())
            .scan(root)
            .unwrap()
    }

    /// r/{a.feature, notes.txt, README.md, .hidden.feature}
    /// r/sub/b.feature, r/sub/deeper/c.rst
    /// r/.git/x.feature, r/_private/p.feature, r/empty/
    fn create_tree() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("r");
        touch(&root.join("a.feature"));
        touch(&root.join("notes.txt"));
        touch(&root.join("README.md"));
        touch(&root.join(".hidden.feature"));
        touch(&root.join("sub/b.feature"));
        touch(&root.join("sub/deeper/c.rst"));
        touch(&root.join(".git/x.feature"));
        touch(&root.join("_private/p.feature"));
        fs::create_dir_all(root.join("empty")).unwrap();
        (temp_dir, root)
    }

    #[test]
    fn test_scan_two_level_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("r");
        touch(&root.join("a.feature"));
        touch(&root.join("sub/b.feature"));

        let mut work = scan(&root, false, &[]);
        assert_eq!(work.entries().len(), 2);
        assert_eq!(work.root_path(), temp_dir.path());

        let first = work.pop().unwrap();
        assert_eq!(first.path_list, ["r", "sub"]);
        assert_eq!(first.files, ["b.feature"]);

        let second = work.pop().unwrap();
        assert_eq!(second.path_list, ["r"]);
        assert_eq!(second.sub_directories, ["sub"]);
        assert_eq!(second.files, ["a.feature"]);
        assert!(work.is_empty());
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let (_temp_dir, root) = create_tree();
        let work = scan(&root, false, &[]);
        let top = &work.entries()[0];

        assert_eq!(top.path_list, ["r"]);
        assert_eq!(top.sub_directories, ["empty", "sub"]);
        assert_eq!(top.files, ["README.md", "a.feature"]);
        assert_eq!(top.absolute_path, root);
    }

    #[test]
    fn test_scan_emits_empty_directories() {
        let (_temp_dir, root) = create_tree();
        let work = scan(&root, false, &[]);
        let lists: Vec<Vec<String>> = work.entries().iter().map(|e| e.path_list.clone()).collect();
        assert_eq!(
            lists,
            [
                vec!["r"],
                vec!["r", "empty"],
                vec!["r", "sub"],
                vec!["r", "sub", "deeper"],
            ]
        );
    }

    #[test]
    fn test_scan_children_pop_before_parents() {
        let (_temp_dir, root) = create_tree();
        let mut work = scan(&root, true, &[]);
        let mut seen: Vec<Vec<String>> = Vec::new();
        while let Some(entry) = work.pop() {
            for sub in &entry.sub_directories {
                let mut child = entry.path_list.clone();
                child.push(sub.clone());
                assert!(seen.contains(&child), "{child:?} not visited before parent");
            }
            assert!(!seen.contains(&entry.path_list));
            seen.push(entry.path_list);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_scan_include_private() {
        let (_temp_dir, root) = create_tree();
        let work = scan(&root, true, &[]);
        assert_eq!(work.entries()[0].sub_directories, ["_private", "empty", "sub"]);
        assert!(
            work.entries()
                .iter()
                .any(|e| e.path_list == ["r", "_private"] && e.files == ["p.feature"])
        );
    }

    #[test]
    fn test_scan_never_lists_hidden_entries() {
        let (_temp_dir, root) = create_tree();
        for include_private in [false, true] {
            let work = scan(&root, include_private, &[]);
            for entry in work.entries() {
                assert!(entry.sub_directories.iter().all(|d| !d.starts_with('.')));
                assert!(entry.files.iter().all(|f| !f.starts_with('.')));
            }
        }
    }

    #[test]
    fn test_scan_exclude_directory_by_path() {
        let (_temp_dir, root) = create_tree();
        let work = scan(&root, false, &["*/sub"]);
        let lists: Vec<&Vec<String>> = work.entries().iter().map(|e| &e.path_list).collect();
        assert_eq!(lists, [&vec!["r"], &vec!["r", "empty"]]);
        // The parent still names the excluded child; assembly prunes it.
        assert_eq!(work.entries()[0].sub_directories, ["empty", "sub"]);
    }

    #[test]
    fn test_scan_exclude_file_by_name() {
        let (_temp_dir, root) = create_tree();
        let work = scan(&root, false, &["*.md"]);
        assert_eq!(work.entries()[0].files, ["a.feature"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_keeps_symlinked_root_path() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("real/specs/a.feature"));
        touch(&temp_dir.path().join("real/specs/vendor/b.feature"));
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("link")).unwrap();

        let root = temp_dir.path().join("link/specs");
        let vendor = root.join("vendor");
        let work = scan(&root, false, &[vendor.to_str().unwrap()]);

        assert_eq!(work.entries().len(), 1);
        assert_eq!(work.entries()[0].absolute_path, root);
        assert_eq!(work.root_path(), temp_dir.path().join("link"));
    }

    #[test]
    fn test_scan_folds_parent_components() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("r/sub/a.feature"));

        let work = scan(&temp_dir.path().join("r/sub/.."), false, &[]);
        assert_eq!(work.entries()[0].path_list, ["r"]);
        assert_eq!(work.entries()[0].absolute_path, temp_dir.path().join("r"));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = Scanner::new(false, ExcludePatterns::default()).scan(&temp_dir.path().join("nope"));
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn test_scan_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.feature");
        touch(&file);
        let result = Scanner::new(false, ExcludePatterns::default()).scan(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }
}
