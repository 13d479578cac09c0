//! Corpus folder listing
//!
//! Walks only two levels of the corpus tree: the top-level mailbox
//! directories (one per user) and their immediate subfolders.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

/// Lists the mailbox/folder structure of the on-disk corpus.
pub struct FolderService {
    root: PathBuf,
}

impl FolderService {
    /// Create a folder service over `root`.
    ///
    /// Corpus archives usually nest everything under a `maildir/` directory;
    /// when present, it becomes the effective root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut root = root.into();
        let nested = root.join("maildir");
        if nested.is_dir() {
            root = nested;
        }
        Self { root }
    }

    /// Map each top-level mailbox directory to the sorted names of its
    /// immediate subdirectories. Unreadable entries are logged and skipped;
    /// a missing root yields an empty map.
    pub fn folders(&self) -> BTreeMap<String, Vec<String>> {
        let mut folders = BTreeMap::new();

        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %self.root.display(), error = %err, "Cannot read corpus root");
                return folders;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let subfolders = match std::fs::read_dir(&path) {
                Ok(entries) => {
                    let mut names: Vec<String> = entries
                        .flatten()
                        .filter(|e| e.path().is_dir())
                        .map(|e| e.file_name().to_string_lossy().into_owned())
                        .collect();
                    names.sort();
                    names
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping unreadable mailbox");
                    continue;
                }
            };

            folders.insert(name, subfolders);
        }

        folders
    }
}
