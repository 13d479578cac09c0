//! Directory traversal
//!
//! Recursively enumerates a corpus tree, feeding every non-directory entry's
//! path into a bounded channel. Sends suspend while the channel is full, so
//! traversal is paced by how fast the workers drain it.

use std::path::PathBuf;

use tokio::sync::mpsc::Sender;
use tracing::warn;

/// Walk `root` and send every non-directory entry's full path into `tx`.
///
/// Unreadable directories and entries are logged and skipped; traversal
/// continues. Traversal order is filesystem-defined; nothing downstream may
/// depend on it. The channel closes exactly once, when `tx` is dropped on
/// return, signaling end-of-input to every worker.
pub async fn walk(root: PathBuf, tx: Sender<PathBuf>) {
    let mut pending = vec![root];

    while let Some(dir) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "Skipping unreadable directory");
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    warn!(path = %dir.display(), error = %err, "Aborting directory after read error");
                    break;
                }
            };

            let path = entry.path();
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => pending.push(path),
                Ok(_) => {
                    if tx.send(path).await.is_err() {
                        // Every receiver is gone; nothing left to feed.
                        return;
                    }
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping unreadable entry");
                }
            }
        }
    }
}
