//! Owner of the published tags index.
//!
//! [`CTagsIndex`] holds at most one [`TagIndex`] snapshot. `reindex()` reads,
//! parses and builds a complete new snapshot off to the side, then publishes
//! it with a single pointer swap. `lookup()` clones the current `Arc` and
//! reads from it without holding any lock, so a query sees either the old
//! snapshot or the new one in full.
//!
//! A failed reindex publishes nothing: the last good snapshot stays in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::{IndexError, IndexResult};
use super::snapshot::TagIndex;
use crate::parsing::parse_tags;
use crate::types::TagRecord;

/// Default tags-file name written by the generator and read by `reindex()`.
pub const DEFAULT_TAGS_FILE: &str = "tags_vscode";

/// Lifecycle of a [`CTagsIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No reindex has succeeded yet; every lookup misses.
    Uninitialized,
    /// A snapshot is published.
    Ready,
}

/// Tags index for one workspace.
///
/// Share it behind an `Arc`; both operations take `&self`.
#[derive(Debug)]
pub struct CTagsIndex {
    root: PathBuf,
    tags_file: String,
    current: RwLock<Option<Arc<TagIndex>>>,
}

impl CTagsIndex {
    /// Create an index reading `<root>/<tags_file>`. Nothing is read until
    /// [`reindex`](Self::reindex) is called.
    pub fn new(root: impl Into<PathBuf>, tags_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            tags_file: tags_file.into(),
            current: RwLock::new(None),
        }
    }

    /// Create an index reading [`DEFAULT_TAGS_FILE`] under `root`.
    pub fn with_default_file(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_TAGS_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tags_file(&self) -> &str {
        &self.tags_file
    }

    /// Full path of the tags file.
    pub fn tags_path(&self) -> PathBuf {
        self.root.join(&self.tags_file)
    }

    /// Reload the tags file and publish a fresh snapshot.
    ///
    /// Returns every parsed record in file order. On a read error the
    /// previously published snapshot, if any, is left as it was.
    pub async fn reindex(&self) -> IndexResult<Vec<TagRecord>> {
        let path = self.tags_path();
        crate::debug_event!("index", "reindex started", "{}", path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) => {
                tracing::warn!(
                    "[index] reindex failed, keeping previous snapshot: {}: {source}",
                    path.display()
                );
                return Err(IndexError::Read { path, source });
            }
        };

        // Generators do not promise UTF-8 paths; a bad byte only affects its line.
        let content = String::from_utf8_lossy(&bytes);
        let records: Vec<TagRecord> = parse_tags(&content).collect();
        let snapshot = Arc::new(TagIndex::from_records(&records));
        let symbol_count = snapshot.symbol_count();

        self.publish(snapshot);

        crate::log_event!(
            "index",
            "reindexed",
            "{} tags, {symbol_count} symbols from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    /// Definition sites for `symbol` in the current snapshot.
    ///
    /// `None` when the symbol is absent or no reindex has succeeded yet. A
    /// returned slice is never empty.
    pub async fn lookup(&self, symbol: &str) -> Option<Arc<[TagRecord]>> {
        let matches = self.snapshot()?.get(symbol);
        if matches.is_none() {
            crate::debug_event!("index", "no matches", "{symbol:?}");
        }
        matches
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Option<Arc<TagIndex>> {
        self.current.read().clone()
    }

    pub fn state(&self) -> IndexState {
        if self.current.read().is_some() {
            IndexState::Ready
        } else {
            IndexState::Uninitialized
        }
    }

    /// Distinct symbols in the current snapshot, zero when uninitialized.
    pub fn symbol_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.symbol_count())
    }

    /// Records in the current snapshot, zero when uninitialized.
    pub fn record_count(&self) -> usize {
        self.snapshot().map_or(0, |s| s.record_count())
    }

    fn publish(&self, snapshot: Arc<TagIndex>) {
        let previous = self.current.write().replace(snapshot);
        // Dropped outside the lock; readers may still hold clones of it.
        drop(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "!_TAG_FILE_FORMAT\t2\t//\n\
                          foo\tsrc/a.c\t10\n\
                          bar\tsrc/b.c\t5\n\
                          foo\tsrc/c.c\t20\n";

    fn workspace(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_TAGS_FILE), content).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_reindex_and_lookup_example() {
        let dir = workspace(SAMPLE);
        let index = CTagsIndex::with_default_file(dir.path());

        let records = index.reindex().await.unwrap();
        assert_eq!(records.len(), 3);

        let foo = index.lookup("foo").await.unwrap();
        assert_eq!(
            &*foo,
            &[
                TagRecord::new("foo", "src/a.c", 9),
                TagRecord::new("foo", "src/c.c", 19),
            ]
        );
        let bar = index.lookup("bar").await.unwrap();
        assert_eq!(&*bar, &[TagRecord::new("bar", "src/b.c", 4)]);
        assert!(index.lookup("baz").await.is_none());
    }

    #[tokio::test]
    async fn test_lookup_before_reindex_misses() {
        let dir = workspace(SAMPLE);
        let index = CTagsIndex::with_default_file(dir.path());

        assert_eq!(index.state(), IndexState::Uninitialized);
        assert!(index.lookup("foo").await.is_none());
        assert_eq!(index.symbol_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_reindex_from_uninitialized_stays_uninitialized() {
        let dir = TempDir::new().unwrap();
        let index = CTagsIndex::with_default_file(dir.path());

        let err = index.reindex().await.unwrap_err();
        assert!(matches!(err, IndexError::Read { .. }));
        assert_eq!(err.path(), dir.path().join(DEFAULT_TAGS_FILE));
        assert_eq!(index.state(), IndexState::Uninitialized);
    }

    #[tokio::test]
    async fn test_failed_reindex_keeps_previous_snapshot() {
        let dir = workspace(SAMPLE);
        let index = CTagsIndex::with_default_file(dir.path());
        index.reindex().await.unwrap();
        let before = index.lookup("foo").await.unwrap();

        fs::remove_file(dir.path().join(DEFAULT_TAGS_FILE)).unwrap();
        assert!(index.reindex().await.is_err());

        assert_eq!(index.state(), IndexState::Ready);
        assert_eq!(index.lookup("foo").await.unwrap(), before);
        assert_eq!(index.record_count(), 3);
    }

    #[tokio::test]
    async fn test_successful_reindex_replaces_snapshot_wholesale() {
        let dir = workspace(SAMPLE);
        let index = CTagsIndex::with_default_file(dir.path());
        index.reindex().await.unwrap();
        let old = index.snapshot().unwrap();

        fs::write(dir.path().join(DEFAULT_TAGS_FILE), "qux\tsrc/q.c\t1\n").unwrap();
        index.reindex().await.unwrap();

        assert!(index.lookup("foo").await.is_none());
        assert_eq!(index.lookup("qux").await.unwrap()[0].lineno, 0);
        // A reader holding the old snapshot keeps a complete view.
        assert_eq!(old.get("foo").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_tags_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tags"), "main\tmain.c\t7\n").unwrap();
        let index = CTagsIndex::new(dir.path(), "tags");

        assert_eq!(index.tags_path(), dir.path().join("tags"));
        index.reindex().await.unwrap();
        assert_eq!(index.lookup("main").await.unwrap()[0].lineno, 6);
    }

    #[tokio::test]
    async fn test_invalid_utf8_only_affects_its_line() {
        let dir = TempDir::new().unwrap();
        let mut content = b"good\ta.c\t1\n".to_vec();
        content.extend_from_slice(b"bad\t\xff\xfe.c\tnot-a-number\n");
        content.extend_from_slice(b"also_good\tb.c\t2\n");
        fs::write(dir.path().join(DEFAULT_TAGS_FILE), content).unwrap();

        let index = CTagsIndex::with_default_file(dir.path());
        let records = index.reindex().await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
