//! Directory snapshot data structures.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// One file inside a directory snapshot.
///
/// Holds the file's relative path (forward-slash separated), its raw bytes
/// and a SHA-256 digest of those bytes. The digest is computed once at
/// construction and is the content-equality rule used by the diff engine:
/// two files are considered unchanged iff their digests match.
#[derive(Clone)]
pub struct SnapshotFile {
    path: String,
    contents: Vec<u8>,
    digest: [u8; 32],
}

impl SnapshotFile {
    /// Create a snapshot file from a relative path and its contents.
    pub fn new(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let contents = contents.into();
        let digest = Sha256::digest(&contents).into();
        Self {
            path: path.into(),
            contents,
            digest,
        }
    }

    /// The file's path, relative to the project root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The file's raw bytes.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// The SHA-256 digest of the contents.
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Whether this file has the same contents as `other`, by digest.
    pub fn same_contents(&self, other: &SnapshotFile) -> bool {
        self.digest == other.digest
    }
}

impl fmt::Debug for SnapshotFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotFile")
            .field("path", &self.path)
            .field("size", &self.contents.len())
            .finish()
    }
}

/// An immutable mapping from relative path to file, representing one
/// point-in-time state of a project's tree.
///
/// Iteration is path-sorted, so the order is stable for a given set of
/// files. Snapshots never change after construction; a new tree state is a
/// new snapshot.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    files: BTreeMap<String, SnapshotFile>,
}

impl DirectorySnapshot {
    /// Create an empty snapshot, representing a project with no files yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a snapshot from a collection of files.
    ///
    /// If two files share a path, the later one wins.
    pub fn from_files(files: impl IntoIterator<Item = SnapshotFile>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|file| (file.path().to_string(), file))
                .collect(),
        }
    }

    /// Look up a file by its relative path.
    pub fn get(&self, path: &str) -> Option<&SnapshotFile> {
        self.files.get(path)
    }

    /// Whether the snapshot contains a file at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Iterate over the files in path order.
    pub fn files(&self) -> impl Iterator<Item = &SnapshotFile> {
        self.files.values()
    }

    /// Consume the snapshot, yielding its files in path order.
    pub fn into_files(self) -> impl Iterator<Item = SnapshotFile> {
        self.files.into_values()
    }

    /// Number of files in the snapshot.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the snapshot has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
