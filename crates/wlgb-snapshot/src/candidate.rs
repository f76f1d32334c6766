//! Candidate snapshots and the per-file change diff.

use crate::snapshot::{DirectorySnapshot, SnapshotFile};
use tracing::debug;

/// One file of a candidate snapshot, together with its change flag.
#[derive(Debug, Clone)]
pub struct FileRecord {
    file: SnapshotFile,
    changed: bool,
}

impl FileRecord {
    /// The file's path, relative to the project root.
    pub fn path(&self) -> &str {
        self.file.path()
    }

    /// The underlying file.
    pub fn file(&self) -> &SnapshotFile {
        &self.file
    }

    /// Whether the file is new or has different contents than it had in the
    /// previous snapshot.
    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

/// The proposed new tree state produced by an incoming push, pending
/// acceptance by the backend.
///
/// Construction diffs the current tree against the previous one and records
/// a change flag per file. The candidate is transient: it exists to be
/// persisted and serialized into a postback descriptor, then discarded.
///
/// Version IDs are assigned by the backend and increase monotonically per
/// project across successive candidates; callers must also make sure at most
/// one candidate per project is in flight at a time.
#[derive(Debug, Clone)]
pub struct CandidateSnapshot {
    project_name: String,
    current_version: u64,
    files: Vec<FileRecord>,
}

impl CandidateSnapshot {
    /// Create a candidate snapshot by diffing `current` against `previous`.
    ///
    /// Consumes the current tree; the candidate owns its records. For each
    /// file of `current`, in iteration order, the record is flagged changed
    /// iff the path is absent from `previous` or the contents differ. Paths
    /// present only in `previous` produce no record: the accept/push
    /// workflow does not surface deletions.
    pub fn new(
        project_name: impl Into<String>,
        current_version: u64,
        current: DirectorySnapshot,
        previous: &DirectorySnapshot,
    ) -> Self {
        let project_name = project_name.into();
        let files = diff(current, previous);

        debug!(
            project = %project_name,
            version = current_version,
            files = files.len(),
            changed = files.iter().filter(|f| f.is_changed()).count(),
            "Built candidate snapshot"
        );

        Self {
            project_name,
            current_version,
            files,
        }
    }

    /// The project this candidate belongs to.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The version ID the backend assigned to this candidate.
    pub fn current_version(&self) -> u64 {
        self.current_version
    }

    /// All records of the candidate, one per file of the current tree.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Only the records whose contents are new or different.
    pub fn changed_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|record| record.is_changed())
    }
}

/// Compute the per-file change records.
///
/// Pure function of its two inputs: one record per file of `current`, in
/// `current`'s iteration order, independent of anything in `previous`
/// beyond the path lookups.
fn diff(current: DirectorySnapshot, previous: &DirectorySnapshot) -> Vec<FileRecord> {
    current
        .into_files()
        .map(|file| {
            let changed = match previous.get(file.path()) {
                Some(old) => !old.same_contents(&file),
                None => true,
            };
            FileRecord { file, changed }
        })
        .collect()
}
