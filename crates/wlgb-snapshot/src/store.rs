//! Attachment persistence for candidate snapshots.

use crate::candidate::CandidateSnapshot;
use crate::error::{SnapshotError, SnapshotResult};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Subdirectory of the root tracking directory holding the per-project
/// attachment areas.
const ATTS_DIR: &str = ".wlgb/atts";

/// Writes the changed files of candidate snapshots into a project-scoped
/// attachment area under the root tracking directory.
///
/// Files land at `<root>/.wlgb/atts/<project_name>/<path>`; the backend
/// later pulls their bytes through the per-file URLs of the postback
/// descriptor.
///
/// Writes are not atomic across a candidate: if a write fails partway,
/// earlier writes stay on disk and the error propagates so the caller can
/// abort acceptance of that candidate. Callers must serialize candidates
/// for the same project; distinct projects are independent.
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    /// Create a store over the given root tracking directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write every changed record of `candidate` into the project's
    /// attachment area, creating intermediate directories as needed.
    ///
    /// Unchanged records produce no write; their bytes are already durable
    /// from an earlier snapshot. Returns the number of files written.
    pub async fn persist_changes(&self, candidate: &CandidateSnapshot) -> SnapshotResult<usize> {
        let project_dir = self.project_dir(candidate.project_name())?;

        let mut written = 0;
        for record in candidate.changed_files() {
            let destination = resolve_destination(&project_dir, record.path())?;

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&destination, record.file().contents()).await?;

            debug!(path = %destination.display(), "Wrote changed file");
            written += 1;
        }

        info!(
            project = %candidate.project_name(),
            version = candidate.current_version(),
            written,
            "Persisted candidate snapshot attachments"
        );

        Ok(written)
    }

    /// The attachment directory of a project.
    ///
    /// Fails if the project name is empty or not usable as a single
    /// directory name.
    pub fn project_dir(&self, project_name: &str) -> SnapshotResult<PathBuf> {
        if project_name.is_empty()
            || project_name.contains('/')
            || project_name.contains('\\')
            || project_name == "."
            || project_name == ".."
        {
            return Err(SnapshotError::invalid_project_name(project_name));
        }

        Ok(self.root.join(ATTS_DIR).join(project_name))
    }
}

/// Resolve a record's relative path against the project's attachment
/// directory, rejecting anything that could escape it.
fn resolve_destination(project_dir: &Path, relative: &str) -> SnapshotResult<PathBuf> {
    let path = Path::new(relative);

    if relative.is_empty() || path.is_absolute() {
        return Err(SnapshotError::unsafe_path(relative));
    }
    // Only plain name components; no `.`, `..` or platform prefixes.
    if !path
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(SnapshotError::unsafe_path(relative));
    }

    Ok(project_dir.join(path))
}
