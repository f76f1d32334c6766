//! Snapshot core of the wlgb git bridge.
//!
//! wlgb maps a remote document-versioning backend onto a git-style
//! push/pull interface. This crate owns the snapshot side of a push:
//! - Diffing the pushed tree against the previous one into per-file
//!   change records
//! - Persisting changed bytes into the project's attachment area on disk
//! - Building the postback descriptor the backend uses to pull changed
//!   files and report acceptance
//!
//! Directory enumeration, transport and the outer git protocol live in
//! their own collaborators; callers hand this crate ready-made
//! [`DirectorySnapshot`] values.
//!
//! # Example
//!
//! ```no_run
//! use wlgb_snapshot::{
//!     AttachmentStore, CandidateSnapshot, DescriptorBuilder, DirectorySnapshot, SnapshotFile,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let previous = DirectorySnapshot::from_files([SnapshotFile::new("main.tex", "v1")]);
//! let current = DirectorySnapshot::from_files([
//!     SnapshotFile::new("main.tex", "v2"),
//!     SnapshotFile::new("bib.bib", "refs"),
//! ]);
//!
//! // Diff the trees; records keep the current contents plus a change flag.
//! let candidate = CandidateSnapshot::new("proj1", 5, current, &previous);
//!
//! // Write the changed bytes under `<root>/.wlgb/atts/proj1/`.
//! let store = AttachmentStore::new("/srv/bridge");
//! store.persist_changes(&candidate).await?;
//!
//! // Build the JSON descriptor returned to the backend.
//! let builder = DescriptorBuilder::new("https://wlgb.example.com/");
//! let descriptor = builder.build(&candidate, "postback-key");
//! println!("{}", serde_json::to_string_pretty(&descriptor)?);
//! # Ok(())
//! # }
//! ```

mod candidate;
mod descriptor;
mod error;
mod snapshot;
mod store;

pub use candidate::{CandidateSnapshot, FileRecord};
pub use descriptor::{DescriptorBuilder, DescriptorFile, PostbackDescriptor};
pub use error::{SnapshotError, SnapshotResult};
pub use snapshot::{DirectorySnapshot, SnapshotFile};
pub use store::AttachmentStore;
