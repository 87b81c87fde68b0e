//! Motion Archive - file-backed storage for motion recordings.
//!
//! A recording is a timestamped sequence of frames plus metadata (mode,
//! creation time). This crate persists recordings one JSON document per
//! recording under a backing directory and derives lightweight catalog
//! summaries (id, mode, creation time, duration) for listing, so callers
//! never have to parse frame payloads themselves.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Recording documents and derived catalog types
//! - `store`: Persistence (create/get/list) and summary derivation
//!
//! # Example
//!
//! ```rust,no_run
//! use motion_archive::{
//!     schema::{Frame, RecordingDraft},
//!     store::RecordingStore,
//! };
//!
//! # fn main() -> Result<(), motion_archive::store::StoreError> {
//! let store = RecordingStore::new("data/recordings")?;
//!
//! // Persist a recording; the store assigns the id.
//! let id = store.create(RecordingDraft {
//!     id: None,
//!     created_at_iso: "2026-01-01T12:00:00Z".to_string(),
//!     mode: "walk".to_string(),
//!     frames: vec![Frame::at(0.0), Frame::at(1000.0)],
//! })?;
//!
//! // Catalog view, newest first.
//! for summary in store.list()? {
//!     println!("{} {} {:.1}s", summary.id, summary.mode, summary.duration_s);
//! }
//!
//! // Full document, frames included.
//! let recording = store.get(&id)?;
//! println!("{} frames", recording.frames.len());
//! # Ok(())
//! # }
//! ```

pub mod schema;
pub mod store;

// Re-export commonly used types
pub use schema::{Frame, Recording, RecordingDraft, RecordingSummary};
pub use store::{RecordingStore, StoreError};
