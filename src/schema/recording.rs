//! Recording document types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One sample in a recording.
///
/// Only `t_ms` is interpreted by this crate. Any other fields present in
/// the document are carried through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Timestamp in milliseconds, relative to recording start.
    pub t_ms: f64,
    /// Opaque payload fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Frame {
    /// Create a frame carrying only a timestamp.
    pub fn at(t_ms: f64) -> Self {
        Self {
            t_ms,
            extra: Map::new(),
        }
    }
}

/// A persisted recording: metadata plus an ordered frame sequence.
///
/// Frame order is caller-supplied and assumed, but never verified, to be
/// non-decreasing in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Opaque unique identifier. Also names the document on disk.
    pub id: String,
    /// Creation timestamp in ISO-8601 form, supplied by the caller.
    pub created_at_iso: String,
    /// Opaque category tag (e.g. "walk", "run"). No enumeration enforced.
    pub mode: String,
    /// Ordered frame sequence. Immutable once written.
    pub frames: Vec<Frame>,
}

/// A recording as submitted for creation, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingDraft {
    /// Caller-supplied identifier. Accepted as-is when present; a fresh
    /// random id is generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp in ISO-8601 form.
    pub created_at_iso: String,
    /// Opaque category tag.
    pub mode: String,
    /// Ordered frame sequence.
    pub frames: Vec<Frame>,
}

impl RecordingDraft {
    /// Stamp an identity onto the draft, producing the document to persist.
    pub fn into_recording(self, id: String) -> Recording {
        Recording {
            id,
            created_at_iso: self.created_at_iso,
            mode: self.mode,
            frames: self.frames,
        }
    }
}

/// Derived catalog view of a recording. Never persisted; recomputed from
/// the full document on every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSummary {
    /// Identifier of the recording.
    pub id: String,
    /// Creation timestamp, copied verbatim.
    pub created_at_iso: String,
    /// Category tag, copied verbatim.
    pub mode: String,
    /// Duration in seconds, derived from the frame timestamps.
    pub duration_s: f64,
}
