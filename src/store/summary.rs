//! Summary derivation for catalog listings.
//!
//! Duration is the maximum frame timestamp, not the last one: frame order
//! is caller-supplied and never verified to be monotonic, so the last frame
//! is not guaranteed to be the latest.

use crate::schema::{Frame, Recording, RecordingSummary};

/// Compute the duration of a frame sequence in seconds.
///
/// Returns `max(t_ms) / 1000` over all frames, or `0.0` for an empty
/// sequence.
pub fn duration_seconds(frames: &[Frame]) -> f64 {
    frames
        .iter()
        .map(|f| f.t_ms)
        .reduce(f64::max)
        .map(|max_ms| max_ms / 1000.0)
        .unwrap_or(0.0)
}

/// Derive the catalog view of a recording.
pub fn summarize(recording: &Recording) -> RecordingSummary {
    RecordingSummary {
        id: recording.id.clone(),
        created_at_iso: recording.created_at_iso.clone(),
        mode: recording.mode.clone(),
        duration_s: duration_seconds(&recording.frames),
    }
}
