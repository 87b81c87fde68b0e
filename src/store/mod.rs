//! File-backed persistence for recording documents.
//!
//! One JSON document per recording, named `{id}.json` under a fixed backing
//! directory. The document is the sole source of truth; no secondary index
//! is maintained, and every read goes back to disk.

mod summary;

pub use summary::{duration_seconds, summarize};

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use log::warn;
use uuid::Uuid;

use crate::schema::{Recording, RecordingDraft, RecordingSummary};

/// Errors raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document exists for the requested id.
    #[error("recording {0} not found")]
    NotFound(String),
    /// A document exists but could not be parsed.
    #[error("recording {id} is corrupt: {source}")]
    Corrupt {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backing store could not be read or written.
    #[error("storage unavailable: {0}")]
    Io(#[from] io::Error),
}

/// File-per-recording store over a backing directory.
///
/// All operations are stateless calls against durable storage and may be
/// invoked concurrently. Two creates racing on the same id clobber each
/// other, last writer wins; that matches the intended overwrite semantics.
///
/// Usage:
/// ```ignore
/// let store = RecordingStore::new("data/recordings")?;
/// let id = store.create(draft)?;
/// let recording = store.get(&id)?;
/// for summary in store.list()? {
///     println!("{} {}", summary.id, summary.duration_s);
/// }
/// ```
pub struct RecordingStore {
    root: PathBuf,
}

impl RecordingStore {
    /// Open a store rooted at `root`, creating the directory if missing.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Backing directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a recording and return the id it was stored under.
    ///
    /// A draft without an id gets a fresh random one; a caller-supplied id
    /// is used as-is, silently overwriting any prior document with that id.
    /// The document is staged to a temporary file and renamed into place,
    /// so readers never observe a partial write.
    pub fn create(&self, draft: RecordingDraft) -> Result<String, StoreError> {
        let id = match &draft.id {
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        };

        let recording = draft.into_recording(id.clone());
        let bytes = serde_json::to_vec(&recording).map_err(io::Error::from)?;

        let staging = self.root.join(format!("{id}.json.tmp"));
        fs::write(&staging, &bytes)?;
        fs::rename(&staging, self.document_path(&id))?;

        Ok(id)
    }

    /// Fetch the full document stored under `id`, frames included.
    pub fn get(&self, id: &str) -> Result<Recording, StoreError> {
        let bytes = match fs::read(self.document_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            id: id.to_string(),
            source,
        })
    }

    /// Build the catalog: one summary per readable document, sorted by
    /// `created_at_iso` descending (plain string comparison).
    ///
    /// Unreadable or unparseable entries are logged and skipped so that one
    /// corrupt recording cannot take down the whole catalog. Only a failure
    /// to enumerate the directory itself is an error; a missing backing
    /// directory yields an empty catalog.
    pub fn list(&self) -> Result<Vec<RecordingSummary>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("skipping unreadable entry {}: {}", path.display(), e);
                    continue;
                }
            };

            let recording: Recording = match serde_json::from_slice(&bytes) {
                Ok(recording) => recording,
                Err(e) => {
                    warn!("skipping corrupt entry {}: {}", path.display(), e);
                    continue;
                }
            };

            summaries.push(summarize(&recording));
        }

        summaries.sort_by(|a, b| b.created_at_iso.cmp(&a.created_at_iso));
        Ok(summaries)
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Frame;
    use std::fs;
    use tempfile::tempdir;

    fn draft(id: Option<&str>, created_at_iso: &str, mode: &str, t_ms: &[f64]) -> RecordingDraft {
        RecordingDraft {
            id: id.map(str::to_string),
            created_at_iso: created_at_iso.to_string(),
            mode: mode.to_string(),
            frames: t_ms.iter().copied().map(Frame::at).collect(),
        }
    }

    #[test]
    fn test_create_generates_id() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        let id = store
            .create(draft(None, "2026-01-01T00:00:00Z", "walk", &[0.0, 1000.0]))
            .unwrap();
        assert!(!id.is_empty());

        let recording = store.get(&id).unwrap();
        assert_eq!(recording.id, id);
        assert_eq!(recording.mode, "walk");
        assert_eq!(recording.frames.len(), 2);
    }

    #[test]
    fn test_create_preserves_frame_payload() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        let mut frame = Frame::at(100.0);
        frame
            .extra
            .insert("pose".to_string(), serde_json::json!({"x": 1.5, "y": -2.0}));

        let id = store
            .create(RecordingDraft {
                id: None,
                created_at_iso: "2026-01-01T00:00:00Z".to_string(),
                mode: "walk".to_string(),
                frames: vec![frame.clone()],
            })
            .unwrap();

        let recording = store.get(&id).unwrap();
        assert_eq!(recording.frames[0], frame);
    }

    #[test]
    fn test_create_with_supplied_id_overwrites() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        store
            .create(draft(Some("r1"), "2026-01-01T00:00:00Z", "walk", &[0.0]))
            .unwrap();
        let id = store
            .create(draft(Some("r1"), "2026-01-02T00:00:00Z", "run", &[0.0, 500.0]))
            .unwrap();
        assert_eq!(id, "r1");

        // Last writer wins.
        let recording = store.get("r1").unwrap();
        assert_eq!(recording.mode, "run");
        assert_eq!(recording.frames.len(), 2);

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
    }

    #[test]
    fn test_get_missing_id() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        match store.get("never-written") {
            Err(StoreError::NotFound(id)) => assert_eq!(id, "never-written"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_get_corrupt_document() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        let id = store
            .create(draft(None, "2026-01-01T00:00:00Z", "walk", &[0.0, 1000.0]))
            .unwrap();

        // Truncate the document after writing.
        let path = dir.path().join(format!("{id}.json"));
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        match store.get(&id) {
            Err(StoreError::Corrupt { id: bad, .. }) => assert_eq!(bad, id),
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn test_list_empty_store() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_root() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path().join("recordings")).unwrap();

        fs::remove_dir_all(store.root()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_skips_corrupt_entries() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        store
            .create(draft(Some("good"), "2026-01-01T00:00:00Z", "walk", &[0.0]))
            .unwrap();
        fs::write(dir.path().join("bad.json"), b"{\"id\": \"bad\", trunc").unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "good");
    }

    #[test]
    fn test_list_ignores_foreign_files() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        fs::write(dir.path().join("notes.txt"), b"not a recording").unwrap();
        fs::write(dir.path().join("stale.json.tmp"), b"{").unwrap();

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_descending() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        for (id, ts) in [
            ("a", "2026-01-01T00:00:00Z"),
            ("c", "2026-01-03T00:00:00Z"),
            ("b", "2026-01-02T00:00:00Z"),
        ] {
            store.create(draft(Some(id), ts, "walk", &[0.0])).unwrap();
        }

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn test_list_catalog_scenario() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        store
            .create(draft(
                Some("a"),
                "2026-01-01T00:00:00Z",
                "walk",
                &[0.0, 1000.0, 2000.0],
            ))
            .unwrap();
        store
            .create(draft(Some("b"), "2026-01-02T00:00:00Z", "run", &[0.0, 500.0]))
            .unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].id, "b");
        assert_eq!(summaries[0].mode, "run");
        assert_eq!(summaries[0].duration_s, 0.5);

        assert_eq!(summaries[1].id, "a");
        assert_eq!(summaries[1].mode, "walk");
        assert_eq!(summaries[1].duration_s, 2.0);
    }

    #[test]
    fn test_empty_frames_zero_duration() {
        let dir = tempdir().unwrap();
        let store = RecordingStore::new(dir.path()).unwrap();

        store
            .create(draft(Some("empty"), "2026-01-01T00:00:00Z", "idle", &[]))
            .unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(summaries[0].duration_s, 0.0);
    }
}
