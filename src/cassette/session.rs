//! A recording session: one recorder per port, one directory per run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::info;

use super::recorder::CassetteRecorder;

/// Shared handle to a recorder, held by the recording adapters.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Owns the per-port recorders of one run.
///
/// Cassettes land in `<root>/<timestamp>/<port>.cassette.yaml`.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: SharedRecorder,
    /// Recorder for ID generator interactions.
    pub id_gen: SharedRecorder,
    /// Recorder for storage interactions.
    pub storage: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates a fresh timestamped directory under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: make("clock"),
            id_gen: make("id_gen"),
            storage: make("storage"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all cassettes. The recording adapters must have been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            let interactions = recorder.len();
            let path = recorder
                .finish()
                .map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            info!(
                "event=cassette_write status=ok port={port} interactions={interactions} path={}",
                path.display()
            );
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.id_gen, "id_gen")?;
        finish_one(self.storage, "storage")?;
        Ok(self.output_dir)
    }
}
