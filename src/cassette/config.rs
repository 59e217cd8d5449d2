//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Optional cassette file per port. Ports left as `None` get an adapter
/// that panics when called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the ID generator port.
    pub id_gen: Option<PathBuf>,
    /// Cassette for the storage port.
    pub storage: Option<PathBuf>,
}

/// One replayer per configured port.
#[derive(Debug)]
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the ID generator port.
    pub id_gen: Option<CassetteReplayer>,
    /// Replayer for the storage port.
    pub storage: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Uses the files a [`RecordingSession`](super::session::RecordingSession)
    /// writes into `dir`, for whichever of them exist.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let pick = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self { clock: pick("clock"), id_gen: pick("id_gen"), storage: pick("storage") }
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: Option<&Path>| -> Result<Option<CassetteReplayer>, String> {
            path.map(|p| Cassette::load(p).map(|c| CassetteReplayer::new(&c))).transpose()
        };
        Ok(PortReplayers {
            clock: load(self.clock.as_deref())?,
            id_gen: load(self.id_gen.as_deref())?,
            storage: load(self.storage.as_deref())?,
        })
    }
}
