//! Service context bundling all port trait objects.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::id_gen::UuidIdGenerator;
use crate::adapters::live::storage::FileStorage;
use crate::adapters::recording::{RecordingClock, RecordingIdGenerator, RecordingStorage};
use crate::adapters::replaying::{ReplayingClock, ReplayingIdGenerator, ReplayingStorage};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::ports::storage::{Storage, StorageError};

/// Bundles one implementation of each port.
///
/// Constructors wire up different adapter sets (live, recording,
/// replaying). The task store borrows a context and never
/// reaches outside it.
pub struct ServiceContext {
    /// Clock for timestamps and "today".
    pub clock: Box<dyn Clock>,
    /// Source of task IDs.
    pub id_gen: Box<dyn IdGenerator>,
    /// Durable key-value mirror.
    pub storage: Box<dyn Storage>,
}

impl ServiceContext {
    /// Builds a context from explicit adapters.
    pub fn new(
        clock: impl Clock + 'static,
        id_gen: impl IdGenerator + 'static,
        storage: impl Storage + 'static,
    ) -> Self {
        Self { clock: Box::new(clock), id_gen: Box::new(id_gen), storage: Box::new(storage) }
    }

    /// System clock, random IDs, and files under `store_dir`.
    #[must_use]
    pub fn live(store_dir: &Path) -> Self {
        Self::new(LiveClock, UuidIdGenerator, FileStorage::new(store_dir))
    }

    /// Wraps every port of `inner` so its calls land in `session`.
    #[must_use]
    pub fn recording(inner: Self, session: &RecordingSession) -> Self {
        Self {
            clock: Box::new(RecordingClock::new(inner.clock, session.clock.clone())),
            id_gen: Box::new(RecordingIdGenerator::new(inner.id_gen, session.id_gen.clone())),
            storage: Box::new(RecordingStorage::new(inner.storage, session.storage.clone())),
        }
    }

    /// Live context recorded into a new session directory under `root`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(root: &Path, store_dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let ctx = Self::recording(Self::live(store_dir), &session);
        Ok((ctx, session))
    }

    /// Replays every port from one cassette file.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
            storage: Box::new(ReplayingStorage::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Replays from per-port cassettes. Unconfigured ports panic when used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
            storage: match replayers.storage {
                Some(r) => Box::new(ReplayingStorage::new(r)),
                None => Box::new(PanickingStorage),
            },
        })
    }
}

// --- Panicking adapters for unconfigured ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> DateTime<Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn next_id(&self) -> String {
        panic!("IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen");
    }
}

struct PanickingStorage;
impl Storage for PanickingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        panic!("Storage port not configured in CassetteConfig: no cassette loaded for storage");
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        panic!("Storage port not configured in CassetteConfig: no cassette loaded for storage");
    }
}
