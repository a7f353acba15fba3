//! Lookup service - the observable operation state machine
//!
//! Every operation moves through `Idle → Loading → {Success | Error}` and is
//! re-enterable from any terminal state. `Loading` carries no payload. The
//! service owns the store instance (constructed by the composition root and
//! passed in, no global handle) and drives both resolve and import through
//! the same state cell.

use crate::import::{self, FileKind};
use crate::record::PartRecord;
use crate::resolver::{Resolution, Resolver};
use crate::storage::{DbStats, SqliteStore};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::path::Path;
use std::sync::Mutex;

/// Operation state observed by a presentation layer.
///
/// A successful lookup carries the matched record; a successful import
/// carries `None`. `Rejected`, `NotFound`, and faults all surface as
/// `Error` with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading,
    Success(Option<PartRecord>),
    Error(String),
}

/// A subscribable state holder.
///
/// Holds the current state and broadcasts every transition to subscribers.
pub struct StateCell {
    current: Mutex<LookupState>,
    subscribers: Mutex<Vec<Sender<LookupState>>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(LookupState::Idle),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current state (cloned snapshot)
    pub fn get(&self) -> LookupState {
        self.current.lock().unwrap().clone()
    }

    /// Subscribe to all future transitions
    pub fn subscribe(&self) -> Receiver<LookupState> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    fn set(&self, state: LookupState) {
        *self.current.lock().unwrap() = state.clone();
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(state.clone()).is_ok());
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives lookups and imports against an injected store, publishing
/// progress through a [`StateCell`].
pub struct LookupService {
    store: SqliteStore,
    state: StateCell,
}

impl LookupService {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store,
            state: StateCell::new(),
        }
    }

    /// The observable state cell
    pub fn state(&self) -> &StateCell {
        &self.state
    }

    /// Store statistics passthrough
    pub fn stats(&self) -> crate::Result<DbStats> {
        self.store.stats()
    }

    /// Resolve a raw scanned/typed string, returning the terminal state.
    pub fn search(&self, raw: &str) -> LookupState {
        self.state.set(LookupState::Loading);

        let terminal = match Resolver::new(&self.store).resolve(raw) {
            Ok(Resolution::Found { record, .. }) => LookupState::Success(Some(record)),
            Ok(Resolution::NotFound(message)) | Ok(Resolution::Rejected(message)) => {
                LookupState::Error(message)
            }
            Err(e) => {
                tracing::error!(error = %e, "lookup failed");
                LookupState::Error(e.to_string())
            }
        };

        self.state.set(terminal.clone());
        terminal
    }

    /// Import a CSV or XLSX file, returning the terminal state.
    ///
    /// An unrecognized file kind takes the same rejection path as empty
    /// lookup input.
    pub fn import_file(&mut self, path: &Path) -> LookupState {
        self.state.set(LookupState::Loading);

        let terminal = match FileKind::from_path(path) {
            None => {
                tracing::warn!(path = %path.display(), "unsupported file kind");
                LookupState::Error("unsupported input".to_string())
            }
            Some(kind) => match import::import_path(&mut self.store, path, kind) {
                Ok(count) => {
                    tracing::info!(count, path = %path.display(), "import succeeded");
                    LookupState::Success(None)
                }
                Err(e) => {
                    tracing::error!(error = %e, "import failed");
                    LookupState::Error(e.to_string())
                }
            },
        };

        self.state.set(terminal.clone());
        terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn service_with(records: &[PartRecord]) -> LookupService {
        let store = SqliteStore::open_in_memory().unwrap();
        for record in records {
            store.insert_record(record).unwrap();
        }
        LookupService::new(store)
    }

    #[test]
    fn test_starts_idle() {
        let service = service_with(&[]);
        assert_eq!(service.state().get(), LookupState::Idle);
    }

    #[test]
    fn test_search_hit_transitions_through_loading_to_success() {
        let service = service_with(&[PartRecord::new("4123", "B7")]);
        let rx = service.state().subscribe();

        let terminal = service.search("P4123");

        assert!(matches!(terminal, LookupState::Success(Some(_))));
        assert_eq!(rx.recv().unwrap(), LookupState::Loading);
        assert!(matches!(rx.recv().unwrap(), LookupState::Success(Some(_))));
    }

    #[test]
    fn test_search_miss_is_error_state() {
        let service = service_with(&[]);

        let terminal = service.search("X99");

        assert_eq!(
            terminal,
            LookupState::Error("Part not found.\nNumber scanned: X99".to_string())
        );
    }

    #[test]
    fn test_empty_input_is_error_state() {
        let service = service_with(&[]);

        assert_eq!(
            service.search(""),
            LookupState::Error("unsupported input".to_string())
        );
    }

    #[test]
    fn test_reenterable_after_error() {
        let service = service_with(&[PartRecord::new("A1", "S1")]);

        assert!(matches!(service.search("missing"), LookupState::Error(_)));
        assert!(matches!(
            service.search("A1"),
            LookupState::Success(Some(_))
        ));
    }

    #[test]
    fn test_import_csv_file_succeeds_with_none_payload() {
        let mut service = service_with(&[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parts.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "PartNumber,EMP_Location").unwrap();
        writeln!(file, "A1,Shelf2").unwrap();

        let terminal = service.import_file(&path);

        assert_eq!(terminal, LookupState::Success(None));
        assert!(matches!(
            service.search("A1"),
            LookupState::Success(Some(_))
        ));
    }

    #[test]
    fn test_import_bad_header_leaves_existing_records() {
        let mut service = service_with(&[PartRecord::new("KEEP", "Z1")]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parts.csv");
        std::fs::write(&path, "Foo,Bar\nA1,Shelf2\n").unwrap();

        let terminal = service.import_file(&path);

        assert!(matches!(terminal, LookupState::Error(_)));
        assert!(matches!(
            service.search("KEEP"),
            LookupState::Success(Some(_))
        ));
    }

    #[test]
    fn test_import_unknown_extension_rejected_like_empty_input() {
        let mut service = service_with(&[]);

        let terminal = service.import_file(Path::new("parts.pdf"));

        assert_eq!(terminal, LookupState::Error("unsupported input".to_string()));
    }

    #[test]
    fn test_state_cell_snapshot_tracks_terminal_state() {
        let service = service_with(&[]);
        service.search("missing");
        assert!(matches!(service.state().get(), LookupState::Error(_)));
    }
}
