//! Routine collection storage and persistence.
//!
//! [`RoutineStore`] exclusively owns the canonical collection; consumers get
//! a read-only view and mutate through the operations here. Every mutation
//! rewrites the full collection under the `routines` key.
//!
//! Persistence is write-before-commit: the candidate collection is
//! serialized and written first, and the in-memory collection is replaced
//! only when the write succeeded. A failed write therefore surfaces as a
//! [`StorageError`] and leaves memory matching storage.

use tracing::warn;

use super::{Routine, RoutineDraft, RoutineUpdate};
use crate::error::{Result, StorageError};
use crate::storage::{FileKvStore, KvStore, ROUTINES_KEY};

/// Canonical in-memory + persisted routine collection.
pub struct RoutineStore<S: KvStore> {
    kv: S,
    routines: Vec<Routine>,
}

impl RoutineStore<FileKvStore> {
    /// Open the store backed by the default data directory and load the
    /// persisted collection.
    pub fn open() -> Result<Self> {
        Ok(Self::with_store(FileKvStore::open()?))
    }
}

impl<S: KvStore> RoutineStore<S> {
    /// Build a store over an explicit key-value backend and load from it.
    pub fn with_store(kv: S) -> Self {
        let mut store = Self {
            kv,
            routines: Vec::new(),
        };
        store.reload();
        store
    }

    /// Re-read the persisted collection.
    ///
    /// A missing key yields an empty collection. An unreadable or corrupt
    /// payload is logged and also yields an empty collection; the app keeps
    /// running with what is in memory from that point on.
    pub fn reload(&mut self) {
        self.routines = match self.kv.get(ROUTINES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(routines) => routines,
                Err(e) => {
                    warn!(key = ROUTINES_KEY, error = %e, "corrupt routine payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = ROUTINES_KEY, error = %e, "failed to read routines, starting empty");
                Vec::new()
            }
        };
    }

    /// Read-only view of the collection, in insertion order.
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Look up a routine by id.
    pub fn get(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Create a routine from caller-supplied fields and append it.
    ///
    /// The store assigns the id and zeroes the completion state, streak and
    /// success rate. The title is validated before anything is written.
    ///
    /// # Errors
    /// Returns [`crate::ValidationError`] for a rejected title and
    /// [`StorageError`] when the write fails (the collection is unchanged).
    pub fn add(&mut self, draft: RoutineDraft) -> Result<&Routine> {
        let routine = Routine::new(draft)?;
        let mut candidate = self.routines.clone();
        candidate.push(routine);
        self.persist(&candidate)?;
        self.routines = candidate;
        Ok(self.routines.last().expect("just pushed"))
    }

    /// Merge partial fields into the routine matching `id`.
    ///
    /// An unknown id is not an error: the operation is a no-op and returns
    /// `Ok(None)`, so callers can report the miss without treating it as a
    /// failure.
    pub fn update(&mut self, id: &str, update: RoutineUpdate) -> Result<Option<&Routine>> {
        let Some(idx) = self.routines.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let mut candidate = self.routines.clone();
        candidate[idx].apply(update)?;
        self.persist(&candidate)?;
        self.routines = candidate;
        Ok(Some(&self.routines[idx]))
    }

    /// Flip today's completion for the routine matching `id`, adjusting the
    /// streak (increment on completion, floored decrement on un-completion).
    pub fn toggle(&mut self, id: &str) -> Result<Option<&Routine>> {
        let Some(idx) = self.routines.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let mut candidate = self.routines.clone();
        candidate[idx].toggle();
        self.persist(&candidate)?;
        self.routines = candidate;
        Ok(Some(&self.routines[idx]))
    }

    /// Remove the routine matching `id`. Returns whether anything was
    /// removed; a miss does not touch storage.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.routines.len();
        let candidate: Vec<Routine> =
            self.routines.iter().filter(|r| r.id != id).cloned().collect();
        if candidate.len() == before {
            return Ok(false);
        }
        self.persist(&candidate)?;
        self.routines = candidate;
        Ok(true)
    }

    /// Serialize and write the full collection under the `routines` key.
    fn persist(&self, candidate: &[Routine]) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(candidate).map_err(|e| StorageError::CorruptPayload {
                key: ROUTINES_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.kv.set(ROUTINES_KEY, &payload)
    }
}
