use std::{cell::RefCell, sync::Arc};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ebw_core::usecases as uc;

mod repo_impl;
mod repo_wrapper;
mod storage;

use storage::MemoryStorage;

type SharedStorage = Arc<RwLock<MemoryStorage>>;

/// Handle to an in-memory database.
///
/// Clones share the same storage. Multiple read connections can be
/// accessed concurrently while a single write connection at a time
/// holds the storage exclusively.
#[derive(Default, Clone)]
pub struct Connections {
    storage: SharedStorage,
}

impl Connections {
    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            storage: self.storage.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            storage: self.storage.write(),
        }
    }
}

pub struct DbReadOnly<'a> {
    storage: RwLockReadGuard<'a, MemoryStorage>,
}

impl DbReadOnly<'_> {
    fn inner(&self) -> &MemoryStorage {
        &self.storage
    }
}

pub struct DbReadWrite<'a> {
    storage: RwLockWriteGuard<'a, MemoryStorage>,
}

impl DbReadWrite<'_> {
    /// All-or-nothing execution of `f`.
    ///
    /// The closure operates on a private copy of the storage that
    /// replaces the shared state only if `f` succeeds. The exclusive
    /// lock is held for the whole call, so no other writer can
    /// interleave between the reads and writes of the closure.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&MemoryConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let conn = MemoryConnection {
            storage: RefCell::new(self.storage.clone()),
        };
        match f(&conn) {
            Ok(value) => {
                *self.storage = conn.storage.into_inner();
                Ok(value)
            }
            Err(err) => {
                let err = err.into();
                log::debug!("Discarding transaction changes: {err}");
                Err(err)
            }
        }
    }
}

/// The connection handed into a transaction closure.
pub struct MemoryConnection {
    storage: RefCell<MemoryStorage>,
}
