use folio_core::repositories::{Error as RepoError, VisitCounterRepo};
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{
    io::{self, ErrorKind},
    path::Path,
    sync::{Mutex, MutexGuard},
};

type Result<T> = std::result::Result<T, RepoError>;

/// Visit counters stored in a single JSON file.
///
/// All accesses of a process are serialized, so concurrent
/// increments never get lost. The file must not be shared
/// between multiple processes.
pub struct JsonFileVisitCounter {
    json_store: Mutex<Store>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoredVisits {
    count: u64,
}

impl JsonFileVisitCounter {
    pub fn try_new<P: AsRef<Path>>(file: P) -> io::Result<Self> {
        let cfg = jfs::Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let json_store = Store::new_with_cfg(file, cfg)?;
        log::info!(
            "Store visit counters in {}",
            json_store.path().display()
        );
        Ok(Self {
            json_store: Mutex::new(json_store),
        })
    }

    fn lock(&self) -> MutexGuard<Store> {
        match self.json_store.lock() {
            Ok(guard) => guard,
            Err(poison_err) => {
                log::error!("A poisoned lock of the visit counter store was found.");
                poison_err.into_inner()
            }
        }
    }
}

fn load(store: &Store, page: &str) -> Result<StoredVisits> {
    match store.get::<StoredVisits>(page) {
        Ok(visits) => Ok(visits),
        // Counters are created on their first visit
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoredVisits::default()),
        Err(err) => Err(err.into()),
    }
}

impl VisitCounterRepo for JsonFileVisitCounter {
    fn visits(&self, page: &str) -> Result<u64> {
        let store = self.lock();
        Ok(load(&store, page)?.count)
    }

    fn increment_visits(&self, page: &str) -> Result<u64> {
        let store = self.lock();
        let mut visits = load(&store, page)?;
        visits.count += 1;
        store.save_with_id(&visits, page)?;
        Ok(visits.count)
    }
}
