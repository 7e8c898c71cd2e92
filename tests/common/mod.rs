use std::sync::Mutex;

use fintrack_core::{core::LedgerManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique data directory.
pub fn setup_manager() -> LedgerManager {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonStorage::new(temp.path().to_path_buf()).expect("create json storage backend");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    LedgerManager::open(Box::new(storage)).expect("open ledger manager")
}
