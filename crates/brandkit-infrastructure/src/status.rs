//! Shared loading/error bookkeeping for the resource stores.

use brandkit_core::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Loading flag and last error of a resource store.
///
/// Every store operation goes `begin` → work → `complete`: loading is set
/// and the error cleared on entry, and loading is dropped unconditionally
/// on exit whatever the outcome was.
#[derive(Debug, Default)]
pub(crate) struct StoreStatus {
    loading: AtomicBool,
    error: RwLock<Option<String>>,
}

impl StoreStatus {
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn last_error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    pub async fn begin(&self) {
        self.loading.store(true, Ordering::SeqCst);
        *self.error.write().await = None;
    }

    /// Records the outcome and clears the loading flag, passing the result
    /// through so callers can still react to the failure.
    pub async fn complete<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            *self.error.write().await = Some(err.to_string());
        }
        self.loading.store(false, Ordering::SeqCst);
        result
    }
}
