use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Registry of request keys that are currently executing.
///
/// `try_acquire` hands out a guard for a key only when no other guard for
/// that key is alive. Dropping the guard releases the key, so an early
/// return or a failed request can never leave a key stuck.
#[derive(Clone, Default)]
pub struct InFlight {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        let mut keys = self.keys.lock().unwrap_or_else(|e| e.into_inner());
        if !keys.insert(key.clone()) {
            tracing::debug!(%key, "request already in flight, skipping");
            return None;
        }
        Some(InFlightGuard {
            key,
            keys: self.keys.clone(),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}

impl PartialEq for InFlight {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.keys, &other.keys)
    }
}

pub struct InFlightGuard {
    key: String,
    keys: Arc<Mutex<HashSet<String>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut keys = self.keys.lock().unwrap_or_else(|e| e.into_inner());
        keys.remove(&self.key);
    }
}
