//! In-memory implementation of the registry.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::{LinkRecord, NewLink, Registry, RegistryError};

/// Registry backed by a mutex-guarded in-process map.
///
/// Development and demo backing only: records do not survive a restart and
/// there is no cross-process coordination. The existence check and the
/// insert happen under one lock, so uniqueness needs no store-side arbiter
/// here.
pub struct MemoryRegistry {
    records: Mutex<HashMap<String, LinkRecord>>,
    next_id: AtomicI64,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Registry for MemoryRegistry {
    async fn register(&self, new_link: NewLink) -> Result<LinkRecord, RegistryError> {
        let mut records = self.records.lock().expect("registry map poisoned");

        if records.contains_key(&new_link.short_token) {
            return Err(RegistryError::TokenTaken);
        }

        let record = LinkRecord::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.short_token.clone(),
            new_link.destination,
            Utc::now(),
        );

        records.insert(new_link.short_token, record.clone());
        Ok(record)
    }

    async fn resolve(&self, short_token: &str) -> Result<LinkRecord, RegistryError> {
        self.records
            .lock()
            .expect("registry map poisoned")
            .get(short_token)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        Ok(())
    }
}
