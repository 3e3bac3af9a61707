use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::message_log::MessageLog;
use crate::domain::subscriber::Subscriber;
use crate::storage::{MessageLogStore, StoreError, SubscriberChanges, SubscriberStore};

/// Map-backed subscriber collection with the same single-document write
/// semantics as the real store. Iteration order is unspecified.
pub struct InMemorySubscriberStore {
    rows: RwLock<HashMap<String, Subscriber>>,
}

impl InMemorySubscriberStore {
    pub fn new() -> InMemorySubscriberStore {
        InMemorySubscriberStore {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySubscriberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn insert(&self, subscriber: &Subscriber) -> Result<(), StoreError> {
        self.rows
            .write()
            .expect("subscriber store lock poisoned")
            .insert(subscriber.id.clone(), subscriber.clone());

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError> {
        let rows = self.rows.read().expect("subscriber store lock poisoned");

        Ok(rows.values().cloned().collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Subscriber>, StoreError> {
        let rows = self.rows.read().expect("subscriber store lock poisoned");

        Ok(rows.get(id).cloned())
    }

    async fn update_one(
        &self,
        id: &str,
        changes: &SubscriberChanges,
    ) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().expect("subscriber store lock poisoned");

        let row = match rows.get_mut(id) {
            Some(row) => row,
            None => return Ok(0),
        };

        if let Some(service) = changes.service {
            row.service = service;
        }
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(phone) = &changes.phone {
            row.phone = phone.clone();
        }
        if let Some(email) = &changes.email {
            row.email = email.clone();
        }
        if let Some(expiration_date) = changes.expiration_date {
            row.expiration_date = expiration_date;
        }
        if let Some(status) = changes.status {
            row.status = status;
        }
        if let Some(days_remaining) = changes.days_remaining {
            row.days_remaining = days_remaining;
        }
        row.updated_at = changes.updated_at;

        Ok(1)
    }

    async fn delete_one(&self, id: &str) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().expect("subscriber store lock poisoned");

        match rows.remove(id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}

/// Append-only in-memory message log.
pub struct InMemoryMessageLogStore {
    rows: RwLock<Vec<MessageLog>>,
}

impl InMemoryMessageLogStore {
    pub fn new() -> InMemoryMessageLogStore {
        InMemoryMessageLogStore {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of every recorded message, in insertion order.
    pub fn entries(&self) -> Vec<MessageLog> {
        self.rows
            .read()
            .expect("message log store lock poisoned")
            .clone()
    }
}

impl Default for InMemoryMessageLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageLogStore for InMemoryMessageLogStore {
    async fn insert(&self, message_log: &MessageLog) -> Result<(), StoreError> {
        self.rows
            .write()
            .expect("message log store lock poisoned")
            .push(message_log.clone());

        Ok(())
    }
}
