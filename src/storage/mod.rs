use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::message_log::MessageLog;
use crate::domain::service_type::ServiceType;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;
use crate::domain::subscriber_status::SubscriberStatus;

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMessageLogStore, InMemorySubscriberStore};
pub use postgres::{PgMessageLogStore, PgSubscriberStore};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to execute query: {0}")]
    Database(#[from] sqlx::Error),
}

/// Sparse field set for `update_one`. Only the present fields are written;
/// `updated_at` is always part of the write.
pub struct SubscriberChanges {
    pub service: Option<ServiceType>,
    pub name: Option<SubscriberName>,
    pub phone: Option<SubscriberPhone>,
    pub email: Option<SubscriberEmail>,
    pub expiration_date: Option<NaiveDate>,
    pub status: Option<SubscriberStatus>,
    pub days_remaining: Option<i64>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriberChanges {
    pub fn new(updated_at: DateTime<Utc>) -> SubscriberChanges {
        SubscriberChanges {
            service: None,
            name: None,
            phone: None,
            email: None,
            expiration_date: None,
            status: None,
            days_remaining: None,
            updated_at,
        }
    }

    /// Change set that only rewrites the derived fields, used by the
    /// recompute-on-list pass.
    pub fn refresh(
        days_remaining: i64,
        status: SubscriberStatus,
        updated_at: DateTime<Utc>,
    ) -> SubscriberChanges {
        let mut changes = SubscriberChanges::new(updated_at);
        changes.days_remaining = Some(days_remaining);
        changes.status = Some(status);

        changes
    }
}

/// Narrow interface over the `subscribers` collection. Each operation maps
/// to a single store round-trip; write atomicity is the store's.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    async fn insert(&self, subscriber: &Subscriber) -> Result<(), StoreError>;

    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError>;

    async fn find_one(&self, id: &str) -> Result<Option<Subscriber>, StoreError>;

    /// Returns the number of rows the patch touched (0 when `id` is absent).
    async fn update_one(&self, id: &str, changes: &SubscriberChanges)
        -> Result<u64, StoreError>;

    /// Returns the number of rows removed (0 when `id` is absent).
    async fn delete_one(&self, id: &str) -> Result<u64, StoreError>;
}

/// The `message_logs` collection is append-only: rows are never updated or
/// deleted once written.
#[async_trait]
pub trait MessageLogStore: Send + Sync {
    async fn insert(&self, message_log: &MessageLog) -> Result<(), StoreError>;
}
