use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::expiry::days_remaining;
use crate::domain::message_log::{MessageLog, MessageStatus, MessageType};
use crate::domain::new_subscriber::NewSubscriber;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_status::SubscriberStatus;
use crate::domain::update_subscriber::SubscriberUpdate;
use crate::storage::{MessageLogStore, StoreError, SubscriberChanges, SubscriberStore};

/// Flat monthly price per not-yet-expired subscription.
const MONTHLY_UNIT_PRICE: f64 = 15.0;

#[derive(Debug, serde::Serialize)]
pub struct SubscriberStats {
    pub total: usize,
    pub expiring: usize,
    pub active: usize,
    pub expired: usize,
    pub revenue: f64,
}

/// CRUD over subscriber records with status recomputation built into every
/// access path, plus statistics and the message log.
pub struct SubscriberRepository {
    subscribers: Arc<dyn SubscriberStore>,
    message_logs: Arc<dyn MessageLogStore>,
}

impl SubscriberRepository {
    pub fn new(
        subscribers: Arc<dyn SubscriberStore>,
        message_logs: Arc<dyn MessageLogStore>,
    ) -> SubscriberRepository {
        SubscriberRepository {
            subscribers,
            message_logs,
        }
    }

    #[tracing::instrument(name = "Create a subscriber", skip(self, new_subscriber))]
    pub async fn create(&self, new_subscriber: NewSubscriber) -> Result<Subscriber, StoreError> {
        let now = Utc::now();
        let days = days_remaining(new_subscriber.expiration_date, now.date_naive());

        let subscriber = Subscriber {
            id: Uuid::new_v4().to_string(),
            service: new_subscriber.service,
            name: new_subscriber.name,
            phone: new_subscriber.phone,
            email: new_subscriber.email,
            expiration_date: new_subscriber.expiration_date,
            status: SubscriberStatus::from_days_remaining(days),
            days_remaining: days,
            created_at: now,
            updated_at: now,
        };

        self.subscribers.insert(&subscriber).await?;

        tracing::info!("Created subscriber {}", subscriber.name.as_ref());

        Ok(subscriber)
    }

    /// Returns every subscriber with freshly derived fields, writing the
    /// recomputed values back even when they did not change. Every listing
    /// is therefore also a write pass over the whole collection.
    #[tracing::instrument(name = "List subscribers", skip(self))]
    pub async fn list(&self) -> Result<Vec<Subscriber>, StoreError> {
        let rows = self.subscribers.find_all().await?;
        let mut subscribers = Vec::with_capacity(rows.len());

        for mut subscriber in rows {
            let now = Utc::now();

            subscriber.refresh_derived_fields(now.date_naive());
            subscriber.updated_at = now;

            self.subscribers
                .update_one(
                    &subscriber.id,
                    &SubscriberChanges::refresh(
                        subscriber.days_remaining,
                        subscriber.status,
                        now,
                    ),
                )
                .await?;

            subscribers.push(subscriber);
        }

        tracing::info!("Retrieved {} subscribers", subscribers.len());

        Ok(subscribers)
    }

    /// Single lookups refresh the derived fields on the returned record
    /// only; the stored row is left as-is, unlike `list`.
    #[tracing::instrument(name = "Get a subscriber by id", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Subscriber>, StoreError> {
        let subscriber = self.subscribers.find_one(id).await?.map(|mut subscriber| {
            subscriber.refresh_derived_fields(Utc::now().date_naive());
            subscriber
        });

        Ok(subscriber)
    }

    /// Applies only the fields present in `update`. Derived fields are
    /// recomputed when the expiration date moves and left stored otherwise.
    #[tracing::instrument(name = "Update a subscriber", skip(self, update))]
    pub async fn update(
        &self,
        id: &str,
        update: SubscriberUpdate,
    ) -> Result<Option<Subscriber>, StoreError> {
        let current = match self.get_by_id(id).await? {
            Some(subscriber) => subscriber,
            None => return Ok(None),
        };

        let now = Utc::now();
        let mut changes = SubscriberChanges::new(now);
        changes.service = update.service;
        changes.name = update.name;
        changes.phone = update.phone;
        changes.email = update.email;
        changes.expiration_date = update.expiration_date;

        if let Some(expiration_date) = update.expiration_date {
            let days = days_remaining(expiration_date, now.date_naive());
            changes.days_remaining = Some(days);
            changes.status = Some(SubscriberStatus::from_days_remaining(days));
        }

        let modified = self.subscribers.update_one(id, &changes).await?;

        if modified > 0 {
            tracing::info!("Updated subscriber {}", id);
            return self.get_by_id(id).await;
        }

        Ok(Some(current))
    }

    #[tracing::instrument(name = "Delete a subscriber", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self.subscribers.delete_one(id).await?;

        if removed > 0 {
            tracing::info!("Deleted subscriber {}", id);
        }

        Ok(removed > 0)
    }

    /// Aggregates over the freshly recomputed collection, so it pays the
    /// same write pass as `list`.
    #[tracing::instrument(name = "Aggregate subscriber stats", skip(self))]
    pub async fn get_stats(&self) -> Result<SubscriberStats, StoreError> {
        let subscribers = self.list().await?;

        let active = subscribers.iter().filter(|s| s.status.is_active()).count();
        let expiring = subscribers.iter().filter(|s| s.status.is_expiring()).count();
        let expired = subscribers.iter().filter(|s| s.status.is_expired()).count();

        Ok(SubscriberStats {
            total: subscribers.len(),
            expiring,
            active,
            expired,
            revenue: (active + expiring) as f64 * MONTHLY_UNIT_PRICE,
        })
    }

    /// Persists the composed message as sent. The subscriber reference is
    /// not checked here; callers look the subscriber up first.
    #[tracing::instrument(name = "Record a message log", skip(self, message))]
    pub async fn record_message(
        &self,
        subscriber_id: &str,
        message_type: MessageType,
        message: String,
    ) -> Result<MessageLog, StoreError> {
        let message_log = MessageLog {
            id: Uuid::new_v4().to_string(),
            subscriber_id: subscriber_id.to_string(),
            message_type,
            message,
            status: MessageStatus::Sent,
            sent_at: Utc::now(),
        };

        self.message_logs.insert(&message_log).await?;

        tracing::info!("Created message log for subscriber {}", subscriber_id);

        Ok(message_log)
    }
}
