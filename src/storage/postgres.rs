use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::message_log::MessageLog;
use crate::domain::service_type::ServiceType;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;
use crate::domain::subscriber_status::SubscriberStatus;
use crate::storage::{MessageLogStore, StoreError, SubscriberChanges, SubscriberStore};

pub struct PgSubscriberStore {
    pool: PgPool,
}

impl PgSubscriberStore {
    pub fn new(pool: PgPool) -> PgSubscriberStore {
        PgSubscriberStore { pool }
    }
}

// Dates and timestamps travel as ISO-8601 text columns, so rows decode
// through the same parse functions the API boundary uses.
fn subscriber_from_row(row: PgRow) -> Subscriber {
    Subscriber {
        id: row.get("id"),
        service: ServiceType::parse(row.get("service")).unwrap(),
        name: SubscriberName::parse(row.get("name")).unwrap(),
        phone: SubscriberPhone::parse(row.get("phone")).unwrap(),
        email: SubscriberEmail::parse(row.get("email")).unwrap(),
        expiration_date: row.get::<String, _>("expiration_date").parse().unwrap(),
        status: SubscriberStatus::parse(row.get("status")).unwrap(),
        days_remaining: row.get("days_remaining"),
        created_at: parse_timestamp(row.get("created_at")),
        updated_at: parse_timestamp(row.get("updated_at")),
    }
}

fn parse_timestamp(raw: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&raw).unwrap().with_timezone(&Utc)
}

#[async_trait]
impl SubscriberStore for PgSubscriberStore {
    #[tracing::instrument(name = "Insert a subscriber row", skip(self, subscriber))]
    async fn insert(&self, subscriber: &Subscriber) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO subscribers
                (id, service, name, phone, email, expiration_date, status, days_remaining, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&subscriber.id)
        .bind(subscriber.service.as_ref())
        .bind(subscriber.name.as_ref())
        .bind(subscriber.phone.as_ref())
        .bind(subscriber.email.as_ref())
        .bind(subscriber.expiration_date.to_string())
        .bind(subscriber.status.as_ref())
        .bind(subscriber.days_remaining)
        .bind(subscriber.created_at.to_rfc3339())
        .bind(subscriber.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Fetch every subscriber row", skip(self))]
    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError> {
        let subscribers = sqlx::query(
            r#"
            SELECT id, service, name, phone, email, expiration_date, status, days_remaining, created_at, updated_at
            FROM subscribers
            "#,
        )
        .map(subscriber_from_row)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscribers)
    }

    #[tracing::instrument(name = "Fetch a subscriber row by id", skip(self))]
    async fn find_one(&self, id: &str) -> Result<Option<Subscriber>, StoreError> {
        let subscriber = sqlx::query(
            r#"
            SELECT id, service, name, phone, email, expiration_date, status, days_remaining, created_at, updated_at
            FROM subscribers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .map(subscriber_from_row)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subscriber)
    }

    #[tracing::instrument(name = "Patch a subscriber row", skip(self, changes))]
    async fn update_one(
        &self,
        id: &str,
        changes: &SubscriberChanges,
    ) -> Result<u64, StoreError> {
        // Assignments and binds are pushed in lockstep so the placeholder
        // numbering stays aligned.
        let mut assignments = vec![String::from("updated_at = $1")];
        let mut next_placeholder = 2;
        let columns = [
            ("service", changes.service.is_some()),
            ("name", changes.name.is_some()),
            ("phone", changes.phone.is_some()),
            ("email", changes.email.is_some()),
            ("expiration_date", changes.expiration_date.is_some()),
            ("status", changes.status.is_some()),
            ("days_remaining", changes.days_remaining.is_some()),
        ];

        for (column, is_present) in columns {
            if is_present {
                assignments.push(format!("{} = ${}", column, next_placeholder));
                next_placeholder += 1;
            }
        }

        let statement = format!(
            "UPDATE subscribers SET {} WHERE id = ${}",
            assignments.join(", "),
            next_placeholder
        );

        let mut query = sqlx::query(&statement).bind(changes.updated_at.to_rfc3339());

        if let Some(service) = &changes.service {
            query = query.bind(service.as_ref());
        }
        if let Some(name) = &changes.name {
            query = query.bind(name.as_ref());
        }
        if let Some(phone) = &changes.phone {
            query = query.bind(phone.as_ref());
        }
        if let Some(email) = &changes.email {
            query = query.bind(email.as_ref());
        }
        if let Some(expiration_date) = &changes.expiration_date {
            query = query.bind(expiration_date.to_string());
        }
        if let Some(status) = &changes.status {
            query = query.bind(status.as_ref());
        }
        if let Some(days_remaining) = changes.days_remaining {
            query = query.bind(days_remaining);
        }

        let result = query.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Delete a subscriber row", skip(self))]
    async fn delete_one(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

pub struct PgMessageLogStore {
    pool: PgPool,
}

impl PgMessageLogStore {
    pub fn new(pool: PgPool) -> PgMessageLogStore {
        PgMessageLogStore { pool }
    }
}

#[async_trait]
impl MessageLogStore for PgMessageLogStore {
    #[tracing::instrument(name = "Insert a message log row", skip(self, message_log))]
    async fn insert(&self, message_log: &MessageLog) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO message_logs (id, subscriber_id, message_type, message, status, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&message_log.id)
        .bind(&message_log.subscriber_id)
        .bind(message_log.message_type.as_ref())
        .bind(&message_log.message)
        .bind(message_log.status.as_ref())
        .bind(message_log.sent_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
