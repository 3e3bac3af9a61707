use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::expiry::days_remaining;
use crate::domain::service_type::ServiceType;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;
use crate::domain::subscriber_status::SubscriberStatus;

/// A tracked subscription grant. `status` and `days_remaining` are derived
/// from `expiration_date` and are refreshed on every access, never set by
/// callers.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub service: ServiceType,
    pub name: SubscriberName,
    pub phone: SubscriberPhone,
    pub email: SubscriberEmail,
    pub expiration_date: NaiveDate,
    pub status: SubscriberStatus,
    pub days_remaining: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscriber {
    /// Overwrites the derived fields from the expiration date as of `today`.
    pub fn refresh_derived_fields(&mut self, today: NaiveDate) {
        self.days_remaining = days_remaining(self.expiration_date, today);
        self.status = SubscriberStatus::from_days_remaining(self.days_remaining);
    }
}
