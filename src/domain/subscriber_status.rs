/// Last day count that still falls in the renewal window. A subscription
/// expiring in exactly 7 days is `Expiring`, not `Active`.
const EXPIRING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubscriberStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "expiring")]
    Expiring,
    #[serde(rename = "expired")]
    Expired,
}

impl SubscriberStatus {
    /// Derives the status tier from a signed remaining-day count.
    pub fn from_days_remaining(days_remaining: i64) -> SubscriberStatus {
        if days_remaining < 0 {
            SubscriberStatus::Expired
        } else if days_remaining <= EXPIRING_WINDOW_DAYS {
            SubscriberStatus::Expiring
        } else {
            SubscriberStatus::Active
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SubscriberStatus::Active)
    }

    pub fn is_expiring(&self) -> bool {
        matches!(self, SubscriberStatus::Expiring)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, SubscriberStatus::Expired)
    }

    pub fn parse(status: String) -> Result<SubscriberStatus, String> {
        match status.as_str() {
            "active" => Ok(SubscriberStatus::Active),
            "expiring" => Ok(SubscriberStatus::Expiring),
            "expired" => Ok(SubscriberStatus::Expired),
            _ => Err(format!("{} is not a valid subscriber status", status)),
        }
    }
}

impl AsRef<str> for SubscriberStatus {
    fn as_ref(&self) -> &str {
        match self {
            SubscriberStatus::Active => "active",
            SubscriberStatus::Expiring => "expiring",
            SubscriberStatus::Expired => "expired",
        }
    }
}
