use chrono::NaiveDate;

/// Signed whole-day count between `today` and the expiration date.
/// Negative means the subscription is already past due.
pub fn days_remaining(expiration_date: NaiveDate, today: NaiveDate) -> i64 {
    expiration_date.signed_duration_since(today).num_days()
}
