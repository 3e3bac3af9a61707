const MIN_DIGITS: usize = 9;

/// Contact phone number, normalized to its digits.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriberPhone(String);

impl SubscriberPhone {
    /// Strips every non-digit character and requires at least 9 digits left.
    pub fn parse(phone: String) -> Result<SubscriberPhone, String> {
        let digits: String = phone.chars().filter(|char| char.is_ascii_digit()).collect();

        if digits.len() < MIN_DIGITS {
            return Err(format!(
                "{} is not a valid phone number, it must have at least {} digits",
                phone, MIN_DIGITS
            ));
        }

        Ok(Self(digits))
    }
}

impl AsRef<str> for SubscriberPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
