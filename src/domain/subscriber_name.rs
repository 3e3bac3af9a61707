use unicode_segmentation::UnicodeSegmentation;

const MAX_CHAR_LENGHT: usize = 100;

/// Subscriber display name, stored trimmed and uppercased.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubscriberName(String);

impl SubscriberName {
    /// Normalizes the raw input (trim + uppercase) before checking it.
    pub fn parse(name: String) -> Result<SubscriberName, String> {
        let normalized = name.trim().to_uppercase();
        let is_empty = normalized.is_empty();
        let is_too_long = normalized.graphemes(true).count() > MAX_CHAR_LENGHT;

        if is_empty || is_too_long {
            return Err(format!("{} is not a valid subscriber name", name));
        }

        Ok(Self(normalized))
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
