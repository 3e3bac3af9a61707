use chrono::{DateTime, Utc};

use crate::domain::subscriber::Subscriber;

const DEFAULT_CUSTOM_MESSAGE: &str = "Mensaje personalizado enviado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MessageType {
    #[serde(rename = "recordatorio")]
    Reminder,
    #[serde(rename = "vencimiento")]
    ExpirationNotice,
    #[serde(rename = "personalizado")]
    Custom,
}

impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        match self {
            MessageType::Reminder => "recordatorio",
            MessageType::ExpirationNotice => "vencimiento",
            MessageType::Custom => "personalizado",
        }
    }
}

/// Delivery is simulated, so `Failed` never occurs today. It stays in the
/// model because the log schema records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MessageStatus {
    #[serde(rename = "sent")]
    Sent,
    #[serde(rename = "failed")]
    Failed,
}

impl AsRef<str> for MessageStatus {
    fn as_ref(&self) -> &str {
        match self {
            MessageStatus::Sent => "sent",
            MessageStatus::Failed => "failed",
        }
    }
}

/// One composed notification, persisted instead of delivered. Outlives the
/// subscriber it points at.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLog {
    pub id: String,
    pub subscriber_id: String,
    pub message_type: MessageType,
    pub message: String,
    pub status: MessageStatus,
    pub sent_at: DateTime<Utc>,
}

/// Fills the notification template for the given subscriber. Custom messages
/// pass the caller's text through verbatim, falling back to a placeholder.
pub fn compose_message(
    subscriber: &Subscriber,
    message_type: MessageType,
    custom_text: Option<String>,
) -> String {
    match message_type {
        MessageType::Reminder => format!(
            "Hola {}, te recordamos que tu suscripción a {} vence el {}. \
             ¡Renuévala para seguir disfrutando!",
            subscriber.name.as_ref(),
            subscriber.service.as_ref(),
            subscriber.expiration_date
        ),
        MessageType::ExpirationNotice => format!(
            "¡Atención {}! Tu suscripción a {} vence en {} días ({}). \
             Renueva ahora para no perder acceso.",
            subscriber.name.as_ref(),
            subscriber.service.as_ref(),
            subscriber.days_remaining,
            subscriber.expiration_date
        ),
        MessageType::Custom => {
            custom_text.unwrap_or_else(|| String::from(DEFAULT_CUSTOM_MESSAGE))
        }
    }
}
