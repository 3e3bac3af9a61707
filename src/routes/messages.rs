use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::message_log::{compose_message, MessageLog, MessageType};
use crate::repository::SubscriberRepository;
use crate::routes::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    pub subscriber_id: String,
    pub message_type: MessageType,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
    pub message_log: MessageLog,
}

#[tracing::instrument(
    name = "Send message handler",
    skip(body, repository),
    fields(subscriber_id = %body.subscriber_id)
)]
pub async fn handle_send_message(
    body: web::Json<SendMessageBody>,
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let subscriber = repository
        .get_by_id(&body.subscriber_id)
        .await?
        .ok_or(ApiError::SubscriberNotFound)?;

    let message = compose_message(&subscriber, body.message_type, body.message.clone());
    let message_log = repository
        .record_message(&subscriber.id, body.message_type, message.clone())
        .await?;

    // Delivery is simulated: the composed text is logged and persisted only.
    tracing::info!(
        "Message sent to {} ({}): {}",
        subscriber.name.as_ref(),
        subscriber.phone.as_ref(),
        message
    );

    Ok(HttpResponse::Ok().json(SendMessageResponse {
        success: true,
        message: format!(
            "Mensaje enviado exitosamente a {}",
            subscriber.name.as_ref()
        ),
        message_log,
    }))
}
