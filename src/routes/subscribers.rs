use actix_web::{web, HttpResponse};

use crate::domain::new_subscriber::{NewSubscriber, NewSubscriberBody};
use crate::domain::subscriber::Subscriber;
use crate::domain::update_subscriber::{SubscriberUpdate, SubscriberUpdateBody};
use crate::repository::SubscriberRepository;
use crate::routes::ApiError;

#[derive(serde::Serialize)]
pub struct SubscribersResponse {
    pub subscribers: Vec<Subscriber>,
    pub total: usize,
}

#[tracing::instrument(name = "List subscribers handler", skip(repository))]
pub async fn handle_list_subscribers(
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let subscribers = repository.list().await?;
    let total = subscribers.len();

    Ok(HttpResponse::Ok().json(SubscribersResponse { subscribers, total }))
}

#[tracing::instrument(
    name = "Create subscriber handler",
    skip(body, repository),
    fields(
        subscriber_name = %body.name,
        subscriber_email = %body.email
    )
)]
pub async fn handle_create_subscriber(
    body: web::Json<NewSubscriberBody>,
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let new_subscriber: NewSubscriber = body.try_into().map_err(|err: String| {
        tracing::error!("Validation error: {:?}", err);
        ApiError::Validation(err)
    })?;

    let subscriber = repository.create(new_subscriber).await?;

    Ok(HttpResponse::Ok().json(subscriber))
}

#[tracing::instrument(
    name = "Get subscriber handler",
    skip(path, repository),
    fields(subscriber_id = %path.as_str())
)]
pub async fn handle_get_subscriber(
    path: web::Path<String>,
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let subscriber = repository
        .get_by_id(path.as_str())
        .await?
        .ok_or(ApiError::SubscriberNotFound)?;

    Ok(HttpResponse::Ok().json(subscriber))
}

#[tracing::instrument(
    name = "Update subscriber handler",
    skip(path, body, repository),
    fields(subscriber_id = %path.as_str())
)]
pub async fn handle_update_subscriber(
    path: web::Path<String>,
    body: web::Json<SubscriberUpdateBody>,
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let update: SubscriberUpdate = body.try_into().map_err(|err: String| {
        tracing::error!("Validation error: {:?}", err);
        ApiError::Validation(err)
    })?;

    let subscriber = repository
        .update(path.as_str(), update)
        .await?
        .ok_or(ApiError::SubscriberNotFound)?;

    Ok(HttpResponse::Ok().json(subscriber))
}

#[tracing::instrument(
    name = "Delete subscriber handler",
    skip(path, repository),
    fields(subscriber_id = %path.as_str())
)]
pub async fn handle_delete_subscriber(
    path: web::Path<String>,
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let removed = repository.delete(path.as_str()).await?;

    if !removed {
        return Err(ApiError::SubscriberNotFound);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Subscriber deleted successfully"
    })))
}
