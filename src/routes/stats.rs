use actix_web::{web, HttpResponse};

use crate::repository::SubscriberRepository;
use crate::routes::ApiError;

#[tracing::instrument(name = "Dashboard stats handler", skip(repository))]
pub async fn handle_get_stats(
    repository: web::Data<SubscriberRepository>,
) -> Result<HttpResponse, ApiError> {
    let stats = repository.get_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}
