use actix_web::{HttpRequest, HttpResponse, Responder};

/// Endpoint used by clients to know if the server is working
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check(_: HttpRequest) -> impl Responder {
    HttpResponse::Ok()
}

/// Liveness/info endpoint at the root of the API scope.
#[tracing::instrument(name = "API root handler")]
pub async fn api_root(_: HttpRequest) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "StreamManager Pro API is running",
        "version": "1.0.0"
    }))
}
