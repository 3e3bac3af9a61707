use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::storage::StoreError;

pub mod health_check;
pub mod messages;
pub mod services;
pub mod stats;
pub mod subscribers;

pub use health_check::{api_root, health_check};
pub use messages::handle_send_message;
pub use services::handle_list_services;
pub use stats::handle_get_stats;
pub use subscribers::{
    handle_create_subscriber, handle_delete_subscriber, handle_get_subscriber,
    handle_list_subscribers, handle_update_subscriber,
};

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Subscriber not found")]
    SubscriberNotFound,
    #[error("Internal server error")]
    Store(#[from] StoreError),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::SubscriberNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(err) = self {
            tracing::error!("Storage failure: {:?}", err);
        }

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}
