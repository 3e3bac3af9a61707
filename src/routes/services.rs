use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::domain::service_type::ServiceType;

#[derive(serde::Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceType>,
}

/// The catalog is a closed set, so this never touches the store.
#[tracing::instrument(name = "List services handler")]
pub async fn handle_list_services(_: HttpRequest) -> impl Responder {
    HttpResponse::Ok().json(ServicesResponse {
        services: ServiceType::all().to_vec(),
    })
}
