use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};
use tracing::info;

/// # Health Check Endpoint
///
/// Reports that the service is up. Touches no storage and cannot fail.
///
/// ## Response
///
/// - **200 OK**: `{"message": "Hello World", "status": "healthy"}`
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    info!("health check endpoint called");
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// - `GET /`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
