use crate::error::ApiError;
use crate::middleware::json_config;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

/// # Health Check Endpoint
///
/// `GET /api/` answers `{"message": "Hello World", "status": "healthy"}`.
pub mod health;

/// # Status Check Endpoints
///
/// - `POST /api/status`: record a check-in for `client_name`
/// - `GET /api/status`: list recorded check-ins (at most 1000)
///
/// ## Example Request
/// ```json
/// { "client_name": "alpha" }
/// ```
pub mod status;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path and installs the JSON
/// extractor configuration that maps body rejections to 422.
///
/// ```text
/// GET  /api/       - Service health status
/// POST /api/status - Record a status check
/// GET  /api/status - List status checks
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(health::configure_routes)
            .configure(status::configure_routes),
    );
}

/// Default service for requests that match no route.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(ApiError::NotFound)
}
