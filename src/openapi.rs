use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers. Served as `/openapi.json` and browsable through Swagger UI at
/// `/docs/`.
///
/// # Endpoints
/// - Health Check: `GET /api/`
/// - Status Checks: `POST /api/status`, `GET /api/status`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::status_check::StatusCheck,
            crate::models::status_check::StatusCheckCreate,
            crate::error::ErrorBody
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status Checks", description = "Record and list client status checks")
    ),
    info(
        description = "Records client status checks in MongoDB and lists their history",
        title = "Status Check API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
