use crate::db::{MAX_STATUS_CHECKS, STATUS_CHECKS_COLLECTION, exclude_internal_id};
use crate::error::{ApiError, ErrorBody};
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;
use actix_web::{HttpResponse, get, post, web};
use tracing::{error, info};

/// # Create Status Check
///
/// Records that `client_name` checked in. The server assigns the `id` and
/// the UTC `timestamp`; the stored document keeps the timestamp as an
/// ISO 8601 string.
///
/// ## Responses
/// - **200 OK**: the created record
/// - **413 Payload Too Large**: body over 16 MiB
/// - **422 Unprocessable Entity**: `client_name` missing or not a string
/// - **500 Internal Server Error**: the store rejected or did not acknowledge the write
///
/// ## Example Request
/// ```json
/// { "client_name": "alpha" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    state: web::Data<AppState>,
    input: web::Json<StatusCheckCreate>,
) -> Result<HttpResponse, ApiError> {
    let StatusCheckCreate { client_name } = input.into_inner();
    info!(client_name = %client_name, "creating status check");

    let status_check = StatusCheck::new(client_name);
    let inserted = state
        .store()
        .insert_one(STATUS_CHECKS_COLLECTION, status_check.to_document())
        .await
        .map_err(|e| {
            error!(
                id = %status_check.id,
                client_name = %status_check.client_name,
                error = %e,
                "error creating status check"
            );
            ApiError::from(e)
        })?;

    if inserted.is_none() {
        error!(
            id = %status_check.id,
            client_name = %status_check.client_name,
            "failed to insert status check"
        );
        return Err(ApiError::WriteFailed);
    }

    info!(id = %status_check.id, "status check created");
    Ok(HttpResponse::Ok().json(status_check))
}

/// # List Status Checks
///
/// Returns every recorded status check, at most 1000. Larger collections are
/// truncated without notice. Order is whatever the store yields.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Recorded status checks", body = Vec<StatusCheck>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn list_status_checks(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("fetching all status checks");

    let documents = state
        .store()
        .find_all(
            STATUS_CHECKS_COLLECTION,
            exclude_internal_id(),
            MAX_STATUS_CHECKS,
        )
        .await
        .map_err(|e| {
            error!(error = %e, "error fetching status checks");
            ApiError::from(e)
        })?;

    let status_checks = documents
        .iter()
        .map(StatusCheck::from_document)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!(error = %e, fetched = documents.len(), "error decoding status checks");
            ApiError::from(e)
        })?;

    info!(count = status_checks.len(), "retrieved status checks");
    Ok(HttpResponse::Ok().json(status_checks))
}

/// Registers the status check routes (relative to `/api`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status_check).service(list_status_checks);
}
