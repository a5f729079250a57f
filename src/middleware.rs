use crate::config::CorsOrigins;
use crate::error::{ApiError, ErrorBody, UNHANDLED_ERROR_DETAIL};
use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::{error, warn};

/// CORS policy: any method, any header, credentials allowed, origins as
/// configured.
pub fn cors(origins: &CorsOrigins) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    match origins {
        CorsOrigins::Any => cors.allow_any_origin(),
        CorsOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

/// Largest accepted JSON request body, MongoDB's 16 MiB document size limit.
pub const JSON_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// JSON extractor configuration. Bodies over [`JSON_BODY_LIMIT`] get a 413;
/// every other rejection (missing or mistyped fields, malformed JSON, wrong
/// content type) becomes a 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req: &HttpRequest| {
            warn!(path = %req.path(), error = %err, "rejected request body");
            match err {
                JsonPayloadError::OverflowKnownLength { limit, .. }
                | JsonPayloadError::Overflow { limit } => ApiError::PayloadTooLarge(limit).into(),
                err => ApiError::Validation(err.to_string()).into(),
            }
        })
}

/// # Unhandled Error Fallback
///
/// Server errors produced by [`ApiError`] already carry a JSON body and pass
/// through untouched. Any other 5xx response is logged and replaced with
/// `500 {"detail": "Internal server error occurred"}` so no internal detail
/// leaks to the caller.
pub fn error_fallback<B>() -> ErrorHandlers<B>
where
    B: MessageBody + 'static,
{
    ErrorHandlers::new().default_handler_server(render_unhandled_error)
}

fn render_unhandled_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>>
where
    B: MessageBody + 'static,
{
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    match res.response().error() {
        Some(err) => error!(
            status = %res.status(),
            path = %res.request().path(),
            error = %err,
            "unhandled exception"
        ),
        None => error!(
            status = %res.status(),
            path = %res.request().path(),
            "unhandled exception"
        ),
    }

    let body = serde_json::to_string(&ErrorBody {
        detail: UNHANDLED_ERROR_DETAIL.to_string(),
    })?;

    let (req, res) = res.into_parts();
    let mut res = res.set_body(body);
    *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
