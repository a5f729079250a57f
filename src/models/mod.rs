/// # Health Check Response
///
/// Body returned by `GET /api/`: a fixed greeting plus a `healthy` status.
///
/// ## Example JSON
/// ```json
/// { "message": "Hello World", "status": "healthy" }
/// ```
pub mod health;

/// # Status Check Records
///
/// The single domain record of the service, its create payload, and the
/// translation between the wire form (JSON, ISO 8601 timestamps) and the
/// storage form (BSON documents with ISO 8601 string timestamps).
pub mod status_check;

pub use health::HealthResponse;
pub use status_check::{RecordError, StatusCheck, StatusCheckCreate};
