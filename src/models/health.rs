use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: "Hello World".to_string(),
            status: "healthy".to_string(),
        }
    }
}
