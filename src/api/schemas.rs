// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub message: String,
}
