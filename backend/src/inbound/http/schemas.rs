//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema` derives. The wrappers here mirror
//! their wire shape so utoipa can document them from the inbound layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// One or more submitted fields were rejected.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// No route matches the requested path.
    #[schema(rename = "not_found")]
    NotFound,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures carry `details.errors`, one entry per rejected field
/// with `field`, `type`, `message` and an optional `ctx` object.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request validation failed")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}
