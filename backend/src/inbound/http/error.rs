//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving Actix
//! handlers consistent JSON envelopes and status codes. Undecodable JSON
//! bodies and unknown paths are routed through the same envelope so API
//! clients only ever see one error schema.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, ValidationError, ValidationErrors};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(self)
    }
}

fn undecodable_body(err: &JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(reason = %err, path = %req.path(), "request body rejected");
    Error::from(ValidationErrors::single(ValidationError::malformed())).into()
}

/// JSON extractor configuration reporting decode failures as 422 envelopes.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| undecodable_body(&err, req))
}

/// Fallback service answering unknown paths with a 404 envelope.
///
/// # Errors
/// Always returns [`ErrorCode::NotFound`].
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(Error::not_found("Not Found"))
}

#[cfg(test)]
mod tests;
