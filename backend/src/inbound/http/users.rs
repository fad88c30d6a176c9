//! Users API handlers.
//!
//! ```text
//! POST /users/ {"phone_number":"010-1234-5678","name":"홍길동"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Error, NormalizedUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::RegistrationPayload;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Response body for a successful API registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponse {
    /// Normalized, digits-only phone number.
    #[schema(example = "01012345678")]
    pub phone_number: String,
    /// Name as submitted.
    #[schema(example = "홍길동")]
    pub name: String,
    /// Confirmation text.
    #[schema(example = "사용자 '홍길동'님이 성공적으로 등록되었습니다.")]
    pub message: String,
}

impl From<NormalizedUser> for UserResponse {
    fn from(value: NormalizedUser) -> Self {
        let (phone_number, name) = value.into_parts();
        let message = format!("사용자 '{name}'님이 성공적으로 등록되었습니다.");
        Self {
            phone_number,
            name,
            message,
        }
    }
}

/// Register a new user through the JSON API.
///
/// Every rejected field is reported in `details.errors`, `phone_number`
/// first.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use range_registration::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/users/",
    request_body = RegistrationPayload,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationPayload>,
) -> ApiResult<HttpResponse> {
    let user = payload.validate(&state.validator).map_err(Error::from)?;
    info!(
        channel = "api",
        name = user.name(),
        phone_number = user.phone_number(),
        "registration accepted"
    );
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests;
