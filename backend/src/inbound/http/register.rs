//! HTML form flow for registration.
//!
//! ```text
//! GET  /register?message=..&error=..
//! POST /register  (application/x-www-form-urlencoded: phone_number, name)
//! ```
//!
//! A successful submission redirects back to the form with a confirmation
//! message (303 See Other). A rejected one re-renders the form with status
//! 422, the submitted values, and a message for the first rejected field.

use actix_web::error::InternalError;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::domain::{Field, NormalizedUser, Reason, ValidationError};
use crate::inbound::http::pages::RegisterPage;
use crate::inbound::http::payload::RegistrationPayload;
use crate::inbound::http::state::HttpState;

/// Path serving the registration form.
pub const REGISTER_PATH: &str = "/register";

/// Optional outcome parameters accepted by `GET /register`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegisterQuery {
    /// Confirmation text from a previous submission.
    pub message: Option<String>,
    /// Error text from a previous submission.
    pub error: Option<String>,
}

/// Human-readable explanation for a rejected field.
///
/// # Examples
/// ```
/// use range_registration::domain::{Field, Reason, ValidationError};
/// use range_registration::inbound::http::register::form_error_message;
///
/// let err = ValidationError::new(Field::Name, Reason::TooShort { min: 2 });
/// assert_eq!(form_error_message(&err), "이름은 최소 2자 이상이어야 합니다.");
/// ```
#[must_use]
pub fn form_error_message(error: &ValidationError) -> String {
    match (error.field(), error.reason()) {
        (Field::PhoneNumber, _) => "전화번호 형식이 올바르지 않습니다. (예: 010-1234-5678)".to_owned(),
        (Field::Name, Reason::TooShort { min }) => format!("이름은 최소 {min}자 이상이어야 합니다."),
        (Field::Name, _) => "이름을 확인해주세요.".to_owned(),
        (Field::Unknown, _) => "입력값을 확인해주세요.".to_owned(),
    }
}

/// Confirmation shown after a successful form submission.
#[must_use]
pub fn registration_success_message(user: &NormalizedUser) -> String {
    format!(
        "사용자 '{}'님({})이 성공적으로 등록되었습니다.",
        user.name(),
        user.phone_number()
    )
}

fn redirect_target(message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("message", message)
        .finish();
    format!("{REGISTER_PATH}?{query}")
}

fn html(page: &RegisterPage<'_>, mut builder: actix_web::HttpResponseBuilder) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .body(page.render())
}

/// Form extractor configuration that re-renders the page with status 422
/// when the submitted body cannot be decoded.
#[must_use]
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        debug!(reason = %err, path = %req.path(), "form body rejected");
        let message = form_error_message(&ValidationError::malformed());
        let page = RegisterPage {
            error: Some(message.as_str()),
            ..RegisterPage::default()
        };
        InternalError::from_response(err, html(&page, HttpResponse::UnprocessableEntity())).into()
    })
}

/// Render the registration form.
#[utoipa::path(
    get,
    path = "/register",
    params(RegisterQuery),
    responses((status = 200, description = "Registration form", content_type = "text/html", body = String)),
    tags = ["register"],
    operation_id = "showRegisterForm"
)]
#[get("/register")]
pub async fn show_register_form(query: web::Query<RegisterQuery>) -> HttpResponse {
    let page = RegisterPage {
        message: query.message.as_deref(),
        error: query.error.as_deref(),
        ..RegisterPage::default()
    };
    html(&page, HttpResponse::Ok())
}

/// Handle a submitted registration form.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegistrationPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered; redirects to the form with a confirmation"),
        (status = 422, description = "Rejected; form re-rendered with an error", content_type = "text/html", body = String)
    ),
    tags = ["register"],
    operation_id = "submitRegisterForm"
)]
#[post("/register")]
pub async fn submit_register_form(
    state: web::Data<HttpState>,
    form: web::Form<RegistrationPayload>,
) -> HttpResponse {
    match form.validate(&state.validator) {
        Ok(user) => {
            info!(
                channel = "form",
                name = user.name(),
                phone_number = user.phone_number(),
                "registration accepted"
            );
            let target = redirect_target(&registration_success_message(&user));
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, target))
                .finish()
        }
        Err(errors) => {
            let message = form_error_message(errors.first());
            let page = RegisterPage {
                message: None,
                error: Some(message.as_str()),
                phone_number: form.phone_number.as_deref(),
                name: form.name.as_deref(),
            };
            html(&page, HttpResponse::UnprocessableEntity())
        }
    }
}
