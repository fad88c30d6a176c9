//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the payload schemas and the [`ErrorSchema`] wrapper for the domain
//! error envelope.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::payload::RegistrationPayload;
use crate::inbound::http::root::WelcomeResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::UserResponse;
use utoipa::OpenApi;

/// OpenAPI document for the registration service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "실내운전연습장 예약 관리 시스템",
        description = "사용자 ID로 전화번호를 사용하는 API 예제입니다.",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::read_root,
        crate::inbound::http::users::create_user,
        crate::inbound::http::register::show_register_form,
        crate::inbound::http::register::submit_register_form,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegistrationPayload,
        UserResponse,
        WelcomeResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "root", description = "Service greeting"),
        (name = "users", description = "JSON registration API"),
        (name = "register", description = "HTML registration form"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
