//! Root endpoint confirming the service is up.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

/// Welcome text returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "실내운전연습장 예약 관리 시스템에 오신 것을 환영합니다.";

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WelcomeResponse {
    /// Static greeting.
    #[schema(example = "실내운전연습장 예약 관리 시스템에 오신 것을 환영합니다.")]
    pub message: String,
}

/// Return a static welcome message.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = WelcomeResponse)),
    tags = ["root"],
    operation_id = "readRoot"
)]
#[get("/")]
pub async fn read_root() -> web::Json<WelcomeResponse> {
    web::Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_owned(),
    })
}
