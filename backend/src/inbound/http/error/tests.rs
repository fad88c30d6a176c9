//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::TraceId;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn validation_failed_case(expected_trace_id: &str) -> Error {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    TraceId::scope(trace_id, async move {
        Error::validation_failed("bad").with_details(json!({"errors": [{"field": "name"}]}))
    })
    .await
}

#[rstest]
#[case(Error::validation_failed("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Value {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by Error::error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[actix_web::test]
async fn validation_failures_expose_details(expected_trace_id: String) {
    let error = validation_failed_case(&expected_trace_id).await;
    let payload = assert_error_response(
        error,
        StatusCode::UNPROCESSABLE_ENTITY,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(
        payload,
        json!({
            "code": "validation_failed",
            "message": "bad",
            "traceId": expected_trace_id,
            "details": {"errors": [{"field": "name"}]}
        })
    );
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_omit_header() {
    let payload =
        assert_error_response(Error::not_found("missing"), StatusCode::NOT_FOUND, None).await;
    assert!(payload.get("traceId").is_none());
}

#[derive(Deserialize)]
struct CountBody {
    #[expect(dead_code, reason = "only decoded to exercise the extractor")]
    value: u32,
}

async fn accept_count(_: web::Json<CountBody>) -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[rstest]
#[actix_web::test]
async fn undecodable_json_becomes_validation_failure() {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(accept_count)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("validation_failed"));
    assert_eq!(body["details"]["errors"][0]["field"], json!("unknown"));
    assert_eq!(body["details"]["errors"][0]["type"], json!("malformed"));
}

#[rstest]
#[actix_web::test]
async fn unknown_paths_return_not_found_envelope() {
    let app = actix_test::init_service(
        App::new()
            .route("/", web::get().to(HttpResponse::Ok))
            .default_service(web::to(route_not_found)),
    )
    .await;
    let request = actix_test::TestRequest::get()
        .uri("/missing")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"code": "not_found", "message": "Not Found"}));
}
