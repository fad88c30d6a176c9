//! Tests for the JSON registration endpoint.

use super::*;
use crate::Trace;
use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::error::json_config;
use crate::inbound::http::test_utils::test_state;
use actix_web::{App, http::StatusCode, test as actix_test};
use insta::assert_json_snapshot;
use rstest::rstest;
use serde_json::{Value, json};

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(test_state())
        .app_data(json_config())
        .wrap(Trace)
        .service(create_user)
}

async fn post_json(body: Value) -> (StatusCode, Option<String>, Value) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/users/")
        .set_json(&body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    let body: Value = actix_test::read_body_json(response).await;
    (status, trace_id, body)
}

fn error_fields(body: &Value) -> Vec<(String, String)> {
    body["details"]["errors"]
        .as_array()
        .expect("errors array present")
        .iter()
        .map(|entry| {
            (
                entry["field"].as_str().unwrap_or_default().to_owned(),
                entry["type"].as_str().unwrap_or_default().to_owned(),
            )
        })
        .collect()
}

#[rstest]
#[actix_web::test]
async fn registers_user_and_normalises_phone() {
    let (status, _, body) =
        post_json(json!({ "phone_number": "010-1234-5678", "name": "홍길동" })).await;

    assert_eq!(status, StatusCode::CREATED);
    let response: UserResponse = serde_json::from_value(body).expect("user response");
    assert_eq!(
        response,
        UserResponse {
            phone_number: "01012345678".to_owned(),
            name: "홍길동".to_owned(),
            message: "사용자 '홍길동'님이 성공적으로 등록되었습니다.".to_owned(),
        }
    );
}

#[rstest]
#[case(json!({ "phone_number": "abc", "name": "Alice" }), vec![("phone_number", "pattern_mismatch")])]
#[case(json!({ "phone_number": "010-1234-5678", "name": "A" }), vec![("name", "too_short")])]
#[case(json!({ "phone_number": "010-1234-5678", "name": "a".repeat(51) }), vec![("name", "too_long")])]
#[case(json!({ "phone_number": "123", "name": "" }), vec![("phone_number", "pattern_mismatch"), ("name", "too_short")])]
#[case(json!({ "name": "Alice" }), vec![("phone_number", "missing")])]
#[case(json!({}), vec![("phone_number", "missing"), ("name", "missing")])]
#[actix_web::test]
async fn rejects_invalid_payloads_with_every_error(
    #[case] payload: Value,
    #[case] expected: Vec<(&str, &str)>,
) {
    let (status, trace_id, body) = post_json(payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], json!("validation_failed"));
    assert!(trace_id.is_some(), "trace id header present");
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
    let expected: Vec<(String, String)> = expected
        .into_iter()
        .map(|(field, kind)| (field.to_owned(), kind.to_owned()))
        .collect();
    assert_eq!(error_fields(&body), expected);
}

#[rstest]
#[actix_web::test]
async fn short_name_error_carries_minimum_length() {
    let (_, _, body) = post_json(json!({ "phone_number": "010-1234-5678", "name": "A" })).await;

    let entry = &body["details"]["errors"][0];
    assert_eq!(entry["ctx"]["min_length"], json!(2));
    assert_eq!(entry["message"], json!("name must be at least 2 characters"));
}

#[rstest]
#[actix_web::test]
async fn wrongly_typed_fields_are_rejected_as_malformed() {
    let (status, _, body) = post_json(json!({ "phone_number": 1012345678, "name": "Alice" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_fields(&body),
        vec![("unknown".to_owned(), "malformed".to_owned())]
    );
}

#[rstest]
#[actix_web::test]
async fn validation_envelope_shape_is_stable() {
    let (_, _, body) = post_json(json!({ "phone_number": "010-1234-5678", "name": "A" })).await;

    insta::with_settings!({ sort_maps => true }, {
        assert_json_snapshot!(body, { ".traceId" => "[trace_id]" }, @r#"
        {
          "code": "validation_failed",
          "details": {
            "errors": [
              {
                "ctx": {
                  "min_length": 2
                },
                "field": "name",
                "message": "name must be at least 2 characters",
                "type": "too_short"
              }
            ]
          },
          "message": "request validation failed",
          "traceId": "[trace_id]"
        }
        "#);
    });
}
