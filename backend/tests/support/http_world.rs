//! Shared world for registration HTTP behaviour tests.
//!
//! Each request runs the full application in-process on a fresh Actix
//! system, so steps stay synchronous and no sockets are bound.

use std::sync::{Arc, Mutex};

use actix_web::http::header;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use range_registration::Trace;
use range_registration::domain::{RegistrationRules, TRACE_ID_HEADER};
use range_registration::inbound::http::error::{json_config, route_not_found};
use range_registration::inbound::http::health::{HealthState, live, ready};
use range_registration::inbound::http::register::{
    form_config, show_register_form, submit_register_form,
};
use range_registration::inbound::http::root::read_root;
use range_registration::inbound::http::state::HttpState;
use range_registration::inbound::http::users::create_user;
use serde_json::Value;

/// Snapshot of the most recent response.
#[derive(Debug, Default, Clone)]
pub(crate) struct LastResponse {
    pub(crate) status: u16,
    pub(crate) content_type: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: String,
}

impl LastResponse {
    pub(crate) fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

#[derive(Debug, Default)]
struct WorldState {
    rules: RegistrationRules,
    last: Option<LastResponse>,
}

/// Scenario state shared between steps.
#[derive(Debug, Default)]
pub(crate) struct HttpWorld {
    state: Mutex<WorldState>,
}

impl HttpWorld {
    pub(crate) fn set_rules(&self, rules: RegistrationRules) {
        self.state.lock().expect("world lock").rules = rules;
    }

    pub(crate) fn last(&self) -> LastResponse {
        self.state
            .lock()
            .expect("world lock")
            .last
            .clone()
            .expect("a request should have been sent")
    }

    /// Send a request through the full application and record the response.
    pub(crate) fn send(&self, request: TestRequest) {
        let rules = self.state.lock().expect("world lock").rules.clone();
        let validator = rules.compile().expect("scenario rules compile");
        let http_state = web::Data::new(HttpState::new(Arc::new(validator)));
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();

        let last = actix_rt::System::new().block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(health_state)
                    .app_data(http_state)
                    .app_data(json_config())
                    .app_data(form_config())
                    .wrap(Trace)
                    .service(read_root)
                    .service(create_user)
                    .service(show_register_form)
                    .service(submit_register_form)
                    .service(ready)
                    .service(live)
                    .default_service(web::to(route_not_found)),
            )
            .await;
            let response = actix_test::call_service(&app, request.to_request()).await;
            let header_text = |name: header::HeaderName| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(ToOwned::to_owned)
            };
            let status = response.status().as_u16();
            let content_type = header_text(header::CONTENT_TYPE);
            let location = header_text(header::LOCATION);
            let trace_id = header_text(header::HeaderName::from_static(TRACE_ID_HEADER));
            let bytes = actix_test::read_body(response).await;
            LastResponse {
                status,
                content_type,
                location,
                trace_id,
                body: String::from_utf8(bytes.to_vec()).expect("UTF-8 body"),
            }
        });

        self.state.lock().expect("world lock").last = Some(last);
    }
}

/// Strip the surrounding quotes a feature file places around step values.
pub(crate) fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
