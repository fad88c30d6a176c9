//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use super::state::HttpState;
use crate::domain::{RegistrationRules, RegistrationValidator};

/// Validator compiled from the built-in rule table.
pub fn default_validator() -> RegistrationValidator {
    RegistrationRules::default()
        .compile()
        .expect("default rules compile")
}

/// Handler state with the default registration rules.
pub fn test_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(default_validator())))
}
