//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so everything they need
//! is constructed explicitly at startup instead of living in module-level
//! singletons.

use std::sync::Arc;

use crate::domain::RegistrationValidator;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Compiled registration rules.
    pub validator: Arc<RegistrationValidator>,
}

impl HttpState {
    /// Bundle the handler dependencies.
    #[must_use]
    pub const fn new(validator: Arc<RegistrationValidator>) -> Self {
        Self { validator }
    }
}
