//! Registration service for the indoor driving-practice reservation system.
//!
//! The [`domain`] module validates and normalises registration input; the
//! [`inbound`] module exposes it over a JSON API and an HTML form.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
