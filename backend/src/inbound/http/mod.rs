//! HTTP inbound adapter exposing the registration API, the HTML form and
//! health checks.

pub mod error;
pub mod health;
pub mod pages;
pub mod payload;
pub mod register;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
