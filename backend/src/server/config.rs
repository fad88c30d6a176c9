//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use range_registration::domain::RegistrationValidator;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) validator: Arc<RegistrationValidator>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` that validates
    /// submissions with `validator`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, validator: RegistrationValidator) -> Self {
        Self {
            bind_addr,
            validator: Arc::new(validator),
        }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Read by server bootstrap tests")
    )]
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
