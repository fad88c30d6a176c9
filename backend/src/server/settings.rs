//! Application settings loaded via OrthoConfig.
//!
//! Values come from `REGISTRATION_*` environment variables or the matching
//! command-line flags. The bind address always has a value; unset rule
//! overrides fall back to the built-in rule table.

use std::ffi::OsString;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use range_registration::domain::{
    NAME_MAX_LENGTH, NAME_MIN_LENGTH, RegistrationRules, RegistrationValidator, RulesError,
};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Failures that abort startup before the listener is bound.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings could not be read from the environment or command line.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
    /// The host and port did not resolve to a socket address.
    #[error("cannot resolve bind address {host}:{port}")]
    Unresolved {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Resolver failure, if resolution itself errored.
        #[source]
        source: Option<std::io::Error>,
    },
    /// The configured registration rules are unusable.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Runtime configuration for the registration service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Regular expression phone numbers must match.
    pub phone_pattern: Option<String>,
    /// Minimum accepted name length in characters.
    pub name_min_length: Option<usize>,
    /// Maximum accepted name length in characters.
    pub name_max_length: Option<usize>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            phone_pattern: None,
            name_min_length: None,
            name_max_length: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the given command-line arguments and the
    /// environment.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a value cannot be parsed.
    pub fn load_from<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Return the interface to bind.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Return the TCP port to listen on.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the host and port into a socket address.
    ///
    /// # Errors
    /// Returns [`SettingsError::Unresolved`] when resolution fails or yields
    /// no addresses.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let unresolved = |source| SettingsError::Unresolved {
            host: self.host().to_owned(),
            port: self.port(),
            source,
        };
        (self.host(), self.port())
            .to_socket_addrs()
            .map_err(|err| unresolved(Some(err)))?
            .next()
            .ok_or_else(|| unresolved(None))
    }

    /// Build the registration rule table, applying any overrides.
    #[must_use]
    pub fn rules(&self) -> RegistrationRules {
        let rules = self
            .phone_pattern
            .clone()
            .map_or_else(RegistrationRules::default, |pattern| {
                RegistrationRules::default().with_phone_pattern(pattern)
            });
        rules.with_name_bounds(
            self.name_min_length.unwrap_or(NAME_MIN_LENGTH),
            self.name_max_length.unwrap_or(NAME_MAX_LENGTH),
        )
    }

    /// Compile the configured rules into a validator.
    ///
    /// # Errors
    /// Returns [`SettingsError::Rules`] for an invalid pattern or inverted
    /// name bounds.
    pub fn validator(&self) -> Result<RegistrationValidator, SettingsError> {
        Ok(self.rules().compile()?)
    }
}
