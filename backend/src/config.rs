//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ONEROSTER_*` environment variables and an
//! optional configuration file, in the usual OrthoConfig precedence. None
//! of them change lookup semantics; they only decide where the server
//! listens, how long it waits for slow clients, and whether generated ids
//! are reproducible.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5100;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Raw settings as provided by the configuration layers.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ONEROSTER")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Seconds a client may take to send the request head (request line and
    /// headers). Handler execution is not bounded by this value.
    pub request_timeout_secs: Option<u64>,
    /// Seed for reproducible record identifiers.
    pub seed: Option<u64>,
}

/// Validation failures when resolving [`ServerSettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The host is not an IP address literal.
    #[error("invalid bind host `{host}`: expected an IP address")]
    InvalidHost {
        /// Offending value.
        host: String,
    },
    /// A zero request-head timeout would reject every request.
    #[error("request timeout must be greater than zero seconds")]
    ZeroRequestTimeout,
}

/// Validated runtime configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Deadline for receiving the request head, applied as Actix's
    /// `client_request_timeout`. It does not cap handler time.
    pub request_timeout: Duration,
    /// Generator seed, if identifiers should be reproducible.
    pub seed: Option<u64>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to `5100`.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured request-head timeout in seconds, falling back to `60`.
    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Validate and resolve into a [`ServerConfig`].
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host is not an IP literal or the
    /// timeout is zero.
    ///
    /// # Examples
    /// ```
    /// use backend::config::ServerSettings;
    ///
    /// let config = ServerSettings::default()
    ///     .into_server_config()
    ///     .expect("defaults are valid");
    /// assert_eq!(config.bind_addr.port(), 5100);
    /// ```
    pub fn into_server_config(self) -> Result<ServerConfig, SettingsError> {
        let ip: IpAddr = self
            .host()
            .parse()
            .map_err(|_| SettingsError::InvalidHost {
                host: self.host().to_owned(),
            })?;
        let timeout_secs = self.request_timeout_secs();
        if timeout_secs == 0 {
            return Err(SettingsError::ZeroRequestTimeout);
        }
        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.port()),
            request_timeout: Duration::from_secs(timeout_secs),
            seed: self.seed,
        })
    }
}
