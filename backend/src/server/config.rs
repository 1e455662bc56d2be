//! HTTP server configuration object and helpers.

use jobboard::settings::BoardSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl ServerConfig {
    /// Construct a server configuration from a host and port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Construct a server configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &BoardSettings) -> Self {
        Self::new(settings.host(), settings.port())
    }

    /// Return the `(host, port)` pair the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}
