//! Client configuration.
//!
//! [`DirectoryConfig`] carries the tenant credentials and endpoint URLs used
//! by the HTTP transport, plus the display-name prefix used to locate the
//! extensions application.

use crate::error::{DirectoryError, DirectoryResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.windows.net/";
pub const DEFAULT_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com/";
pub const DEFAULT_API_VERSION: &str = "1.6";
/// Display-name prefix of the application that owns B2C extension attributes.
pub const DEFAULT_EXTENSIONS_APP_PREFIX: &str = "b2c-extensions-app";

pub const ENV_TENANT_ID: &str = "B2C_TENANT_ID";
pub const ENV_CLIENT_ID: &str = "B2C_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "B2C_CLIENT_SECRET";
pub const ENV_GRAPH_BASE_URL: &str = "B2C_GRAPH_BASE_URL";
pub const ENV_LOGIN_BASE_URL: &str = "B2C_LOGIN_BASE_URL";
pub const ENV_EXTENSIONS_APP_PREFIX: &str = "B2C_EXTENSIONS_APP_PREFIX";

/// Connection settings for one B2C tenant.
#[derive(Clone)]
pub struct DirectoryConfig {
    /// Tenant id or domain (`contoso.onmicrosoft.com`)
    pub tenant_id: String,
    /// Client id of the registered management application
    pub client_id: String,
    pub client_secret: String,
    /// Graph API root, with trailing slash
    pub graph_base_url: String,
    /// Token authority root, with trailing slash
    pub login_base_url: String,
    pub api_version: String,
    pub extensions_app_prefix: String,
    /// Per-request timeout applied by the HTTP transport
    pub request_timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            login_base_url: DEFAULT_LOGIN_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            extensions_app_prefix: DEFAULT_EXTENSIONS_APP_PREFIX.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// Keeps the client secret out of logs.
impl std::fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("graph_base_url", &self.graph_base_url)
            .field("login_base_url", &self.login_base_url)
            .field("api_version", &self.api_version)
            .field("extensions_app_prefix", &self.extensions_app_prefix)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl DirectoryConfig {
    /// Configuration for a tenant with the default endpoints.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }

    /// Read the configuration from `B2C_*` environment variables.
    ///
    /// Tenant, client id and secret are required; the endpoint variables
    /// override the defaults when present.
    pub fn from_env() -> DirectoryResult<Self> {
        let mut config = Self::new(
            required_var(ENV_TENANT_ID)?,
            required_var(ENV_CLIENT_ID)?,
            required_var(ENV_CLIENT_SECRET)?,
        );
        if let Ok(url) = env::var(ENV_GRAPH_BASE_URL) {
            config = config.with_graph_base_url(url);
        }
        if let Ok(url) = env::var(ENV_LOGIN_BASE_URL) {
            config = config.with_login_base_url(url);
        }
        if let Ok(prefix) = env::var(ENV_EXTENSIONS_APP_PREFIX) {
            config = config.with_extensions_app_prefix(prefix);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the Graph API root; a trailing slash is added if missing.
    pub fn with_graph_base_url(mut self, url: impl Into<String>) -> Self {
        self.graph_base_url = with_trailing_slash(url.into());
        self
    }

    /// Set the token authority root; a trailing slash is added if missing.
    pub fn with_login_base_url(mut self, url: impl Into<String>) -> Self {
        self.login_base_url = with_trailing_slash(url.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_extensions_app_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extensions_app_prefix = prefix.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that every field needed to reach the directory is present.
    pub fn validate(&self) -> DirectoryResult<()> {
        if self.tenant_id.is_empty() {
            return Err(DirectoryError::config("Tenant id cannot be empty"));
        }
        if self.client_id.is_empty() {
            return Err(DirectoryError::config("Client id cannot be empty"));
        }
        if self.client_secret.is_empty() {
            return Err(DirectoryError::config("Client secret cannot be empty"));
        }
        for (name, url) in [
            ("Graph base URL", &self.graph_base_url),
            ("Login base URL", &self.login_base_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(DirectoryError::config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }
        if self.api_version.is_empty() {
            return Err(DirectoryError::config("API version cannot be empty"));
        }
        if self.extensions_app_prefix.is_empty() {
            return Err(DirectoryError::config(
                "Extensions application prefix cannot be empty",
            ));
        }
        Ok(())
    }

    /// Root URL of the tenant, e.g. `https://graph.windows.net/contoso.onmicrosoft.com`.
    pub fn tenant_url(&self) -> String {
        format!("{}{}", self.graph_base_url, self.tenant_id)
    }
}

fn required_var(name: &str) -> DirectoryResult<String> {
    env::var(name).map_err(|_| DirectoryError::config(format!("{} is not set", name)))
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::new("contoso.onmicrosoft.com", "client", "secret");
        assert!(config.validate().is_ok());
        assert_eq!(
            config.tenant_url(),
            "https://graph.windows.net/contoso.onmicrosoft.com"
        );
        assert_eq!(config.extensions_app_prefix, "b2c-extensions-app");
    }

    #[test]
    fn test_validate_rejects_missing_credentials() {
        let config = DirectoryConfig::default();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("Tenant id"));

        let config = DirectoryConfig::new("tenant", "client", "");
        assert!(config.validate().unwrap_err().to_string().contains("secret"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = DirectoryConfig::new("tenant", "client", "secret")
            .with_graph_base_url("graph.windows.net");
        assert!(matches!(
            config.validate(),
            Err(DirectoryError::Config { .. })
        ));
    }

    #[test]
    fn test_base_urls_get_trailing_slash() {
        let config = DirectoryConfig::new("tenant", "client", "secret")
            .with_graph_base_url("http://localhost:8080");
        assert_eq!(config.graph_base_url, "http://localhost:8080/");
        assert_eq!(config.tenant_url(), "http://localhost:8080/tenant");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = DirectoryConfig::new("tenant", "client", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
