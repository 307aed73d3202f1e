//! Graph API transport over HTTPS.
//!
//! Every request carries a bearer token from [`TokenCache`], the configured
//! `api-version` and a fresh `client-request-id` for correlation with the
//! directory's own logs.
//!
//! ```rust,no_run
//! use graph_directory::config::DirectoryConfig;
//! use graph_directory::service::DirectoryService;
//! use graph_directory::transport::graph::GraphTransport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DirectoryConfig::from_env()?;
//! let transport = GraphTransport::new(&config)?;
//! let service = DirectoryService::builder(transport)
//!     .extensions_app_prefix(config.extensions_app_prefix.clone())
//!     .build()
//!     .await?;
//! let user = service.new_blank_user();
//! # Ok(())
//! # }
//! ```

use super::auth::TokenCache;
use super::{DirectoryTransport, endpoints};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult, TransportError};
use log::{debug, trace, warn};
use reqwest::Method;
use serde_json::{Value, json};

/// [`DirectoryTransport`] backed by `reqwest`.
#[derive(Debug)]
pub struct GraphTransport {
    http_client: reqwest::Client,
    token_cache: TokenCache,
    tenant_url: String,
    api_version: String,
}

impl GraphTransport {
    /// Build a transport for the configured tenant.
    pub fn new(config: &DirectoryConfig) -> DirectoryResult<Self> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DirectoryError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            token_cache: TokenCache::new(config, http_client.clone()),
            http_client,
            tenant_url: config.tenant_url(),
            api_version: config.api_version.clone(),
        })
    }

    /// Absolute request URL for a tenant-relative path.
    fn url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}?api-version={}", self.tenant_url, path, self.api_version);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('&');
            url.push_str(query);
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<String>,
    ) -> DirectoryResult<String> {
        let url = self.url(path, query);
        let token = self.token_cache.get_token().await?;
        let request_id = uuid::Uuid::new_v4().to_string();

        debug!("{} {} (client-request-id: {})", method, url, request_id);

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header("client-request-id", &request_id);
        if let Some(body) = body {
            trace!("Request body: {}", body);
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DirectoryError::connection(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DirectoryError::connection(format!("Failed to read response: {}", e)))?;

        if status.is_success() {
            return Ok(text);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.token_cache.invalidate().await;
        }
        warn!(
            "{} {} returned {} (client-request-id: {})",
            method, url, status, request_id
        );
        Err(TransportError::new(status.as_u16(), format_error_body(&text)).into())
    }

    async fn get(&self, path: &str, query: Option<&str>) -> DirectoryResult<String> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: String) -> DirectoryResult<String> {
        self.send(Method::POST, path, None, Some(body)).await
    }

    async fn patch(&self, path: &str, body: String) -> DirectoryResult<String> {
        self.send(Method::PATCH, path, None, Some(body)).await
    }

    async fn delete(&self, path: &str) -> DirectoryResult<String> {
        self.send(Method::DELETE, path, None, None).await
    }
}

/// Pretty-print JSON error bodies; anything else is returned unchanged.
fn format_error_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

impl DirectoryTransport for GraphTransport {
    async fn list_users(&self, query: Option<&str>) -> DirectoryResult<String> {
        self.get(endpoints::USERS, query).await
    }

    async fn get_user(&self, object_id: &str) -> DirectoryResult<String> {
        self.get(&endpoints::user(object_id), None).await
    }

    async fn find_users_by_sign_in_name(&self, sign_in_name: &str) -> DirectoryResult<String> {
        let filter = endpoints::users_by_sign_in_name_filter(sign_in_name);
        self.get(endpoints::USERS, Some(&filter)).await
    }

    async fn get_user_member_of(&self, object_id: &str) -> DirectoryResult<String> {
        self.get(&endpoints::user_member_of(object_id), None).await
    }

    async fn create_user(&self, body: String) -> DirectoryResult<String> {
        self.post(endpoints::USERS, body).await
    }

    async fn update_user(&self, object_id: &str, body: String) -> DirectoryResult<String> {
        self.patch(&endpoints::user(object_id), body).await
    }

    async fn delete_user(&self, object_id: &str) -> DirectoryResult<String> {
        self.delete(&endpoints::user(object_id)).await
    }

    async fn list_groups(&self, query: Option<&str>) -> DirectoryResult<String> {
        self.get(endpoints::GROUPS, query).await
    }

    async fn get_group(&self, object_id: &str) -> DirectoryResult<String> {
        self.get(&endpoints::group(object_id), None).await
    }

    async fn get_group_members(&self, object_id: &str) -> DirectoryResult<String> {
        self.get(&endpoints::group_member_links(object_id), None).await
    }

    async fn create_group(&self, body: String) -> DirectoryResult<String> {
        self.post(endpoints::GROUPS, body).await
    }

    async fn update_group(&self, object_id: &str, body: String) -> DirectoryResult<String> {
        self.patch(&endpoints::group(object_id), body).await
    }

    async fn delete_group(&self, object_id: &str) -> DirectoryResult<String> {
        self.delete(&endpoints::group(object_id)).await
    }

    async fn add_group_member(&self, group_id: &str, member_id: &str) -> DirectoryResult<String> {
        let link = json!({
            "url": format!("{}{}", self.tenant_url, endpoints::directory_object(member_id))
        });
        self.post(&endpoints::group_member_links(group_id), link.to_string())
            .await
    }

    async fn remove_group_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> DirectoryResult<String> {
        self.delete(&endpoints::group_member_link(group_id, member_id))
            .await
    }

    async fn find_applications(&self, display_name_prefix: &str) -> DirectoryResult<String> {
        let filter = endpoints::applications_by_prefix_filter(display_name_prefix);
        self.get(endpoints::APPLICATIONS, Some(&filter)).await
    }

    async fn get_extension_properties(
        &self,
        application_object_id: &str,
    ) -> DirectoryResult<String> {
        self.get(&endpoints::extension_properties(application_object_id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> GraphTransport {
        let config = DirectoryConfig::new("contoso.onmicrosoft.com", "client", "secret");
        GraphTransport::new(&config).unwrap()
    }

    #[test]
    fn test_url_includes_api_version_and_query() {
        let transport = transport();
        assert_eq!(
            transport.url("/users", None),
            "https://graph.windows.net/contoso.onmicrosoft.com/users?api-version=1.6"
        );
        assert_eq!(
            transport.url("/users", Some("$top=5")),
            "https://graph.windows.net/contoso.onmicrosoft.com/users?api-version=1.6&$top=5"
        );
        assert_eq!(
            transport.url("/users", Some("")),
            "https://graph.windows.net/contoso.onmicrosoft.com/users?api-version=1.6"
        );
    }

    #[test]
    fn test_error_body_is_pretty_printed() {
        let formatted = format_error_body(r#"{"odata.error":{"code":"Request_BadRequest"}}"#);
        assert!(formatted.contains('\n'));
        assert!(formatted.contains("Request_BadRequest"));

        assert_eq!(format_error_body("plain failure"), "plain failure");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DirectoryConfig::default();
        assert!(matches!(
            GraphTransport::new(&config),
            Err(DirectoryError::Config { .. })
        ));
    }
}
