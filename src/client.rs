//! High-level client: `InfrastructureClient` with nested sub-client accessors.
//!
//! Each entity kind has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the read-only configuration and the
//! accessor methods.

use crate::domain::connector_type::ConnectorTypes;
use crate::domain::data_asset::client::DataAssets;
use crate::domain::host::client::Hosts;
use crate::domain::manager::ElementManager;
use crate::domain::platform::client::Platforms;
use crate::domain::server::client::Servers;
use crate::error::SdkError;
use crate::http::{Credentials, HttpConfig, InfrastructureHttp};
use crate::network::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PLATFORM_URL, DEFAULT_TIMEOUT_SECS};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::connector_type::ConnectorTypes as ConnectorTypesClient;
pub use crate::domain::data_asset::client::DataAssets as DataAssetsClient;
pub use crate::domain::host::client::Hosts as HostsClient;
pub use crate::domain::platform::client::Platforms as PlatformsClient;
pub use crate::domain::server::client::Servers as ServersClient;

/// The primary entry point for the IT Infrastructure client.
///
/// Provides nested sub-client accessors for each entity kind:
/// `client.hosts()`, `client.data_assets()`, etc.
#[derive(Debug, Clone)]
pub struct InfrastructureClient {
    pub(crate) http: InfrastructureHttp,
    /// Upper bound applied to every paged request. 0 disables clamping.
    pub(crate) max_page_size: u32,
}

impl InfrastructureClient {
    pub fn builder() -> InfrastructureClientBuilder {
        InfrastructureClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn connector_types(&self) -> ConnectorTypes<'_> {
        ElementManager::new(self)
    }

    pub fn data_assets(&self) -> DataAssets<'_> {
        ElementManager::new(self)
    }

    pub fn hosts(&self) -> Hosts<'_> {
        ElementManager::new(self)
    }

    pub fn platforms(&self) -> Platforms<'_> {
        ElementManager::new(self)
    }

    pub fn servers(&self) -> Servers<'_> {
        ElementManager::new(self)
    }

    // ── Configuration ────────────────────────────────────────────────────

    pub fn platform_url(&self) -> &str {
        self.http.platform_url()
    }

    pub fn server_name(&self) -> &str {
        self.http.server_name()
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct InfrastructureClientBuilder {
    platform_url: String,
    server_name: Option<String>,
    max_page_size: u32,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl Default for InfrastructureClientBuilder {
    fn default() -> Self {
        Self {
            platform_url: DEFAULT_PLATFORM_URL.to_string(),
            server_name: None,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials: None,
        }
    }
}

impl InfrastructureClientBuilder {
    /// Root URL of the platform hosting the metadata server.
    pub fn platform_url(mut self, url: &str) -> Self {
        self.platform_url = url.to_string();
        self
    }

    /// Name of the metadata server running the IT Infrastructure service.
    pub fn server_name(mut self, name: &str) -> Self {
        self.server_name = Some(name.to_string());
        self
    }

    pub fn max_page_size(mut self, max: u32) -> Self {
        self.max_page_size = max;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Authenticate to the platform with basic-auth credentials.
    pub fn credentials(mut self, user_id: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            user_id: user_id.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn build(self) -> Result<InfrastructureClient, SdkError> {
        let server_name = self
            .server_name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| {
                SdkError::invalid_parameter("serverName", "a server name must be supplied")
            })?;

        match reqwest::Url::parse(&self.platform_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(SdkError::invalid_parameter(
                    "serverPlatformURLRoot",
                    format!("'{}' is not a valid platform URL", self.platform_url),
                ))
            }
        }

        let http = InfrastructureHttp::new(HttpConfig {
            platform_url: self.platform_url,
            server_name,
            timeout: self.timeout,
            credentials: self.credentials,
        })?;

        tracing::debug!(
            platform_url = http.platform_url(),
            server_name = http.server_name(),
            max_page_size = self.max_page_size,
            "IT infrastructure client ready"
        );

        Ok(InfrastructureClient {
            http,
            max_page_size: self.max_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = InfrastructureClient::builder()
            .server_name("cocoMDS1")
            .build()
            .unwrap();
        assert_eq!(client.platform_url(), DEFAULT_PLATFORM_URL);
        assert_eq!(client.server_name(), "cocoMDS1");
        assert_eq!(client.max_page_size(), DEFAULT_MAX_PAGE_SIZE);
    }

    #[test]
    fn test_builder_requires_server_name() {
        let err = InfrastructureClient::builder().build().unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = InfrastructureClient::builder()
            .server_name("  ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("serverName"));
    }

    #[test]
    fn test_builder_rejects_bad_platform_url() {
        let err = InfrastructureClient::builder()
            .server_name("cocoMDS1")
            .platform_url("not a url")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("serverPlatformURLRoot"));

        let err = InfrastructureClient::builder()
            .server_name("cocoMDS1")
            .platform_url("ftp://platform")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = InfrastructureClient::builder()
            .platform_url("http://localhost:9443/")
            .server_name("cocoMDS1")
            .max_page_size(50)
            .build()
            .unwrap();
        assert_eq!(client.platform_url(), "http://localhost:9443");
        assert_eq!(client.max_page_size(), 50);
    }
}
