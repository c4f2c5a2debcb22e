//! # IT Infrastructure client
//!
//! A Rust client for the IT Infrastructure metadata access service: the
//! hosts, software server platforms, software servers, data assets and
//! connector types that an infrastructure manager records in a metadata
//! repository.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Identifiers, paging, validation, element types (always available)
//! 2. **HTTP API**: `InfrastructureHttp` with response-envelope unwrapping
//! 3. **Entity sub-clients**: One generic `ElementManager` per entity kind
//! 4. **High-Level Client**: `InfrastructureClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use it_infrastructure_client::prelude::*;
//!
//! let client = InfrastructureClient::builder()
//!     .platform_url("https://localhost:9443")
//!     .server_name("cocoMDS1")
//!     .build()?;
//!
//! let cmdb = InfrastructureManager::new("5f1b...", "CMDB");
//! let guid = client
//!     .hosts()
//!     .create("garygeeke", &cmdb, true, &HostProperties {
//!         qualified_name: Some("Host:srv01".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! let host = client.hosts().get("garygeeke", &guid).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, paging and parameter validation.
pub mod shared;

/// Domain modules (vertical slices): properties, kinds, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network defaults and URL layout.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and response envelope.
#[cfg(feature = "http")]
pub mod http;

// ── Layers 3-4: Sub-clients + High-Level Client ─────────────────────────────

/// `InfrastructureClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Guid, InfrastructureManager, Paging};

    // Element types
    pub use crate::domain::element::{
        Element, ElementClassification, ElementHeader, ElementOrigin, ElementProperties,
        ElementVersions, RelationshipProperties, TemplateProperties,
    };

    // Entity kinds
    pub use crate::domain::connector_type::{ConnectorType, ConnectorTypeProperties};
    pub use crate::domain::data_asset::{DataAsset, DataAssetProperties};
    pub use crate::domain::host::{Host, HostProperties};
    pub use crate::domain::platform::{SoftwareServerPlatform, SoftwareServerPlatformProperties};
    pub use crate::domain::server::{SoftwareServer, SoftwareServerProperties};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PLATFORM_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ConnectorTypesClient, DataAssetsClient, HostsClient, InfrastructureClient,
        InfrastructureClientBuilder, PlatformsClient, ServersClient,
    };
}
