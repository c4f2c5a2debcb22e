//! Domain modules organized as vertical slices.
//!
//! Each entity sub-module contains:
//! - `mod.rs`: Properties type, element alias and kind descriptor
//! - `client.rs`: Sub-client alias plus kind-specific operations
//!
//! The shared pieces live beside them:
//! - `element`: Headers, elements, wire bodies and `TryFrom` conversions
//! - `kind`: `ElementKind` / `AssetKind` descriptors
//! - `manager`: The generic sub-client with the common operations
//! - `asset`: Publish/withdraw and relationship helpers for asset kinds

pub mod connector_type;
pub mod data_asset;
pub mod element;
pub mod host;
pub mod kind;
pub mod platform;
pub mod server;

#[cfg(feature = "http")]
pub mod asset;
#[cfg(feature = "http")]
pub mod manager;
