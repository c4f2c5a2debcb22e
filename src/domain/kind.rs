//! Entity kind descriptors.

use crate::domain::element::ElementProperties;

/// Describes one entity kind managed through the service.
pub trait ElementKind {
    /// URL collection segment, e.g. `hosts`.
    const COLLECTION: &'static str;
    /// Name reported when the element GUID parameter is invalid, e.g. `hostGUID`.
    const GUID_PARAMETER: &'static str;
    type Properties: ElementProperties;
}

/// Marker for kinds stored as assets in the repository.
pub trait AssetKind: ElementKind {}
