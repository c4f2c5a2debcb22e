//! Network defaults and URL layout for the IT Infrastructure service.

/// Default platform root URL.
pub const DEFAULT_PLATFORM_URL: &str = "https://localhost:9443";

/// Default upper bound on the page size sent with paged queries.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 500;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path between the server name and the user id.
pub const SERVICE_PATH: &str = "open-metadata/access-services/it-infrastructure";
