//! Low-level HTTP client: `InfrastructureHttp`.
//!
//! Knows how to reach a server on a platform, send JSON, and turn the response
//! envelope into either the typed payload or one of the three SDK error
//! classes. Internal to the SDK; the entity sub-clients wrap this.

use crate::error::{HttpError, SdkError};
use crate::http::envelope::{status_error, Envelope};
use crate::network::SERVICE_PATH;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Basic-auth credentials presented to the platform.
#[derive(Clone)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Transport settings fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub platform_url: String,
    pub server_name: String,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
}

/// Low-level HTTP client for the IT Infrastructure REST API.
#[derive(Clone)]
pub struct InfrastructureHttp {
    platform_url: String,
    server_name: String,
    client: Client,
    credentials: Option<Credentials>,
}

impl InfrastructureHttp {
    pub fn new(config: HttpConfig) -> Result<Self, SdkError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::PropertyServer(HttpError::Reqwest(e)))?;

        Ok(Self {
            platform_url: config.platform_url.trim_end_matches('/').to_string(),
            server_name: config.server_name,
            client,
            credentials: config.credentials,
        })
    }

    pub fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// `{platform}/servers/{server}/open-metadata/access-services/it-infrastructure/users/{user}`
    pub(crate) fn user_url(&self, user_id: &str) -> String {
        format!(
            "{}/servers/{}/{}/users/{}",
            self.platform_url,
            urlencoding::encode(&self.server_name),
            SERVICE_PATH,
            urlencoding::encode(user_id)
        )
    }

    // ── Request methods ──────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        self.do_request(Method::GET, url, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        self.do_request(Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, SdkError> {
        tracing::debug!(method = %method, url, "sending request");

        let mut req = self.client.request(method, url);

        if let Some(creds) = &self.credentials {
            req = req.basic_auth(&creds.user_id, Some(&creds.password));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status();
        let body_text = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url, "request rejected");
            return Err(status_error(status.as_u16(), body_text));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body_text).map_err(|e| {
            SdkError::PropertyServer(HttpError::Decode(format!(
                "{} (body: {})",
                e,
                truncate(&body_text, 256)
            )))
        })?;

        if envelope.ffdc.is_failure() {
            tracing::warn!(
                related_http_code = envelope.ffdc.related_http_code,
                exception = envelope.ffdc.exception_class_name.as_deref(),
                url,
                "service reported failure"
            );
            return Err(envelope.ffdc.into_error());
        }

        Ok(envelope.payload)
    }
}

impl fmt::Debug for InfrastructureHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfrastructureHttp")
            .field("platform_url", &self.platform_url)
            .field("server_name", &self.server_name)
            .field("credentials", &self.credentials)
            .finish()
    }
}

fn transport_error(e: reqwest::Error) -> SdkError {
    SdkError::PropertyServer(HttpError::Reqwest(e))
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
