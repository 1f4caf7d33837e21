//! HTTP client for the FlightXML2 JSON endpoint.

use crate::params::Params;
use crate::protocol::{self, Reply};
use crate::types::Method;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default FlightXML2 JSON endpoint.
pub const DEFAULT_BASE_URL: &str = "http://flightxml.flightaware.com/json/FlightXML2";

/// Largest `howMany` the server accepts without `SetMaximumResultSize`.
pub const MAX_RECORD_LENGTH: u32 = 15;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server returned error status: {status}")]
    ServerError { status: StatusCode },
    #[error("Authentication failed")]
    AuthError,
    #[error("Invalid response for {method}: {source}")]
    InvalidResponse {
        method: Method,
        source: serde_json::Error,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
    #[error("{0} is not implemented")]
    NotImplemented(Method),
    #[error("API error: {0}")]
    Api(String),
}

/// Configuration for the FlightXML2 client.
#[derive(Clone)]
pub struct ClientConfig {
    /// FlightAware account name
    pub username: String,
    /// FlightXML API key
    pub api_key: String,
    /// Endpoint root; method names are appended as path segments
    pub base_url: String,
    /// Request timeout, none by default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the FlightXML2 API.
///
/// Every implemented operation is a single authenticated POST. The client
/// holds no mutable state and can be shared freely.
#[derive(Debug, Clone)]
pub struct FlightXmlClient {
    client: Client,
    config: ClientConfig,
}

impl FlightXmlClient {
    /// Create a new FlightXML2 client.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("flightxml/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .deflate(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a method.
    pub fn endpoint(&self, method: Method) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), method)
    }

    /// Issue one call and decode the unwrapped payload.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        params: Params,
    ) -> Result<Reply<T>, ClientError> {
        let body = self.post(method, &params).await?;
        let reply = protocol::decode_reply(method, body)?;

        if let Reply::Error(msg) = &reply {
            tracing::warn!("{} returned error: {}", method, msg);
        }

        Ok(reply)
    }

    async fn post(&self, method: Method, params: &Params) -> Result<Value, ClientError> {
        let url = self.endpoint(method);

        tracing::debug!("POST {} ({} params)", url, params.len());

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.api_key))
            .form(params.as_pairs())
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let bytes = response.bytes().await?;
                tracing::trace!("{} response: {} bytes", method, bytes.len());
                serde_json::from_slice(&bytes)
                    .map_err(|source| ClientError::InvalidResponse { method, source })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::AuthError),
            status => Err(ClientError::ServerError { status }),
        }
    }

    /// Refuse a method this client does not support, without any network traffic.
    pub(crate) fn not_implemented<T>(&self, method: Method) -> Result<T, ClientError> {
        tracing::warn!("{} is not implemented", method);
        Err(ClientError::NotImplemented(method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let client = FlightXmlClient::new(ClientConfig::new("user", "key")).unwrap();
        assert_eq!(
            client.endpoint(Method::AirportInfo),
            "http://flightxml.flightaware.com/json/FlightXML2/AirportInfo"
        );

        let client = FlightXmlClient::new(
            ClientConfig::new("user", "key").with_base_url("http://localhost:8080/"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(Method::GetFlightId),
            "http://localhost:8080/GetFlightID"
        );
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ClientConfig::new("user", "secret-key").with_timeout(Duration::from_secs(5));
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("secret-key"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_not_implemented_is_immediate() {
        let client = FlightXmlClient::new(ClientConfig::new("user", "key")).unwrap();
        let result: Result<(), _> = client.not_implemented(Method::Enroute);
        assert!(matches!(result, Err(ClientError::NotImplemented(Method::Enroute))));
    }
}
