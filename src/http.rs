// src/http.rs
//! HTTP transport used by platform clients
//!
//! Clients only need "send a GET with these headers, give me status and
//! body", so the transport is a small trait with a reqwest implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::error::{Result, ScopeError};

/// Status code and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues a single request; no retries, no status interpretation
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create new transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ScopeError::Transport {
                url: String::new(),
                source: Box::new(e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse> {
        let transport_error = |e: reqwest::Error| ScopeError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(RawResponse { status, body })
    }
}

/// API credential, sent as a Basic authorization header
#[derive(Clone)]
pub struct Credential {
    encoded: String,
}

impl Credential {
    /// Encode `username:token`
    pub fn new(username: &str, token: &str) -> Self {
        Self {
            encoded: STANDARD.encode(format!("{}:{}", username, token)),
        }
    }

    /// Use an already base64-encoded `username:token` pair
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.encoded)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_header() {
        let credential = Credential::new("alice", "s3cret");
        // base64("alice:s3cret")
        assert_eq!(credential.header_value(), "Basic YWxpY2U6czNjcmV0");
    }

    #[test]
    fn test_credential_from_encoded() {
        let credential = Credential::from_encoded("YWxpY2U6czNjcmV0");
        assert_eq!(credential.header_value(), "Basic YWxpY2U6czNjcmV0");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("alice", "s3cret");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("YWxpY2U6czNjcmV0"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn test_reqwest_transport_creation() {
        assert!(ReqwestTransport::new(Duration::from_secs(30)).is_ok());
    }
}
