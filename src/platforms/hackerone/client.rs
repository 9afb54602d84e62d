// src/platforms/hackerone/client.rs
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ScopeError};
use crate::http::{Credential, RawResponse, Transport};

pub const DEFAULT_API_URL: &str = "https://api.hackerone.com/v1/hackers";
pub const DEFAULT_PROGRAM_URL: &str = "https://hackerone.com";

/// Fixed wait-and-retry policy for rate-limited responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per request, including the first one
    pub max_attempts: u32,
    /// Pause between two attempts
    pub wait: Duration,
    /// Status the API uses to signal rate limiting
    pub rate_limit_status: u16,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            wait: Duration::from_secs(5),
            rate_limit_status: 429,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_url: String,
    pub program_url: String,
    pub retry: RetryPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            program_url: DEFAULT_PROGRAM_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Authenticated HackerOne hacker API client with rate-limit retries
pub struct HackerOneClient {
    transport: Arc<dyn Transport>,
    credential: Credential,
    api_url: Url,
    program_url: String,
    retry: RetryPolicy,
}

impl HackerOneClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        credential: Credential,
        settings: ClientSettings,
    ) -> Result<Self> {
        let api_url = Url::parse(&settings.api_url).map_err(|e| ScopeError::InvalidUrl {
            url: settings.api_url.clone(),
            reason: e.to_string(),
        })?;

        if api_url.cannot_be_a_base() {
            return Err(ScopeError::InvalidUrl {
                url: settings.api_url,
                reason: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            transport,
            credential,
            api_url,
            program_url: settings.program_url.trim_end_matches('/').to_string(),
            retry: settings.retry,
        })
    }

    /// First page of the program listing
    pub fn programs_url(&self) -> Result<String> {
        self.endpoint(&["programs"])
    }

    /// Detail endpoint of a single program
    pub fn program_detail_url(&self, handle: &str) -> Result<String> {
        self.endpoint(&["programs", handle])
    }

    /// Public page of a program
    pub fn public_program_url(&self, handle: &str) -> String {
        format!("{}/{}", self.program_url, handle)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScopeError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "not a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// GET `url`, retrying while the API answers with the rate-limit status
    ///
    /// Any non-success status left once retries stop is fatal, as is a
    /// transport error on any attempt.
    pub async fn get_with_retry(&self, url: &str) -> Result<RawResponse> {
        let authorization = self.credential.header_value();
        let headers = [("Authorization", authorization.as_str())];
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = self.transport.get(url, &headers).await?;

            if response.status != self.retry.rate_limit_status {
                debug!("GET {} -> {} (attempt {})", url, response.status, attempt);

                return match response.status {
                    401 => Err(ScopeError::Unauthorized),
                    status if status > 200 => Err(ScopeError::UnexpectedStatus {
                        url: url.to_string(),
                        status,
                    }),
                    _ => Ok(response),
                };
            }

            if attempt >= max_attempts {
                return Err(ScopeError::RateLimited {
                    url: url.to_string(),
                    attempts: attempt,
                });
            }

            warn!(
                "Rate limited on {} (attempt {}/{}). Retrying in {:?}",
                url, attempt, max_attempts, self.retry.wait
            );
            tokio::time::sleep(self.retry.wait).await;
        }
    }
}
