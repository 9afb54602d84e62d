// src/error.rs
//! Fatal error taxonomy for a scope harvesting run
//!
//! Every variant aborts the whole run. Rate limiting is the only condition
//! recovered locally (inside the retrying client) and only surfaces here once
//! the attempt budget is spent.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Still rate limited by {url} after {attempts} attempts")]
    RateLimited { url: String, attempts: u32 },

    #[error("Could not retrieve {url}: HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid username or token")]
    Unauthorized,

    #[error("Invalid category '{0}'")]
    InvalidCategory(String),

    #[error("Malformed response from {url}: {source}")]
    MalformedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid output flag '{0}' (expected one of t, d, c, u)")]
    InvalidOutputFlag(char),

    #[error("Scope worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, ScopeError>;
