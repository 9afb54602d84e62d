// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::platforms::hackerone::client::{
    ClientSettings, DEFAULT_API_URL, DEFAULT_PROGRAM_URL, RetryPolicy,
};
use crate::platforms::hackerone::collector::DEFAULT_CONCURRENCY;

#[derive(Debug, Deserialize, Clone)]
pub struct HackerOneConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_program_url")]
    pub program_url: String,
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_program_url() -> String { DEFAULT_PROGRAM_URL.to_string() }

impl Default for HackerOneConfig {
    fn default() -> Self {
        Self {
            username: None,
            api_token: None,
            api_url: default_api_url(),
            program_url: default_program_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_wait_secs")]
    pub wait_secs: u64,
    #[serde(default = "default_rate_limit_status")]
    pub status: u16,
}

fn default_max_attempts() -> u32 { 10 }
fn default_wait_secs() -> u64 { 5 }
fn default_rate_limit_status() -> u16 { 429 }

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            wait_secs: default_wait_secs(),
            status: default_rate_limit_status(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectorConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_concurrency() -> usize { DEFAULT_CONCURRENCY }

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hackerone: HackerOneConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&contents)?;
        Ok(cfg)
    }

    /// Client settings derived from the `[hackerone]` and `[rate_limit]` sections
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_url: self.hackerone.api_url.clone(),
            program_url: self.hackerone.program_url.clone(),
            retry: RetryPolicy {
                max_attempts: self.rate_limit.max_attempts,
                wait: Duration::from_secs(self.rate_limit.wait_secs),
                rate_limit_status: self.rate_limit.status,
            },
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }
}
