// src/platforms/hackerone/mod.rs
//! HackerOne hacker API integration

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::PlatformAPI;
use crate::error::Result;
use crate::progress::ProgressIndicator;
use crate::types::{FetchOptions, ProgramData};

pub mod client;
pub mod collector;
pub mod handles;
pub mod scope;
pub mod types;

pub use client::{ClientSettings, HackerOneClient, RetryPolicy};
pub use collector::{DEFAULT_CONCURRENCY, ScopeCollector};

/// HackerOne scope source
pub struct HackerOneAPI {
    client: Arc<HackerOneClient>,
    concurrency: usize,
    progress: ProgressIndicator,
}

impl HackerOneAPI {
    pub fn new(client: HackerOneClient) -> Self {
        Self {
            client: Arc::new(client),
            concurrency: DEFAULT_CONCURRENCY,
            progress: ProgressIndicator::new(false),
        }
    }

    /// Maximum number of programs fetched in parallel
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_progress(mut self, progress: ProgressIndicator) -> Self {
        self.progress = progress;
        self
    }
}

#[async_trait]
impl PlatformAPI for HackerOneAPI {
    fn name(&self) -> &str {
        "HackerOne"
    }

    async fn fetch_programs(&self, options: &FetchOptions) -> Result<Vec<ProgramData>> {
        info!("Fetching programs from {}", self.name());

        let handles = handles::list_handles(&self.client, &options.visibility).await?;

        let collector = ScopeCollector::new(Arc::clone(&self.client), self.concurrency);
        let programs = collector
            .collect(handles, Arc::new(options.scope.clone()), &self.progress)
            .await?;

        info!(
            "Successfully fetched {} programs from {}",
            programs.len(),
            self.name()
        );
        Ok(programs)
    }
}
