// src/platforms/hackerone/collector.rs
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use super::client::HackerOneClient;
use super::scope::fetch_program_scope;
use crate::error::{Result, ScopeError};
use crate::progress::ProgressIndicator;
use crate::types::{ProgramData, ScopeQuery};

pub const DEFAULT_CONCURRENCY: usize = 50;

/// Fetches scope for many programs with a bounded pool of workers
///
/// Workers pull handles from a shared queue and send finished programs back
/// over a channel; this collector is the only owner of the aggregate. The
/// first worker error aborts the remaining workers and is returned as is.
pub struct ScopeCollector {
    client: Arc<HackerOneClient>,
    concurrency: usize,
}

impl ScopeCollector {
    pub fn new(client: Arc<HackerOneClient>, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    /// Collect scope for every handle
    ///
    /// The returned programs are in completion order, not handle order.
    pub async fn collect(
        &self,
        handles: Vec<String>,
        query: Arc<ScopeQuery>,
        progress: &ProgressIndicator,
    ) -> Result<Vec<ProgramData>> {
        if handles.is_empty() {
            return Ok(Vec::new());
        }

        let total = handles.len();
        let workers = self.concurrency.min(total);
        info!("Fetching scope for {} programs with {} workers", total, workers);

        let (job_tx, job_rx) = mpsc::channel(total);
        for handle in handles {
            // capacity equals the job count, so this never waits
            if job_tx.send(handle).await.is_err() {
                return Err(ScopeError::Worker("job queue closed".to_string()));
            }
        }
        drop(job_tx);

        let job_rx = Arc::new(Mutex::new(job_rx));
        let (result_tx, mut result_rx) = mpsc::channel(workers);
        let mut pool = JoinSet::new();

        for id in 0..workers {
            let client = Arc::clone(&self.client);
            let query = Arc::clone(&query);
            let job_rx = Arc::clone(&job_rx);
            let result_tx = result_tx.clone();

            pool.spawn(async move {
                run_worker(id, client, query, job_rx, result_tx).await;
            });
        }

        // Channel closes once every worker has returned
        drop(result_tx);

        progress.start(total as u64, "Fetching program scopes");

        let mut programs = Vec::with_capacity(total);
        while let Some(result) = result_rx.recv().await {
            match result {
                Ok(program) => {
                    progress.advance(&program.url);
                    programs.push(program);
                }
                Err(e) => {
                    error!("Aborting scope collection: {}", e);
                    pool.abort_all();
                    progress.finish();
                    return Err(e);
                }
            }
        }

        while let Some(joined) = pool.join_next().await {
            if let Err(e) = joined {
                progress.finish();
                return Err(ScopeError::Worker(e.to_string()));
            }
        }

        progress.finish();
        info!("Collected scope for {} programs", programs.len());
        Ok(programs)
    }
}

async fn run_worker(
    id: usize,
    client: Arc<HackerOneClient>,
    query: Arc<ScopeQuery>,
    jobs: Arc<Mutex<mpsc::Receiver<String>>>,
    results: mpsc::Sender<Result<ProgramData>>,
) {
    loop {
        // Release the queue lock before doing any network work
        let next = jobs.lock().await.recv().await;
        let Some(handle) = next else {
            break;
        };

        let result = fetch_program_scope(&client, &handle, &query).await;
        let failed = result.is_err();

        if results.send(result).await.is_err() || failed {
            break;
        }
    }

    debug!("Scope worker {} finished", id);
}
