use crate::classification::classify;
use crate::config::ProbeConfig;
use crate::domain::extract_host;
use crate::error::{FetchError, ProbeError};
use crate::execution::progress::{ProgressCallback, ProgressTracker};
use crate::traits::HttpClient;
use crate::types::{ProbeOutcome, ProbeReport, ProbeResponse};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// Minimum number of outcomes the sink buffers without blocking a worker
pub const SINK_CAPACITY: usize = 64;

/// Classify a probe result and attach the host label of `url`
pub fn build_outcome(url: &str, result: &Result<ProbeResponse, FetchError>) -> ProbeOutcome {
    let (kind, detail) = classify(result);
    ProbeOutcome::new(extract_host(url), kind.as_str(), detail)
}

/// Fans out one probe task per URL and gathers their outcomes
pub struct ProbeRunner<C>
where
    C: HttpClient,
{
    client: Arc<C>,
    max_concurrent_requests: Option<usize>,
}

impl<C> ProbeRunner<C>
where
    C: HttpClient,
{
    /// Create a new runner; probes are uncapped unless the config sets a limit
    pub fn new(config: ProbeConfig, client: C) -> Self {
        let max_concurrent_requests = config.concurrency_limit();

        Self {
            client: Arc::new(client),
            max_concurrent_requests,
        }
    }

    /// Configure maximum concurrent requests
    pub fn with_max_concurrent_requests(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent_requests = Some(max_concurrent.max(1));
        self
    }

    /// Probe every URL and return one row per input, in completion order.
    ///
    /// All tasks are spawned before any is awaited. Failures never escape: a
    /// transport error becomes a classified row, and a task that dies before
    /// emitting gets exactly one `unknown` row for its URL.
    pub async fn run(
        &self,
        urls: Vec<String>,
        progress_callback: Option<Box<ProgressCallback>>,
    ) -> ProbeReport {
        let progress = Arc::new(ProgressTracker::new(urls.len()));
        let callback: Option<Arc<ProgressCallback>> = progress_callback.map(Arc::from);

        // Sized for the whole input: the sink is only drained once every
        // worker has finished, so a smaller buffer would stall producers.
        let (sink, mut outcomes) = mpsc::channel(urls.len().max(SINK_CAPACITY));
        let semaphore = self
            .max_concurrent_requests
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let mut tasks = FuturesUnordered::new();

        for url in urls {
            let client = Arc::clone(&self.client);
            let sink = sink.clone();
            let semaphore = semaphore.clone();
            let progress = Arc::clone(&progress);
            let callback = callback.clone();
            let task_url = url.clone();
            let sent = Arc::new(AtomicBool::new(false));
            let task_sent = Arc::clone(&sent);

            let task = tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(|e| {
                        ProbeError::general(format!("Failed to acquire semaphore: {}", e))
                    })?),
                    None => None,
                };

                let result = client.fetch(&task_url).await;

                sink.send(build_outcome(&task_url, &result))
                    .await
                    .map_err(|_| ProbeError::general("outcome sink closed"))?;
                task_sent.store(true, Ordering::Release);

                progress.request_completed();
                if let Some(callback) = &callback {
                    callback(progress.as_ref());
                }

                Ok::<(), ProbeError>(())
            });

            tasks.push(task.map(move |joined| (url, sent, joined)));
        }
        drop(sink);

        let mut orphaned = Vec::new();
        while let Some((url, sent, joined)) = tasks.next().await {
            let failure = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e.to_string(),
                Err(e) => format!("probe task failed: {}", e),
            };

            // Its row is already in the sink; only the progress report failed.
            if sent.load(Ordering::Acquire) {
                continue;
            }

            progress.request_completed();
            if let Some(callback) = &callback {
                callback(progress.as_ref());
            }
            orphaned.push(ProbeOutcome::new(extract_host(&url), "unknown", failure));
        }

        let mut rows = Vec::with_capacity(progress.total_requests());
        while let Some(outcome) = outcomes.recv().await {
            rows.push(outcome);
        }
        rows.extend(orphaned);

        ProbeReport::new(rows)
    }
}
