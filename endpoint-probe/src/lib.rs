//! Endpoint Probe - concurrent HTTP liveness sweeps
//!
//! This crate issues one GET per URL concurrently, classifies every outcome
//! (HTTP status or transport failure) into a small closed taxonomy and
//! assembles the per-URL rows into a renderable report.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod classification;
pub mod domain;
pub mod execution;
pub mod http;
pub mod renderers;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use classification::{classify, classify_error, classify_status, OutcomeKind};
pub use config::{InputSource, ProbeConfig, ProbeConfigBuilder};
pub use domain::extract_host;
pub use error::{CertificateFault, FetchError, ProbeError, Result};
pub use execution::{ProbeRunner, ProgressCallback, ProgressTracker};
pub use http::{HttpClientImpl, DEFAULT_USER_AGENT};
pub use renderers::{ReportRenderer, TableBuilder, TableRenderer};
pub use traits::HttpClient;
pub use types::{ProbeOutcome, ProbeReport, ProbeResponse, HEADER_ROW};

/// Type alias for the runner wired to the real reqwest transport
pub type DefaultProbeRunner = ProbeRunner<HttpClientImpl>;

/// Probe every URL with the given configuration and return the assembled report
pub async fn run_probe(
    config: ProbeConfig,
    urls: Vec<String>,
    progress_callback: Option<Box<ProgressCallback>>,
) -> Result<ProbeReport> {
    let client = HttpClientImpl::new(&config)?;
    let runner = DefaultProbeRunner::new(config, client);
    Ok(runner.run(urls, progress_callback).await)
}
