use crate::error::FetchError;
use crate::types::ProbeResponse;
use std::future::Future;

/// Trait for HTTP transports able to issue a single probe.
///
/// Implementations are shared read-only across every worker of a run, so
/// they must be safe for concurrent use.
pub trait HttpClient: Send + Sync + 'static {
    /// Issue exactly one GET against `url` and release the body before returning
    fn fetch(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<ProbeResponse, FetchError>> + Send;
}
