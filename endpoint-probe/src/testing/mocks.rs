use crate::error::FetchError;
use crate::traits::HttpClient;
use crate::types::ProbeResponse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Canned answer of the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Status(u16),
    Error(FetchError),
}

/// Deterministic in-memory transport for testing
#[derive(Clone)]
pub struct MockHttpClient {
    pub replies: HashMap<String, MockReply>,
    pub default_reply: MockReply,
    pub delay: Option<Duration>,
    pub panic_on: Option<String>,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: MockReply::Error(FetchError::other("Mock response not found")),
            delay: None,
            panic_on: None,
            calls: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_status<S: Into<String>>(mut self, url: S, status: u16) -> Self {
        self.replies.insert(url.into(), MockReply::Status(status));
        self
    }

    pub fn with_error<S: Into<String>>(mut self, url: S, error: FetchError) -> Self {
        self.replies.insert(url.into(), MockReply::Error(error));
        self
    }

    /// Reply used for URLs without a specific entry
    pub fn with_default_status(mut self, status: u16) -> Self {
        self.default_reply = MockReply::Status(status);
        self
    }

    /// Block every fetch for `delay` before replying
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Panic instead of replying when `url` is fetched
    pub fn with_panic<S: Into<String>>(mut self, url: S) -> Self {
        self.panic_on = Some(url.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed in flight at once
    pub fn max_in_flight_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.max_in_flight)
    }

    fn reply_for(&self, url: &str) -> MockReply {
        self.replies
            .get(url)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for MockHttpClient {
    async fn fetch(&self, url: &str) -> Result<ProbeResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.panic_on.as_deref() == Some(url) {
            panic!("mock transport asked to panic for {url}");
        }

        match self.reply_for(url) {
            MockReply::Status(status) => Ok(ProbeResponse::new(status, url)),
            MockReply::Error(error) => Err(error),
        }
    }
}

pub mod test_helpers {
    /// Alphabetic label unique for every index: 0 -> "a", 25 -> "z", 26 -> "ab"
    pub fn letters(mut index: usize) -> String {
        let mut name = String::new();
        loop {
            name.push(char::from(b'a' + (index % 26) as u8));
            index /= 26;
            if index == 0 {
                break;
            }
        }
        name
    }

    /// `<scheme>://<name>.example` for every name
    pub fn create_urls(scheme: &str, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|name| format!("{scheme}://{name}.example"))
            .collect()
    }
}
