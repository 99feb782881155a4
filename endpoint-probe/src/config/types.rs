use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings of a probe run.
///
/// Every field is optional; an absent value keeps the HTTP client's default
/// behaviour (default user agent, no timeout, no concurrency cap, default
/// redirect policy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// User-Agent override; empty means the default agent
    pub user_agent: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of probes in flight at once
    pub max_concurrent_requests: Option<usize>,
    /// Whether to follow redirects
    pub follow_redirects: Option<bool>,
}

impl ProbeConfig {
    /// Effective user agent override, treating an empty string as absent
    pub fn user_agent_override(&self) -> Option<&str> {
        self.user_agent.as_deref().filter(|agent| !agent.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Concurrency cap, never below one when set
    pub fn concurrency_limit(&self) -> Option<usize> {
        self.max_concurrent_requests.map(|limit| limit.max(1))
    }

    /// Overlay the values set in `other` on top of this configuration
    pub fn merge(mut self, other: ProbeConfig) -> Self {
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        if other.timeout_seconds.is_some() {
            self.timeout_seconds = other.timeout_seconds;
        }
        if other.max_concurrent_requests.is_some() {
            self.max_concurrent_requests = other.max_concurrent_requests;
        }
        if other.follow_redirects.is_some() {
            self.follow_redirects = other.follow_redirects;
        }
        self
    }
}

/// Where the URL list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Newline-delimited file
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl InputSource {
    /// `File` when a path was supplied, `Stdin` otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdin,
        }
    }
}
