use crate::config::types::ProbeConfig;

/// Builder for ProbeConfig to improve API ergonomics
#[derive(Debug, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Set the User-Agent override
    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, agent: S) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = Some(seconds);
        self
    }

    /// Set maximum concurrent requests
    #[must_use]
    pub fn max_concurrent_requests(mut self, max_concurrent: usize) -> Self {
        self.config.max_concurrent_requests = Some(max_concurrent);
        self
    }

    /// Set whether to follow redirects
    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = Some(follow);
        self
    }

    pub fn build(self) -> ProbeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_builder_chaining() {
        let config = ProbeConfigBuilder::new()
            .user_agent("probe/1.0")
            .timeout(45)
            .max_concurrent_requests(12)
            .follow_redirects(false)
            .build();

        assert_eq!(config.user_agent.as_deref(), Some("probe/1.0"));
        assert_eq!(config.timeout_seconds, Some(45));
        assert_eq!(config.max_concurrent_requests, Some(12));
        assert_eq!(config.follow_redirects, Some(false));
    }

    #[test]
    fn test_builder_from_existing_config() {
        let existing = ProbeConfig {
            timeout_seconds: Some(30),
            ..Default::default()
        };

        let config = ProbeConfigBuilder::from_config(existing)
            .max_concurrent_requests(4)
            .build();

        assert_eq!(config.timeout_seconds, Some(30));
        assert_eq!(config.max_concurrent_requests, Some(4));
        assert_eq!(config.user_agent, None);
    }
}
