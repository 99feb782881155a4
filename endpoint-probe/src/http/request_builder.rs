use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Request};

/// User-Agent sent when no override is configured
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub const ACCEPT_LANGUAGE_HEADER: &str = "en-US,en;q=0.5";

pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Builds probe requests with the fixed header profile
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    user_agent: Option<String>,
}

impl RequestBuilderImpl {
    /// Create a new request builder; an empty agent falls back to the default
    pub fn new(client: Client, user_agent: Option<String>) -> Self {
        let user_agent = user_agent.filter(|agent| !agent.is_empty());
        Self { client, user_agent }
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Build a GET for `url`; malformed URLs fail here with a builder error
    pub fn build_request(&self, url: &str) -> reqwest::Result<Request> {
        self.client
            .get(url)
            .header(USER_AGENT, self.user_agent())
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_HEADER)
            .header(ACCEPT, ACCEPT_HEADER)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_profile() {
        let builder = RequestBuilderImpl::new(Client::new(), None);
        let request = builder.build_request("http://example.com/health").unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.headers()[USER_AGENT], DEFAULT_USER_AGENT);
        assert_eq!(request.headers()[ACCEPT_LANGUAGE], ACCEPT_LANGUAGE_HEADER);
        assert_eq!(request.headers()[ACCEPT], ACCEPT_HEADER);
    }

    #[test]
    fn test_user_agent_override() {
        let builder = RequestBuilderImpl::new(Client::new(), Some("probe/1.0".to_string()));
        let request = builder.build_request("https://example.com").unwrap();

        assert_eq!(request.headers()[USER_AGENT], "probe/1.0");
        assert_eq!(request.headers()[ACCEPT], ACCEPT_HEADER);
    }

    #[test]
    fn test_empty_user_agent_uses_default() {
        let builder = RequestBuilderImpl::new(Client::new(), Some(String::new()));
        assert_eq!(builder.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_malformed_url_is_a_builder_error() {
        let builder = RequestBuilderImpl::new(Client::new(), None);
        let err = builder.build_request("not a url").unwrap_err();
        assert!(err.is_builder());
    }
}
