use crate::config::ProbeConfig;
use crate::error::{FetchError, Result};
use crate::http::error_mapping::map_reqwest_error;
use crate::http::RequestBuilderImpl;
use crate::traits::HttpClient;
use crate::types::ProbeResponse;
use reqwest::Client;

/// Probe transport backed by a shared reqwest client
#[derive(Clone)]
pub struct HttpClientImpl {
    client: Client,
    request_builder: RequestBuilderImpl,
}

impl HttpClientImpl {
    /// Create a new HTTP client with configuration
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if config.follow_redirects == Some(false) {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }

        let client = builder.build()?;
        let request_builder = RequestBuilderImpl::new(
            client.clone(),
            config.user_agent_override().map(str::to_string),
        );

        Ok(Self {
            client,
            request_builder,
        })
    }

    pub fn user_agent(&self) -> &str {
        self.request_builder.user_agent()
    }
}

impl HttpClient for HttpClientImpl {
    async fn fetch(&self, url: &str) -> std::result::Result<ProbeResponse, FetchError> {
        let request = self
            .request_builder
            .build_request(url)
            .map_err(|e| map_reqwest_error(url, &e))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| map_reqwest_error(url, &e))?;

        // Only the status line matters; dropping the response releases the body.
        Ok(ProbeResponse::new(
            response.status().as_u16(),
            response.url().as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::DEFAULT_USER_AGENT;

    #[test]
    fn test_client_uses_configured_agent() {
        let config = ProbeConfig {
            user_agent: Some("probe/1.0".to_string()),
            ..Default::default()
        };
        let client = HttpClientImpl::new(&config).unwrap();
        assert_eq!(client.user_agent(), "probe/1.0");

        let client = HttpClientImpl::new(&ProbeConfig::default()).unwrap();
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_malformed_url_surfaces_as_url_layer_error() {
        let client = HttpClientImpl::new(&ProbeConfig::default()).unwrap();
        let err = client.fetch("not a url").await.unwrap_err();

        match err {
            FetchError::Url { op, url, .. } => {
                assert_eq!(op, "Get");
                assert_eq!(url, "not a url");
            }
            other => panic!("expected url error, got {other:?}"),
        }
    }
}
