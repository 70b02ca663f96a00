//! Blocking Overpass interpreter client.

use std::time::Duration;

use log::debug;
use poi_harvester_core::{ElementSource, FetchError, OverpassQuery, RawElement};

use super::response::parse_elements;
use crate::runtime::{BlockingHttp, ClientBuildError};

/// Public Overpass interpreter.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "POI-Harvester-CLI";

/// Default client-side timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`OverpassClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassClientConfig {
    /// Interpreter URL.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OverpassClientConfig {
    /// Default configuration pointed at `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// [`ElementSource`] that POSTs queries to an Overpass interpreter.
///
/// Each fetch is a single request with the query in the `data` form field.
/// There is no retry.
#[derive(Debug)]
pub struct OverpassClient {
    http: BlockingHttp,
    config: OverpassClientConfig,
}

impl OverpassClient {
    /// Client for the public interpreter with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(OverpassClientConfig::default())
    }

    /// Client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: OverpassClientConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingHttp::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OverpassClientConfig {
        &self.config
    }

    /// Fetch with an additional caller deadline.
    ///
    /// The in-flight request is dropped once `deadline` elapses and
    /// [`FetchError::Timeout`] is returned.
    ///
    /// # Errors
    ///
    /// As [`ElementSource::try_fetch`].
    pub fn fetch_within(
        &self,
        query: &OverpassQuery,
        deadline: Duration,
    ) -> Result<Vec<RawElement>, FetchError> {
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        self.http.block_on(async {
            tokio::time::timeout(deadline, self.post(query))
                .await
                .unwrap_or_else(|_| {
                    Err(FetchError::Timeout {
                        endpoint: self.config.endpoint.clone(),
                        timeout: deadline,
                    })
                })
        })
    }

    async fn post(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, FetchError> {
        debug!(
            "posting {} clause query to {}",
            query.clause_count(),
            self.config.endpoint
        );
        let response = self
            .http
            .client
            .post(&self.config.endpoint)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;
        parse_elements(&body)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                endpoint: self.config.endpoint.clone(),
                timeout: self.config.timeout,
            };
        }
        FetchError::Transport {
            endpoint: self.config.endpoint.clone(),
            message: error.to_string(),
            status: error.status().map(|status| status.as_u16()),
        }
    }
}

impl ElementSource for OverpassClient {
    fn try_fetch(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, FetchError> {
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        self.http.block_on(self.post(query))
    }
}
