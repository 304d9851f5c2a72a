use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, error, info, info_span, instrument, warn};

use crate::config::Config;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into a page body.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// How a single response is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(String),
    RateLimited,
    NotFound,
    OtherFailure(u16),
}

impl FetchOutcome {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            200 => FetchOutcome::Success(body),
            429 => FetchOutcome::RateLimited,
            404 => FetchOutcome::NotFound,
            other => FetchOutcome::OtherFailure(other),
        }
    }

    pub fn into_result(self, url: &str) -> Result<String> {
        match self {
            FetchOutcome::Success(body) => Ok(body),
            FetchOutcome::RateLimited => Err(ScrapeError::RateLimited { url: url.to_string() }),
            FetchOutcome::NotFound => Err(ScrapeError::NotFound { url: url.to_string() }),
            FetchOutcome::OtherFailure(status) => Err(ScrapeError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP status {status}"),
            }),
        }
    }
}

/// Blocking HTTP client that pauses after every request to stay under the site's rate limit.
pub struct Fetcher {
    agent: ureq::Agent,
    user_agent: String,
    min_delay: u64,
    max_delay: u64,
}

impl Fetcher {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
            min_delay: config.min_delay_secs,
            max_delay: config.max_delay_secs,
        }
    }

    fn request(&self, url: &str) -> Result<FetchOutcome> {
        let response = {
            let _span = info_span!("http_get", url = %url).entered();
            self.agent.get(url).header("User-Agent", &self.user_agent).call()
        };
        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => Ok(FetchOutcome::from_status(status, body)),
                    Err(e) => {
                        error!(error = %e, status, "Failed to read response body");
                        Err(ScrapeError::Fetch { url: url.to_string(), reason: format!("failed to read body: {e}") })
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Request failed");
                Err(ScrapeError::Fetch { url: url.to_string(), reason: e.to_string() })
            }
        }
    }

    fn pause(&self) {
        let secs = if self.max_delay == 0 {
            0
        } else {
            rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
        };
        debug!(secs, "Sleeping after request");
        if secs > 0 {
            thread::sleep(Duration::from_secs(secs));
        }
    }
}

impl PageSource for Fetcher {
    #[instrument(level = "info", skip(self))]
    fn fetch(&self, url: &str) -> Result<String> {
        let outcome = self.request(url);
        self.pause();
        match outcome? {
            FetchOutcome::Success(body) => {
                info!(bytes = body.len(), "Fetched page");
                Ok(body)
            }
            other => {
                warn!(outcome = ?other, "Unsuccessful response");
                other.into_result(url)
            }
        }
    }
}
