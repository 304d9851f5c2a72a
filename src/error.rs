use thiserror::Error;

/// Everything that can stop a scrape or reshape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The site answered 429 Too Many Requests.
    #[error("rate limited while fetching {url}")]
    RateLimited { url: String },

    #[error("could not find page for url: {url}")]
    NotFound { url: String },

    /// Any other non-success status, or a transport failure.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Expected page structure or file content was missing.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
