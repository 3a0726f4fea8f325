use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("no session identity available; log in to the source admin and set the merchant id and session cookie")]
    Unauthenticated,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: u32 },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ScraperError {
    /// Returns `true` for every failure that happened while fetching or
    /// decoding a page, as opposed to a missing session.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}
