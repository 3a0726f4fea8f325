//! HTTP client for the source admin API's product listing endpoint.

mod fetch_all;

use std::time::Duration;

use catmig_core::SessionCredentials;
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::types::PageResponse;

/// Default maximum number of pages to fetch before returning an error.
/// Guards against a server that never returns a short or empty page.
pub const MAX_PAGES: u32 = 10_000;

/// HTTP client for `GET {base}/{merchant_id}/products?page=N&limit=L`.
///
/// Every request carries the session cookie. Non-2xx responses and bodies
/// that are not valid JSON are returned as typed errors; there are no
/// retries. Each request is bounded by the configured timeout.
pub struct ShoplineClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) max_pages: u32,
}

impl ShoplineClient {
    /// Creates a client against the given admin API root.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse or
    ///   cannot carry path segments.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let parsed = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ScraperError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be a base".to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            max_pages: MAX_PAGES,
        })
    }

    /// Overrides the page cap used by [`Self::fetch_all_products`].
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Fetches one page of products for the session's merchant.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network, TLS or timeout failure.
    /// - [`ScraperError::Deserialize`] if the body is not a decodable envelope.
    pub async fn fetch_products_page(
        &self,
        session: &SessionCredentials,
        page: u32,
        limit: u32,
    ) -> Result<PageResponse, ScraperError> {
        let url = self.products_url(&session.merchant_id, page, limit)?;

        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::COOKIE, &session.cookie)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<PageResponse>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("products page {page}"),
            source: e,
        })
    }

    /// Builds the listing URL for a merchant, page number and page size.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the base URL cannot take
    /// additional path segments.
    fn products_url(&self, merchant_id: &str, page: u32, limit: u32) -> Result<Url, ScraperError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ScraperError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .push(merchant_id)
            .push("products");

        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());

        Ok(url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
