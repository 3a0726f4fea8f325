//! Multi-page product fetch loop for `ShoplineClient`.

use catmig_core::SessionProvider;

use crate::error::ScraperError;
use crate::pagination::{page_outcome, PageOutcome};
use crate::types::SourceProduct;

use super::ShoplineClient;

impl ShoplineClient {
    /// Fetches every product visible to the session, in page order.
    ///
    /// Requests `page=1,2,...` one at a time and stops on a failed envelope,
    /// an empty page, or a short page (see [`crate::pagination`]).
    ///
    /// **All-or-nothing semantics**: on any page failure the products
    /// collected from earlier pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Unauthenticated`] if `session` yields no credentials;
    ///   no request is made in that case.
    /// - Any error from [`Self::fetch_products_page`].
    /// - [`ScraperError::PaginationLimit`] after `max_pages` full pages
    ///   (see [`Self::with_max_pages`]).
    pub async fn fetch_all_products(
        &self,
        session: &dyn SessionProvider,
        limit: u32,
    ) -> Result<Vec<SourceProduct>, ScraperError> {
        let credentials = session.credentials().ok_or(ScraperError::Unauthenticated)?;
        let limit = limit.max(1);

        let mut all_products: Vec<SourceProduct> = Vec::new();
        let mut page = 1u32;

        loop {
            if page > self.max_pages {
                return Err(ScraperError::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            let response = self.fetch_products_page(&credentials, page, limit).await?;

            let outcome = page_outcome(response, limit);
            let is_final = outcome.is_final();
            match outcome {
                PageOutcome::Exhausted => {
                    tracing::debug!(page, "listing exhausted");
                }
                PageOutcome::Last(items) | PageOutcome::More(items) => {
                    let items_on_page = items.len();
                    all_products.extend(items);
                    tracing::info!(
                        page,
                        items = items_on_page,
                        total = all_products.len(),
                        "fetched products page"
                    );
                }
            }

            if is_final {
                break;
            }
            page += 1;
        }

        Ok(all_products)
    }
}
