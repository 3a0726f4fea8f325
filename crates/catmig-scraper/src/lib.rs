pub mod client;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::{ShoplineClient, MAX_PAGES};
pub use error::ScraperError;
pub use pagination::{page_outcome, PageOutcome};
pub use types::{
    resolve_text, Money, PageResponse, RawTags, SourceProduct, Translations, Variation,
};
