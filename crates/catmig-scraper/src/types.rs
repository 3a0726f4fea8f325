//! Response types for the source admin API's product listing endpoint.
//!
//! ## Observed shape
//!
//! ### Envelope
//! `{ "result": true, "data": { "items": [...] } }`. A `false` result or a
//! missing `data.items` is not an error here; the pagination layer treats it
//! as the end of the listing.
//!
//! ### Translations
//! Every text field comes as a `*_translations` object keyed by locale code
//! (`"en"`, `"zh-hant"`, `"zh-cn"`, ...). Values may be `null`. Key order is
//! preserved as received so the "first available value" fallback is
//! deterministic.
//!
//! ### Money
//! `price`, `price_sale` and `cost` are objects with a `dollars` field holding
//! a JSON number (e.g. `12.5`) alongside `cents` and currency metadata. Only
//! `dollars` is read, kept as the `f64` the API sent so rounding can work
//! from its exact binary value.
//!
//! ### Images
//! Two alternative lists: `cover_media_array` entries carry
//! `original_image_url` directly; `media` entries nest it under
//! `images.original.url`.
//!
//! ### Tags
//! `tags_array` is a list of strings. The older `tags` field has been seen
//! both as a plain string and as a list.

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level response from `GET /{merchant_id}/products`.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default)]
    pub data: Option<PageData>,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub items: Option<Vec<SourceProduct>>,
}

impl PageResponse {
    /// Consumes the envelope and returns the item list, empty when absent.
    #[must_use]
    pub fn into_items(self) -> Vec<SourceProduct> {
        self.data.and_then(|d| d.items).unwrap_or_default()
    }
}

/// Locale code to translated string for one text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations(pub IndexMap<String, Option<String>>);

/// Locales tried in order before falling back to the first entry.
const LOCALE_PRIORITY: [&str; 3] = ["en", "zh-hant", "zh-cn"];

impl Translations {
    /// Resolves the display value: `en`, then `zh-hant`, then `zh-cn`, then
    /// the first entry in received order. Empty strings count as missing for
    /// the named locales; the first-entry fallback is taken as-is.
    #[must_use]
    pub fn resolve(&self) -> &str {
        LOCALE_PRIORITY
            .iter()
            .filter_map(|locale| self.0.get(*locale).and_then(Option::as_deref))
            .find(|value| !value.is_empty())
            .or_else(|| self.0.values().next().and_then(Option::as_deref))
            .unwrap_or("")
    }
}

/// Resolves an optional bundle, treating `None` as an empty bundle.
#[must_use]
pub fn resolve_text(translations: Option<&Translations>) -> &str {
    translations.map_or("", Translations::resolve)
}

/// A monetary amount as returned by the admin API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Money {
    /// Amount in major units (e.g. `12.5` for $12.50).
    #[serde(default)]
    pub dollars: Option<f64>,
}

/// The legacy `tags` field: a comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    Text(String),
    List(Vec<String>),
}

/// One SKU-level variation record. Only the id is kept; products carrying
/// variations are not exported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variation {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverMedia {
    #[serde(default)]
    pub original_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub images: Option<MediaImages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaImages {
    #[serde(default)]
    pub original: Option<ImageRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// A single product from the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceProduct {
    /// Platform object id (e.g. `"5f1a2b3c4d5e6f7a8b9c0d1e"`).
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub title_translations: Option<Translations>,
    #[serde(default)]
    pub description_translations: Option<Translations>,
    #[serde(default)]
    pub summary_translations: Option<Translations>,
    #[serde(default)]
    pub seo_title_translations: Option<Translations>,
    #[serde(default)]
    pub seo_description_translations: Option<Translations>,

    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub price_sale: Option<Money>,
    #[serde(default)]
    pub cost: Option<Money>,

    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub gtin: Option<String>,
    #[serde(default)]
    pub mpn: Option<String>,

    #[serde(default)]
    pub taxable: Option<bool>,
    #[serde(default)]
    pub unlimited_quantity: Option<bool>,
    /// Stock on hand. Kept as a float because the API does not guarantee an
    /// integer encoding.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,

    /// `"active"`, `"draft"`, `"hidden"`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub tags_array: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<RawTags>,

    #[serde(default)]
    pub variations: Option<Vec<Variation>>,

    #[serde(default)]
    pub cover_media_array: Option<Vec<CoverMedia>>,
    #[serde(default)]
    pub media: Option<Vec<Media>>,
}

fn non_empty(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty())
}

impl SourceProduct {
    /// The product's variation records, empty when absent.
    #[must_use]
    pub fn variations(&self) -> &[Variation] {
        self.variations.as_deref().unwrap_or_default()
    }

    /// Image URLs in display order.
    ///
    /// Uses `cover_media_array` when it has any entries, otherwise `media`.
    /// Entries without a non-empty URL are skipped.
    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        match self.cover_media_array.as_deref() {
            Some(cover) if !cover.is_empty() => cover
                .iter()
                .filter_map(|m| non_empty(m.original_image_url.as_deref()))
                .collect(),
            _ => self
                .media
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|m| {
                    non_empty(
                        m.images
                            .as_ref()
                            .and_then(|i| i.original.as_ref())
                            .and_then(|o| o.url.as_deref()),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn translations(value: serde_json::Value) -> Translations {
        serde_json::from_value(value).expect("valid translations")
    }

    #[test]
    fn resolve_prefers_english() {
        let t = translations(json!({"zh-hant": "茶", "en": "Tea"}));
        assert_eq!(t.resolve(), "Tea");
    }

    #[test]
    fn resolve_falls_back_to_traditional_then_simplified_chinese() {
        let t = translations(json!({"zh-cn": "简体", "zh-hant": "繁體"}));
        assert_eq!(t.resolve(), "繁體");
        let t = translations(json!({"ja": "お茶", "zh-cn": "简体"}));
        assert_eq!(t.resolve(), "简体");
    }

    #[test]
    fn resolve_skips_empty_and_null_priority_locales() {
        let t = translations(json!({"en": "", "zh-hant": null, "zh-cn": "简体"}));
        assert_eq!(t.resolve(), "简体");
    }

    #[test]
    fn resolve_uses_first_entry_in_received_order() {
        // Parsed from text: `json!` would sort the keys.
        let t: Translations = serde_json::from_str(r#"{"th": "ชา", "ja": "お茶"}"#).unwrap();
        assert_eq!(t.resolve(), "ชา");
    }

    #[test]
    fn resolve_empty_bundle_is_empty_string() {
        assert_eq!(Translations::default().resolve(), "");
        assert_eq!(resolve_text(None), "");
    }

    #[test]
    fn money_deserializes_numeric_dollars() {
        let money: Money = serde_json::from_value(json!({"cents": 1250, "dollars": 12.5})).unwrap();
        assert_eq!(money.dollars, Some(12.5));
        let whole: Money = serde_json::from_value(json!({"dollars": 20})).unwrap();
        assert_eq!(whole.dollars, Some(20.0));
    }

    #[test]
    fn raw_tags_accepts_string_or_list() {
        let text: RawTags = serde_json::from_value(json!("a, b")).unwrap();
        assert_eq!(text, RawTags::Text("a, b".to_owned()));
        let list: RawTags = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(list, RawTags::List(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn image_urls_prefers_cover_media() {
        let product: SourceProduct = serde_json::from_value(json!({
            "_id": "p1",
            "cover_media_array": [
                {"original_image_url": "https://img/1.jpg"},
                {"original_image_url": null},
                {"original_image_url": "https://img/2.jpg"}
            ],
            "media": [{"images": {"original": {"url": "https://media/1.jpg"}}}]
        }))
        .unwrap();
        assert_eq!(product.image_urls(), vec!["https://img/1.jpg", "https://img/2.jpg"]);
    }

    #[test]
    fn image_urls_falls_back_to_media_when_cover_empty() {
        let product: SourceProduct = serde_json::from_value(json!({
            "_id": "p1",
            "cover_media_array": [],
            "media": [
                {"images": {"original": {"url": "https://media/1.jpg"}}},
                {"images": {}},
                {"images": {"original": {"url": ""}}}
            ]
        }))
        .unwrap();
        assert_eq!(product.image_urls(), vec!["https://media/1.jpg"]);
    }

    #[test]
    fn image_urls_does_not_fall_back_when_cover_has_no_usable_urls() {
        let product: SourceProduct = serde_json::from_value(json!({
            "_id": "p1",
            "cover_media_array": [{"original_image_url": ""}],
            "media": [{"images": {"original": {"url": "https://media/1.jpg"}}}]
        }))
        .unwrap();
        assert!(product.image_urls().is_empty());
    }

    #[test]
    fn page_response_tolerates_missing_data() {
        let page: PageResponse = serde_json::from_value(json!({"result": false})).unwrap();
        assert!(page.into_items().is_empty());
    }
}
