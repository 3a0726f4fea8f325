//! Maps source products onto import-template rows.
//!
//! A product yields one main row carrying every mapped attribute, followed
//! by one continuation row per additional image. Products with variation
//! records or without a resolvable title yield no rows.

use catmig_scraper::types::resolve_text;
use catmig_scraper::{RawTags, SourceProduct};

use crate::columns::{Column, ExportRow};
use crate::price::{format_cost, resolve_prices};
use crate::slug::slugify;

/// Stock tracker name the destination platform expects for tracked items.
const INVENTORY_TRACKER: &str = "shopify";
const FULFILLMENT_SERVICE: &str = "manual";
const AGE_GROUP: &str = "Adult (13+ years old)";
const DEFAULT_GENDER: &str = "Unisex";

/// Result of mapping one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedProduct {
    /// Main row first, then continuation rows in image order.
    Rows(Vec<ExportRow>),
    /// Product carries variation records and was left out entirely.
    SkippedVariants {
        product_id: String,
        variation_count: usize,
    },
    /// Resolved title was empty.
    MissingTitle { product_id: String },
}

/// Rows for a whole product list plus what was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedCatalog {
    /// Data rows in product order, header excluded.
    pub rows: Vec<ExportRow>,
    pub exported_products: usize,
    /// Ids of products skipped for carrying variations.
    pub skipped_variants: Vec<String>,
    pub skipped_untitled: usize,
}

/// Maps every product in order. Pure: the same input always yields the same
/// rows.
#[must_use]
pub fn map_products(products: &[SourceProduct]) -> MappedCatalog {
    let mut catalog = MappedCatalog::default();

    for product in products {
        match map_product(product) {
            MappedProduct::Rows(rows) => {
                catalog.exported_products += 1;
                catalog.rows.extend(rows);
            }
            MappedProduct::SkippedVariants {
                product_id,
                variation_count,
            } => {
                let variation_ids: Vec<&str> = product
                    .variations()
                    .iter()
                    .filter_map(|v| v.id.as_deref())
                    .collect();
                tracing::warn!(
                    product_id = %product_id,
                    variation_count,
                    ?variation_ids,
                    "product has variations; skipped (variant export not supported)"
                );
                catalog.skipped_variants.push(product_id);
            }
            MappedProduct::MissingTitle { product_id } => {
                tracing::debug!(product_id = %product_id, "product has no title; skipped");
                catalog.skipped_untitled += 1;
            }
        }
    }

    catalog
}

/// Maps one product to its rows, or explains why it has none.
#[must_use]
pub fn map_product(product: &SourceProduct) -> MappedProduct {
    let variation_count = product.variations().len();
    if variation_count > 0 {
        return MappedProduct::SkippedVariants {
            product_id: product.id.clone(),
            variation_count,
        };
    }

    let title = resolve_text(product.title_translations.as_ref());
    if title.is_empty() {
        return MappedProduct::MissingTitle {
            product_id: product.id.clone(),
        };
    }

    let handle = slugify(title);
    let images = product.image_urls();

    let mut rows = Vec::with_capacity(images.len().max(1));
    rows.push(main_row(product, title, &handle, images.first().copied()));

    for (idx, url) in images.iter().enumerate().skip(1) {
        let mut row = ExportRow::new();
        row.set(Column::Handle, handle.as_str());
        row.set(Column::ImageUrl, *url);
        row.set(Column::ImagePosition, (idx + 1).to_string());
        row.set(Column::ImageAltText, title);
        rows.push(row);
    }

    MappedProduct::Rows(rows)
}

/// Builds the main row of a single-SKU product.
fn main_row(product: &SourceProduct, title: &str, handle: &str, image: Option<&str>) -> ExportRow {
    let summary = resolve_text(product.summary_translations.as_ref());
    let description = or_else(
        resolve_text(product.description_translations.as_ref()),
        summary,
    );
    let seo_title = or_else(resolve_text(product.seo_title_translations.as_ref()), title);
    let seo_description = or_else(
        resolve_text(product.seo_description_translations.as_ref()),
        summary,
    );

    let prices = resolve_prices(
        product.price.as_ref().and_then(|m| m.dollars),
        product.price_sale.as_ref().and_then(|m| m.dollars),
    );
    let cost = format_cost(product.cost.as_ref().and_then(|m| m.dollars));

    let mut row = ExportRow::new();
    row.set(Column::Title, title);
    row.set(Column::Handle, handle);
    row.set(Column::Description, description);
    row.set(Column::Tags, tags(product));
    row.set(Column::Published, "TRUE");
    row.set(
        Column::Status,
        if product.status.as_deref() == Some("active") {
            "Active"
        } else {
            "Draft"
        },
    );
    row.set(Column::Sku, product.sku.clone().unwrap_or_default());
    row.set(Column::Barcode, barcode(product));
    row.set(Column::Price, prices.price);
    row.set(Column::CompareAtPrice, prices.compare_at);
    row.set(Column::CostPerItem, cost);
    row.set(Column::ChargeTax, bool_cell(product.taxable.unwrap_or(false)));

    if product.unlimited_quantity.unwrap_or(false) {
        row.set(Column::ContinueSelling, "CONTINUE");
    } else {
        row.set(Column::InventoryTracker, INVENTORY_TRACKER);
        row.set(
            Column::InventoryQuantity,
            product.quantity.map(|q| q.to_string()).unwrap_or_default(),
        );
        row.set(Column::ContinueSelling, "DENY");
    }

    row.set(Column::WeightGrams, weight_grams(product.weight).to_string());
    row.set(Column::WeightUnit, "g");
    row.set(Column::RequiresShipping, "TRUE");
    row.set(Column::FulfillmentService, FULFILLMENT_SERVICE);
    row.set(Column::ImageUrl, image.unwrap_or_default());
    row.set(Column::ImagePosition, "1");
    row.set(Column::ImageAltText, title);
    row.set(Column::GiftCard, "FALSE");
    row.set(Column::SeoTitle, seo_title);
    row.set(Column::SeoDescription, seo_description);
    row.set(Column::GoogleGender, gender(product.gender.as_deref()));
    row.set(Column::GoogleAgeGroup, AGE_GROUP);
    row.set(Column::GoogleMpn, product.mpn.clone().unwrap_or_default());
    row.set(Column::GoogleCondition, "New");
    row.set(Column::GoogleCustomProduct, "FALSE");
    row
}

fn or_else<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// `tags_array` joined with `", "`, else the legacy `tags` field.
fn tags(product: &SourceProduct) -> String {
    let joined = product
        .tags_array
        .as_deref()
        .map(|t| t.join(", "))
        .unwrap_or_default();
    if !joined.is_empty() {
        return joined;
    }
    match &product.tags {
        Some(RawTags::Text(text)) => text.clone(),
        Some(RawTags::List(list)) => list.join(","),
        None => String::new(),
    }
}

/// Barcode, falling back to GTIN.
fn barcode(product: &SourceProduct) -> String {
    [&product.barcode, &product.gtin]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_owned()
}

/// Kilograms to whole grams; absent weight is zero.
#[allow(clippy::cast_possible_truncation)]
fn weight_grams(kilograms: Option<f64>) -> i64 {
    kilograms.map_or(0, |kg| (kg * 1000.0).round() as i64)
}

/// Source gender with its first letter upper-cased, or the default.
fn gender(raw: Option<&str>) -> String {
    let mut chars = raw.unwrap_or_default().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => DEFAULT_GENDER.to_owned(),
    }
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod tests;
