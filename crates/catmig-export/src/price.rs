//! Price, compare-at price and cost resolution.
//!
//! Amounts arrive as JSON numbers. Rounding to cents works on the exact
//! binary value of the `f64`, so `1.005` (stored just below) becomes `1.00`
//! and `8.345` (stored just above) becomes `8.35`.

use rust_decimal::{Decimal, RoundingStrategy};

/// The two price cells of a main row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePair {
    /// Selling price, always two decimals.
    pub price: String,
    /// Original price when on sale, otherwise empty.
    pub compare_at: String,
}

/// Resolves the selling and compare-at prices.
///
/// A missing regular price counts as zero and a negative one is clamped to
/// zero. A sale price applies only when it is positive and strictly below the
/// regular price; the regular price then moves to compare-at.
#[must_use]
pub fn resolve_prices(regular: Option<f64>, sale: Option<f64>) -> PricePair {
    let regular = regular.unwrap_or(0.0).max(0.0);
    let sale = sale.filter(|s| *s > 0.0);

    match sale {
        Some(sale) if sale < regular => PricePair {
            price: format_amount(sale),
            compare_at: format_amount(regular),
        },
        _ => PricePair {
            price: format_amount(regular),
            compare_at: String::new(),
        },
    }
}

/// Formats a cost: two decimals when present and non-zero, else empty.
#[must_use]
pub fn format_cost(cost: Option<f64>) -> String {
    cost.filter(|c| *c != 0.0)
        .map(format_amount)
        .unwrap_or_default()
}

/// Formats an amount with exactly two decimals.
///
/// The `f64` is widened to a `Decimal` holding its full binary expansion
/// before rounding, and exact midpoints round away from zero.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let exact = Decimal::from_f64_retain(amount).unwrap_or_default();
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
