//! Inversion policy for liability-style type categories.
//!
//! Categories like "credit" and "loan" report positive balances that
//! represent money owed, so their contribution to a net worth sum is
//! negated. Matching is exact, against the configured lowercase set; no
//! prefix or substring matching.

use rust_decimal::Decimal;
use std::collections::HashSet;

/// Type categories inverted by default.
pub const DEFAULT_INVERTED_CATEGORIES: [&str; 2] = ["credit", "loan"];

/// Whether a record of the given type category has its sign flipped when
/// summed into a net worth total.
pub fn is_inverted(type_category: &str, inverted_categories: &HashSet<String>) -> bool {
    inverted_categories.contains(&type_category.to_lowercase())
}

/// The signed contribution of `amount` for a record of the given type
/// category.
pub fn signed(amount: Decimal, type_category: &str, inverted_categories: &HashSet<String>) -> Decimal {
    if is_inverted(type_category, inverted_categories) {
        -amount
    } else {
        amount
    }
}

/// The default inverted-category set.
pub fn default_inverted_categories() -> HashSet<String> {
    DEFAULT_INVERTED_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .collect()
}
