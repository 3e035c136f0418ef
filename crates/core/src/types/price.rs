//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as plain JSON numbers; `Decimal` keeps them exact
//! through comparison and display instead of going through `f64`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price.
///
/// Wraps a `Decimal` amount in the store's display currency. Ordering is
/// numeric, which is what price sorting relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
