//! Bid record stored by the bid table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bid record
///
/// Represents a single auction bid with:
/// - bid_id: Decimal identifier, also the source of the bucket key
/// - title: Item title
/// - fund: Fund the sale is credited to
/// - amount: Winning bid amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Bid identifier
    bid_id: String,
    /// Item title
    title: String,
    /// Fund name
    fund: String,
    /// Bid amount
    amount: f64,
}

impl Bid {
    /// Create a new bid
    ///
    /// # Arguments
    /// * `bid_id` - Decimal identifier
    /// * `title` - Item title
    /// * `fund` - Fund name
    /// * `amount` - Bid amount
    pub fn new(
        bid_id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            bid_id: bid_id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }

    /// Get bid identifier
    pub fn bid_id(&self) -> &str {
        &self.bid_id
    }

    /// Get item title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get fund name
    pub fn fund(&self) -> &str {
        &self.fund
    }

    /// Get bid amount
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Renders `id: title | amount | fund`
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.bid_id, self.title, self.amount, self.fund
        )
    }
}
