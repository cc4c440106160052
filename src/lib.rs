//! Bidtable: auction bids in a fixed-capacity chained hash table

// Global type definitions
pub mod types;

// Import various modules
pub mod bid;
pub mod config;
pub mod driver;
pub mod infrastructure;
pub mod loader;

// Re-export the record and table for easier access
pub use bid::Bid;
pub use infrastructure::{BidTable, SharedBidTable};

// Re-export error items for easier access
pub use types::{BidTableError, BidTableResult};
