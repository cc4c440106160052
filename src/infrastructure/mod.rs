//! Infrastructure module
//!
//! Bucket hashing, the chained bid table and the pieces around it.

pub mod hash;
pub mod hash_table;
pub mod logger;
pub mod lwlock;

pub use hash_table::BidTable;
pub use lwlock::SharedBidTable;
