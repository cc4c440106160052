// Lock-guarded bid table for multi-threaded callers
// Every operation takes the lock exactly once

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::bid::Bid;
use crate::infrastructure::hash_table::BidTable;
use crate::types::BidTableResult;

/// Bid table shared between threads behind one read-write lock
///
/// Clones share the same underlying table.
#[derive(Debug, Clone)]
pub struct SharedBidTable {
    inner: Arc<RwLock<BidTable>>,
}

impl SharedBidTable {
    /// Create a shared table with the specified number of buckets
    pub fn new(capacity: usize) -> BidTableResult<Self> {
        Ok(Self::from_table(BidTable::new(capacity)?))
    }

    /// Wrap an existing table
    pub fn from_table(table: BidTable) -> Self {
        SharedBidTable {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Insert a bid under the write lock
    pub fn insert(&self, bid: Bid) {
        self.inner.write().insert(bid);
    }

    /// Search under the read lock, returning a copy of the bid
    pub fn search(&self, bid_id: &str) -> Option<Bid> {
        self.inner.read().search(bid_id).cloned()
    }

    /// Remove under the write lock
    pub fn remove(&self, bid_id: &str) -> Option<Bid> {
        self.inner.write().remove(bid_id)
    }

    /// Copy every bid out in enumeration order
    pub fn snapshot(&self) -> Vec<Bid> {
        self.inner.read().iter().cloned().collect()
    }

    /// Get the number of stored bids
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the table holds no bids
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get the number of buckets
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Acquire the read lock for several lookups in a row
    pub fn read(&self) -> RwLockReadGuard<'_, BidTable> {
        self.inner.read()
    }

    /// Acquire the write lock for several mutations in a row
    pub fn write(&self) -> RwLockWriteGuard<'_, BidTable> {
        self.inner.write()
    }
}
