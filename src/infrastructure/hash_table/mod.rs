// Bid hash table with separate chaining
//
// Each bucket stores the head of its chain inline; every further entry is a
// boxed node owned by its predecessor.

use std::mem;
use std::num::NonZeroUsize;

use log::debug;

use crate::bid::Bid;
use crate::infrastructure::hash::hash_bid_id;
use crate::types::{BidTableError, BidTableResult, DEFAULT_SIZE};

/// Hash table node structure
#[derive(Debug)]
struct Node {
    bid: Bid,
    /// Bucket the node was hashed to
    key: usize,
    next: Option<Box<Node>>,
}

impl Node {
    /// Create a new hash node
    fn new(bid: Bid, key: usize) -> Self {
        Node {
            bid,
            key,
            next: None,
        }
    }
}

/// Bucket slot, either empty or holding the chain head
#[derive(Debug, Default)]
enum Slot {
    #[default]
    Empty,
    Occupied(Node),
}

impl Slot {
    /// Take the head node out, leaving the slot empty
    fn take(&mut self) -> Option<Node> {
        match mem::take(self) {
            Slot::Empty => None,
            Slot::Occupied(node) => Some(node),
        }
    }
}

/// Fixed-capacity bid table
#[derive(Debug)]
pub struct BidTable {
    /// Bucket array, never resized
    slots: Vec<Slot>,
    /// Number of buckets
    capacity: NonZeroUsize,
    /// Number of stored bids
    len: usize,
}

impl BidTable {
    /// Create a new bid table with the specified number of buckets
    ///
    /// Returns `BidTableError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> BidTableResult<Self> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(BidTableError::InvalidCapacity(capacity))?;
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: NonZeroUsize) -> Self {
        let mut slots = Vec::with_capacity(capacity.get());
        slots.resize_with(capacity.get(), Slot::default);

        debug!("created bid table with {} buckets", capacity);

        BidTable {
            slots,
            capacity,
            len: 0,
        }
    }

    /// Bucket index a bid id maps to
    pub fn bucket_index(&self, bid_id: &str) -> usize {
        hash_bid_id(bid_id, self.capacity)
    }

    /// Insert a bid at the tail of its bucket's chain
    ///
    /// Duplicate ids are not detected; a later duplicate sits behind the
    /// earlier one and is only reachable by enumeration.
    pub fn insert(&mut self, bid: Bid) {
        let key = self.bucket_index(bid.bid_id());
        let node = Node::new(bid, key);

        match &mut self.slots[key] {
            slot @ Slot::Empty => *slot = Slot::Occupied(node),
            Slot::Occupied(head) => {
                // Walk to the tail of the chain
                let mut tail = head;
                loop {
                    match tail.next {
                        Some(ref mut next) => tail = &mut **next,
                        None => {
                            tail.next = Some(Box::new(node));
                            break;
                        }
                    }
                }
            }
        }

        self.len += 1;
    }

    /// Find the first bid in chain order whose id equals `bid_id`
    pub fn search(&self, bid_id: &str) -> Option<&Bid> {
        self.chain(self.bucket_index(bid_id))
            .find(|bid| bid.bid_id() == bid_id)
    }

    /// Remove the first bid in chain order whose id equals `bid_id`
    ///
    /// Returns the removed bid, or `None` if no bid has that id.
    pub fn remove(&mut self, bid_id: &str) -> Option<Bid> {
        let index = self.bucket_index(bid_id);

        let head_matches = match &self.slots[index] {
            Slot::Empty => return None,
            Slot::Occupied(head) => head.bid.bid_id() == bid_id,
        };

        let removed = if head_matches {
            self.remove_head(index)?
        } else {
            self.unlink_after_head(index, bid_id)?
        };

        self.len -= 1;
        debug!("removed bid {} from bucket {}", bid_id, removed.key);

        Some(removed.bid)
    }

    /// Remove the chain head, promoting its successor into the slot
    fn remove_head(&mut self, index: usize) -> Option<Node> {
        let mut head = self.slots[index].take()?;

        if let Some(successor) = head.next.take() {
            // Moving out of the box releases it
            self.slots[index] = Slot::Occupied(*successor);
        }

        Some(head)
    }

    /// Unlink the first non-head node of the chain matching `bid_id`
    fn unlink_after_head(&mut self, index: usize, bid_id: &str) -> Option<Node> {
        let Slot::Occupied(head) = &mut self.slots[index] else {
            return None;
        };

        let mut prev: &mut Node = head;
        loop {
            match prev.next {
                Some(ref next) if next.bid.bid_id() == bid_id => {
                    let mut removed = prev.next.take()?;
                    prev.next = removed.next.take();
                    return Some(*removed);
                }
                Some(ref mut next) => prev = &mut **next,
                None => return None,
            }
        }
    }

    /// Iterate the bids of one bucket in chain order
    ///
    /// An empty or out-of-range bucket yields nothing.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        let node = match self.slots.get(bucket) {
            Some(Slot::Occupied(head)) => Some(head),
            _ => None,
        };
        Chain { node }
    }

    /// Iterate every bid, bucket by bucket, each chain head first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            chain: Chain { node: None },
        }
    }

    /// Get the number of buckets
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Get the number of stored bids
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table holds no bids
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for BidTable {
    fn default() -> Self {
        Self::with_buckets(NonZeroUsize::new(DEFAULT_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Extend<Bid> for BidTable {
    fn extend<I: IntoIterator<Item = Bid>>(&mut self, bids: I) {
        for bid in bids {
            self.insert(bid);
        }
    }
}

impl<'a> IntoIterator for &'a BidTable {
    type Item = &'a Bid;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Release overflow nodes one at a time so long chains do not recurse
impl Drop for BidTable {
    fn drop(&mut self) {
        for slot in &mut self.slots {
            if let Slot::Occupied(head) = slot {
                let mut next = head.next.take();
                while let Some(mut node) = next {
                    next = node.next.take();
                }
            }
        }
    }
}

/// Iterator over the bids of a single chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    node: Option<&'a Node>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.bid)
    }
}

/// Iterator over every bid in a table
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bid) = self.chain.next() {
                return Some(bid);
            }
            match self.slots.next()? {
                Slot::Empty => continue,
                Slot::Occupied(head) => self.chain = Chain { node: Some(head) },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
