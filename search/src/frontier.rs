//! Frontier containers: stack, queue and priority orderings behind one trait.
//!
//! The engine only ever sees [`Frontier`]; the strategy picks the concrete
//! ordering. Stack and queue frontiers ignore the key they are handed.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::error::SearchError;

/// Ordering discipline of a frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
    /// Smallest key first; equal keys in insertion order.
    Priority,
}

impl FrontierPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::Priority => "priority",
        }
    }
}

/// Container of discovered-but-unexpanded items.
///
/// Callers check [`Frontier::is_empty`] before popping; popping an empty
/// frontier is an engine bug and reported as [`SearchError::EmptyFrontierPop`].
pub trait Frontier<T, K> {
    /// The ordering this frontier implements.
    fn policy(&self) -> FrontierPolicy;

    /// Insert an item with its ordering key.
    fn push(&mut self, item: T, key: K);

    /// Remove the next item by this frontier's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontierPop`] if the frontier is empty.
    fn pop(&mut self) -> Result<T, SearchError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// LIFO frontier (depth-first).
#[derive(Debug)]
pub struct StackFrontier<T> {
    items: Vec<T>,
    high_water: usize,
}

impl<T> StackFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Frontier<T, K> for StackFrontier<T> {
    fn policy(&self) -> FrontierPolicy {
        FrontierPolicy::Stack
    }

    fn push(&mut self, item: T, _key: K) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Result<T, SearchError> {
        self.items.pop().ok_or(SearchError::EmptyFrontierPop)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// FIFO frontier (breadth-first).
#[derive(Debug)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
    high_water: usize,
}

impl<T> QueueFrontier<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Frontier<T, K> for QueueFrontier<T> {
    fn policy(&self) -> FrontierPolicy {
        FrontierPolicy::Queue
    }

    fn push(&mut self, item: T, _key: K) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Result<T, SearchError> {
        self.items.pop_front().ok_or(SearchError::EmptyFrontierPop)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// A heap entry ordered by `(key, seq)` only; the item never takes part.
///
/// `BinaryHeap` is a max-heap, so entries are stored under `Reverse` to pop
/// the smallest key first.
#[derive(Debug)]
struct PriorityEntry<T, K> {
    key: K,
    seq: u64,
    item: T,
}

impl<T, K: Ord> PartialEq for PriorityEntry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for PriorityEntry<T, K> {}

impl<T, K: Ord> PartialOrd for PriorityEntry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for PriorityEntry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(self.seq.cmp(&other.seq))
    }
}

/// Min-key frontier (uniform-cost, A*).
///
/// No decrease-key: a state may sit in the frontier several times under
/// different keys. The engine drops the stale copies when they are popped
/// after the state has been expanded.
#[derive(Debug)]
pub struct PriorityFrontier<T, K> {
    heap: BinaryHeap<Reverse<PriorityEntry<T, K>>>,
    next_seq: u64,
    high_water: usize,
}

impl<T, K: Ord> PriorityFrontier<T, K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Key of the next item to pop, if any.
    #[must_use]
    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|Reverse(entry)| &entry.key)
    }
}

impl<T, K: Ord> Default for PriorityFrontier<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Ord> Frontier<T, K> for PriorityFrontier<T, K> {
    fn policy(&self) -> FrontierPolicy {
        FrontierPolicy::Priority
    }

    fn push(&mut self, item: T, key: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(PriorityEntry { key, seq, item }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Result<T, SearchError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.item)
            .ok_or(SearchError::EmptyFrontierPop)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
