//! Frontier containers used by the search functions
//!
//! `Stack` and `Queue` share the [`Frontier`] trait so depth-first and breadth-first
//! search can run the same traversal. `PriorityQueue` is stable: entries with equal
//! priority come out in the order they were pushed.

use crate::errors::SearchError;

use std::{
    collections::{BinaryHeap, VecDeque},
    cmp::Ordering,
};


/// LIFO / FIFO container of frontier entries
pub trait Frontier<T> {
    fn push(&mut self, item: T);

    /// Remove the next entry, fails with EmptyFrontier if nothing is left
    fn pop(&mut self) -> Result<T, SearchError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


/// Last in, first out
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Result<T, SearchError> {
        self.items.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}


/// First in, first out
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Result<T, SearchError> {
        self.items.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}


/// Heap entry - ordered by priority, then by insertion sequence
#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    sequence: u64, // insertion counter, breaks ties first-in first-out
    item: T,
}

// BinaryHeap is a max heap, so both comparisons are reversed
impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: PartialEq> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}
impl<T, P: PartialEq> Eq for Entry<T, P> {}


/// Min priority queue with first-in first-out tie breaking
/// Keys are never decreased in place, callers push a new entry and drop the stale one on pop.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    next_sequence: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry { priority, sequence, item });
    }

    /// Remove the entry with the smallest priority
    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.heap.pop()
            .map(|entry| entry.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|entry| &entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
