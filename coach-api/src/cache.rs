//! Bounded per-call result store
//!
//! Holds at most `capacity` results. Inserting a new call past capacity
//! evicts the oldest inserted call.

use std::collections::{HashMap, VecDeque};

/// Default number of calls retained per result kind
pub const DEFAULT_RESULT_CAPACITY: usize = 1000;

#[derive(Debug)]
pub struct ResultCache<T> {
    capacity: usize,
    entries: HashMap<String, T>,
    order: VecDeque<String>,
}

impl<T> ResultCache<T> {
    /// Create a cache; a capacity of 0 is raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, call_id: &str) -> Option<&T> {
        self.entries.get(call_id)
    }

    pub fn contains(&self, call_id: &str) -> bool {
        self.entries.contains_key(call_id)
    }

    /// Store a result, replacing any previous one for the same call
    pub fn insert(&mut self, call_id: String, value: T) {
        if let Some(existing) = self.entries.get_mut(&call_id) {
            *existing = value;
            return;
        }

        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        self.order.push_back(call_id.clone());
        self.entries.insert(call_id, value);
    }

    /// Keep an existing result, or store `value` if the call has none
    pub fn get_or_insert(&mut self, call_id: String, value: T) -> &T {
        if !self.entries.contains_key(&call_id) {
            self.insert(call_id.clone(), value);
        }
        &self.entries[&call_id]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_CAPACITY)
    }
}
