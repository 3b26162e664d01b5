//! Compression event history
//!
//! A bounded FIFO of counted compression timestamps. The rate estimator
//! reads it as a sliding window; everything else only appends.

use std::collections::VecDeque;

use resq_core::MonoTime;

/// A single counted downward compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionEvent {
    /// When the compression was counted
    pub at: MonoTime,
}

impl CompressionEvent {
    pub fn new(at: MonoTime) -> Self {
        Self { at }
    }
}

/// Bounded ordered history of compression events
/// INVARIANT: len() <= capacity; timestamps non-decreasing in insertion order
#[derive(Debug, Clone)]
pub struct CompressionHistory {
    events: VecDeque<CompressionEvent>,
    capacity: usize,
}

impl CompressionHistory {
    /// Default window size, in events
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append an event, evicting the oldest when full
    pub fn push(&mut self, event: CompressionEvent) {
        debug_assert!(
            self.last().map_or(true, |last| event.at >= last.at),
            "compression events must arrive in time order"
        );

        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest event in the window
    pub fn first(&self) -> Option<CompressionEvent> {
        self.events.front().copied()
    }

    /// Newest event in the window
    pub fn last(&self) -> Option<CompressionEvent> {
        self.events.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompressionEvent> {
        self.events.iter()
    }
}

impl Default for CompressionHistory {
    fn default() -> Self {
        Self::new()
    }
}
