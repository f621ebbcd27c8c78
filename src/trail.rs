use std::collections::{vec_deque, VecDeque};

use crate::vector::Vector2;

/// Default number of positions a [`Trail`] keeps.
pub const DEFAULT_TRAIL_CAPACITY: usize = 100;

/// Bounded history of the most recent positions of a body, oldest first.
///
/// Once full, pushing a position evicts the oldest one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    capacity: usize,
    cached: VecDeque<Vector2>,
}

impl Trail {
    /// Creates an empty trail keeping at most `capacity` positions.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cached: VecDeque::with_capacity(capacity.min(DEFAULT_TRAIL_CAPACITY)),
        }
    }

    /// Maximum number of positions kept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of positions currently kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.cached.len()
    }

    /// Returns true if no position has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cached.is_empty()
    }

    /// Records a position.
    pub fn push(&mut self, position: Vector2) {
        if self.capacity == 0 {
            return;
        }

        if self.cached.len() == self.capacity {
            self.cached.pop_front();
        }
        self.cached.push_back(position);
    }

    /// Forgets every recorded position.
    pub fn clear(&mut self) {
        self.cached.clear();
    }

    /// Most recently recorded position.
    #[inline]
    pub fn last(&self) -> Option<Vector2> {
        self.cached.back().copied()
    }

    /// Iterates over the recorded positions, oldest first.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<vec_deque::Iter<'_, Vector2>> {
        self.cached.iter().copied()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = Vector2;
    type IntoIter = std::iter::Copied<vec_deque::Iter<'a, Vector2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
