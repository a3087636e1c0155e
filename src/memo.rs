//! Sparse two-dimensional memo keyed by window endpoint pairs.

use std::collections::HashMap;
use std::ops::Index;

/// Accumulating table of per-window results, indexed by endpoint pair.
///
/// Backed by a hash map on the composite `(left, right)` key, so only
/// windows that were actually evaluated occupy memory. One memo is owned
/// by exactly one evaluation run; the evaluator returns it and never
/// touches it again.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    slots: HashMap<(i64, i64), T>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Value stored for `pair`, if that window was evaluated.
    pub fn get(&self, pair: (i64, i64)) -> Option<&T> {
        self.slots.get(&pair)
    }

    pub fn contains(&self, pair: (i64, i64)) -> bool {
        self.slots.contains_key(&pair)
    }

    /// Store `value` for `pair`, returning any previous value.
    pub fn insert(&mut self, pair: (i64, i64), value: T) -> Option<T> {
        self.slots.insert(pair, value)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(pair, value)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&(i64, i64), &T)> {
        self.slots.iter()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panicking lookup, mirroring an out-of-bounds table access.
///
/// Resolving a child coordinate that was never evaluated lands here; that
/// only happens when `size.min > 0` left the base tier's children
/// ungenerated, which is a caller configuration mistake the crate does not
/// guard against.
impl<T> Index<(i64, i64)> for Memo<T> {
    type Output = T;

    fn index(&self, pair: (i64, i64)) -> &T {
        match self.slots.get(&pair) {
            Some(value) => value,
            None => panic!(
                "no memoized value for window ({}, {})",
                pair.0, pair.1
            ),
        }
    }
}
