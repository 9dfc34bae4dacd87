//! Indexed binary min-heap with decrease-key.
//!
//! Elements live in a flat array laid out as a binary heap. A side table
//! maps every queued element to its current slot, so membership checks are
//! O(1) and an element can be re-prioritised in O(log n) without a linear
//! scan. Lookup goes through the element's `Eq`/`Hash`, ordering goes through
//! the separately stored priority.
//!
//! Ties between equal priorities are resolved arbitrarily; callers must not
//! rely on any particular order among them.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Errors reported by [`MinHeap::insert`] and [`MinHeap::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An equal element is already queued.
    AlreadyExists,
    /// No equal element is queued.
    NotFound,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => write!(f, "heap: element is already queued"),
            Self::NotFound => write!(f, "heap: element is not queued"),
        }
    }
}

impl std::error::Error for HeapError {}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// A min-heap keyed by element identity and ordered by priority.
#[derive(Debug, Clone)]
pub struct MinHeap<T, P = f64> {
    entries: Vec<Entry<T, P>>,
    /// Slot of every queued element in `entries`.
    positions: HashMap<T, usize>,
}

impl<T, P> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T, P> MinHeap<T, P> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The minimal-priority element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.item)
    }
}

impl<T, P> MinHeap<T, P>
where
    T: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// The minimal-priority element and its priority.
    pub fn peek_with_priority(&self) -> Option<(&T, P)> {
        self.entries.first().map(|e| (&e.item, e.priority))
    }

    /// Whether an element equal to `item` is queued.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Current priority of `item`, if queued.
    pub fn priority_of(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&i| self.entries[i].priority)
    }

    /// Queue `item` at `priority`.
    ///
    /// Fails with [`HeapError::AlreadyExists`] and leaves the heap untouched
    /// if an equal element is already queued.
    pub fn insert(&mut self, item: T, priority: P) -> Result<(), HeapError> {
        if self.contains(&item) {
            return Err(HeapError::AlreadyExists);
        }
        self.push_new(item, priority);
        Ok(())
    }

    /// Change the priority of the queued element equal to `item`.
    ///
    /// The new priority may be lower or higher than the old one.
    pub fn update(&mut self, item: &T, priority: P) -> Result<(), HeapError> {
        let Some(&idx) = self.positions.get(item) else {
            return Err(HeapError::NotFound);
        };
        self.reprioritize(idx, priority);
        Ok(())
    }

    /// Queue `item`, or re-prioritise it if already queued.
    ///
    /// Returns `true` if the element was newly inserted.
    pub fn push_or_update(&mut self, item: T, priority: P) -> bool {
        match self.positions.get(&item) {
            Some(&idx) => {
                self.reprioritize(idx, priority);
                false
            }
            None => {
                self.push_new(item, priority);
                true
            }
        }
    }

    /// Remove and return the minimal-priority element.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove the minimal-priority element, also returning its priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let Entry { item, priority } = self.entries.pop()?;
        self.positions.remove(&item);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Check the heap ordering and the slot table in O(n).
    ///
    /// Always true unless the heap has a bug; used by tests.
    pub fn is_heap(&self) -> bool {
        if self.positions.len() != self.entries.len() {
            return false;
        }
        self.entries.iter().enumerate().all(|(i, e)| {
            let slot_ok = self.positions.get(&e.item) == Some(&i);
            let children_ok = [2 * i + 1, 2 * i + 2]
                .into_iter()
                .filter(|&c| c < self.entries.len())
                .all(|c| !(self.entries[c].priority < e.priority));
            slot_ok && children_ok
        })
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn push_new(&mut self, item: T, priority: P) {
        let idx = self.entries.len();
        self.positions.insert(item.clone(), idx);
        self.entries.push(Entry { item, priority });
        self.sift_up(idx);
    }

    fn reprioritize(&mut self, idx: usize, priority: P) {
        self.entries[idx].priority = priority;
        // At most one direction actually moves the element.
        let idx = self.sift_up(idx);
        self.sift_down(idx);
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].priority < self.entries[b].priority
    }

    /// Swap two slots and keep the slot table in sync.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        for i in [a, b] {
            if let Some(pos) = self.positions.get_mut(&self.entries[i].item) {
                *pos = i;
            }
        }
    }

    /// Move the element at `idx` toward the root; returns its final slot.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
        idx
    }

    /// Move the element at `idx` toward the leaves; returns its final slot.
    fn sift_down(&mut self, mut idx: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                return idx;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn empty_heap() {
        let mut h = MinHeap::<&str>::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.peek(), None);
        assert_eq!(h.pop(), None);
        assert!(h.is_heap());
    }

    #[test]
    fn pops_in_priority_order() {
        let mut h = MinHeap::new();
        for (item, p) in [("d", 4.0), ("b", 2.0), ("e", 5.0), ("a", 1.0), ("c", 3.0)] {
            h.insert(item, p).unwrap();
            assert!(h.is_heap());
        }
        assert_eq!(h.peek(), Some(&"a"));
        assert_eq!(h.len(), 5);

        let mut out = Vec::new();
        while let Some(item) = h.pop() {
            assert!(h.is_heap());
            out.push(item);
        }
        assert_eq!(out, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut h = MinHeap::new();
        h.insert(7u32, 3.0).unwrap();
        h.insert(8u32, 1.0).unwrap();
        assert_eq!(h.insert(7, 0.5), Err(HeapError::AlreadyExists));
        assert_eq!(h.len(), 2);
        assert_eq!(h.priority_of(&7), Some(3.0));
        assert_eq!(h.peek(), Some(&8));
    }

    #[test]
    fn update_missing_element() {
        let mut h = MinHeap::<u32>::new();
        h.insert(1, 1.0).unwrap();
        assert_eq!(h.update(&2, 0.0), Err(HeapError::NotFound));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn decrease_key_moves_to_front() {
        let mut h = MinHeap::new();
        for i in 0..10u32 {
            h.insert(i, f64::from(i) + 10.0).unwrap();
        }
        h.update(&9, 0.0).unwrap();
        assert!(h.is_heap());
        assert!(h.contains(&9));
        assert_eq!(h.peek_with_priority(), Some((&9, 0.0)));
        assert_eq!(h.pop(), Some(9));
        assert_eq!(h.pop(), Some(0));
    }

    #[test]
    fn increase_key_moves_back() {
        let mut h = MinHeap::new();
        for i in 0..10u32 {
            h.insert(i, f64::from(i)).unwrap();
        }
        h.update(&0, 100.0).unwrap();
        assert!(h.is_heap());
        let order: Vec<u32> = std::iter::from_fn(|| h.pop()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    }

    #[test]
    fn push_or_update_inserts_then_updates() {
        let mut h = MinHeap::new();
        assert!(h.push_or_update('x', 5.0));
        assert!(h.push_or_update('y', 3.0));
        assert!(!h.push_or_update('x', 1.0));
        assert_eq!(h.len(), 2);
        assert_eq!(h.pop_with_priority(), Some(('x', 1.0)));
        assert_eq!(h.pop_with_priority(), Some(('y', 3.0)));
    }

    #[test]
    fn integer_priorities() {
        let mut h: MinHeap<&str, i32> = MinHeap::with_capacity(4);
        h.insert("late", 9).unwrap();
        h.insert("early", -3).unwrap();
        assert_eq!(h.pop(), Some("early"));
        h.clear();
        assert!(h.is_empty());
        assert!(!h.contains(&"late"));
    }

    #[test]
    fn random_operations_keep_heap_property() {
        let mut rng = StdRng::seed_from_u64(61);
        let mut h = MinHeap::new();
        let mut model: HashMap<u32, f64> = HashMap::new();

        for _ in 0..5000 {
            let key = rng.random_range(0..200u32);
            let priority = rng.random_range(-1000.0..1000.0);
            match rng.random_range(0..4u32) {
                0 => {
                    let res = h.insert(key, priority);
                    if model.contains_key(&key) {
                        assert_eq!(res, Err(HeapError::AlreadyExists));
                    } else {
                        assert_eq!(res, Ok(()));
                        model.insert(key, priority);
                    }
                }
                1 => {
                    let res = h.update(&key, priority);
                    if let Some(p) = model.get_mut(&key) {
                        assert_eq!(res, Ok(()));
                        *p = priority;
                    } else {
                        assert_eq!(res, Err(HeapError::NotFound));
                    }
                }
                2 => match h.pop_with_priority() {
                    Some((item, p)) => {
                        let min = model.values().copied().fold(f64::INFINITY, f64::min);
                        assert_eq!(p, min);
                        assert_eq!(model.remove(&item), Some(p));
                    }
                    None => assert!(model.is_empty()),
                },
                _ => assert_eq!(h.contains(&key), model.contains_key(&key)),
            }
            assert!(h.is_heap());
            assert_eq!(h.len(), model.len());
        }
    }

    #[test]
    fn drains_sorted_after_random_inserts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut h = MinHeap::new();
        for i in 0..1000u32 {
            h.insert(i, rng.random_range(0.0..1.0)).unwrap();
        }
        let mut last = f64::NEG_INFINITY;
        while let Some((_, p)) = h.pop_with_priority() {
            assert!(p >= last);
            last = p;
        }
    }
}
