mod dump;
mod resize;

use super::{Entry, Priority, PriorityHeap, DEFAULT_CAPACITY};

impl<T, P: Priority> PriorityHeap<T, P> {
    /// Creates an empty heap with room for `initial_capacity` entries.
    /// A capacity of zero is bumped to one.
    pub fn new(initial_capacity: usize) -> Self {
        let capacity = capacity_policy::clamped(initial_capacity, 0);
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` with the given priority, growing the buffer first if it
    /// is full.
    pub fn push(&mut self, value: T, priority: P) {
        if self.entries.len() == self.capacity {
            self.resize(capacity_policy::grown(self.capacity));
        }
        self.entries.push(Entry::new(value, priority));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the highest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> (T, P) {
        assert!(!self.empty(), "pop called on an empty priority heap");
        // the last entry takes the root's place, then sinks
        let top = self.entries.swap_remove(self.root());
        if !self.empty() {
            self.sift_down(self.root());
        }
        top.into_parts()
    }

    /// The value with the highest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn front(&self) -> &T {
        self.peek().0
    }

    /// The value with the highest priority together with that priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek(&self) -> (&T, &P) {
        assert!(!self.empty(), "front called on an empty priority heap");
        let top = &self.entries[self.root()];
        (&top.value, &top.priority)
    }

    pub fn try_front(&self) -> Option<&T> {
        self.entries.first().map(|top| &top.value)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = self.parent(node) {
            if self.priority(node) > self.priority(parent) {
                self.entries.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        while let Some(child) = self.larger_child(node) {
            if self.priority(child) > self.priority(node) {
                self.entries.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }
}

impl<T, P: Priority> Default for PriorityHeap<T, P> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// a derived Clone would let Vec pick the new allocation size
impl<T: Clone, P: Priority + Clone> Clone for PriorityHeap<T, P> {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend(self.entries.iter().cloned());
        Self {
            capacity: self.capacity,
            entries,
        }
    }
}
