mod cursor;

pub const DEFAULT_CAPACITY: usize = 30;

/// An ordered list with an internal cursor.
///
/// The cursor is `current_index`. It names the current item while it is
/// below `items.len()`; any other value means there is no current item.
#[derive(Debug)]
pub struct Sequence<T> {
    items: Vec<T>,
    capacity: usize,
    current_index: usize,
}

impl<T> Sequence<T> {
    pub fn new(initial_capacity: usize) -> Self {
        let capacity = capacity_policy::clamped(initial_capacity, 0);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            current_index: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates to `new_capacity` slots, never fewer than
    /// [`size`](Self::size).
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = capacity_policy::clamped(new_capacity, self.items.len());
        if new_capacity > self.items.capacity() {
            self.items.reserve_exact(new_capacity - self.items.len());
        } else {
            self.items.shrink_to(new_capacity);
        }
        log::trace!(
            "sequence resized from {} to {} slots ({} used)",
            self.capacity,
            new_capacity,
            self.items.len()
        );
        self.capacity = new_capacity;
    }

    fn grow_if_full(&mut self) {
        if self.items.len() == self.capacity {
            self.resize(capacity_policy::grown(self.capacity));
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            current_index: self.current_index,
        }
    }
}
