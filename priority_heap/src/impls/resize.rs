use super::{Priority, PriorityHeap};

impl<T, P: Priority> PriorityHeap<T, P> {
    /// Reallocates the buffer to hold `new_capacity` entries. Asking for
    /// less than [`size`](Self::size) keeps exactly `size` slots so no entry
    /// is ever dropped.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = capacity_policy::clamped(new_capacity, self.entries.len());
        if new_capacity > self.entries.capacity() {
            self.entries
                .reserve_exact(new_capacity - self.entries.len());
        } else {
            self.entries.shrink_to(new_capacity);
        }
        log::trace!(
            "priority heap resized from {} to {} slots ({} occupied)",
            self.capacity,
            new_capacity,
            self.entries.len()
        );
        self.capacity = new_capacity;
    }
}
