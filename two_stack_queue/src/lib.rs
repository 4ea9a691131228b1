// FIFO queue out of two LIFO stacks. pushes land on the inbox, reads come
// off the outbox, and the inbox is only poured over when the outbox runs dry
// so each item moves between stacks at most once

#[derive(Debug, Clone)]
pub struct TwoStackQueue<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: vec![],
            outbox: vec![],
        }
    }

    pub fn empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    pub fn size(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn push(&mut self, item: T) {
        self.inbox.push(item);
    }

    /// The oldest item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn front(&mut self) -> &T {
        assert!(!self.empty(), "front called on an empty queue");
        self.refill_outbox();
        match self.outbox.last() {
            Some(item) => item,
            None => unreachable!("outbox refilled from a non-empty inbox"),
        }
    }

    /// Removes and returns the oldest item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.empty(), "pop called on an empty queue");
        self.refill_outbox();
        match self.outbox.pop() {
            Some(item) => item,
            None => unreachable!("outbox refilled from a non-empty inbox"),
        }
    }

    fn refill_outbox(&mut self) {
        if !self.outbox.is_empty() {
            return;
        }
        log::trace!("moving {} queued items to the outbox", self.inbox.len());
        while let Some(item) = self.inbox.pop() {
            self.outbox.push(item);
        }
    }
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
