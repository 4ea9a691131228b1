use super::Sequence;

impl<T> Sequence<T> {
    pub fn is_item(&self) -> bool {
        self.current_index < self.items.len()
    }

    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn current(&self) -> &T {
        assert!(self.is_item(), "sequence has no current item");
        &self.items[self.current_index]
    }

    /// Moves the cursor to the first item, if any.
    pub fn start(&mut self) {
        self.current_index = 0;
    }

    /// Moves the cursor one item forward. Advancing past the last item
    /// leaves no current item.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn advance(&mut self) {
        assert!(self.is_item(), "advance called without a current item");
        self.current_index += 1;
    }

    /// Inserts `entry` before the current item, or at the front when there
    /// is none. The new entry becomes the current item.
    pub fn insert(&mut self, entry: T) {
        self.grow_if_full();
        if !self.is_item() {
            self.current_index = 0;
        }
        self.items.insert(self.current_index, entry);
    }

    /// Inserts `entry` after the current item, or at the end when there is
    /// none. The new entry becomes the current item.
    pub fn attach(&mut self, entry: T) {
        self.grow_if_full();
        if self.is_item() {
            self.current_index += 1;
        } else {
            self.current_index = self.items.len();
        }
        self.items.insert(self.current_index, entry);
    }

    /// Removes the current item. The item after it, if any, becomes current.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn remove_current(&mut self) -> T {
        assert!(self.is_item(), "remove_current called without a current item");
        self.items.remove(self.current_index)
    }
}
