use super::SearchTree;

impl<K: Clone> SearchTree<K> {
    /// Copies the keys in ascending order into the front of `out` and
    /// returns how many were written.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than the number of keys.
    pub fn dump_in_order(&self, out: &mut [K]) -> usize {
        assert!(
            out.len() >= self.nodes.len(),
            "dump buffer holds {} keys but the tree has {}",
            out.len(),
            self.nodes.len()
        );
        let mut written = 0;
        self.dump_subtree(self.root, out, &mut written);
        written
    }

    pub fn in_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        self.collect_subtree(self.root, &mut keys);
        keys
    }

    fn dump_subtree(&self, subtree: Option<usize>, out: &mut [K], written: &mut usize) {
        let Some(node) = subtree else {
            return;
        };
        let node = &self.nodes[node];
        self.dump_subtree(node.left, out, written);
        out[*written] = node.key.clone();
        *written += 1;
        self.dump_subtree(node.right, out, written);
    }

    fn collect_subtree(&self, subtree: Option<usize>, keys: &mut Vec<K>) {
        if let Some(node) = subtree {
            let node = &self.nodes[node];
            self.collect_subtree(node.left, keys);
            keys.push(node.key.clone());
            self.collect_subtree(node.right, keys);
        }
    }
}
