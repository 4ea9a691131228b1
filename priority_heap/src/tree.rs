// index arithmetic for the implicit binary tree laid out in the
// entry buffer. only the occupied prefix counts as part of the tree

use super::{Priority, PriorityHeap};

enum TreeDir {
    Left,
    Right,
}

impl<T, P: Priority> PriorityHeap<T, P> {
    pub(crate) fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> Option<usize> {
        let child = match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        };
        if child < self.entries.len() {
            Some(child)
        } else {
            None
        }
    }

    pub(crate) fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    // assumes self isn't empty
    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn is_leaf(&self, node: usize) -> bool {
        self.child(node, TreeDir::Left).is_none()
    }

    // the left child wins when both children have the same priority
    pub(crate) fn larger_child(&self, node: usize) -> Option<usize> {
        if self.is_leaf(node) {
            return None;
        }
        match self.children(node) {
            (Some(left), Some(right)) if self.priority(right) > self.priority(left) => {
                Some(right)
            }
            (left, _) => left,
        }
    }

    pub(crate) fn depth(node: usize) -> usize {
        (node + 1).ilog2() as usize
    }

    pub(crate) fn priority(&self, node: usize) -> &P {
        &self.entries[node].priority
    }
}
