// a place that can hold a subtree: the root slot or one side of a node.
// the recursive operations carry one of these where a pointer to the
// parent's child pointer would otherwise be needed

use super::SearchTree;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Link {
    Root,
    Left(usize),
    Right(usize),
}

impl<K> SearchTree<K> {
    pub(crate) fn target(&self, link: Link) -> Option<usize> {
        match link {
            Link::Root => self.root,
            Link::Left(node) => self.nodes[node].left,
            Link::Right(node) => self.nodes[node].right,
        }
    }

    pub(crate) fn retarget(&mut self, link: Link, subtree: Option<usize>) {
        match link {
            Link::Root => self.root = subtree,
            Link::Left(node) => self.nodes[node].left = subtree,
            Link::Right(node) => self.nodes[node].right = subtree,
        }
    }
}
