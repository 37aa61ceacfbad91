use crate::node::Node;

/// A pending visit in a [`PostOrderIter`] walk.
#[derive(Debug)]
enum Visit<'a, K, V> {
    /// The subtree rooted at this node has not been explored.
    Descend(&'a Node<K, V>),

    /// Both subtrees of this node have been scheduled ahead of it and it may
    /// be yielded when reached.
    Yield(&'a Node<K, V>),
}

/// A depth-first, post-order iterator yielding [`Node`] references, each node
/// after both of its children (left, right, self).
#[derive(Debug)]
pub(crate) struct PostOrderIter<'a, K, V> {
    stack: Vec<Visit<'a, K, V>>,
}

impl<'a, K, V> PostOrderIter<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>) -> Self {
        Self {
            stack: vec![Visit::Descend(root)],
        }
    }
}

impl<'a, K, V> Iterator for PostOrderIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Descend(v) => {
                    // Revisit this node only after both subtrees are
                    // exhausted, pushing the right child first so the left is
                    // explored before it.
                    self.stack.push(Visit::Yield(v));
                    self.stack.extend(v.right().map(Visit::Descend));
                    self.stack.extend(v.left().map(Visit::Descend));
                }
                Visit::Yield(v) => return Some(v),
            }
        }
    }
}
