use crate::node::Node;

/// A depth-first, pre-order iterator yielding [`Node`] references, each node
/// before either of its children (self, left, right).
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> PreOrderIter<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, K, V> Iterator for PreOrderIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited in full
        // before it.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}
