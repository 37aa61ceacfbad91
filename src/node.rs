use std::cmp::Ordering;

#[derive(Debug)]
pub(super) enum RemoveResult<T> {
    /// The value was removed from the tree.
    Removed(T),

    /// The direct descendent node contains the value, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Child node pointers.
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,

    /// The node's AVL height, counted in nodes along the longest path down to
    /// a leaf.
    ///
    /// A leaf has a height of 1.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 2.89*10⁷⁶ entries.
    height: u8,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return Some(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        let replaced = match child {
            Some(v) => v.insert(key, value),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key, value)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return None;
            }
        };

        if replaced.is_some() {
            // An existing key had its value overwritten below this node. The
            // tree structure has not been modified, so it does not require
            // rebalancing.
            return replaced;
        }

        // Update this node's height, and correct the subtree rooted at self if
        // the absolute difference in height between branches is > 1.
        rebalance(self);

        debug_assert!(replaced.is_none());
        None
    }

    pub(super) fn remove(self: &mut Box<Self>, key: &K) -> Option<RemoveResult<V>>
    where
        K: Ord,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the value is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the value and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match self.key.cmp(key) {
            Ordering::Greater => return remove_recurse(&mut self.left, key),
            Ordering::Less => return remove_recurse(&mut self.right, key),
            Ordering::Equal => {
                // This node holds the value to be removed from the tree.
            }
        };

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // The in-order successor (if any) should move to replace this node.
        //
        // If "self.right" has a left child, descend the left-most edge to
        // locate the successor to "self" returned in an in-order traversal and
        // use it in place of "self". The subtrees of "self" are then linked to
        // this replacement.
        //
        // If there is no left node of "self.right", the "self.right" itself is
        // the successor and replaces the target node.
        //
        // If there is no right child, then "self.left" replaces "self".
        let old = if let Some(mut right) = self.right.take() {
            debug_assert_ne!(self.height, 1);

            // Extract the minimum node in the right subtree, if any.
            match extract_subtree_min(&mut right) {
                Some(mut min) => {
                    // This minimum node "min" should be mutated to link
                    // self.right on the right, and self.left (if any) linked
                    // on the left in order to preserve the binary search
                    // property.
                    //
                    // The "min" node is guaranteed to have no left pointer as
                    // it is the left-most / minimum node in the subtree.
                    debug_assert!(min.left.is_none());
                    debug_assert!(min.right.is_none());

                    min.left = self.left.take();
                    min.right = Some(right);

                    std::mem::replace(self, min)
                }

                None => {
                    // Otherwise the extracted "right" is the successor, and
                    // can replace "self".
                    //
                    // It is guaranteed that "right" has no left pointer,
                    // otherwise the above branch would be taken.
                    debug_assert!(right.left.is_none());

                    right.left = self.left.take();
                    std::mem::replace(self, right)
                }
            }
        } else if let Some(left) = self.left.take() {
            // Otherwise, if "self" has a left child only, simply replace
            // "self" with the left child (the in-order predecessor).
            debug_assert!(self.right.is_none());
            debug_assert_ne!(self.height, 1);

            std::mem::replace(self, left)
        } else {
            // Otherwise "self" has no children.
            debug_assert!(self.left.is_none());
            debug_assert!(self.right.is_none());
            debug_assert_eq!(self.height, 1);

            // Parent will unlink this "self" node.
            return Some(RemoveResult::ParentUnlink);
        };

        // Invariant: the node being unlinked contains no subtree.
        debug_assert!(old.right.is_none());
        debug_assert!(old.left.is_none());

        // Invariant: the old node being unlinked does contain the target key.
        debug_assert!(old.key == *key);
        debug_assert!(self.key != *key); // The replacement node does not.

        Some(RemoveResult::Removed(old.value))
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let node = match self.key.cmp(key) {
            Ordering::Greater => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Less => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let node = match self.key.cmp(key) {
            Ordering::Greater => self.left_mut(),
            Ordering::Equal => return Some(&mut self.value),
            Ordering::Less => self.right_mut(),
        }?;

        node.get_mut(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

fn height<K, V>(n: Option<&Node<K, V>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K, V>(n: &mut Node<K, V>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number
/// when left heavy, and a negative number when right heavy.
fn balance<K, V>(n: &Node<K, V>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Recompute the height of `n` and restore the AVL balance invariant of the
/// subtree rooted at it.
///
/// A factor of 2 (left heavy) resolves to a single right rotation when the
/// left child is itself left heavy or level, or a left-right double rotation
/// when it is right heavy. A factor of -2 is the mirror image. A mutation
/// unbalances a node by at most one level at a time, so a factor of greater
/// magnitude means an earlier rebalance was skipped.
fn rebalance<K, V>(n: &mut Box<Node<K, V>>)
where
    K: Ord,
{
    update_height(n);

    match balance(n) {
        // Left-heavy
        2 if n.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(n);
        }
        2 => {
            rotate_left(n.left_mut().unwrap());
            rotate_right(n);
        }
        // Right-heavy
        -2 if n.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(n);
        }
        -2 => {
            rotate_right(n.right_mut().unwrap());
            rotate_left(n);
        }
        -1..=1 => { /* The tree is well balanced */ }
        v => unreachable!("balance factor {v} out of range"),
    };

    // Invariant: the absolute difference between subtree heights ("balance
    // factor") cannot exceed 1 after rebalancing.
    debug_assert!(balance(n).abs() <= 1);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K, V>(x: &mut Box<Node<K, V>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K, V>(y: &mut Box<Node<K, V>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Extracts the node holding the minimum key in a descendent of `root`, if
/// any, linking the right subtree of the extracted node in its place.
fn extract_subtree_min<K, V>(root: &mut Box<Node<K, V>>) -> Option<Box<Node<K, V>>>
where
    K: Ord,
{
    // Descend left to the leaf.
    let v = match extract_subtree_min(root.left_mut()?) {
        Some(v) => Some(v),
        None => {
            // The left child is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //              / \
            //             2   5
            //              \
            //               3
            // ```
            //
            // Unlink the right node of the left root, which will become the
            // new left node of "root" (if any).
            let left_right = root.left_mut().and_then(|v| v.right.take());

            std::mem::replace(&mut root.left, left_right)
        }
    };

    rebalance(root);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted value within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<K, V>(
    node: &mut Option<Box<Node<K, V>>>,
    key: &K,
) -> Option<RemoveResult<V>>
where
    K: Ord,
{
    // Remove the value (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        let ret = v.remove(key)?;
        rebalance(v);
        Some(ret)
    })?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take().unwrap();
            debug_assert!(node.key == *key);

            node.value
        }
    };

    Some(RemoveResult::Removed(v))
}
