use crate::{
    entry::Entry,
    iter::{Iter, OwnedIter, PostOrderIter, PreOrderIter},
    node::{remove_recurse, Node, RemoveResult},
};

/// An ordered map of keys `K` to values `V`, backed by an AVL tree.
///
/// The tree is self-balancing: every insert and remove leaves the height
/// difference between any node's two subtrees at most 1, bounding the depth of
/// the tree (and therefore the cost of a lookup, insert or remove) to
/// O(log n).
///
/// Keys need only a total order ([`Ord`]). Equal keys overwrite the stored
/// value in place rather than creating duplicate entries.
///
/// ```
/// use avlmap::AvlMap;
///
/// let mut m = AvlMap::default();
///
/// m.insert("bananas", 42);
/// m.insert("platanos", 24);
///
/// assert_eq!(m.get(&"bananas"), Some(&42));
/// assert_eq!(m.len(), 2);
///
/// // Keys are yielded in ascending order.
/// let keys = m.iter().map(|(k, _v)| *k).collect::<Vec<_>>();
/// assert_eq!(keys, ["bananas", "platanos"]);
/// ```
#[derive(Debug, Clone)]
pub struct AvlMap<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K, V> AvlMap<K, V>
where
    K: Ord,
{
    /// Insert `value` into the map, indexed by `key`.
    ///
    /// If `key` is already present the stored value is replaced and returned,
    /// leaving the tree shape and [`AvlMap::len()`] untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = match self.root {
            Some(ref mut v) => v.insert(key, value),
            None => {
                self.root = Some(Box::new(Node::new(key, value)));
                None
            }
        };

        // A genuine insertion (not an overwrite) grows the map by one entry.
        if replaced.is_none() {
            self.len += 1;
        }

        replaced
    }

    /// Return a reference to the value indexed by `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    /// Return a mutable reference to the value indexed by `key`, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.as_mut().and_then(|v| v.get_mut(key))
    }

    /// Return true if the map contains an entry indexed by `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove the entry indexed by `key`, if any, returning its value.
    ///
    /// Removing a key that is not in the map is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let v = match remove_recurse(&mut self.root, key)? {
            RemoveResult::Removed(v) => v,
            // The root node is unlinked directly by remove_recurse.
            RemoveResult::ParentUnlink => unreachable!(),
        };

        self.len -= 1;
        Some(v)
    }

    /// Return a view into the entry indexed by `key` for in-place
    /// manipulation, whether present ([`Entry::Occupied`]) or not
    /// ([`Entry::Vacant`]).
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V>
    where
        K: Clone,
    {
        Entry::new(key, self)
    }

    /// Yield all entries in the map in ascending key order (an in-order
    /// traversal).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .iter()
            .flat_map(|v| Iter::new(v))
            .map(|v| (v.key(), v.value()))
    }

    /// Yield all entries in the map in pre-order: each node before either of
    /// its children, starting at the root.
    pub fn iter_preorder(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .iter()
            .flat_map(|v| PreOrderIter::new(v))
            .map(|v| (v.key(), v.value()))
    }

    /// Yield all entries in the map in post-order: each node after both of its
    /// children, ending at the root.
    pub fn iter_postorder(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .iter()
            .flat_map(|v| PostOrderIter::new(v))
            .map(|v| (v.key(), v.value()))
    }

    /// Yield all keys in the map in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _v)| k)
    }

    /// Yield all values in the map, ordered by their key.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_k, v)| v)
    }
}

impl<K, V> AvlMap<K, V> {
    /// Return the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the height of the tree: the number of nodes on the longest
    /// root-to-leaf path, or 0 for an empty map.
    ///
    /// Balancing bounds this to O(log n) for n entries.
    pub fn height(&self) -> usize {
        self.root.as_ref().map(|v| v.height() as usize).unwrap_or(0)
    }

    /// Remove all entries from the map.
    ///
    /// Nodes are released depth-first, children before their parent.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K, V> IntoIterator for AvlMap<K, V> {
    type Item = (K, V);
    type IntoIter = OwnedIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

impl<K, V> FromIterator<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
