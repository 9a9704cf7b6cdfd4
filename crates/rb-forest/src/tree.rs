use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::InvariantError;
use crate::iter::Iter;
use crate::red_black::{self, util::insert, util::remove};
use crate::types::{NodeId, NodeRef, RbNode};
use crate::util;

fn default_comparator<T: Ord>(a: &T, b: &T) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Ordered multiset backed by a red-black tree.
///
/// Nodes are stored in an arena; slot `0` is the shared black sentinel that
/// every leaf and the root's parent link to. Removed slots go on a free-list
/// and are reused by later inserts.
///
/// Elements that compare equal are all kept: a new element equal to an
/// existing one is placed to its right.
///
/// ```
/// use rb_forest::RbTree;
///
/// let mut tree = RbTree::new();
/// for v in [50, 30, 70, 20] {
///     tree.insert(v);
/// }
/// let min = tree.first().unwrap();
/// assert_eq!(tree.value(min), Some(&20));
/// assert_eq!(tree.remove(&30), Some(30));
/// assert_eq!(tree.remove(&30), None);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![20, 50, 70]);
/// ```
#[derive(Clone)]
pub struct RbTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: NodeId,
    len: usize,
    arena: Vec<RbNode<T>>,
    free: Vec<NodeId>,
    comparator: C,
}

impl<T: Ord> RbTree<T, fn(&T, &T) -> i32> {
    /// Empty tree ordered by `T`'s [`Ord`] impl.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<T>)
    }
}

impl<T: Ord> Default for RbTree<T, fn(&T, &T) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Empty tree ordered by `comparator`, which must be a consistent total
    /// order returning negative, zero or positive for less, equal, greater.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        let mut arena = Vec::with_capacity(capacity + 1);
        arena.push(RbNode::sentinel());
        Self {
            root: NodeId::NIL,
            len: 0,
            arena,
            free: Vec::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root handle, `None` when empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root.some()
    }

    fn alloc(&mut self, value: T) -> NodeId {
        if let Some(id) = self.free.pop() {
            debug!("reusing slot {id}");
            self.arena[id.index()] = RbNode::new(value);
            return id;
        }
        self.arena.push(RbNode::new(value));
        NodeId::from_index(self.arena.len() - 1)
    }

    /// Whether `id` refers to an element currently stored in this tree.
    fn is_live(&self, id: NodeId) -> bool {
        !id.is_nil()
            && self
                .arena
                .get(id.index())
                .is_some_and(|n| n.value.is_some())
    }

    /// Inserts `value` and returns its handle.
    pub fn insert(&mut self, value: T) -> NodeId {
        let n = self.alloc(value);
        insert(&mut self.arena, &mut self.root, n, &self.comparator);
        self.len += 1;
        n
    }

    /// Handle of a stored element comparing equal to `value`.
    pub fn search(&self, value: &T) -> Option<NodeId> {
        util::find(&self.arena, self.root, value, &self.comparator).some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes one element comparing equal to `value` and returns it.
    ///
    /// Removing an absent element is a no-op.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let Some(z) = self.search(value) else {
            debug!("remove: no matching element");
            return None;
        };
        self.remove_node(z)
    }

    /// Removes the element behind a handle. `None` for a stale handle.
    pub fn remove_node(&mut self, id: NodeId) -> Option<T> {
        if !self.is_live(id) {
            return None;
        }
        remove(&mut self.arena, &mut self.root, id);
        self.len -= 1;
        let out = self.arena[id.index()].value.take();
        self.free.push(id);
        out
    }

    /// Drops every element. The comparator and arena capacity are kept.
    pub fn clear(&mut self) {
        self.arena.truncate(1);
        self.arena[0] = RbNode::sentinel();
        self.free.clear();
        self.root = NodeId::NIL;
        self.len = 0;
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        if id.is_nil() {
            return None;
        }
        let node = self.arena.get(id.index())?;
        let value = node.value.as_ref()?;
        Some(NodeRef { id, node, value })
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| n.value())
    }

    /// Smallest element of the subtree at `id`.
    pub fn minimum(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        util::minimum(&self.arena, id).some()
    }

    /// Largest element of the subtree at `id`.
    pub fn maximum(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        util::maximum(&self.arena, id).some()
    }

    pub fn first(&self) -> Option<NodeId> {
        util::minimum(&self.arena, self.root).some()
    }

    pub fn last(&self) -> Option<NodeId> {
        util::maximum(&self.arena, self.root).some()
    }

    /// Next element in order, `None` after the maximum.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        util::successor(&self.arena, id).some()
    }

    /// Previous element in order, `None` before the minimum.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        util::predecessor(&self.arena, id).some()
    }

    /// Height of the subtree at `id`: -1 for an empty subtree, 0 for a
    /// single node.
    pub fn height(&self, id: NodeId) -> isize {
        if !self.is_live(id) {
            return -1;
        }
        util::height(&self.arena, id)
    }

    /// Number of elements in the subtree at `id`.
    pub fn size(&self, id: NodeId) -> usize {
        if !self.is_live(id) {
            return 0;
        }
        util::size(&self.arena, id)
    }

    /// Height of the whole tree, -1 when empty.
    pub fn tree_height(&self) -> isize {
        util::height(&self.arena, self.root)
    }

    /// In-order iterator over the stored elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            &self.arena,
            util::minimum(&self.arena, self.root),
            util::maximum(&self.arena, self.root),
            self.len,
        )
    }

    /// Verifies the red-black properties, parent links, ordering and length.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        red_black::assert_red_black_tree(&self.arena, self.root, self.len, &self.comparator)
    }

    /// Multi-line structural dump with node colors.
    pub fn print(&self, tab: &str) -> String
    where
        T: fmt::Debug,
    {
        red_black::print(&self.arena, self.root, tab)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T, fn(&T, &T) -> i32> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
