//! Node and handle definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by [`RbTree`](crate::RbTree).
//! Every link (`p`, `l`, `r`) is a [`NodeId`] index into that arena. Slot `0`
//! is the sentinel: a permanently black node that stands in for every absent
//! child and for the root's parent, so the balancing code never branches on
//! `None`.

use std::fmt;

/// Index of a node in the tree's arena.
///
/// Handles stay valid until the element they point at is removed. A handle
/// whose element has been removed may later be reused for another element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The sentinel slot.
    pub const NIL: NodeId = NodeId(0);

    #[inline]
    pub fn is_nil(self) -> bool {
        self.0 == 0
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub fn some(self) -> Option<NodeId> {
        if self.is_nil() {
            None
        } else {
            Some(self)
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Handle for arena slot `index`.
    ///
    /// # Panics
    ///
    /// When `index` does not fit in `u32`: the handle would otherwise wrap
    /// onto the sentinel or a live node.
    pub(crate) fn from_index(index: usize) -> NodeId {
        match u32::try_from(index) {
            Ok(i) => NodeId(i),
            Err(_) => panic!("arena slot {index} exceeds the u32 handle range"),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.write_str("nil")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// Child side. The balancing code is written once against a `Dir` and
/// mirrored by flipping it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub(crate) fn flip(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Arena record of a red-black tree node.
#[derive(Clone, Debug)]
pub(crate) struct RbNode<T> {
    pub(crate) p: NodeId,
    pub(crate) l: NodeId,
    pub(crate) r: NodeId,
    pub(crate) color: Color,
    // `None` on the sentinel and on recycled slots waiting in the free-list.
    pub(crate) value: Option<T>,
}

impl<T> RbNode<T> {
    /// A fresh red leaf.
    pub(crate) fn new(value: T) -> Self {
        Self {
            p: NodeId::NIL,
            l: NodeId::NIL,
            r: NodeId::NIL,
            color: Color::Red,
            value: Some(value),
        }
    }

    pub(crate) fn sentinel() -> Self {
        Self {
            p: NodeId::NIL,
            l: NodeId::NIL,
            r: NodeId::NIL,
            color: Color::Black,
            value: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, dir: Dir) -> NodeId {
        match dir {
            Dir::Left => self.l,
            Dir::Right => self.r,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, dir: Dir, v: NodeId) {
        match dir {
            Dir::Left => self.l = v,
            Dir::Right => self.r = v,
        }
    }
}

/// Read-only view of a live node.
///
/// Relations are exposed for inspection only; the tree's structure can be
/// changed solely through [`RbTree`](crate::RbTree) operations.
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    pub(crate) id: NodeId,
    pub(crate) node: &'a RbNode<T>,
    pub(crate) value: &'a T,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        self.value
    }

    pub fn color(&self) -> Color {
        self.node.color
    }

    pub fn is_black(&self) -> bool {
        self.node.color == Color::Black
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.node.p.some()
    }

    pub fn left(&self) -> Option<NodeId> {
        self.node.l.some()
    }

    pub fn right(&self) -> Option<NodeId> {
        self.node.r.some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_keeps_slot() {
        assert_eq!(NodeId::from_index(0), NodeId::NIL);
        assert_eq!(NodeId::from_index(7).index(), 7);
        assert_eq!(NodeId::from_index(u32::MAX as usize).index(), u32::MAX as usize);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "exceeds the u32 handle range")]
    fn from_index_rejects_wrapping_slot() {
        NodeId::from_index(u32::MAX as usize + 1);
    }
}
