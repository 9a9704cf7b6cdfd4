//! Arena navigation helpers.
//!
//! Every function takes the arena slice plus a [`NodeId`] and follows links
//! until it reaches the sentinel. None of them mutate the tree.

use crate::types::{Color, Dir, NodeId, RbNode};

#[inline]
pub(crate) fn get_p<T>(arena: &[RbNode<T>], i: NodeId) -> NodeId {
    arena[i.index()].p
}

#[inline]
pub(crate) fn get_l<T>(arena: &[RbNode<T>], i: NodeId) -> NodeId {
    arena[i.index()].l
}

#[inline]
pub(crate) fn get_r<T>(arena: &[RbNode<T>], i: NodeId) -> NodeId {
    arena[i.index()].r
}

#[inline]
pub(crate) fn child<T>(arena: &[RbNode<T>], i: NodeId, dir: Dir) -> NodeId {
    arena[i.index()].child(dir)
}

#[inline]
pub(crate) fn color<T>(arena: &[RbNode<T>], i: NodeId) -> Color {
    arena[i.index()].color
}

#[inline]
pub(crate) fn is_red<T>(arena: &[RbNode<T>], i: NodeId) -> bool {
    arena[i.index()].color == Color::Red
}

/// Walks to the extreme node on `dir` side.
fn extreme<T>(arena: &[RbNode<T>], node: NodeId, dir: Dir) -> NodeId {
    let mut curr = node;
    if curr.is_nil() {
        return curr;
    }
    loop {
        let next = child(arena, curr, dir);
        if next.is_nil() {
            return curr;
        }
        curr = next;
    }
}

/// Leftmost node of the subtree at `node`.
pub(crate) fn minimum<T>(arena: &[RbNode<T>], node: NodeId) -> NodeId {
    extreme(arena, node, Dir::Left)
}

/// Rightmost node of the subtree at `node`.
pub(crate) fn maximum<T>(arena: &[RbNode<T>], node: NodeId) -> NodeId {
    extreme(arena, node, Dir::Right)
}

/// Steps one position in-order: `Dir::Right` for the successor, `Dir::Left`
/// for the predecessor. Returns the sentinel past either end.
fn step<T>(arena: &[RbNode<T>], node: NodeId, dir: Dir) -> NodeId {
    let sub = child(arena, node, dir);
    if !sub.is_nil() {
        return extreme(arena, sub, dir.flip());
    }
    let mut curr = node;
    let mut p = get_p(arena, curr);
    while !p.is_nil() && child(arena, p, dir) == curr {
        curr = p;
        p = get_p(arena, p);
    }
    p
}

/// In-order successor.
pub(crate) fn successor<T>(arena: &[RbNode<T>], node: NodeId) -> NodeId {
    step(arena, node, Dir::Right)
}

/// In-order predecessor.
pub(crate) fn predecessor<T>(arena: &[RbNode<T>], node: NodeId) -> NodeId {
    step(arena, node, Dir::Left)
}

/// Finds the first node comparing equal to `key` on the search path.
pub(crate) fn find<T, C>(arena: &[RbNode<T>], root: NodeId, key: &T, comparator: &C) -> NodeId
where
    C: Fn(&T, &T) -> i32,
{
    let mut curr = root;
    while !curr.is_nil() {
        let Some(value) = arena[curr.index()].value.as_ref() else {
            break;
        };
        let cmp = comparator(key, value);
        if cmp == 0 {
            return curr;
        }
        curr = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
    }
    NodeId::NIL
}

/// Height of the subtree at `node`; the sentinel has height -1.
pub(crate) fn height<T>(arena: &[RbNode<T>], node: NodeId) -> isize {
    if node.is_nil() {
        return -1;
    }
    1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)))
}

/// Number of nodes in the subtree at `node`.
pub(crate) fn size<T>(arena: &[RbNode<T>], node: NodeId) -> usize {
    if node.is_nil() {
        return 0;
    }
    1 + size(arena, get_l(arena, node)) + size(arena, get_r(arena, node))
}
