use std::iter::FusedIterator;

use crate::types::{NodeId, RbNode};
use crate::util::{predecessor, successor};

/// In-order iterator returned by [`RbTree::iter`](crate::RbTree::iter).
pub struct Iter<'a, T> {
    arena: &'a [RbNode<T>],
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a [RbNode<T>], front: NodeId, back: NodeId, len: usize) -> Self {
        Self {
            arena,
            front,
            back,
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let curr = self.front;
        self.front = successor(self.arena, curr);
        self.remaining -= 1;
        self.arena[curr.index()].value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let curr = self.back;
        self.back = predecessor(self.arena, curr);
        self.remaining -= 1;
        self.arena[curr.index()].value.as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
