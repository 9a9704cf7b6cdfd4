use crate::error::InvariantError;
use crate::types::{NodeId, RbNode};
use crate::util::{get_l, get_p, get_r, is_red, minimum, successor};

/// Checks every red-black property, parent-link consistency, in-order
/// ordering and the recorded element count.
pub(crate) fn assert_red_black_tree<T, C>(
    arena: &[RbNode<T>],
    root: NodeId,
    len: usize,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&T, &T) -> i32,
{
    if is_red(arena, NodeId::NIL) {
        return Err(InvariantError::SentinelNotBlack);
    }
    if root.is_nil() {
        return if len == 0 {
            Ok(())
        } else {
            Err(InvariantError::SizeMismatch {
                counted: 0,
                recorded: len,
            })
        };
    }
    if !get_p(arena, root).is_nil() {
        return Err(InvariantError::RootHasParent(root));
    }
    if is_red(arena, root) {
        return Err(InvariantError::RedRoot(root));
    }

    black_height(arena, root)?;

    let mut counted = 0;
    let mut prev = NodeId::NIL;
    let mut curr = minimum(arena, root);
    while !curr.is_nil() {
        if !prev.is_nil() {
            let (Some(a), Some(b)) = (
                arena[prev.index()].value.as_ref(),
                arena[curr.index()].value.as_ref(),
            ) else {
                // Vacancy was already rejected by `black_height`.
                return Err(InvariantError::VacantNode(curr));
            };
            if comparator(a, b) > 0 {
                return Err(InvariantError::OrderViolation { prev, next: curr });
            }
        }
        counted += 1;
        prev = curr;
        curr = successor(arena, curr);
    }

    if counted != len {
        return Err(InvariantError::SizeMismatch {
            counted,
            recorded: len,
        });
    }
    Ok(())
}

fn black_height<T>(arena: &[RbNode<T>], node: NodeId) -> Result<usize, InvariantError> {
    if node.is_nil() {
        return Ok(0);
    }
    if arena[node.index()].value.is_none() {
        return Err(InvariantError::VacantNode(node));
    }

    let l = get_l(arena, node);
    let r = get_r(arena, node);
    for child in [l, r] {
        if child.is_nil() {
            continue;
        }
        if get_p(arena, child) != node {
            return Err(InvariantError::BrokenParentLink { node, child });
        }
        if is_red(arena, node) && is_red(arena, child) {
            return Err(InvariantError::RedRedViolation { node, child });
        }
    }

    let left = black_height(arena, l)?;
    let right = black_height(arena, r)?;
    if left != right {
        return Err(InvariantError::BlackHeightMismatch { node, left, right });
    }
    Ok(left + usize::from(!is_red(arena, node)))
}
