use log::trace;

use crate::types::{Color, Dir, NodeId, RbNode};
use crate::util::{child, color, get_l, get_p, get_r, is_red, minimum};

#[inline]
fn set_p<T>(arena: &mut [RbNode<T>], i: NodeId, v: NodeId) {
    arena[i.index()].p = v;
}

#[inline]
fn set_l<T>(arena: &mut [RbNode<T>], i: NodeId, v: NodeId) {
    debug_assert!(!i.is_nil(), "sentinel children are fixed");
    arena[i.index()].l = v;
}

#[inline]
fn set_r<T>(arena: &mut [RbNode<T>], i: NodeId, v: NodeId) {
    debug_assert!(!i.is_nil(), "sentinel children are fixed");
    arena[i.index()].r = v;
}

#[inline]
fn set_child<T>(arena: &mut [RbNode<T>], i: NodeId, dir: Dir, v: NodeId) {
    debug_assert!(!i.is_nil(), "sentinel children are fixed");
    arena[i.index()].set_child(dir, v);
}

/// The sentinel stays black; painting it black again is a no-op.
#[inline]
fn set_color<T>(arena: &mut [RbNode<T>], i: NodeId, c: Color) {
    if i.is_nil() {
        debug_assert_eq!(c, Color::Black, "sentinel must stay black");
        return;
    }
    arena[i.index()].color = c;
}

/// Which side of its parent `n` hangs on.
#[inline]
fn side_of<T>(arena: &[RbNode<T>], parent: NodeId, n: NodeId) -> Dir {
    if get_l(arena, parent) == n {
        Dir::Left
    } else {
        Dir::Right
    }
}

/// Rotates `x` down towards `dir`, lifting its child on the opposite side.
///
/// `rotate(.., x, Dir::Left)` is the classic left rotation. The lifted child
/// must be a real node.
pub(crate) fn rotate<T>(arena: &mut [RbNode<T>], root: &mut NodeId, x: NodeId, dir: Dir) {
    let y = child(arena, x, dir.flip());
    debug_assert!(!x.is_nil() && !y.is_nil(), "rotation needs a real child to lift");
    trace!("rotate {dir:?} at {x}");

    let inner = child(arena, y, dir);
    set_child(arena, x, dir.flip(), inner);
    if !inner.is_nil() {
        set_p(arena, inner, x);
    }

    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    if xp.is_nil() {
        *root = y;
    } else {
        let side = side_of(arena, xp, x);
        set_child(arena, xp, side, y);
    }

    set_child(arena, y, dir, x);
    set_p(arena, x, y);
}

/// Attaches the red leaf `n` below the last node on its search path and
/// restores the red-black properties.
pub(crate) fn insert<T, C>(arena: &mut [RbNode<T>], root: &mut NodeId, n: NodeId, comparator: &C)
where
    C: Fn(&T, &T) -> i32,
{
    if root.is_nil() {
        set_p(arena, n, NodeId::NIL);
        set_color(arena, n, Color::Black);
        *root = n;
        return;
    }

    let mut curr = *root;
    let dir = loop {
        let (Some(key), Some(curr_key)) = (
            arena[n.index()].value.as_ref(),
            arena[curr.index()].value.as_ref(),
        ) else {
            unreachable!("live nodes always hold a value");
        };
        let dir = if comparator(key, curr_key) < 0 {
            Dir::Left
        } else {
            Dir::Right
        };
        let next = child(arena, curr, dir);
        if next.is_nil() {
            break dir;
        }
        curr = next;
    };

    set_child(arena, curr, dir, n);
    set_p(arena, n, curr);
    insert_fixup(arena, root, n);
}

fn insert_fixup<T>(arena: &mut [RbNode<T>], root: &mut NodeId, mut z: NodeId) {
    while is_red(arena, get_p(arena, z)) {
        let p = get_p(arena, z);
        let g = get_p(arena, p);
        if g.is_nil() {
            break;
        }
        let side = side_of(arena, g, p);
        let u = child(arena, g, side.flip());

        if is_red(arena, u) {
            trace!("insert fixup at {z}: red uncle {u}, recolor {g}");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            z = g;
            continue;
        }

        if z == child(arena, p, side.flip()) {
            trace!("insert fixup at {z}: inner grandchild, rotate at {p}");
            z = p;
            rotate(arena, root, z, side);
        }

        let p = get_p(arena, z);
        let g = get_p(arena, p);
        trace!("insert fixup at {z}: outer grandchild, rotate at {g}");
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        rotate(arena, root, g, side.flip());
    }
    set_color(arena, *root, Color::Black);
}

/// Moves `v` into `u`'s place under `u`'s parent.
///
/// `v.p` is written even when `v` is the sentinel so the removal fixup can
/// walk upwards from it. `v`'s children are left to the caller.
pub(crate) fn transplant<T>(arena: &mut [RbNode<T>], root: &mut NodeId, u: NodeId, v: NodeId) {
    let up = get_p(arena, u);
    if up.is_nil() {
        *root = v;
    } else {
        let side = side_of(arena, up, u);
        set_child(arena, up, side, v);
    }
    set_p(arena, v, up);
}

/// Unlinks `z` from the tree and rebalances. The slot itself is left to the
/// caller to recycle.
pub(crate) fn remove<T>(arena: &mut [RbNode<T>], root: &mut NodeId, z: NodeId) {
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);
    let removed_color;
    let x;

    if zl.is_nil() {
        removed_color = color(arena, z);
        x = zr;
        transplant(arena, root, z, zr);
    } else if zr.is_nil() {
        removed_color = color(arena, z);
        x = zl;
        transplant(arena, root, z, zl);
    } else {
        let y = minimum(arena, zr);
        removed_color = color(arena, y);
        x = get_r(arena, y);
        if get_p(arena, y) == z {
            set_p(arena, x, y);
        } else {
            transplant(arena, root, y, x);
            set_r(arena, y, zr);
            set_p(arena, zr, y);
        }
        transplant(arena, root, z, y);
        set_l(arena, y, zl);
        set_p(arena, zl, y);
        let zc = color(arena, z);
        set_color(arena, y, zc);
    }

    if removed_color == Color::Black {
        remove_fixup(arena, root, x);
    }

    // Drop the parent link the sentinel may have picked up.
    set_p(arena, NodeId::NIL, NodeId::NIL);
    let node = &mut arena[z.index()];
    node.p = NodeId::NIL;
    node.l = NodeId::NIL;
    node.r = NodeId::NIL;
}

fn remove_fixup<T>(arena: &mut [RbNode<T>], root: &mut NodeId, mut x: NodeId) {
    while x != *root && !is_red(arena, x) {
        let p = get_p(arena, x);
        let side = side_of(arena, p, x);
        let mut w = child(arena, p, side.flip());

        if is_red(arena, w) {
            trace!("remove fixup at {x}: red sibling {w}, rotate at {p}");
            set_color(arena, w, Color::Black);
            set_color(arena, p, Color::Red);
            rotate(arena, root, p, side);
            w = child(arena, p, side.flip());
        }

        let near = child(arena, w, side);
        let far = child(arena, w, side.flip());
        if !is_red(arena, near) && !is_red(arena, far) {
            trace!("remove fixup at {x}: black nephews, move up to {p}");
            set_color(arena, w, Color::Red);
            x = p;
            continue;
        }

        if !is_red(arena, far) {
            trace!("remove fixup at {x}: red near nephew {near}, rotate at {w}");
            set_color(arena, near, Color::Black);
            set_color(arena, w, Color::Red);
            rotate(arena, root, w, side.flip());
            w = child(arena, p, side.flip());
        }

        trace!("remove fixup at {x}: red far nephew, rotate at {p}");
        let pc = color(arena, p);
        set_color(arena, w, pc);
        set_color(arena, p, Color::Black);
        let far = child(arena, w, side.flip());
        set_color(arena, far, Color::Black);
        rotate(arena, root, p, side);
        x = *root;
    }
    set_color(arena, x, Color::Black);
}
