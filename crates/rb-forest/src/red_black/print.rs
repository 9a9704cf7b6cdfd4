use std::fmt::Debug;

use crate::types::{NodeId, RbNode};

/// Renders the subtree at `node` with one node per line.
///
/// ```text
/// 20 black
/// ├─ 10 red
/// └─ ∅
/// ```
///
/// Leaves print on a single line; `∅` marks the missing side of a node
/// with one child.
pub(crate) fn print<T: Debug>(arena: &[RbNode<T>], node: NodeId, tab: &str) -> String {
    if node.is_nil() {
        return "∅".to_string();
    }
    let n = &arena[node.index()];
    let mut out = match n.value.as_ref() {
        Some(v) => format!("{v:?} {}", n.color.as_str()),
        None => format!("{node} vacant"),
    };
    if n.l.is_nil() && n.r.is_nil() {
        return out;
    }
    let left = print(arena, n.l, &format!("{tab}│  "));
    let right = print(arena, n.r, &format!("{tab}   "));
    out.push('\n');
    out.push_str(tab);
    out.push_str("├─ ");
    out.push_str(&left);
    out.push('\n');
    out.push_str(tab);
    out.push_str("└─ ");
    out.push_str(&right);
    out
}
