//! Arena-based red-black tree.
//!
//! [`RbTree`] is an ordered multiset with logarithmic insert, search and
//! remove, kept balanced by the classic recoloring and rotation fixups.
//! Ordering comes from a caller-supplied three-way comparator
//! (`Fn(&T, &T) -> i32`) or from `T: Ord`.
//!
//! Instead of pointers, all links are [`NodeId`] indices into a `Vec`
//! arena owned by the tree. Slot `0` is a single black sentinel that every
//! leaf and the root's parent point at, so rotations and fixups never test
//! for a missing child. Removed slots are recycled through a free-list.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`NodeId`], [`Color`], [`NodeRef`]; the crate-internal arena node |
//! `util` | min / max / successor / predecessor / height / size over the arena |
//! `red_black` | rotations, insert and remove fixups, validation, debug print |
//! [`tree`] | [`RbTree`] |
//! [`iter`] | in-order [`Iter`] |
//! [`error`] | [`InvariantError`] |
//!
//! Arena nodes are internal; a stored element is reached through its
//! [`NodeId`] and inspected through [`NodeRef`].
//!
//! ```compile_fail
//! use rb_forest::RbNode;
//! ```
//!
//! Balancing steps are traced through the [`log`] facade at `trace` level.

pub mod error;
pub mod iter;
pub(crate) mod red_black;
pub mod tree;
pub mod types;
pub(crate) mod util;

pub use error::InvariantError;
pub use iter::Iter;
pub use tree::RbTree;
pub use types::{Color, NodeId, NodeRef};
