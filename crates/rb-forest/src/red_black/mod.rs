//! Red-black balancing over the node arena.
//!
//! - `util`: rotations, transplant, insert and remove with their fixups
//! - `validate`: red-black property checker
//! - `print`: structural debug dump

mod print;
pub(crate) mod util;
mod validate;

pub(crate) use print::print;
pub(crate) use validate::assert_red_black_tree;
