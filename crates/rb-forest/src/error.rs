use thiserror::Error;

use crate::types::NodeId;

/// A broken red-black or ordering property found by
/// [`RbTree::assert_valid`](crate::RbTree::assert_valid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("sentinel is not black")]
    SentinelNotBlack,
    #[error("root {0} has a parent")]
    RootHasParent(NodeId),
    #[error("root {0} is not black")]
    RedRoot(NodeId),
    #[error("red node {node} has a red child {child}")]
    RedRedViolation { node: NodeId, child: NodeId },
    #[error("black height mismatch at {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },
    #[error("child {child} of {node} does not point back to its parent")]
    BrokenParentLink { node: NodeId, child: NodeId },
    #[error("node {0} is linked but holds no value")]
    VacantNode(NodeId),
    #[error("in-order sequence decreases from {prev} to {next}")]
    OrderViolation { prev: NodeId, next: NodeId },
    #[error("counted {counted} nodes but the tree records {recorded}")]
    SizeMismatch { counted: usize, recorded: usize },
}
