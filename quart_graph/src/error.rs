//! Errors raised by graph operations.

use thiserror::Error;

use crate::Direction;

/// Precondition violations reported by the graph.
///
/// The graph stays valid and usable after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The target (or the value to remove) is not reachable from the root.
    #[error("no such element in the graph")]
    ElementNotFound,

    /// The target already has a neighbor in the requested direction.
    #[error("the {direction} slot is already occupied")]
    DirectionOccupied { direction: Direction },

    /// A node cannot be linked to itself.
    #[error("a node cannot be its own neighbor")]
    SelfLink,

    /// A direction name could not be parsed.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
