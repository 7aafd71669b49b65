//! Errors raised by world operations.

use quart_graph::{Direction, GraphError};
use thiserror::Error;

/// Precondition failures of the world rules.
///
/// Outcomes a player simply hears about ("the room is full") are
/// [`Narration`](crate::Narration)s, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("room does not exist: {0}")]
    RoomDoesNotExist(String),

    #[error("{0} must be connected to a room already in the world")]
    NoTargetRoom(String),

    #[error("the {direction} exit of {room} is already occupied")]
    ExitIsOccupied { room: String, direction: Direction },

    #[error("there is no player in the game")]
    NoPlayer,

    #[error("{0} has not started yet")]
    PlayerNotStarted(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Convenience alias for world results.
pub type WorldResult<T> = Result<T, WorldError>;
