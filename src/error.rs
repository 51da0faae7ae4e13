use thiserror::Error;

use crate::square::{Square, BOARD_SIZE};

/// Structured errors returned by board construction and path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A coordinate fell outside `0..BOARD_SIZE`.
    #[error("invalid coordinate ({file}, {rank}): both components must be in 0..={max}", max = BOARD_SIZE - 1)]
    InvalidCoordinate { file: i32, rank: i32 },

    /// The square has no vertex in the graph.
    #[error("square {0} is not a vertex of the board graph")]
    VertexNotFound(Square),

    /// The search exhausted the graph without reaching the target.
    #[error("no knight path from {from} to {to}")]
    PathNotFound { from: Square, to: Square },

    /// Text could not be read as a `file,rank` pair.
    #[error("cannot parse square {input:?}: {reason}")]
    ParseSquare { input: String, reason: String },
}
