//! Shortest knight paths on an 8x8 chessboard.
//!
//! The board is modelled as a graph whose vertices are squares and whose edges are
//! knight leaps. [`graph::BoardGraph`] is built once and then answers
//! breadth-first shortest-path queries ([`graph::BoardGraph::knight_moves`]).

pub mod coord;
pub mod error;
pub mod graph;
pub mod search;
pub mod square;
