//! Breadth-first search over the knight graph.
//!
//! [`bfs`] is the shared primitive: one full single-source traversal producing
//! distances, predecessors and visitation order. Shortest-path queries and the
//! traversal diagnostic are both thin layers over it.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::error::BoardError;
use crate::graph::{BoardGraph, VertexId};
use crate::square::Square;

/// Result of a full BFS from one source vertex.
///
/// Allocated per query and never shared, so concurrent queries on the same
/// graph do not interact.
#[derive(Clone, Debug)]
pub struct BfsTree {
    source: VertexId,
    dist: Vec<Option<u32>>,
    pred: Vec<Option<VertexId>>,
    order: Vec<VertexId>,
}

impl BfsTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of moves from the source, or `None` if `v` was never reached.
    pub fn distance(&self, v: VertexId) -> Option<u32> {
        self.dist.get(v).copied().flatten()
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.pred.get(v).copied().flatten()
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices in the order they were first visited, source first.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Vertices from the source to `target` inclusive, or `None` if unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_visited(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.predecessor(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        debug_assert_eq!(path.first(), Some(&self.source));
        Some(path)
    }
}

/// Full BFS from `source`, run to frontier exhaustion.
pub fn bfs(graph: &BoardGraph, source: VertexId) -> BfsTree {
    let n = graph.len();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut order: Vec<VertexId> = Vec::with_capacity(n);

    if source >= n {
        return BfsTree {
            source,
            dist,
            pred,
            order,
        };
    }

    let mut q: VecDeque<VertexId> = VecDeque::with_capacity(n);
    dist[source] = Some(0);
    order.push(source);
    q.push_back(source);

    while let Some(cur) = q.pop_front() {
        let d = dist[cur].unwrap_or(0);
        for &i in graph.neighbors(cur) {
            if dist[i].is_some() {
                continue;
            }
            dist[i] = Some(d + 1);
            pred[i] = Some(cur);
            order.push(i);
            q.push_back(i);
        }
        trace!("expanded vertex {cur} at depth {d}; frontier {}", q.len());
    }

    BfsTree {
        source,
        dist,
        pred,
        order,
    }
}

/// One shortest knight path, endpoints included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnightPath {
    squares: Vec<Square>,
}

impl KnightPath {
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of knight moves (`squares().len() - 1`).
    pub fn moves(&self) -> usize {
        self.squares.len().saturating_sub(1)
    }

    pub fn start(&self) -> Square {
        self.squares[0]
    }

    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }
}

impl fmt::Display for KnightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.squares.iter().map(Square::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl BoardGraph {
    /// BFS tree rooted at `start`.
    pub fn bfs_from(&self, start: Square) -> Result<BfsTree, BoardError> {
        let s = self.vertex_of(start)?;
        Ok(bfs(self, s))
    }

    /// A shortest knight path from `start` to `end`.
    ///
    /// Among equally short paths the choice follows edge-insertion order and FIFO
    /// expansion; it is not canonical.
    pub fn knight_moves(&self, start: Square, end: Square) -> Result<KnightPath, BoardError> {
        let tree = self.bfs_from(start)?;
        let e = self.vertex_of(end)?;

        let vertices = tree.path_to(e).ok_or(BoardError::PathNotFound {
            from: start,
            to: end,
        })?;
        let squares = vertices
            .into_iter()
            .map(|v| self.square_of(v).ok_or(BoardError::VertexNotFound(end)))
            .collect::<Result<Vec<_>, _>>()?;

        let path = KnightPath { squares };
        debug!("knight path {start} -> {end}: {} moves", path.moves());
        Ok(path)
    }

    /// [`BoardGraph::knight_moves`] on raw `(file, rank)` pairs, validating both.
    pub fn knight_moves_from_coords(
        &self,
        start: (i32, i32),
        end: (i32, i32),
    ) -> Result<KnightPath, BoardError> {
        let start = Square::new(start.0, start.1)?;
        let end = Square::new(end.0, end.1)?;
        self.knight_moves(start, end)
    }

    /// Every square reachable from `start`, in BFS visitation order.
    pub fn traversal_order(&self, start: Square) -> Result<Vec<Square>, BoardError> {
        let tree = self.bfs_from(start)?;
        Ok(tree
            .order()
            .iter()
            .filter_map(|&v| self.square_of(v))
            .collect())
    }
}
