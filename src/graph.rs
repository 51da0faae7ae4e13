use std::fmt::Write as _;

use log::debug;

use crate::coord::KNIGHT_STEPS;
use crate::error::BoardError;
use crate::square::{Square, SQUARE_COUNT};

pub type VertexId = usize;

/// The knight-move graph of the 8x8 board.
///
/// Vertices are squares (indexed by [`Square::index`]); an undirected edge joins
/// two squares a knight leap apart. Built once by [`BoardGraph::build`] and
/// immutable afterwards, so queries only need `&self`.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    squares: Vec<Square>,
    /// Neighbour lists in edge-insertion order. This order drives BFS tie-breaking.
    adj: Vec<Vec<VertexId>>,
}

impl BoardGraph {
    /// Populate all 64 vertices and every knight edge between them.
    pub fn build() -> Self {
        let squares: Vec<Square> = Square::all().collect();
        let mut graph = Self {
            adj: vec![Vec::with_capacity(KNIGHT_STEPS.len()); squares.len()],
            squares,
        };

        for v in 0..graph.len() {
            let from = graph.squares[v];
            for step in KNIGHT_STEPS {
                if let Some(to) = from.offset(step) {
                    graph.add_edge(v, to.index());
                }
            }
        }

        debug!(
            "built knight graph: {} vertices, {} edges",
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Symmetric, idempotent edge insertion. Self-loops and out-of-range ids are ignored.
    fn add_edge(&mut self, u: VertexId, v: VertexId) {
        if u == v || u >= self.len() || v >= self.len() {
            return;
        }
        if !self.adj[u].contains(&v) {
            self.adj[u].push(v);
        }
        if !self.adj[v].contains(&u) {
            self.adj[v].push(u);
        }
    }

    /// Drop every edge touching `v`.
    #[cfg(test)]
    pub(crate) fn isolate(&mut self, v: VertexId) {
        for u in std::mem::take(&mut self.adj[v]) {
            self.adj[u].retain(|&w| w != v);
        }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The square stored at vertex `v`.
    pub fn square_of(&self, v: VertexId) -> Option<Square> {
        self.squares.get(v).copied()
    }

    /// Resolve a square to its vertex.
    pub fn vertex_of(&self, sq: Square) -> Result<VertexId, BoardError> {
        let v = sq.index();
        match self.squares.get(v) {
            Some(&stored) if stored == sq => Ok(v),
            _ => Err(BoardError::VertexNotFound(sq)),
        }
    }

    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Dense 0/1 adjacency matrix, row-major over vertex ids.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.len();
        let mut m = vec![vec![0u8; n]; n];
        for (u, row) in m.iter_mut().enumerate() {
            for &v in self.neighbors(u) {
                row[v] = 1;
            }
        }
        m
    }

    /// Text dump of the adjacency matrix followed by the vertex table.
    pub fn render_adjacency(&self) -> String {
        let mut out = String::with_capacity(SQUARE_COUNT * (2 * SQUARE_COUNT + 16));
        out.push_str("Adjacency Matrix:\n");
        for row in self.adjacency_matrix() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        out.push_str("\nVertex Data:\n");
        for (v, sq) in self.squares.iter().enumerate() {
            let _ = writeln!(out, "Vertex {v}: {sq}");
        }
        out
    }
}

impl Default for BoardGraph {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric_and_idempotent() {
        let mut g = BoardGraph::build();
        let before = g.edge_count();
        let a = Square::new(0, 0).unwrap().index();
        let b = Square::new(2, 1).unwrap().index();

        assert!(g.has_edge(a, b) && g.has_edge(b, a));
        g.add_edge(a, b);
        g.add_edge(b, a);
        assert_eq!(g.edge_count(), before);
        assert_eq!(g.degree(a), 2);

        g.add_edge(a, a);
        assert!(!g.has_edge(a, a));
        g.add_edge(a, SQUARE_COUNT);
        assert_eq!(g.degree(a), 2);
    }

    #[test]
    fn matrix_is_symmetric_with_empty_diagonal() {
        let g = BoardGraph::build();
        let m = g.adjacency_matrix();
        for u in 0..g.len() {
            assert_eq!(m[u][u], 0);
            for v in 0..g.len() {
                assert_eq!(m[u][v], m[v][u]);
            }
        }
    }

    #[test]
    fn render_lists_every_vertex() {
        let text = BoardGraph::build().render_adjacency();
        assert!(text.starts_with("Adjacency Matrix:\n"));
        assert!(text.contains("Vertex 0: [0, 0]\n"));
        assert!(text.contains("Vertex 63: [7, 7]\n"));
        assert_eq!(text.lines().count(), 1 + SQUARE_COUNT + 2 + SQUARE_COUNT);
    }
}
