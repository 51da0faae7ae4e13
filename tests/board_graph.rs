use knight_path::coord::Coord;
use knight_path::graph::BoardGraph;
use knight_path::square::{Square, SQUARE_COUNT};

fn sq(f: i32, r: i32) -> Square {
    Square::new(f, r).unwrap()
}

#[test]
fn every_square_is_a_vertex() {
    let g = BoardGraph::build();
    assert_eq!(g.len(), SQUARE_COUNT);
    for v in 0..SQUARE_COUNT {
        let s = g.square_of(v).unwrap();
        assert_eq!(g.vertex_of(s), Ok(v));
        assert_eq!(s.index(), v);
    }
    assert_eq!(g.square_of(SQUARE_COUNT), None);
}

#[test]
fn degrees_are_between_two_and_eight() {
    let g = BoardGraph::build();
    for v in 0..g.len() {
        let d = g.degree(v);
        assert!((2..=8).contains(&d), "vertex {v} has degree {d}");
    }
    for corner in [sq(0, 0), sq(0, 7), sq(7, 0), sq(7, 7)] {
        assert_eq!(g.degree(corner.index()), 2, "corner {corner}");
    }
    for centre in [sq(3, 3), sq(3, 4), sq(4, 3), sq(4, 4)] {
        assert_eq!(g.degree(centre.index()), 8, "centre {centre}");
    }
}

#[test]
fn edges_are_exactly_knight_leaps() {
    let g = BoardGraph::build();
    for u in 0..g.len() {
        assert!(!g.has_edge(u, u));
        let su = g.square_of(u).unwrap();
        for v in 0..g.len() {
            let sv = g.square_of(v).unwrap();
            let leap = (sv.coord() - su.coord()).is_knight_step();
            assert_eq!(g.has_edge(u, v), leap, "{su} -> {sv}");
            assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
        }
    }
}

#[test]
fn knight_graph_has_168_edges() {
    // 4 * (n-1) * (n-2) on an n x n board.
    assert_eq!(BoardGraph::build().edge_count(), 168);
}

#[test]
fn corner_neighbours_follow_leap_order() {
    let g = BoardGraph::build();
    let got: Vec<Square> = g
        .neighbors(sq(0, 0).index())
        .iter()
        .map(|&v| g.square_of(v).unwrap())
        .collect();
    assert_eq!(got, vec![sq(2, 1), sq(1, 2)]);
    assert_eq!(sq(0, 0).offset(Coord::new(-2, -1)), None);
}
