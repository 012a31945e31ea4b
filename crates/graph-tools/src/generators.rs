//! Generators for common graph families and recognizers for them.
//!
//! Generated graphs are simple and use a canonical labelling: the path and the
//! cycle visit the vertices in order, the first part of a complete bipartite
//! graph comes first.

use crate::graph::{Graph, StaticDigraph, StaticGraph};

fn from_fn(n: usize, adjacent: impl Fn(usize, usize) -> bool) -> Vec<Vec<u8>> {
    (0..n).map(|i| (0..n).map(|j| adjacent(i, j) as u8).collect()).collect()
}

/// The complete graph on `n` vertices.
pub fn complete_graph(n: usize) -> StaticGraph {
    StaticGraph::from_matrix_unchecked(from_fn(n, |i, j| i != j))
}

/// The complete bipartite graph with parts `0..n` and `n..n + m`.
pub fn complete_bipartite_graph(n: usize, m: usize) -> StaticGraph {
    StaticGraph::from_matrix_unchecked(from_fn(n + m, |i, j| (i < n) != (j < n)))
}

/// The cycle `0, 1, ..., n - 1, 0`.
///
/// # Panics
///
/// Panics if `n < 3`.
pub fn cycle_graph(n: usize) -> StaticGraph {
    assert!(n >= 3, "a cycle needs at least 3 vertices, got {n}");
    StaticGraph::from_matrix_unchecked(from_fn(n, |i, j| i.abs_diff(j) == 1 || i.abs_diff(j) == n - 1))
}

/// The path `0, 1, ..., n - 1`.
pub fn path_graph(n: usize) -> StaticGraph {
    StaticGraph::from_matrix_unchecked(from_fn(n, |i, j| i.abs_diff(j) == 1))
}

/// The circulant digraph with an arc from `i` to `i + s mod n` for every
/// jump `s`. Jumps may be negative. Jumps which are multiples of `n` are
/// ignored.
pub fn circulant_digraph(n: usize, jumps: &[isize]) -> StaticDigraph {
    let mut matrix = vec![vec![0; n]; n];
    if n == 0 {
        return StaticDigraph::from_matrix_unchecked(matrix);
    }
    let offsets: Vec<usize> = jumps.iter().map(|&s| s.rem_euclid(n as isize) as usize).filter(|&s| s != 0).collect();
    for (i, row) in matrix.iter_mut().enumerate() {
        for &s in &offsets {
            row[(i + s) % n] = 1;
        }
    }
    StaticDigraph::from_matrix_unchecked(matrix)
}

fn is_simple(graph: &StaticGraph) -> bool {
    let matrix = graph.matrix();
    matrix.iter().enumerate().all(|(i, row)| row[i] == 0 && row.iter().all(|&x| x <= 1))
}

/// Walk along vertices of degree at most two from `start` and return the
/// number of vertices visited.
fn walk_length(graph: &StaticGraph, start: usize) -> usize {
    let mut visited = vec![false; graph.order()];
    let mut current = Some(start);
    let mut count = 0;
    while let Some(v) = current {
        visited[v] = true;
        count += 1;
        current = graph.neighbours(v).iter().find(|&w| !visited[w]);
    }
    count
}

/// Returns whether every two distinct vertices are adjacent and there are no
/// loops.
pub fn is_complete(graph: &StaticGraph) -> bool {
    let matrix = graph.matrix();
    matrix.iter().enumerate().all(|(i, row)| row.iter().enumerate().all(|(j, &x)| x == u8::from(i != j)))
}

/// Returns whether the vertices split into two parts such that exactly the
/// pairs of vertices from different parts are adjacent. A graph without edges
/// is complete bipartite with an empty part. The graph without vertices is
/// not.
pub fn is_complete_bipartite(graph: &StaticGraph) -> bool {
    if graph.order() == 0 || !is_simple(graph) {
        return false;
    }
    let matrix = graph.matrix();
    // The part of vertex 0 are its non-neighbours.
    let first: Vec<bool> = matrix[0].iter().map(|&x| x == 0).collect();
    matrix.iter().enumerate().all(|(i, row)| row.iter().enumerate().all(|(j, &x)| (x == 1) == (first[i] != first[j])))
}

/// Returns whether the graph is a cycle on at least three vertices.
pub fn is_cycle(graph: &StaticGraph) -> bool {
    graph.order() >= 3
        && is_simple(graph)
        && graph.degree_sequence().iter().all(|&d| d == 2)
        && walk_length(graph, 0) == graph.order()
}

/// Returns whether the graph is a path. A single vertex is a path.
pub fn is_path(graph: &StaticGraph) -> bool {
    let n = graph.order();
    if n == 0 || !is_simple(graph) {
        return false;
    }
    if n == 1 {
        return true;
    }
    let degrees = graph.degree_sequence();
    let mut ends = degrees.iter().enumerate().filter(|(_, &d)| d == 1).map(|(v, _)| v);
    let Some(start) = ends.next() else {
        return false;
    };
    ends.count() == 1 && degrees.iter().all(|&d| d == 1 || d == 2) && walk_length(graph, start) == n
}

/// Returns whether every two distinct vertices of `vertices` are adjacent.
pub fn is_clique(graph: &StaticGraph, vertices: &[usize]) -> bool {
    vertices.iter().all(|&v| {
        let neighbours = graph.neighbours(v);
        vertices.iter().all(|&w| w == v || neighbours.contains(w))
    })
}

/// Returns whether no two distinct vertices of `vertices` are adjacent.
pub fn is_stable(graph: &StaticGraph, vertices: &[usize]) -> bool {
    vertices.iter().all(|&v| {
        let neighbours = graph.neighbours(v);
        vertices.iter().all(|&w| w == v || !neighbours.contains(w))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn graph(matrix: Vec<Vec<u8>>) -> StaticGraph {
        StaticGraph::from_matrix(matrix).unwrap()
    }

    fn subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
        (0..1_u32 << n).map(move |mask| (0..n).filter(|&v| mask & (1 << v) != 0).collect())
    }

    #[test]
    fn complete() {
        for n in 0..10 {
            let g = complete_graph(n);
            assert!(is_complete(&g));
            assert_eq!(g.size(), n * n.saturating_sub(1) / 2);
            assert_eq!(g.degree_sequence(), vec![n.saturating_sub(1); n]);
        }
        let mut matrix = complete_graph(4).into_matrix();
        matrix[1][1] = 1;
        assert!(!is_complete(&graph(matrix)));
        assert!(!is_complete(&path_graph(3)));
    }

    #[test]
    fn complete_bipartite() {
        let g = complete_bipartite_graph(2, 3);
        assert_eq!(g.size(), 6);
        assert_eq!(g.degree_sequence(), [3, 3, 2, 2, 2]);
        assert!(is_complete_bipartite(&g));
        assert!(is_complete_bipartite(&complete_bipartite_graph(4, 0)));
        assert!(is_complete_bipartite(&cycle_graph(4)));
        assert!(!is_complete_bipartite(&cycle_graph(5)));
        assert!(!is_complete_bipartite(&path_graph(4)));
        assert!(!is_complete_bipartite(&complete_graph(3)));
        assert!(!is_complete_bipartite(&StaticGraph::default()));
    }

    #[test]
    fn cycles() {
        let a = graph(vec![
            vec![0, 1, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 1, 0, 0, 0, 0, 0],
            vec![0, 1, 0, 1, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 1, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 1, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 1, 0],
        ]);
        let c = graph(vec![
            vec![0, 0, 1, 0, 0, 1, 0],
            vec![0, 0, 0, 1, 0, 0, 1],
            vec![1, 0, 0, 0, 1, 0, 0],
            vec![0, 1, 0, 0, 0, 1, 0],
            vec![0, 0, 1, 0, 0, 0, 1],
            vec![1, 0, 0, 1, 0, 0, 0],
            vec![0, 1, 0, 0, 1, 0, 0],
        ]);
        // Two disjoint 4-cycles.
        let d = graph(vec![
            vec![0, 1, 0, 1, 0, 0, 0, 0],
            vec![1, 0, 1, 0, 0, 0, 0, 0],
            vec![0, 1, 0, 1, 0, 0, 0, 0],
            vec![1, 0, 1, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 1, 0, 1],
            vec![0, 0, 0, 0, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 1, 0, 1],
            vec![0, 0, 0, 0, 1, 0, 1, 0],
        ]);
        // An 8-cycle with a loop.
        let mut e = a.clone().into_matrix();
        e[3][3] = 1;

        assert!(is_cycle(&a));
        assert!(is_cycle(&complete_graph(3)));
        assert!(is_cycle(&c));
        assert!(!is_cycle(&d));
        assert!(!is_cycle(&graph(e)));
        assert_eq!(cycle_graph(8), a);
        for n in 3..20 {
            assert!(is_cycle(&cycle_graph(n)));
            assert!(!is_path(&cycle_graph(n)));
        }
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn short_cycle() {
        cycle_graph(2);
    }

    #[test]
    fn paths() {
        assert!(!is_path(&path_graph(0)));
        for n in 1..20 {
            let p = path_graph(n);
            assert!(is_path(&p));
            assert_eq!(p.size(), n - 1);
        }
        // A path 0-2-1-3 in a different labelling.
        let g = graph(vec![vec![0, 0, 1, 0], vec![0, 0, 1, 1], vec![1, 1, 0, 0], vec![0, 1, 0, 0]]);
        assert!(is_path(&g));
        // A path 0-1 and a triangle.
        let g = graph(vec![
            vec![0, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 0, 1, 1],
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 0],
        ]);
        assert!(!is_path(&g));
        assert!(!is_path(&complete_bipartite_graph(1, 3)));
    }

    #[test]
    fn circulant() {
        assert_eq!(circulant_digraph(8, &[1, -1]).matrix(), cycle_graph(8).matrix());
        let d = circulant_digraph(5, &[2, 5, -10]);
        assert_eq!(d.outdegree_sequence(), [1; 5]);
        assert_eq!(d.indegree_sequence(), [1; 5]);
        assert_eq!(d.matrix()[4], [0, 1, 0, 0, 0]);
        assert_eq!(circulant_digraph(0, &[1]).order(), 0);
    }

    #[test]
    fn cliques() {
        let g = complete_graph(6);
        for set in subsets(6) {
            assert!(is_clique(&g, &set));
        }
        let mut matrix = complete_graph(6).into_matrix();
        matrix[1][4] = 0;
        matrix[4][1] = 0;
        let g = graph(matrix);
        assert!(!is_clique(&g, &[0, 1, 2, 3, 4, 5]));
        assert!(is_clique(&g, &[0, 1, 2, 3, 5]));
    }

    #[test]
    fn stable_sets() {
        // Every pair is non-adjacent except for pairs containing 1 or 3.
        let g = graph(vec![
            vec![0, 1, 0, 1, 0, 0],
            vec![1, 0, 1, 1, 1, 1],
            vec![0, 1, 0, 1, 0, 0],
            vec![1, 1, 1, 0, 1, 1],
            vec![0, 1, 0, 1, 0, 0],
            vec![0, 1, 0, 1, 0, 0],
        ]);
        for set in subsets(6) {
            let expected = set.len() < 2 || !(set.contains(&1) || set.contains(&3));
            assert_eq!(is_stable(&g, &set), expected, "{set:?}");
        }
    }
}
