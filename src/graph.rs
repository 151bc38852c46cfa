//! Square-sum graph over the vertices `1..=n`.
//!
//! Two vertices are adjacent when their sum is a perfect square. The graph only
//! ever grows: each new vertex is connected to every earlier vertex it pairs
//! with, and no edge is removed afterwards.

/// A vertex id in `1..=n`.
pub type Vertex = u32;

/// Returns true if `value` is a perfect square.
#[inline]
pub fn is_perfect_square(value: u64) -> bool {
    let root = value.isqrt();
    root * root == value
}

/// Vertex registry with per-vertex adjacency lists.
///
/// Each list stays sorted by ascending id: neighbours below a vertex are
/// recorded when it is added, neighbours above it are appended as they arrive.
/// The backtracking search relies on this stable order to resume a scan right
/// after the last neighbour it tried.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// `adjacency[v - 1]` holds the neighbours of vertex `v`.
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the vertices `1..=n`.
    pub fn with_vertices(n: Vertex) -> Self {
        let mut graph = Self::new();
        for vertex in 1..=n {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Registers `vertex` and connects it to every existing vertex it
    /// square-sums with.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not the next unused id.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        assert_eq!(
            vertex as usize,
            self.adjacency.len() + 1,
            "vertices must be added in sequence"
        );

        let mut neighbours = Vec::new();
        for other in 1..vertex {
            if is_perfect_square(u64::from(other) + u64::from(vertex)) {
                self.adjacency[other as usize - 1].push(vertex);
                neighbours.push(other);
            }
        }
        self.adjacency.push(neighbours);
    }

    /// Number of vertices, which is also the highest vertex id.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbours of `vertex` in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not registered.
    #[inline]
    pub fn neighbours(&self, vertex: Vertex) -> &[Vertex] {
        assert!(
            vertex >= 1 && vertex as usize <= self.adjacency.len(),
            "vertex {vertex} is not registered"
        );
        &self.adjacency[vertex as usize - 1]
    }

    #[inline]
    pub fn is_adjacent(&self, a: Vertex, b: Vertex) -> bool {
        self.neighbours(a).binary_search(&b).is_ok()
    }

    /// Returns true if every consecutive pair of `vertices` is adjacent.
    pub fn is_valid_chain(&self, vertices: &[Vertex]) -> bool {
        vertices
            .windows(2)
            .all(|pair| self.is_adjacent(pair[0], pair[1]))
    }

    /// Returns true if `vertices` visits every vertex exactly once along edges.
    pub fn is_hamiltonian(&self, vertices: &[Vertex]) -> bool {
        if vertices.len() != self.len() {
            return false;
        }
        let mut seen = vec![false; self.len()];
        for &vertex in vertices {
            if vertex == 0 || vertex as usize > self.len() || seen[vertex as usize - 1] {
                return false;
            }
            seen[vertex as usize - 1] = true;
        }
        self.is_valid_chain(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares() {
        let squares: Vec<u64> = (0..=50).filter(|&v| is_perfect_square(v)).collect();
        assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49]);
        // sums of two large ids exceed u32
        assert!(is_perfect_square(1 << 32));
        assert!(!is_perfect_square((1 << 32) - 1));
    }

    #[test]
    fn test_adjacency_matches_square_sums() {
        let graph = Graph::with_vertices(40);
        for a in 1..=40u32 {
            for b in 1..=40u32 {
                if a == b {
                    continue;
                }
                let expected = is_perfect_square(u64::from(a + b));
                assert_eq!(graph.is_adjacent(a, b), expected, "pair ({a}, {b})");
                assert_eq!(
                    graph.is_adjacent(a, b),
                    graph.is_adjacent(b, a),
                    "adjacency must be symmetric for ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_neighbours_stay_sorted() {
        let graph = Graph::with_vertices(60);
        for vertex in 1..=60 {
            let neighbours = graph.neighbours(vertex);
            assert!(
                neighbours.windows(2).all(|pair| pair[0] < pair[1]),
                "neighbours of {vertex} out of order: {neighbours:?}"
            );
        }
        assert_eq!(graph.neighbours(1), &[3, 8, 15, 24, 35, 48]);
    }

    #[test]
    fn test_small_graph_edges() {
        let graph = Graph::with_vertices(3);
        assert!(graph.neighbours(2).is_empty());
        assert_eq!(graph.neighbours(1), &[3]);
        assert_eq!(graph.neighbours(3), &[1]);
    }

    #[test]
    fn test_hamiltonian_check() {
        let graph = Graph::with_vertices(15);
        let known = [8, 1, 15, 10, 6, 3, 13, 12, 4, 5, 11, 14, 2, 7, 9];
        assert!(graph.is_hamiltonian(&known));
        assert!(!graph.is_hamiltonian(&known[..14]));

        let mut repeated = known;
        repeated[14] = 8;
        assert!(!graph.is_hamiltonian(&repeated));
    }

    #[test]
    #[should_panic(expected = "vertices must be added in sequence")]
    fn test_out_of_sequence_vertex_panics() {
        let mut graph = Graph::with_vertices(3);
        graph.add_vertex(5);
    }
}
