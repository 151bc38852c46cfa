//! Grafts a new vertex onto the previous run's path without searching.

use crate::graph::{Graph, Vertex};
use crate::path::Path;

/// Where the new vertex was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Before the old start.
    Start,
    /// After the old end.
    End,
    /// Between two consecutive vertices of the old path.
    Between(Vertex, Vertex),
}

/// Tries to place `vertex` onto `path` so every consecutive pair stays
/// adjacent: before the start, after the end, or into the first gap (scanning
/// left to right) whose two endpoints are both neighbours of `vertex`.
///
/// Returns `None` and leaves `path` untouched if no placement exists.
pub fn extend(graph: &Graph, path: &mut Path, vertex: Vertex) -> Option<Placement> {
    let (start, end) = (path.start()?, path.end()?);

    if graph.is_adjacent(vertex, start) {
        path.insert_after(vertex, None);
        return Some(Placement::Start);
    }
    if graph.is_adjacent(vertex, end) {
        path.push_end(vertex);
        return Some(Placement::End);
    }

    let (left, right) = path
        .vertices()
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .find(|&(left, right)| {
            graph.is_adjacent(vertex, left) && graph.is_adjacent(vertex, right)
        })?;
    path.insert_after(vertex, Some(left));
    Some(Placement::Between(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_15: [Vertex; 15] = [8, 1, 15, 10, 6, 3, 13, 12, 4, 5, 11, 14, 2, 7, 9];

    #[test]
    fn test_extend_at_end() {
        let graph = Graph::with_vertices(16);
        let mut path = Path::from_vertices(&RUN_15);

        assert_eq!(extend(&graph, &mut path, 16), Some(Placement::End));
        assert_eq!(path.end(), Some(16));
        assert!(graph.is_hamiltonian(path.vertices()));
    }

    #[test]
    fn test_extend_at_start() {
        let graph = Graph::with_vertices(17);
        let mut run_16 = RUN_15.to_vec();
        run_16.push(16);
        let mut path = Path::from_vertices(&run_16);

        assert_eq!(extend(&graph, &mut path, 17), Some(Placement::Start));
        assert_eq!(path.start(), Some(17));
        assert!(graph.is_hamiltonian(path.vertices()));
    }

    #[test]
    fn test_extend_between_pair() {
        let run_29 = [
            1, 24, 25, 11, 5, 4, 12, 13, 3, 6, 19, 17, 8, 28, 21, 15, 10, 26, 23, 2, 14, 22, 27, 9,
            16, 20, 29, 7, 18,
        ];
        let graph = Graph::with_vertices(30);
        let mut path = Path::from_vertices(&run_29);

        // 6 + 30 = 36 and 30 + 19 = 49; earlier gaps do not fit
        assert_eq!(extend(&graph, &mut path, 30), Some(Placement::Between(6, 19)));
        assert_eq!(&path.vertices()[9..12], &[6, 30, 19]);
        assert_eq!(path.start(), Some(1));
        assert_eq!(path.end(), Some(18));
        assert!(graph.is_hamiltonian(path.vertices()));
    }

    #[test]
    fn test_extend_fails_and_leaves_path() {
        let graph = Graph::with_vertices(18);
        let mut run_17 = vec![17];
        run_17.extend_from_slice(&RUN_15);
        run_17.push(16);
        let mut path = Path::from_vertices(&run_17);
        let before = path.clone();

        assert_eq!(extend(&graph, &mut path, 18), None);
        assert_eq!(path, before);
    }

    #[test]
    fn test_extend_empty_path() {
        let graph = Graph::with_vertices(1);
        let mut path = Path::new();
        assert_eq!(extend(&graph, &mut path, 1), None);
        assert!(path.is_empty());
    }
}
