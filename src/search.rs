//! Iterative backtracking search for a Hamiltonian path.
//!
//! Key points:
//! - A single mutable `Path` is the whole search stack: pushing the end
//!   descends, popping it backtracks
//! - Neighbour lists are sorted, so after popping `L` the scan resumes right
//!   after `L` in the new end's list and no branch is tried twice
//! - The previous run's path is precut into a seed instead of starting empty
//! - Roots are tried one after another once a seed is exhausted, so a run only
//!   fails after every start vertex was explored

use log::trace;

use crate::graph::{Graph, Vertex};
use crate::path::Path;

/// Phase of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No vertex on the path; the next root has to be seeded.
    Empty,
    /// A root or precut seed was just placed.
    Seeded,
    /// The last step appended a vertex.
    Expanding,
    /// The end is a dead end and has to be popped.
    Backtracking,
    /// The path covers every vertex.
    Complete,
    /// Every root was explored without success.
    Exhausted,
}

/// Outcome of a single search.
#[derive(Debug)]
pub struct SearchResult {
    /// The Hamiltonian path, if one was found.
    pub path: Option<Path>,
    /// Number of vertices pushed or popped along the way.
    pub steps: u64,
}

/// Trims the previous run's path into a seed for the run that adds `vertex`.
///
/// Walks back from the end, popping vertices, and stops at the second vertex
/// adjacent to `vertex` (the first one is popped as well). `vertex` is then
/// appended as the new end. If fewer than two such vertices exist the path
/// empties and the seed is `vertex` alone.
pub fn precut(graph: &Graph, mut path: Path, vertex: Vertex) -> Path {
    let mut adjacent_seen = 0;
    while let Some(end) = path.end() {
        if graph.is_adjacent(end, vertex) {
            adjacent_seen += 1;
            if adjacent_seen == 2 {
                break;
            }
        }
        path.pop_end();
    }
    trace!("precut kept {} vertices before {vertex}", path.len());
    path.push_end(vertex);
    path
}

/// Depth-first search state over a single mutable path.
pub struct Backtracker<'g> {
    graph: &'g Graph,
    /// Path length at which the search is complete.
    target: usize,
    /// Path under construction.
    path: Path,
    /// Root vertices still to try once the current root is exhausted.
    roots: Vec<Vertex>,
    /// Index into `roots` of the next root to seed.
    next_root: usize,
    state: SearchState,
    steps: u64,
}

impl<'g> Backtracker<'g> {
    /// Creates an unassisted search trying roots `1..=n` in order.
    pub fn new(graph: &'g Graph) -> Self {
        Self::seeded(graph, Path::new())
    }

    /// Creates a search resuming from `seed`.
    ///
    /// The seed must be a valid chain. A single-vertex seed counts as that
    /// root, so it is not tried again afterwards.
    pub fn seeded(graph: &'g Graph, seed: Path) -> Self {
        debug_assert!(graph.is_valid_chain(seed.vertices()));

        let seed_root = match seed.len() {
            1 => seed.start(),
            _ => None,
        };
        let roots = (1..=graph.len() as Vertex)
            .filter(|&root| Some(root) != seed_root)
            .collect();
        let state = if seed.is_empty() {
            SearchState::Empty
        } else {
            SearchState::Seeded
        };

        Self {
            graph,
            target: graph.len(),
            path: seed,
            roots,
            next_root: 0,
            state,
            steps: 0,
        }
    }

    /// Current phase.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Runs the search to completion or exhaustion.
    pub fn run(mut self) -> SearchResult {
        loop {
            self.state = match self.state {
                SearchState::Empty => self.seed_next_root(),
                SearchState::Seeded | SearchState::Expanding => self.expand(),
                SearchState::Backtracking => self.backtrack(),
                SearchState::Complete => {
                    return SearchResult {
                        path: Some(self.path),
                        steps: self.steps,
                    };
                }
                SearchState::Exhausted => {
                    return SearchResult {
                        path: None,
                        steps: self.steps,
                    };
                }
            };
        }
    }

    /// Places the next untried root on the empty path.
    fn seed_next_root(&mut self) -> SearchState {
        let Some(&root) = self.roots.get(self.next_root) else {
            return SearchState::Exhausted;
        };
        self.next_root += 1;
        trace!("trying root {root}");
        self.push(root);
        SearchState::Seeded
    }

    /// Appends the first unused neighbour of the end, if any.
    fn expand(&mut self) -> SearchState {
        if self.path.len() == self.target {
            return SearchState::Complete;
        }
        let Some(end) = self.path.end() else {
            return SearchState::Empty;
        };

        match self.next_unused(end, 0) {
            Some(next) => {
                self.push(next);
                SearchState::Expanding
            }
            None => SearchState::Backtracking,
        }
    }

    /// Pops ends until some vertex has an untried neighbour past the one just
    /// popped, then appends that neighbour.
    fn backtrack(&mut self) -> SearchState {
        loop {
            let last = self.path.pop_end();
            self.steps += 1;

            let Some(end) = self.path.end() else {
                return SearchState::Empty;
            };

            // neighbours are sorted, so everything up to `last` was tried
            let resume_from = match self.graph.neighbours(end).binary_search(&last) {
                Ok(index) => index + 1,
                Err(index) => index,
            };
            if let Some(next) = self.next_unused(end, resume_from) {
                self.push(next);
                return SearchState::Expanding;
            }
        }
    }

    /// First neighbour of `vertex` at or after `from` that is not on the path.
    #[inline]
    fn next_unused(&self, vertex: Vertex, from: usize) -> Option<Vertex> {
        self.graph.neighbours(vertex)[from..]
            .iter()
            .copied()
            .find(|&neighbour| !self.path.contains(neighbour))
    }

    #[inline]
    fn push(&mut self, vertex: Vertex) {
        self.path.push_end(vertex);
        self.steps += 1;
    }
}

/// Finds a Hamiltonian path of `graph`, starting from `seed`.
pub fn find_path(graph: &Graph, seed: Path) -> SearchResult {
    Backtracker::seeded(graph, seed).run()
}
