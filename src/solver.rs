//! Run-by-run solver.
//!
//! Each call to [`Solver::solve_next`] adds the next vertex and looks for a
//! path over `1..=n`, reusing the previous run's path:
//! - first by grafting the new vertex onto it (no search)
//! - then by precutting it into a seed for the backtracking search
//!
//! A failed run forgets the stored path, so the next run searches unaided.

use log::debug;
use thiserror::Error;

use crate::expansion;
use crate::graph::{Graph, Vertex};
use crate::path::Path;
use crate::search;

/// How a run's path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The new vertex was grafted onto the previous path.
    Extended,
    /// The backtracking search found the path.
    Backtracked,
}

/// A successful run.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    /// The run number `n`.
    pub run: Vertex,
    pub path: &'a Path,
    pub strategy: Strategy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no square-sum path exists for 1..={run}")]
    NoSolution { run: Vertex },
}

/// Counters accumulated across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub runs: u64,
    pub extensions: u64,
    pub searches: u64,
    /// Vertices pushed or popped by all searches.
    pub search_steps: u64,
}

/// Solver state carried from one run to the next.
#[derive(Debug, Default)]
pub struct Solver {
    /// The last completed run; the next run is `run + 1`.
    run: Vertex,
    graph: Graph,
    /// Path of the last run, if it succeeded.
    last_path: Option<Path>,
    stats: SolverStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the last completed run.
    pub fn run(&self) -> Vertex {
        self.run
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Solves the next run.
    pub fn solve_next(&mut self) -> Result<Solution<'_>, SolveError> {
        self.run += 1;
        self.stats.runs += 1;
        let vertex = self.run;
        self.graph.add_vertex(vertex);

        let placement = match self.last_path.as_mut() {
            Some(path) => expansion::extend(&self.graph, path, vertex),
            None => None,
        };
        if let Some(placement) = placement {
            self.stats.extensions += 1;
            debug!("run {vertex}: extended previous path at {placement:?}");
            return self.solution(Strategy::Extended);
        }

        let seed = match self.last_path.take() {
            Some(previous) => search::precut(&self.graph, previous, vertex),
            None => Path::new(),
        };
        let result = search::find_path(&self.graph, seed);
        self.stats.searches += 1;
        self.stats.search_steps += result.steps;
        debug!(
            "run {vertex}: search {} after {} steps",
            if result.path.is_some() { "succeeded" } else { "failed" },
            result.steps
        );

        self.last_path = result.path;
        self.solution(Strategy::Backtracked)
    }

    /// Solves runs until `run` has been attempted and returns its outcome.
    ///
    /// # Panics
    ///
    /// Panics if `run` was already solved.
    pub fn solve_until(&mut self, run: Vertex) -> Result<Solution<'_>, SolveError> {
        assert!(run > self.run, "run {run} was already solved");
        while self.run + 1 < run {
            // intermediate outcomes only matter for the stored path
            let _ = self.solve_next();
        }
        self.solve_next()
    }

    fn solution(&self, strategy: Strategy) -> Result<Solution<'_>, SolveError> {
        self.last_path
            .as_ref()
            .map(|path| Solution {
                run: self.run,
                path,
                strategy,
            })
            .ok_or(SolveError::NoSolution { run: self.run })
    }
}
