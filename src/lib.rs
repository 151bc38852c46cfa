//! Square-Sum Problem Solver Library
//!
//! For each run `n`, finds an ordering of `1..=n` in which every adjacent pair
//! sums to a perfect square. Runs are solved in sequence and each one starts
//! from the path found for the previous run.

pub mod expansion;
pub mod graph;
pub mod path;
pub mod report;
pub mod search;
pub mod solver;

pub use graph::{Graph, Vertex};
pub use path::Path;
pub use solver::{Solution, SolveError, Solver, SolverStats, Strategy};
