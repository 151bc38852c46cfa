//! Text output for the run-by-run driver.

use crate::solver::{Solution, SolveError};

/// Line printed under the banner and after every run.
pub const SEPARATOR: &str = "-----------------------------------------";

/// Header printed once before the first run.
pub fn banner() -> String {
    format!("The Square-Sum Problem Solver\n{SEPARATOR}\n")
}

/// Formats one run as `Case 1-n:`, then `OK` with the path or `FAIL`, then a
/// separator.
pub fn format_outcome(outcome: &Result<Solution<'_>, SolveError>) -> String {
    match outcome {
        Ok(solution) => format!(
            "Case 1-{}:\nOK\n{}\n{SEPARATOR}\n",
            solution.run, solution.path
        ),
        Err(SolveError::NoSolution { run }) => format!("Case 1-{run}:\nFAIL\n{SEPARATOR}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::solver::Strategy;

    #[test]
    fn test_format_success() {
        let path = Path::from_vertices(&[1]);
        let outcome = Ok(Solution {
            run: 1,
            path: &path,
            strategy: Strategy::Backtracked,
        });
        assert_eq!(format_outcome(&outcome), format!("Case 1-1:\nOK\n|1|\n{SEPARATOR}\n"));
    }

    #[test]
    fn test_format_failure() {
        let outcome = Err(SolveError::NoSolution { run: 2 });
        assert_eq!(format_outcome(&outcome), format!("Case 1-2:\nFAIL\n{SEPARATOR}\n"));
    }
}
