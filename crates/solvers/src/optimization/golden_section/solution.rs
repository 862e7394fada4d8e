use super::Point;

/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed below the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Number of shrink iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn at(point: Point, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            objective: point.objective,
            iters,
        }
    }
}
