/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best point found so far.
    StopEarly,

    /// Treat this point as worse than the other interior point.
    ///
    /// The bracket shrinks away from the point, and a successful evaluation
    /// is not considered for the best solution. Use this to recover from
    /// evaluation failures in regions known to be suboptimal, such as points
    /// outside the feasible set.
    AssumeWorse,
}
