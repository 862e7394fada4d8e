use durables_solvers::optimization::{
    Objective,
    golden_section::{self, Action, Config, ConfigError, Event, Status},
};
use thiserror::Error;

/// A bounded scalar minimizer, injected into the last-period solver.
///
/// The solver calls it once per adjust-branch grid point with the negated
/// utility objective. Implementations must be `Sync`, since one optimizer is
/// shared by every parallel worker.
pub trait ScalarOptimizer: Sync {
    /// Returns the point in `bracket` that minimizes `objective`, to within `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the search cannot produce a converged point.
    fn minimize<O: Objective>(
        &self,
        objective: &O,
        bracket: [f64; 2],
        tol: f64,
    ) -> Result<f64, OptimizeError>;
}

/// Errors reported by a [`ScalarOptimizer`].
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("invalid search tolerance")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] golden_section::Error),

    #[error("search did not converge within {iters} iterations (best x={x})")]
    NotConverged { x: f64, iters: usize },
}

/// Relative bracket tolerance: a few `f64` spacings at the bracket midpoint.
const REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Extra shrinks on top of the derived budget.
const SPARE_ITERS: usize = 2;

/// Golden section search over the bracket, stopping once it is narrower than `tol`.
///
/// By default the iteration budget is derived from the bracket width and
/// `tol`, so any finite bracket narrows to the tolerance. Setting `max_iters`
/// caps the budget instead; running out of iterations is then an error, not a
/// silently accepted estimate.
///
/// Points the objective cannot evaluate are treated as worse than the best
/// point so far, which steers the search back into the feasible region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoldenSection {
    pub max_iters: Option<usize>,
}

impl GoldenSection {
    fn budget(&self, [a, b]: [f64; 2], tol: f64) -> usize {
        self.max_iters
            .unwrap_or_else(|| Config::iters_to_width((b - a).abs(), tol) + SPARE_ITERS)
    }
}

impl ScalarOptimizer for GoldenSection {
    fn minimize<O: Objective>(
        &self,
        objective: &O,
        bracket: [f64; 2],
        tol: f64,
    ) -> Result<f64, OptimizeError> {
        let config = Config::new(self.budget(bracket, tol), tol, REL_TOL)?;

        let steer_away = |event: &Event<'_, O::Error>| match event {
            Event::Failed { x, error, .. } => {
                log::trace!("assuming worse at x={x}: {error}");
                Some(Action::AssumeWorse)
            }
            Event::Evaluated { .. } => None,
        };

        let solution = golden_section::minimize(objective, bracket, &config, steer_away)?;

        match solution.status {
            Status::Converged | Status::StoppedByObserver => Ok(solution.x),
            Status::MaxIters => {
                log::warn!(
                    "golden section search on [{}, {}] stopped after {} iterations",
                    bracket[0],
                    bracket[1],
                    solution.iters,
                );
                Err(OptimizeError::NotConverged {
                    x: solution.x,
                    iters: solution.iters,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    #[test]
    fn finds_minimum_within_tolerance() {
        let parabola = |x: f64| Ok::<_, Infallible>((x - 0.7).powi(2));

        let x = GoldenSection::default()
            .minimize(&parabola, [0.0, 2.0], 1e-8)
            .expect("should converge");

        assert_relative_eq!(x, 0.7, epsilon = 1e-7);
    }

    #[test]
    fn steers_away_from_failures() {
        #[derive(Debug, Error)]
        #[error("undefined")]
        struct Undefined;

        // Decreasing everywhere it is defined, so the optimum is the edge at 1.
        let edge = |x: f64| if x <= 1.0 { Ok(-x) } else { Err(Undefined) };

        let x = GoldenSection::default()
            .minimize(&edge, [0.0, 1.5], 1e-8)
            .expect("should converge");

        assert_relative_eq!(x, 1.0, epsilon = 1e-7);
    }

    #[test]
    fn reports_non_convergence() {
        let parabola = |x: f64| Ok::<_, Infallible>((x - 0.7).powi(2));

        let result = GoldenSection { max_iters: Some(2) }.minimize(&parabola, [0.0, 2.0], 1e-8);

        assert!(matches!(
            result,
            Err(OptimizeError::NotConverged { iters: 2, .. })
        ));
    }

    #[test]
    fn converges_where_spacing_exceeds_tolerance() {
        // Near 3.3e8 adjacent f64 values are about 6e-8 apart, wider than `tol`.
        let parabola = |x: f64| Ok::<_, Infallible>((x / 1e9 - 1.0 / 3.0).powi(2));

        let x = GoldenSection::default()
            .minimize(&parabola, [0.0, 1e9], 1e-8)
            .expect("should converge");

        assert_relative_eq!(x, 1e9 / 3.0, max_relative = 1e-6);
    }

    #[test]
    fn budget_follows_bracket_width() {
        let derived = GoldenSection::default();
        assert_eq!(derived.budget([0.0, 1.0], 1e-3), 15 + SPARE_ITERS);
        assert!(derived.budget([0.0, 1e6], 1e-12) > 100);

        let capped = GoldenSection { max_iters: Some(7) };
        assert_eq!(capped.budget([0.0, 1e6], 1e-12), 7);
    }
}
