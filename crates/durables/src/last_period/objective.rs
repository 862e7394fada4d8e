use durables_solvers::optimization::Objective;
use thiserror::Error;

use crate::Utility;

/// Negated utility of buying `d` durables out of total resources `x`.
///
/// Resources not spent on durables are consumed, `c = x - d`. The value is
/// negated so that the optimal purchase minimizes it.
pub fn objective<U: Utility>(d: f64, x: f64, utility: &U) -> f64 {
    let c = x - d;
    -utility.utility(c, d)
}

/// The adjust-branch [`objective`] at fixed total resources, as a search objective.
///
/// Candidates outside `[0, x]` imply a negative purchase or negative
/// consumption. They are reported as [`ObjectiveError::Infeasible`] instead of
/// being passed to the utility function.
#[derive(Debug, Clone, Copy)]
pub struct AdjustObjective<'a, U> {
    utility: &'a U,
    x: f64,
}

/// Errors reported by [`AdjustObjective`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ObjectiveError {
    #[error("durable purchase {d} is infeasible with total resources {x}")]
    Infeasible { d: f64, x: f64 },
}

impl<'a, U: Utility> AdjustObjective<'a, U> {
    #[must_use]
    pub fn new(utility: &'a U, x: f64) -> Self {
        Self { utility, x }
    }

    /// Total resources shared between consumption and the durable purchase.
    #[must_use]
    pub fn resources(&self) -> f64 {
        self.x
    }
}

impl<U: Utility> Objective for AdjustObjective<'_, U> {
    type Error = ObjectiveError;

    fn evaluate(&self, d: f64) -> Result<f64, Self::Error> {
        if d < 0.0 || d > self.x {
            return Err(ObjectiveError::Infeasible { d, x: self.x });
        }
        Ok(objective(d, self.x, self.utility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn log_utility(c: f64, d: f64) -> f64 {
        (c + 1.0).ln() + 0.5 * (d + 1.0).ln()
    }

    #[test]
    fn consumes_what_is_not_spent_on_durables() {
        let value = objective(1.0, 4.0, &log_utility);

        assert_relative_eq!(value, -(4.0_f64.ln() + 0.5 * 2.0_f64.ln()));
    }

    #[test]
    fn evaluates_within_budget() {
        let adjust = AdjustObjective::new(&log_utility, 4.0);

        assert_relative_eq!(adjust.resources(), 4.0);
        assert_relative_eq!(adjust.evaluate(0.0).unwrap(), -(5.0_f64.ln()));
        assert_relative_eq!(
            adjust.evaluate(4.0).unwrap(),
            -(0.5 * 5.0_f64.ln()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_candidates_outside_budget() {
        let adjust = AdjustObjective::new(&log_utility, 4.0);

        assert_eq!(
            adjust.evaluate(4.5),
            Err(ObjectiveError::Infeasible { d: 4.5, x: 4.0 })
        );
        assert!(adjust.evaluate(-1e-9).is_err());
    }
}
