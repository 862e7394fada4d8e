use thiserror::Error;

use super::OptimizeError;

/// Errors that can occur when solving the last period.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("period {t} is outside a horizon of {periods} periods")]
    PeriodOutOfRange { t: usize, periods: usize },

    #[error("{array} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        array: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("durable-purchase search failed at total resources {x}")]
    Search {
        x: f64,
        #[source]
        source: OptimizeError,
    },
}
