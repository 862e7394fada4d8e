/// A scalar objective evaluated at a single real point.
///
/// Objectives must be deterministic. Evaluation may fail, for example when
/// `x` lies outside the region where the underlying function is defined;
/// solvers report such failures to their observer before giving up.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type for points it cannot evaluate.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}
