/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error: {0}")]
    Objective(Box<dyn std::error::Error + Send + Sync>),

    #[error("bracket [{0}, {1}] is not finite")]
    NonFiniteBracket(f64, f64),
}
