//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It keeps two interior points positioned by the
//! golden ratio, compares their objectives, and discards the part of the
//! bracket beyond the worse one. The surviving interior point lands exactly
//! on a golden-ratio position of the narrowed bracket, so every iteration
//! costs one objective evaluation.
//!
//! The search stops when the outer bracket is no wider than
//! `x_abs_tol + x_rel_tol * |midpoint|`. A bracket that starts out that narrow
//! (including a zero-width one) is evaluated once at its midpoint.
//!
//! # Observer Events
//!
//! After both interior points have been evaluated, the solver emits one
//! [`Event`] per evaluation:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::Failed`]: the objective returned an error
//!
//! Each event includes `other`, the best point found so far.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other`. The
//! latter turns an evaluation failure into a signal to shrink away from the
//! failing region.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use crate::Observer;

use super::Objective;

use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// # Errors
///
/// Returns an error if the bracket is not finite, or if the objective fails
/// and the observer does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    search(objective, bracket, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the bracket is not finite or the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// # Errors
///
/// Returns an error if the bracket is not finite, or if the objective fails
/// and the observer does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    search(objective, bracket, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the bracket is not finite or the objective fails.
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(objective, bracket, config, ())
}
