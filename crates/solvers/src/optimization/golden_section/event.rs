use crate::{Observer, optimization::Objective};

use super::{Action, Error, Point};

/// Events emitted by the golden section solver.
///
/// `other` is always the best point found so far: the point the solver would
/// return if it had to stop now.
#[derive(Debug)]
pub enum Event<'a, E> {
    /// Successful evaluation of an interior point.
    Evaluated {
        /// The evaluated point.
        point: Point,

        /// The best point so far.
        other: Point,
    },

    /// The objective could not be evaluated.
    Failed {
        /// The x value where evaluation failed.
        x: f64,

        /// The best point so far.
        other: Point,

        /// The objective error.
        error: &'a E,
    },
}

impl<E> Event<'_, E> {
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the best point so far.
    #[must_use]
    pub fn other(&self) -> Point {
        match self {
            Self::Evaluated { other, .. } | Self::Failed { other, .. } => *other,
        }
    }
}

/// What the search does with a freshly evaluated point.
pub(super) enum Outcome {
    Accept(Point),
    AssumeWorse,
    StopEarly,
}

/// Evaluates the objective at `x`, emits the event, and applies the observer's action.
pub(super) fn probe<O, Obs>(
    objective: &O,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
{
    match objective.evaluate(x) {
        Ok(value) => {
            let point = Point::new(x, value);
            let action = observer.observe(&Event::Evaluated { point, other });
            Ok(match action {
                Some(Action::StopEarly) => Outcome::StopEarly,
                Some(Action::AssumeWorse) => Outcome::AssumeWorse,
                None => Outcome::Accept(point),
            })
        }
        Err(error) => {
            let action = observer.observe(&Event::Failed {
                x,
                other,
                error: &error,
            });
            match action {
                Some(Action::StopEarly) => Ok(Outcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(Outcome::AssumeWorse),
                None => Err(Error::Objective(Box::new(error))),
            }
        }
    }
}
