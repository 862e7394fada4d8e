use crate::{Observer, optimization::Objective};

use super::{
    Action, Config, Error, Event, Point, Solution, Status,
    bracket::GoldenBracket,
    event::{Outcome, probe},
    state::State,
};

/// Core golden section search implementation.
///
/// `transform` maps objective values to scores that are minimized, which lets
/// one algorithm serve both minimization (identity) and maximization (negation).
pub(super) fn search<O, Obs, F>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
    F: Fn(f64) -> f64,
{
    let [a, b] = bracket;
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::NonFiniteBracket(a, b));
    }

    let bracket = GoldenBracket::new(bracket);

    if config.accepts(bracket.left, bracket.right) {
        let x = bracket.midpoint();
        let value = objective
            .evaluate(x)
            .map_err(|error| Error::Objective(Box::new(error)))?;
        return Ok(Solution::at(Point::new(x, value), Status::Converged, 0));
    }

    let mut state = match init(objective, bracket, &mut observer, &transform)? {
        Start::Continue(state) => state,
        Start::Stop(solution) => return Ok(solution),
    };

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let direction = state.next_direction();
        let x = state.probe_x(direction);

        match probe(objective, x, state.best(), &mut observer)? {
            Outcome::Accept(point) => {
                let score = transform(point.objective);
                state.apply(direction, score);
                state.offer(point, score);
            }
            Outcome::AssumeWorse => state.apply(direction, f64::INFINITY),
            Outcome::StopEarly => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter));
            }
        }
    }

    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(state.into_solution(status, config.max_iters()))
}

enum Start {
    Continue(State),
    Stop(Solution),
}

/// Evaluates both interior points of the initial bracket.
///
/// Only the second evaluation emits an event, since the first has no `other`
/// to report. If the left point fails, its failure is reported with the right
/// point as `other`. If both fail, the observer is notified and the search
/// errors: neither recovery action has a valid point to fall back on.
fn init<O, Obs, F>(
    objective: &O,
    bracket: GoldenBracket,
    observer: &mut Obs,
    transform: &F,
) -> Result<Start, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O::Error>, Action>,
    F: Fn(f64) -> f64,
{
    match objective.evaluate(bracket.inner_left) {
        Ok(value) => {
            let left = Point::new(bracket.inner_left, value);
            let left_score = transform(value);

            match probe(objective, bracket.inner_right, left, observer)? {
                Outcome::Accept(right) => {
                    let right_score = transform(right.objective);
                    let (best, best_score) = if left_score <= right_score {
                        (left, left_score)
                    } else {
                        (right, right_score)
                    };
                    Ok(Start::Continue(State::new(
                        bracket,
                        left_score,
                        right_score,
                        best,
                        best_score,
                    )))
                }
                Outcome::AssumeWorse => Ok(Start::Continue(State::new(
                    bracket,
                    left_score,
                    f64::INFINITY,
                    left,
                    left_score,
                ))),
                Outcome::StopEarly => Ok(Start::Stop(Solution::at(
                    left,
                    Status::StoppedByObserver,
                    0,
                ))),
            }
        }

        Err(error) => match objective.evaluate(bracket.inner_right) {
            Ok(value) => {
                let right = Point::new(bracket.inner_right, value);
                let action = observer.observe(&Event::Failed {
                    x: bracket.inner_left,
                    other: right,
                    error: &error,
                });
                match action {
                    Some(Action::StopEarly) => Ok(Start::Stop(Solution::at(
                        right,
                        Status::StoppedByObserver,
                        0,
                    ))),
                    Some(Action::AssumeWorse) => {
                        let right_score = transform(value);
                        Ok(Start::Continue(State::new(
                            bracket,
                            f64::INFINITY,
                            right_score,
                            right,
                            right_score,
                        )))
                    }
                    None => Err(Error::Objective(Box::new(error))),
                }
            }
            Err(_) => {
                let placeholder = Point::new(bracket.inner_right, f64::NAN);
                observer.observe(&Event::Failed {
                    x: bracket.inner_left,
                    other: placeholder,
                    error: &error,
                });
                Err(Error::Objective(Box::new(error)))
            }
        },
    }
}
