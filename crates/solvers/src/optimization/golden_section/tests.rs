use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use super::{
    Action, Config, Error, Event, Status, maximize_unobserved, minimize, minimize_unobserved,
};

fn quadratic(center: f64) -> impl Fn(f64) -> Result<f64, Infallible> {
    move |x| Ok((x - center).powi(2))
}

/// f(x) = x³ - 4x, with a local minimum at 2/√3 and a local maximum at -2/√3.
fn polynomial(x: f64) -> Result<f64, Infallible> {
    Ok(x.powi(3) - 4.0 * x)
}

fn identity(x: f64) -> Result<f64, Infallible> {
    Ok(x)
}

#[derive(Debug, Clone, Copy, Error)]
#[error("undefined at x={0}")]
struct Undefined(f64);

/// A parabola centered at `center` that cannot be evaluated where `defined` is false.
fn partial(center: f64, defined: fn(f64) -> bool) -> impl Fn(f64) -> Result<f64, Undefined> {
    move |x| {
        if defined(x) {
            Ok((x - center).powi(2))
        } else {
            Err(Undefined(x))
        }
    }
}

fn assume_worse_on_failure(event: &Event<'_, Undefined>) -> Option<Action> {
    matches!(event, Event::Failed { .. }).then_some(Action::AssumeWorse)
}

#[test]
fn minimizes_quadratic() {
    let solution = minimize_unobserved(&quadratic(5.0), [0.0, 10.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 5.0, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-12);
}

#[test]
fn minimizes_polynomial() {
    let solution =
        minimize_unobserved(&polynomial, [-2.0, 2.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0 / 3.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn maximizes_polynomial() {
    let solution =
        maximize_unobserved(&polynomial, [-2.0, 2.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -2.0 / 3.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn reversed_bracket_is_accepted() {
    let solution = minimize_unobserved(&quadratic(1.5), [4.0, -1.0], &Config::default())
        .expect("should converge");

    assert_relative_eq!(solution.x, 1.5, epsilon = 1e-6);
}

#[test]
fn iteration_count_follows_bracket_width() {
    // The bracket shrinks by 1/φ per iteration: 0.618^14 > 1e-3 > 0.618^15.
    let config = Config::new(100, 1e-3, 0.0).unwrap();
    let solution =
        minimize_unobserved(&quadratic(0.3), [0.0, 1.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 15);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-3);
}

#[test]
fn zero_width_bracket_returns_its_point() {
    let solution = minimize_unobserved(&quadratic(5.0), [2.0, 2.0], &Config::default())
        .expect("should evaluate once");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.objective, 9.0);
}

#[test]
fn non_finite_bracket_is_rejected() {
    let result = minimize_unobserved(&identity, [0.0, f64::INFINITY], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteBracket(..))));
}

#[test]
fn stops_at_iteration_limit() {
    let config = Config::new(3, 1e-12, 1e-12).unwrap();
    let solution = minimize_unobserved(&quadratic(5.0), [0.0, 10.0], &config)
        .expect("should return best so far");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
}

#[test]
fn observer_can_stop_early() {
    let mut events = 0;
    let observer = |_: &Event<'_, Infallible>| {
        events += 1;
        (events >= 3).then_some(Action::StopEarly)
    };

    let solution = minimize(&polynomial, [0.0, 3.0], &Config::default(), observer)
        .expect("should stop cleanly");

    // One event for the initial right point, then one per iteration.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(events, 3);
}

#[test]
fn assume_worse_excludes_point_from_best() {
    // Init evaluates ~3.82 and ~6.18; iteration 1 evaluates ~2.36, which is
    // better but is marked AssumeWorse.
    let mut events = 0;
    let observer = |_: &Event<'_, Infallible>| {
        events += 1;
        (events == 2).then_some(Action::AssumeWorse)
    };

    let config = Config::new(1, 1e-12, 1e-12).unwrap();
    let solution =
        minimize(&identity, [0.0, 10.0], &config, observer).expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_relative_eq!(solution.x, 3.819_660_1, epsilon = 1e-5);
}

#[test]
fn events_report_best_point_as_other() {
    let mut others = Vec::new();
    let observer = |event: &Event<'_, Infallible>| {
        others.push(event.other());
        None
    };

    let config = Config::new(2, 1e-12, 1e-12).unwrap();
    minimize(&identity, [0.0, 10.0], &config, observer).expect("should complete");

    // The first loop point (~2.36) becomes best, so the second loop event reports it.
    assert_eq!(others.len(), 3);
    assert_relative_eq!(others[1].x, others[0].x);
    assert!(others[2].x < others[1].x);
}

#[test]
fn failures_recover_with_assume_worse() {
    let objective = partial(2.0, |x| x <= 5.0);

    let solution = minimize(
        &objective,
        [0.0, 10.0],
        &Config::default(),
        assume_worse_on_failure,
    )
    .expect("should recover");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}

#[test]
fn left_init_failure_recovers_with_assume_worse() {
    // The left interior point (~3.82) fails, the right (~6.18) succeeds.
    let objective = partial(8.0, |x| x >= 5.0);

    let solution = minimize(
        &objective,
        [0.0, 10.0],
        &Config::default(),
        assume_worse_on_failure,
    )
    .expect("should recover");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 8.0, epsilon = 1e-6);
}

#[test]
fn failure_without_action_errors() {
    let objective = partial(2.0, |x| x <= 5.0);

    let result = minimize_unobserved(&objective, [0.0, 10.0], &Config::default());

    assert!(matches!(result, Err(Error::Objective(_))));
}

#[test]
fn both_init_failures_notify_then_error() {
    let objective = partial(2.0, |_| false);

    let mut notified = false;
    let observer = |event: &Event<'_, Undefined>| {
        notified |= matches!(event, Event::Failed { .. });
        Some(Action::AssumeWorse)
    };

    let result = minimize(&objective, [0.0, 10.0], &Config::default(), observer);

    assert!(matches!(result, Err(Error::Objective(_))));
    assert!(notified, "observer should hear about the failure");
}
