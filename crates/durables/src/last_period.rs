//! The terminal-period solver.
//!
//! With no continuation value, the last period is a one-shot problem at every
//! grid point:
//!
//! - **Keep**: consume all cash-on-hand, `c = m`. Utility is increasing in
//!   consumption, so no search is needed.
//! - **Adjust**: choose the durable purchase `d` that maximizes
//!   `u(x - d, d)` over `[min(x/2, 1e-8), min(x, n_max)]`, using an injected
//!   [`ScalarOptimizer`]. The lower bound never exceeds the upper one, so a
//!   durable cap below the floor still bounds the purchase.
//!
//! A household with no resources (`m == 0` or `x == 0`) is forced to zero
//! consumption and zero purchase. Its value is stored as
//! [`UNDEFINED_INV_VALUE`](crate::UNDEFINED_INV_VALUE) without evaluating utility.
//!
//! Grid points are independent. Both branches run in parallel over the
//! persistent income axis and sequentially over the remaining axes. Persistent
//! income does not enter terminal utility, but each income slice is still
//! written so the arrays line up with earlier periods.

mod error;
mod objective;
mod optimizer;


pub use error::SolveError;
pub use objective::{AdjustObjective, ObjectiveError, objective};
pub use optimizer::{GoldenSection, OptimizeError, ScalarOptimizer};

use std::time::Instant;

use ndarray::{ArrayViewMut3, Axis, Zip};
use rayon::prelude::*;

use crate::{Params, Solution, Utility, Value};

/// Floor on the lower bound of the durable-purchase search.
pub const D_LOW_FLOOR: f64 = 1e-8;

/// Solves period `t` as the last period of the horizon.
///
/// Uses the household [`Preferences`](crate::Preferences) in `params` and a
/// default [`GoldenSection`] search.
///
/// # Errors
///
/// See [`solve_with`].
pub fn solve(t: usize, sol: &mut Solution, params: &Params) -> Result<(), SolveError> {
    solve_with(t, sol, params, params.preferences(), &GoldenSection::default())
}

/// Solves period `t` as the last period with a given utility and optimizer.
///
/// On success, every keep- and adjust-branch array in `sol` is populated at
/// `t`. Other periods are not touched.
///
/// # Errors
///
/// Returns an error before writing anything if `t` is outside the container's
/// horizon, if the container does not match the grids in `params`, or if the
/// durable-purchase search fails at any grid point.
pub fn solve_with<U, S>(
    t: usize,
    sol: &mut Solution,
    params: &Params,
    utility: &U,
    optimizer: &S,
) -> Result<(), SolveError>
where
    U: Utility,
    S: ScalarOptimizer,
{
    check_container(t, sol, params)?;

    let start = Instant::now();
    log::debug!(
        "solving last period t={t} (Np={}, Nn={}, Nm={}, Nx={})",
        params.np(),
        params.nn(),
        params.nm(),
        params.nx(),
    );

    // Adjust is the only fallible branch; finish it before writing anything.
    let adjusted = solve_adjust(params, utility, optimizer)?;

    solve_keep(
        sol.inv_v_keep.index_axis_mut(Axis(0), t),
        sol.c_keep.index_axis_mut(Axis(0), t),
        params,
        utility,
    );

    let mut inv_v_adj = sol.inv_v_adj.index_axis_mut(Axis(0), t);
    let mut d_adj = sol.d_adj.index_axis_mut(Axis(0), t);
    let mut c_adj = sol.c_adj.index_axis_mut(Axis(0), t);
    for (i_p, slice) in adjusted.into_iter().enumerate() {
        for (i_x, choice) in slice.into_iter().enumerate() {
            inv_v_adj[[i_p, i_x]] = choice.value.inverse();
            d_adj[[i_p, i_x]] = choice.d;
            c_adj[[i_p, i_x]] = choice.c;
        }
    }

    log::debug!("solved last period t={t} in {:?}", start.elapsed());
    Ok(())
}

fn check_container(t: usize, sol: &Solution, params: &Params) -> Result<(), SolveError> {
    let periods = sol.periods();
    if t >= periods {
        return Err(SolveError::PeriodOutOfRange { t, periods });
    }

    let keep = [periods, params.np(), params.nn(), params.nm()];
    let adj = [periods, params.np(), params.nx()];
    let arrays: [(&'static str, &[usize], &[usize]); 5] = [
        ("inv_v_keep", sol.inv_v_keep.shape(), &keep[..]),
        ("c_keep", sol.c_keep.shape(), &keep[..]),
        ("inv_v_adj", sol.inv_v_adj.shape(), &adj[..]),
        ("d_adj", sol.d_adj.shape(), &adj[..]),
        ("c_adj", sol.c_adj.shape(), &adj[..]),
    ];

    for (array, found, expected) in arrays {
        if found != expected {
            return Err(SolveError::ShapeMismatch {
                array,
                expected: expected.to_vec(),
                found: found.to_vec(),
            });
        }
    }

    Ok(())
}

/// The keep-branch choice at cash-on-hand `m` and durable stock `n`.
fn keep_choice<U: Utility>(m: f64, n: f64, utility: &U) -> (f64, Value) {
    if m == 0.0 {
        return (0.0, Value::Undefined);
    }
    (m, Value::from_utility(utility.utility(m, n)))
}

fn solve_keep<U: Utility>(
    mut inv_v_keep: ArrayViewMut3<'_, f64>,
    mut c_keep: ArrayViewMut3<'_, f64>,
    params: &Params,
    utility: &U,
) {
    Zip::from(inv_v_keep.outer_iter_mut())
        .and(c_keep.outer_iter_mut())
        .par_for_each(|mut inv_v, mut c| {
            for (i_n, &n) in params.grid_n().iter().enumerate() {
                for (i_m, &m) in params.grid_m().iter().enumerate() {
                    let (consumption, value) = keep_choice(m, n, utility);
                    c[[i_n, i_m]] = consumption;
                    inv_v[[i_n, i_m]] = value.inverse();
                }
            }
        });
}

/// An adjust-branch choice at one grid point.
#[derive(Debug, Clone, Copy)]
struct AdjustChoice {
    d: f64,
    c: f64,
    value: Value,
}

impl AdjustChoice {
    const FORCED: Self = Self {
        d: 0.0,
        c: 0.0,
        value: Value::Undefined,
    };
}

/// The adjust-branch choice at total resources `x`.
fn adjust_choice<U, S>(
    x: f64,
    params: &Params,
    utility: &U,
    optimizer: &S,
) -> Result<AdjustChoice, SolveError>
where
    U: Utility,
    S: ScalarOptimizer,
{
    if x == 0.0 {
        return Ok(AdjustChoice::FORCED);
    }

    let d_high = x.min(params.n_max());
    let d_low = (x / 2.0).min(D_LOW_FLOOR).min(d_high);

    let adjust = AdjustObjective::new(utility, x);
    let d = optimizer
        .minimize(&adjust, [d_low, d_high], params.tol())
        .map_err(|source| SolveError::Search { x, source })?;

    let v = -objective(d, x, utility);
    Ok(AdjustChoice {
        d,
        c: x - d,
        value: Value::from_utility(v),
    })
}

/// Computes every adjust-branch choice, one persistent income slice per task.
fn solve_adjust<U, S>(
    params: &Params,
    utility: &U,
    optimizer: &S,
) -> Result<Vec<Vec<AdjustChoice>>, SolveError>
where
    U: Utility,
    S: ScalarOptimizer,
{
    (0..params.np())
        .into_par_iter()
        .map(|_i_p| {
            params
                .grid_x()
                .iter()
                .map(|&x| adjust_choice(x, params, utility, optimizer))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
