use thiserror::Error;

use crate::{Grid, Preferences};

/// The parameter set read by the period solvers.
///
/// Holds the state grids, the horizon, and the scalars that bound and tune
/// the durable-purchase search. A `Params` is immutable once built and is
/// shared read-only by every parallel worker during a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    periods: usize,
    grid_p: Grid,
    grid_n: Grid,
    grid_m: Grid,
    grid_x: Grid,
    n_max: f64,
    tol: f64,
    preferences: Preferences,
}

/// Errors that can occur when validating a [`Params`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("horizon must contain at least one period")]
    NoPeriods,

    #[error("n_max must be finite and non-negative, got {0}")]
    NegativeDurableBound(f64),

    #[error("tol must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// The state grids of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Grids {
    /// Persistent income.
    pub p: Grid,

    /// Durable stock.
    pub n: Grid,

    /// Cash-on-hand.
    pub m: Grid,

    /// Total resources.
    pub x: Grid,
}

impl Params {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if the horizon is empty, `n_max` is negative or
    /// non-finite, or `tol` is not a finite positive number.
    pub fn new(
        periods: usize,
        grids: Grids,
        n_max: f64,
        tol: f64,
        preferences: Preferences,
    ) -> Result<Self, ParamsError> {
        if periods == 0 {
            return Err(ParamsError::NoPeriods);
        }
        if !n_max.is_finite() || n_max < 0.0 {
            return Err(ParamsError::NegativeDurableBound(n_max));
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ParamsError::InvalidTolerance(tol));
        }

        let Grids { p, n, m, x } = grids;
        Ok(Self {
            periods,
            grid_p: p,
            grid_n: n,
            grid_m: m,
            grid_x: x,
            n_max,
            tol,
            preferences,
        })
    }

    /// Number of periods `T` in the horizon.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Index of the last period, `T - 1`.
    #[must_use]
    pub fn terminal_period(&self) -> usize {
        self.periods - 1
    }

    #[must_use]
    pub fn grid_p(&self) -> &Grid {
        &self.grid_p
    }

    #[must_use]
    pub fn grid_n(&self) -> &Grid {
        &self.grid_n
    }

    #[must_use]
    pub fn grid_m(&self) -> &Grid {
        &self.grid_m
    }

    #[must_use]
    pub fn grid_x(&self) -> &Grid {
        &self.grid_x
    }

    #[must_use]
    pub fn np(&self) -> usize {
        self.grid_p.len()
    }

    #[must_use]
    pub fn nn(&self) -> usize {
        self.grid_n.len()
    }

    #[must_use]
    pub fn nm(&self) -> usize {
        self.grid_m.len()
    }

    #[must_use]
    pub fn nx(&self) -> usize {
        self.grid_x.len()
    }

    /// Upper bound on the durable purchase.
    #[must_use]
    pub fn n_max(&self) -> f64 {
        self.n_max
    }

    /// Convergence tolerance for the durable-purchase search.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}
