use thiserror::Error;

use super::bracket::INV_PHI;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the bracket width.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance on the bracket width.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the number of shrink iterations that narrow a bracket of
    /// `width` down to `tol`.
    ///
    /// Each iteration scales the width by `1/φ`, so this is
    /// `ceil(ln(tol / width) / ln(1/φ))`, or zero if the bracket is already
    /// within `tol`.
    #[must_use]
    pub fn iters_to_width(width: f64, tol: f64) -> usize {
        if tol <= 0.0 || width.is_nan() || width <= tol {
            return 0;
        }
        let iters = ((tol / width).ln() / INV_PHI.ln()).ceil();
        if iters.is_finite() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let iters = iters as usize;
            iters
        } else {
            0
        }
    }

    /// Returns true if an interval `[left, right]` is narrow enough to stop.
    pub(super) fn accepts(&self, left: f64, right: f64) -> bool {
        let mid = 0.5 * (left + right);
        right - left <= self.x_abs_tol + self.x_rel_tol * mid.abs()
    }
}
