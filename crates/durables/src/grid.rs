use std::ops::Deref;

use thiserror::Error;

/// A discretized state grid.
///
/// Grids are non-empty, finite, non-negative, and strictly increasing.
/// These invariants are checked on construction, so solvers can index and
/// compare grid values without re-validating them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Vec<f64>);

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid must have at least one point")]
    Empty,

    #[error("grid value at index {index} is not finite")]
    NotFinite { index: usize },

    #[error("grid value at index {index} is negative")]
    Negative { index: usize },

    #[error("grid value at index {index} does not exceed its predecessor")]
    NotIncreasing { index: usize },

    #[error("grid bounds [{min}, {max}] are invalid")]
    Bounds { min: f64, max: f64 },

    #[error("grid spacing exponent must be finite and positive, got {0}")]
    Phi(f64),
}

impl Grid {
    /// Creates a grid from explicit values.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] naming the first value that breaks an invariant.
    pub fn new(values: Vec<f64>) -> Result<Self, GridError> {
        if values.is_empty() {
            return Err(GridError::Empty);
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NotFinite { index });
            }
            if value < 0.0 {
                return Err(GridError::Negative { index });
            }
            if index > 0 && value <= values[index - 1] {
                return Err(GridError::NotIncreasing { index });
            }
        }

        Ok(Self(values))
    }

    /// Creates a grid of `len` points from `min` to `max`, denser near `min`.
    ///
    /// Each point closes a `1 / (len - i)^phi` share of the remaining distance
    /// to `max`, so `phi == 1` gives an evenly spaced grid and larger `phi`
    /// clusters points toward `min`. The last point is exactly `max`.
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero, the bounds are not finite with
    /// `0 <= min < max` (or `min == max` for a single point), `phi` is not
    /// positive, or the spacing collapses under rounding.
    pub fn nonlinear(min: f64, max: f64, len: usize, phi: f64) -> Result<Self, GridError> {
        if len == 0 {
            return Err(GridError::Empty);
        }
        let single = len == 1 && min == max;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || !(min < max || single) {
            return Err(GridError::Bounds { min, max });
        }
        if !phi.is_finite() || phi <= 0.0 {
            return Err(GridError::Phi(phi));
        }

        let mut values = Vec::with_capacity(len);
        values.push(min);
        for i in 1..len {
            let prev = values[i - 1];
            #[allow(clippy::cast_precision_loss)]
            let remaining = (len - i) as f64;
            values.push(prev + (max - prev) / remaining.powf(phi));
        }

        Self::new(values)
    }

    /// Returns the grid values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Grid {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Grid {
    type Error = GridError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
