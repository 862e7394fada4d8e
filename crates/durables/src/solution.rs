use ndarray::{Array3, Array4, ArrayView2, ArrayView3, Axis};

use crate::Params;

/// Stored inverse value at a corner where the household is forced to zero
/// consumption and utility may be undefined.
pub const UNDEFINED_INV_VALUE: f64 = 0.0;

/// The value at a grid point, recovered from its stored inverse value.
///
/// Values are stored as `-1 / v` for interpolation stability in earlier
/// periods. Zero is reserved for [`Value::Undefined`]; a true inverse value
/// is never zero because `v` is finite wherever it is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Resources are exhausted and consumption is forced to zero.
    Undefined,

    /// The stored inverse value `-1 / v`.
    InverseUtility(f64),
}

impl Value {
    /// Interprets a stored inverse value.
    #[must_use]
    pub fn from_inverse(inv_v: f64) -> Self {
        if inv_v == UNDEFINED_INV_VALUE {
            Self::Undefined
        } else {
            Self::InverseUtility(inv_v)
        }
    }

    /// The value to store for a utility level `v`.
    #[must_use]
    pub fn from_utility(v: f64) -> Self {
        Self::InverseUtility(-1.0 / v)
    }

    /// The stored representation.
    #[must_use]
    pub fn inverse(self) -> f64 {
        match self {
            Self::Undefined => UNDEFINED_INV_VALUE,
            Self::InverseUtility(inv_v) => inv_v,
        }
    }

    /// The utility level `v`, if defined.
    #[must_use]
    pub fn utility(self) -> Option<f64> {
        match self {
            Self::Undefined => None,
            Self::InverseUtility(inv_v) => Some(-1.0 / inv_v),
        }
    }
}

/// Value and policy functions for every period of the horizon.
///
/// Each array has a leading time axis. Keep-branch arrays are indexed
/// `[t, i_p, i_n, i_m]` and adjust-branch arrays `[t, i_p, i_x]`. Period
/// solvers write only their own time slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Inverse value when keeping the durable stock.
    pub inv_v_keep: Array4<f64>,

    /// Consumption when keeping the durable stock.
    pub c_keep: Array4<f64>,

    /// Inverse value when adjusting the durable stock.
    pub inv_v_adj: Array3<f64>,

    /// Durable purchase when adjusting.
    pub d_adj: Array3<f64>,

    /// Consumption when adjusting.
    pub c_adj: Array3<f64>,
}

impl Solution {
    /// Allocates zero-filled arrays sized for every period and grid in `params`.
    #[must_use]
    pub fn new(params: &Params) -> Self {
        let keep = (params.periods(), params.np(), params.nn(), params.nm());
        let adj = (params.periods(), params.np(), params.nx());

        Self {
            inv_v_keep: Array4::zeros(keep),
            c_keep: Array4::zeros(keep),
            inv_v_adj: Array3::zeros(adj),
            d_adj: Array3::zeros(adj),
            c_adj: Array3::zeros(adj),
        }
    }

    /// Number of periods the container holds.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.c_keep.len_of(Axis(0))
    }

    /// Keep-branch value at a grid point.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn keep_value(&self, t: usize, i_p: usize, i_n: usize, i_m: usize) -> Value {
        Value::from_inverse(self.inv_v_keep[[t, i_p, i_n, i_m]])
    }

    /// Adjust-branch value at a grid point.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[must_use]
    pub fn adjust_value(&self, t: usize, i_p: usize, i_x: usize) -> Value {
        Value::from_inverse(self.inv_v_adj[[t, i_p, i_x]])
    }

    /// Keep-branch consumption for period `t`, indexed `[i_p, i_n, i_m]`.
    #[must_use]
    pub fn c_keep_at(&self, t: usize) -> ArrayView3<'_, f64> {
        self.c_keep.index_axis(Axis(0), t)
    }

    /// Adjust-branch durable purchase for period `t`, indexed `[i_p, i_x]`.
    #[must_use]
    pub fn d_adj_at(&self, t: usize) -> ArrayView2<'_, f64> {
        self.d_adj.index_axis(Axis(0), t)
    }

    /// Adjust-branch consumption for period `t`, indexed `[i_p, i_x]`.
    #[must_use]
    pub fn c_adj_at(&self, t: usize) -> ArrayView2<'_, f64> {
        self.c_adj.index_axis(Axis(0), t)
    }
}
