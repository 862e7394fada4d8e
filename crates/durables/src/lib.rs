//! Terminal-period solution of a household consumption and durables model.
//!
//! A household enters each period with persistent income `p`, a durable
//! stock `n`, and liquid resources. It either **keeps** its durable stock and
//! chooses consumption out of cash-on-hand `m`, or **adjusts** the stock and
//! splits total resources `x` between consumption and a new durable purchase.
//!
//! In the last period nothing is carried forward, so both choices reduce to
//! static problems solved on a discretized state space:
//!
//! - [`Grid`], [`Params`], and [`ModelConfig`] describe the state space
//! - [`Utility`] and [`Preferences`] define per-period utility
//! - [`Solution`] holds value and policy arrays for every period
//! - [`last_period::solve`] fills the terminal slice of a [`Solution`]

mod config;
mod grid;
mod params;
mod solution;
mod utility;

pub mod last_period;

pub use config::{ConfigError, GridSpec, ModelConfig};
pub use grid::{Grid, GridError};
pub use params::{Grids, Params, ParamsError};
pub use solution::{Solution, UNDEFINED_INV_VALUE, Value};
pub use utility::{Preferences, Utility};
