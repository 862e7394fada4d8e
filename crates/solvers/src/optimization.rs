//! Solvers for scalar optimization problems.
//!
//! An [`Objective`] maps a single real variable to a scalar value. Solvers in
//! this module search a bounded interval for the point that minimizes or
//! maximizes that value.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions

mod objective;

pub use objective::Objective;

pub mod golden_section;
