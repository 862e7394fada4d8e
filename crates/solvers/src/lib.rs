//! Scalar optimization solvers for the durables model.
//!
//! The solvers here know nothing about households or durables. They search
//! over a single real variable and report back through an [`Observer`], which
//! callers use to log progress or steer the search away from regions where the
//! objective cannot be evaluated.

mod observer;

pub mod optimization;

pub use observer::Observer;
