//! Numerical solvers for the Bisect crates.
//!
//! # Modules
//!
//! - [`equation`] — root finding for scalar equations `f(x) = 0`
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for solutions and traces so they can be
//!   exported (for example as JSON).

pub mod equation;
