//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! A [`Function`] maps a real `x` to a real value or fails with its own error
//! type. Solvers in this module drive that value toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval, with a
//!   full per-iteration trace for step-by-step replay
//!
//! [`Function`]: bisect_core::Function

pub mod bisection;
