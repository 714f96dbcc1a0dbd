//! Core traits shared by the Bisect crates.
//!
//! This crate defines the abstractions that solvers and front ends build on:
//!
//! - [`Function`] — a scalar function of one real variable that may fail
//! - [`Infallible`] and [`Fallible`] — adapters that turn closures into functions
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function, Infallible, fallible, infallible};
pub use observer::Observer;
