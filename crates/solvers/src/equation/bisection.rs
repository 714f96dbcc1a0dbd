//! Bisection for scalar root finding.
//!
//! # Algorithm
//!
//! Bisection starts from a bracket `[a, b]` where `f(a)` and `f(b)` have
//! strictly opposite signs. Each iteration evaluates the midpoint
//! `c = (a + b) / 2`, records a [`Step`], and keeps the half of the bracket
//! that still contains the sign change. By the intermediate value theorem a
//! continuous `f` has a root in every bracket the solver visits.
//!
//! # Stopping rule
//!
//! After each step is recorded the solver stops with
//! [`Status::Converged`] if either
//!
//! - the midpoint moved by less than [`Config::tolerance`] since the previous
//!   iteration ([`Criterion::StableMidpoint`]), or
//! - `|f(c)| < tolerance` ([`Criterion::SmallResidual`]), or
//! - `f(c)` is exactly zero ([`Criterion::ExactRoot`]).
//!
//! The first iteration has no previous midpoint, so it can only stop on the
//! residual. When [`Config::max_iters`] is exhausted the solver returns the
//! last midpoint with [`Status::MaxIters`]; this is not an error.
//!
//! # Trace
//!
//! Every [`Solution`] carries the complete [`Trace`]: one [`Step`] per
//! midpoint evaluation, holding the bracket as it stood before narrowing,
//! the midpoint, `f` at the midpoint, and the absolute and relative change
//! of the midpoint. The reported root is always the midpoint of the last step.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after recording the step
//! and before checking the stopping rule. Observers can return
//! [`Action::StopEarly`] to end the solve at that step.
//!
//! # Edge cases
//!
//! - A reversed bracket `[b, a]` is reordered before solving.
//! - A NaN from `f` fails the solve with [`Error::NotANumber`].
//! - Errors from `f` fail the solve with [`Error::Evaluation`], carrying the
//!   function's error unmodified. No partial trace is returned.

mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod step;


pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Criterion, Solution, Status};
pub use step::{Step, Trace};

use bisect_core::{Function, Observer};
use tracing::debug;

use bracket::{Bounds, Bracket};

/// Finds a root of `f` in `bracket` using the bisection method.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for the stopping rule and event timing.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f` returns NaN,
/// or if `f` fails during evaluation.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [low, high] = bounds.as_array();
    let low_value = evaluate(f, low)?;
    let high_value = evaluate(f, high)?;
    let mut bracket = Bracket::new(bounds, low_value, high_value)?;

    let mut trace = Trace::with_capacity(config.max_iters.min(64));
    let mut previous = None;

    for index in 1..=config.max_iters {
        let midpoint = bracket.midpoint();
        let value = evaluate(f, midpoint)?;

        let step = Step::new(index, bracket.as_array(), midpoint, value, previous);
        trace.push(step);

        debug!(
            iter = index,
            low = step.low,
            high = step.high,
            midpoint,
            value,
            abs_error = ?step.abs_error,
            "bisection step"
        );

        let event = Event {
            step: &step,
            tolerance: config.tolerance,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(step, Status::StoppedByObserver, trace));
        }

        if let Some(criterion) = step.criterion(config.tolerance) {
            return Ok(finish(step, Status::Converged(criterion), trace));
        }

        bracket.shrink(midpoint, value);
        previous = Some(midpoint);
    }

    // Unreachable after `validate`, which guarantees at least one step.
    let Some(&last) = trace.last() else {
        return Err(ConfigError::ZeroMaxIters.into());
    };
    Ok(finish(last, Status::MaxIters, trace))
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f` returns NaN,
/// or if `f` fails during evaluation.
pub fn solve_unobserved<F>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
{
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, rejecting NaN.
fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error<F::Error>> {
    let value = f.call(x).map_err(Error::Evaluation)?;
    if value.is_nan() {
        return Err(Error::NotANumber { x });
    }
    Ok(value)
}

fn finish(last: Step, status: Status, trace: Trace) -> Solution {
    debug!(
        ?status,
        iters = trace.len(),
        root = last.midpoint,
        "bisection finished"
    );
    Solution::new(last, status, trace)
}
