use bisect_expr::{EvalError, Expression, ParseError};
use bisect_solvers::equation::bisection;
use thiserror::Error;
use tracing::{debug, info};

use crate::{Settings, SettingsError, TraceViewer};

/// Errors that can occur when starting a solve from user settings.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("invalid expression: {0}")]
    Parse(#[from] ParseError),

    #[error("solve failed: {0}")]
    Solve(#[from] bisection::Error<EvalError>),
}

/// Owns the viewer for the most recent successful solve.
///
/// A failed [`Session::start`] leaves the previous viewer in place, so the
/// user can fix their input without losing what is on screen.
#[derive(Debug, Default)]
pub struct Session {
    viewer: Option<TraceViewer>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and solves `settings`, replacing the current viewer on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are out of range, the expression does
    /// not parse, or the solver rejects the problem.
    pub fn start(&mut self, settings: &Settings) -> Result<&mut TraceViewer, SessionError> {
        settings.validate()?;
        let expression = Expression::parse(&settings.expression)?;
        debug!(%expression, lower = settings.lower, upper = settings.upper, "starting solve");

        let solution =
            bisection::solve_unobserved(&expression, settings.bracket(), &settings.config())?;
        info!(
            %expression,
            status = ?solution.status,
            root = solution.root,
            iters = solution.iters(),
            "solve finished",
        );

        Ok(self
            .viewer
            .insert(TraceViewer::new(expression.to_string(), solution)))
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&TraceViewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut TraceViewer> {
        self.viewer.as_mut()
    }
}
