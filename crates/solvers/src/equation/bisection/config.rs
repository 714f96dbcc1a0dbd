use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Threshold for both stopping criteria.
    ///
    /// The solver stops once the midpoint moves by less than `tolerance`
    /// between iterations or once `|f(midpoint)| < tolerance`.
    /// A non-positive tolerance is accepted and effectively disables early
    /// stopping (only an exact root still stops the loop).
    pub tolerance: f64,
    /// Maximum number of midpoint evaluations. Must be at least 1.
    pub max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroMaxIters,
}

impl Config {
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_ITERS: usize = 100;

    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxIters`] if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iters,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the iteration limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxIters`] if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_iters, 100);
        assert!((config.tolerance - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_max_iters() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIters));
    }

    #[test]
    fn new_validates() {
        assert_eq!(
            Config::new(1e-8, 20),
            Ok(Config {
                tolerance: 1e-8,
                max_iters: 20
            })
        );
        assert_eq!(Config::new(1e-8, 0), Err(ConfigError::ZeroMaxIters));
    }

    #[test]
    fn accepts_non_positive_tolerance() {
        for tolerance in [0.0, -1.0] {
            let config = Config {
                tolerance,
                ..Config::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
    }
}
