use std::{fs, io, ops::RangeInclusive, path::Path, path::PathBuf};

use bisect_solvers::equation::bisection::Config;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),

    #[error("max_iters must be between 1 and 200, got {0}")]
    MaxItersOutOfRange(usize),
}

/// Inputs for one solve, as a user would enter them.
///
/// Missing fields in a settings file fall back to the defaults:
///
/// ```toml
/// expression = "exp(x) + x"
/// lower = -1.0
/// upper = 0.0
/// tolerance = 1e-6
/// max_iters = 50
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Function of `x` whose root is sought.
    pub expression: String,
    /// Lower end of the initial bracket.
    pub lower: f64,
    /// Upper end of the initial bracket.
    pub upper: f64,
    /// Stopping tolerance.
    pub tolerance: f64,
    /// Iteration budget.
    pub max_iters: usize,
}

/// Command-line values that take precedence over a settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub expression: Option<String>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iters: Option<usize>,
}

impl Settings {
    /// Range accepted for `max_iters` by the interactive tool.
    pub const MAX_ITERS_RANGE: RangeInclusive<usize> = 1..=200;

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if the text is not valid settings TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Replaces every field that has an override.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(expression) = overrides.expression {
            self.expression = expression;
        }
        if let Some(lower) = overrides.lower {
            self.lower = lower;
        }
        if let Some(upper) = overrides.upper {
            self.upper = upper;
        }
        if let Some(tolerance) = overrides.tolerance {
            self.tolerance = tolerance;
        }
        if let Some(max_iters) = overrides.max_iters {
            self.max_iters = max_iters;
        }
        self
    }

    /// Checks the values the solver itself does not constrain.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MaxItersOutOfRange`] outside `1..=200`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !Self::MAX_ITERS_RANGE.contains(&self.max_iters) {
            return Err(SettingsError::MaxItersOutOfRange(self.max_iters));
        }
        Ok(())
    }

    /// Returns the initial bracket `[lower, upper]`.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            tolerance: self.tolerance,
            max_iters: self.max_iters,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expression: "exp(x) + x".to_string(),
            lower: -1.0,
            upper: 0.0,
            tolerance: 1e-6,
            max_iters: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_the_interactive_tool() {
        let settings = Settings::default();
        assert_eq!(settings.expression, "exp(x) + x");
        assert_eq!(settings.bracket(), [-1.0, 0.0]);
        assert_eq!(settings.max_iters, 50);
        assert_relative_eq!(settings.tolerance, 1e-6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let settings = Settings::from_toml_str(
            r#"
            expression = "x^2 - 2"
            lower = 0.0
            upper = 2.0
            "#,
        )
        .expect("valid settings");
        assert_eq!(settings.expression, "x^2 - 2");
        assert_eq!(settings.bracket(), [0.0, 2.0]);
        assert_eq!(settings.max_iters, 50);
    }

    #[test]
    fn integer_bounds_load_as_floats() {
        let settings = Settings::from_toml_str("lower = -3\nupper = 2").expect("valid settings");
        assert_eq!(settings.bracket(), [-3.0, 2.0]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = Settings::from_toml_str("epsilon = 0.1");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let settings = Settings::default().with_overrides(Overrides {
            expression: Some("cos(x) - x".to_string()),
            upper: Some(1.0),
            max_iters: Some(10),
            ..Overrides::default()
        });

        assert_eq!(settings.expression, "cos(x) - x");
        assert_eq!(settings.bracket(), [-1.0, 1.0]);
        assert_eq!(settings.max_iters, 10);
        assert_relative_eq!(settings.tolerance, 1e-6);
    }

    #[test]
    fn validates_max_iters_range() {
        for max_iters in [0, 201] {
            let settings = Settings {
                max_iters,
                ..Settings::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(SettingsError::MaxItersOutOfRange(n)) if n == max_iters
            ));
        }
    }

    #[test]
    fn converts_to_solver_config() {
        let settings = Settings {
            tolerance: 1e-3,
            max_iters: 7,
            ..Settings::default()
        };
        let config = settings.config();
        assert_relative_eq!(config.tolerance, 1e-3);
        assert_eq!(config.max_iters, 7);
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Settings::load(Path::new("/nonexistent/bisect.toml"));
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn serializes_back_to_toml() {
        let text = toml::to_string(&Settings::default()).expect("serializable");
        let settings = Settings::from_toml_str(&text).expect("round trip");
        assert_eq!(settings, Settings::default());
    }
}
