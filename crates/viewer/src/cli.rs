use std::path::PathBuf;

use anyhow::Context;
use bisect_viewer::{Overrides, Settings};
use clap::{ArgAction, Args, Parser, Subcommand};

/// Finds a root of f(x) by bisection and lets you step through every iteration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more detail to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solves once and prints the whole trace.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Print the solution as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Opens the interactive step-by-step viewer.
    Step {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// TOML file with default settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Function of x, e.g. "exp(x) + x".
    #[arg(short, long)]
    expr: Option<String>,

    /// Lower end of the initial bracket.
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Upper end of the initial bracket.
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Stopping tolerance.
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Maximum number of iterations (1 to 200).
    #[arg(short = 'n', long)]
    max_iters: Option<usize>,
}

impl InputArgs {
    /// Resolves settings: defaults, then the config file, then flags.
    pub fn settings(self) -> anyhow::Result<Settings> {
        let base = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        Ok(base.with_overrides(Overrides {
            expression: self.expr,
            lower: self.lower,
            upper: self.upper,
            tolerance: self.tolerance,
            max_iters: self.max_iters,
        }))
    }
}
