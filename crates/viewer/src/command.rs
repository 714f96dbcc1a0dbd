use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a stepper command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `h` for help)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not a number")]
    InvalidNumber(String),
}

/// A line of input to the interactive stepper.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    /// Print every step at once.
    Table,
    /// Print the pending settings.
    Show,
    /// Set the expression for the next restart.
    Expression(String),
    /// Set the initial bracket for the next restart.
    Bracket(f64, f64),
    Tolerance(f64),
    MaxIters(usize),
    /// Solve again with the pending settings.
    Restart,
    Help,
    Quit,
}

impl Command {
    /// Text shown for the `help` command.
    pub const HELP: &'static str = "\
commands:
  n, next, <enter>    show the next step
  p, prev             show the previous step
  f, first            jump to the first step
  l, last             jump to the last step
  t, table            print the whole trace
  s, show             print the pending settings
  e, expr <text>      set the expression, e.g. `expr cos(x) - x`
  b, bracket <a> <b>  set the initial bracket
  tol <value>         set the tolerance
  iters <n>           set the maximum number of iterations (1 to 200)
  r, restart          solve again with the pending settings
  h, help             print this help
  q, quit             exit";
}

fn number<T: FromStr>(text: &str) -> Result<T, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        let command = match name {
            "" | "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "f" | "first" => Command::First,
            "l" | "last" => Command::Last,
            "t" | "table" => Command::Table,
            "s" | "show" => Command::Show,
            "r" | "restart" => Command::Restart,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "e" | "expr" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "expr",
                        expected: "an expression",
                    });
                }
                Command::Expression(rest.to_string())
            }
            "b" | "bracket" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(a), Some(b), None) => Command::Bracket(number(a)?, number(b)?),
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "bracket",
                            expected: "two numbers",
                        });
                    }
                }
            }
            "tol" | "tolerance" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "tol",
                        expected: "a number",
                    });
                }
                Command::Tolerance(number(rest)?)
            }
            "iters" | "max-iters" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "iters",
                        expected: "a whole number",
                    });
                }
                Command::MaxIters(number(rest)?)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
