use thiserror::Error;

/// Errors that can occur when parsing an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("syntax error at position {position}: unexpected `{near}`")]
    Syntax { position: usize, near: String },

    #[error("expression nests more than {limit} levels deep")]
    TooDeep { limit: usize },

    #[error("unexpected trailing input: `{0}`")]
    UnconsumedInput(String),

    #[error("unknown name `{0}` (the only variable is `x`)")]
    UnknownIdentifier(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("function `{0}` must be called with an argument, e.g. `{0}(x)`")]
    MissingCall(String),
}

/// Errors that can occur when evaluating an expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("math domain error: {function}({arg})")]
    Domain { function: &'static str, arg: f64 },

    #[error("negative base {base} raised to non-integer power {exponent}")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("numerical result out of range in {0}")]
    Overflow(&'static str),
}
