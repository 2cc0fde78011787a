use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the deskcalc crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The display text could not be read back as a number
    Parse(String),
    /// A unary function was applied outside of its domain
    Domain(String),
    /// Division with a zero right operand
    DivisionByZero,
    /// A button label outside of the calculator alphabet
    UnknownLabel(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Parse(ref message) => write!(fmt, "ParseError: {}", message),
            Self::Domain(ref message) => write!(fmt, "DomainError: {}", message),
            Self::DivisionByZero => write!(fmt, "DivisionByZero: division by zero"),
            Self::UnknownLabel(ref label) => write!(fmt, "UnknownLabel: '{}'", label),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Self::Parse(_) | Self::Domain(_) | Self::DivisionByZero | Self::UnknownLabel(_) => None,
        }
    }
}
