use crate::error::Error;
use crate::util::FUNCTIONS;
use std::fmt;
use std::str::FromStr;

/// The binary operators of the calculator. The minus sign is the EN DASH
/// (U+2013) used on the button, not an ASCII hyphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Add,
    /// `–`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

impl Op {
    /// All the operators, in button order.
    pub const ALL: [Op; 4] = [Op::Add, Op::Subtract, Op::Multiply, Op::Divide];

    /// Get the button text of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "–",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Find the operator for a button text, if any
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    /// Compute `left <op> right`.
    ///
    /// Only a zero divisor is an error: infinities and `NaN` produced by the
    /// other operators are regular results.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deskcalc::{Error, Op};
    /// assert_eq!(Op::Subtract.apply(5.0, 7.0), Ok(-2.0));
    /// assert_eq!(Op::Divide.apply(5.0, 0.0), Err(Error::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> Result<f64, Error> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide if right == 0.0 => Err(Error::DivisionByZero),
            Self::Divide => Ok(left / right),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}

/// A classified calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `0` to `9`
    Digit(u8),
    /// `.`
    Point,
    /// `AC`
    Clear,
    /// An entry of the function table, keyed by its button text
    Unary(&'static str),
    /// `Rand`
    Random,
    /// `Copy`
    Copy,
    /// `+`, `–`, `×` or `÷`
    Binary(Op),
    /// `=`
    Equals,
}

impl Label {
    /// Get the button text for this label
    pub fn as_str(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match *self {
            Self::Digit(digit) => DIGITS[usize::from(digit % 10)],
            Self::Point => ".",
            Self::Clear => "AC",
            Self::Unary(name) => name,
            Self::Random => "Rand",
            Self::Copy => "Copy",
            Self::Binary(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    /// Look up the label for a function table entry, with the `'static`
    /// name owned by the table.
    pub(crate) fn unary(name: &str) -> Option<Self> {
        FUNCTIONS
            .get_key_value(name)
            .map(|(&name, _)| Self::Unary(name))
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Error> {
        crate::lexer::classify(label)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}
