use crate::error::Error;
use crate::token::{Label, Op};

/// Every button label the calculator understands, in panel order.
pub const LABELS: [&str; 39] = [
    "x^2", "x^3", "e^x", "10^x", "AC", "±", "%", "÷", //
    "Copy", "x!", "ln", "log10", "7", "8", "9", "×", //
    "1/x", "√x", "∛x", "e", "4", "5", "6", "–", //
    "sin", "cos", "tan", "π", "1", "2", "3", "+", //
    "sinh", "cosh", "tanh", "Rand", "0", ".", "=",
];

/// Classify a button `label`.
///
/// # Examples
///
/// ```
/// # use deskcalc::{classify, Label, Op};
/// assert_eq!(classify("7"), Ok(Label::Digit(7)));
/// assert_eq!(classify("×"), Ok(Label::Binary(Op::Multiply)));
/// assert!(classify("-").is_err());
/// ```
pub fn classify(label: &str) -> Result<Label, Error> {
    let mut chars = label.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if is_digit(c) {
            // is_digit only accepts ASCII digits
            return Ok(Label::Digit(c as u8 - b'0'));
        } else if is_point(c) {
            return Ok(Label::Point);
        }
    }

    match label {
        "AC" => Ok(Label::Clear),
        "=" => Ok(Label::Equals),
        "Rand" => Ok(Label::Random),
        "Copy" => Ok(Label::Copy),
        other => Op::from_symbol(other)
            .map(Label::Binary)
            .or_else(|| Label::unary(other))
            .ok_or_else(|| Error::UnknownLabel(other.into())),
    }
}

/// Check if `c` is a digit button
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if `c` is the decimal point button
pub fn is_point(c: char) -> bool {
    c == '.'
}
