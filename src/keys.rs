use crate::token::{Label, Op};

/// A keyboard event, as seen by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Enter or Return
    Enter,
    /// Ctrl+C, or Cmd+C on macOS
    Copy,
}

/// Map a keyboard event to the button it stands for.
///
/// # Examples
///
/// ```
/// # use deskcalc::{label_for_key, Key, Label, Op};
/// assert_eq!(label_for_key(Key::Char('-')), Some(Label::Binary(Op::Subtract)));
/// assert_eq!(label_for_key(Key::Enter), Some(Label::Equals));
/// assert_eq!(label_for_key(Key::Char('x')), None);
/// ```
pub fn label_for_key(key: Key) -> Option<Label> {
    let c = match key {
        Key::Enter => return Some(Label::Equals),
        Key::Copy => return Some(Label::Copy),
        Key::Char(c) => c,
    };

    match c {
        '0'..='9' => Some(Label::Digit(c as u8 - b'0')),
        '.' => Some(Label::Point),
        '+' => Some(Label::Binary(Op::Add)),
        '-' => Some(Label::Binary(Op::Subtract)),
        '*' => Some(Label::Binary(Op::Multiply)),
        '/' => Some(Label::Binary(Op::Divide)),
        '=' => Some(Label::Equals),
        '%' => Label::unary("%"),
        'c' | 'C' => Some(Label::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Key::Char('7') => Some(Label::Digit(7)) ; "digit")]
    #[test_case(Key::Char('.') => Some(Label::Point) ; "point")]
    #[test_case(Key::Char('+') => Some(Label::Binary(Op::Add)) ; "plus")]
    #[test_case(Key::Char('-') => Some(Label::Binary(Op::Subtract)) ; "hyphen is minus")]
    #[test_case(Key::Char('*') => Some(Label::Binary(Op::Multiply)) ; "star")]
    #[test_case(Key::Char('/') => Some(Label::Binary(Op::Divide)) ; "slash")]
    #[test_case(Key::Char('=') => Some(Label::Equals) ; "equals key")]
    #[test_case(Key::Enter => Some(Label::Equals) ; "enter")]
    #[test_case(Key::Char('%') => Some(Label::Unary("%")) ; "percent")]
    #[test_case(Key::Char('C') => Some(Label::Clear) ; "upper case clear")]
    #[test_case(Key::Char('c') => Some(Label::Clear) ; "lower case clear")]
    #[test_case(Key::Copy => Some(Label::Copy) ; "copy shortcut")]
    #[test_case(Key::Char(' ') => None ; "space")]
    #[test_case(Key::Char('–') => None ; "en dash is not a key")]
    fn mapping(key: Key) -> Option<Label> {
        label_for_key(key)
    }
}
