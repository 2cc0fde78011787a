#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Deskcalc, the engine of a button driven desk calculator.
//!
//! The calculator is fed one button label at a time and exposes a single
//! line of text, the display. The easiest way to use this crate is with
//! [`Calculator::press_all`](struct.Calculator.html#method.press_all):
//!
//! ```
//! use deskcalc::Calculator;
//!
//! let mut calculator = Calculator::new();
//! assert_eq!(calculator.press_all(&["1", "0", "0", "+", "2", "0", "0", "="]), "300");
//! ```
//!
//! Buttons can also be pressed one by one with
//! [`Calculator::press`](struct.Calculator.html#method.press). The `Copy`
//! button is the only one producing an [`Effect`](enum.Effect.html), the
//! text to put on the clipboard:
//!
//! ```
//! use deskcalc::{Calculator, Effect};
//!
//! let mut calculator = Calculator::new();
//! calculator.press("4");
//! calculator.press("1/x");
//! assert_eq!(calculator.display(), "0.25");
//! assert_eq!(calculator.press("Copy"), Some(Effect::Copy("0.25".into())));
//! ```
//!
//! [`Calculator::press_all`](struct.Calculator.html#method.press_all) drops
//! effects, so a `Copy` inside its sequence never reaches the clipboard.
//! Press `Copy` on its own to get the text:
//!
//! ```
//! use deskcalc::{Calculator, Effect};
//!
//! let mut calculator = Calculator::new();
//! assert_eq!(calculator.press_all(&["9", "√x", "Copy"]), "3");
//! assert_eq!(calculator.press("Copy"), Some(Effect::Copy("3".into())));
//! ```
//!
//! # Buttons
//!
//! The calculator understands the following labels:
//!
//! - digits `0` to `9` and the decimal point `.`;
//! - the binary operators `+`, `–` (an EN DASH), `×` and `÷`, and `=`;
//! - `AC` to clear, `±` to negate, `%` to divide by a hundred;
//! - the functions `x^2`, `x^3`, `e^x`, `10^x`, `x!`, `1/x`, `√x`, `∛x`,
//!   `ln`, `log10`, `sin`, `cos`, `tan`, `sinh`, `cosh`, `tanh`;
//! - the constants `e` and `π`, a uniform random number `Rand`, and `Copy`.
//!
//! Any other label is ignored. Keyboard events can be turned into labels
//! with [`label_for_key`](fn.label_for_key.html).
//!
//! # Evaluation rules
//!
//! There is no operator precedence: pressing an operator applies the pending
//! one, so `2 + 3 × 4 =` gives `20`. Pressing `=` again repeats the last
//! operation with the same right operand. Functions apply immediately to the
//! displayed value and leave the pending operator in place.
//!
//! Dividing by zero or leaving the domain of a function shows `Error`.
//! Until a digit, `.` or `AC` is pressed every other button is ignored.
//! Infinities and `NaN` are not errors, they are shown as `Infinity`,
//! `-Infinity` and `NaN`.
//!
//! # Technical details
//!
//! All computations are done with `f64`. Whole results are shown without a
//! fractional part, other results with the shortest digits reading back to
//! the same value, see [`format_result`](fn.format_result.html).

#[macro_use]
extern crate lazy_static;

mod engine;
mod error;
mod format;
mod keys;
mod lexer;
mod token;
mod util;

pub use engine::{Calculator, Effect, State, ERROR, NOT_IMPLEMENTED};
pub use error::Error;
pub use format::{format_result, parse_display};
pub use keys::{label_for_key, Key};
pub use lexer::{classify, LABELS};
pub use token::{Label, Op};
pub use util::{Function, FUNCTIONS};
