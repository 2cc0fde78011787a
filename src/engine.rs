use crate::error::Error;
use crate::format::{format_result, parse_display};
use crate::lexer::classify;
use crate::token::{Label, Op};
use crate::util::FUNCTIONS;
use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Display text after a division by zero or a domain error
pub const ERROR: &str = "Error";
/// Display text for a function label missing from the function table
pub const NOT_IMPLEMENTED: &str = "Not Implemented";

/// Work the presenter has to do on behalf of the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Put the text on the host clipboard
    Copy(String),
}

/// A snapshot of the calculator registers, as returned by
/// [`Calculator::state`](struct.Calculator.html#method.state).
///
/// Numbers are compared bit for bit, so two snapshots holding `NaN` are
/// equal and `0` differs from `-0`.
#[derive(Debug, Clone)]
pub struct State {
    /// Text on the display
    pub display: String,
    /// Left operand of the pending operation, or the last result
    pub prev_number: Option<f64>,
    /// Operator waiting for its right operand
    pub prev_operator: Option<Op>,
    /// An operator was just registered, the next digit starts a new operand
    pub operator_pressed: bool,
    /// The display shows a result, the next digit starts a new operand
    pub result_displayed: bool,
    /// Right operand of the last `=`, reused by repeated `=`
    pub last_binary_number: Option<f64>,
}

impl PartialEq<Self> for State {
    fn eq(&self, other: &Self) -> bool {
        let bits = |v: Option<f64>| v.map(f64::to_bits);
        self.display == other.display
            && bits(self.prev_number) == bits(other.prev_number)
            && self.prev_operator == other.prev_operator
            && self.operator_pressed == other.operator_pressed
            && self.result_displayed == other.result_displayed
            && bits(self.last_binary_number) == bits(other.last_binary_number)
    }
}
impl Eq for State {}

/// The button driven calculator.
///
/// Buttons are pressed one at a time and the only output is the
/// [`display`](#method.display) text. There is no operator precedence:
/// every operator applies the pending one first.
///
/// # Examples
///
/// ```
/// # use deskcalc::Calculator;
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.press_all(&["2", "+", "3", "×", "4", "="]), "20");
///
/// // `=` repeats the last operation
/// calculator.press_all(&["AC", "2", "+", "3", "="]);
/// assert_eq!(calculator.press_all(&["="]), "8");
/// assert_eq!(calculator.press_all(&["="]), "11");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<R = ThreadRng> {
    display: String,
    prev_number: Option<f64>,
    prev_operator: Option<Op>,
    operator_pressed: bool,
    result_displayed: bool,
    last_binary_number: Option<f64>,
    /// Source for `Rand`
    rng: R,
}

impl Calculator {
    /// Create a calculator drawing `Rand` values from the thread local
    /// generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Calculator<R> {
    /// Create a calculator drawing `Rand` values from `rng`.
    ///
    /// # Examples
    /// ```
    /// # use deskcalc::Calculator;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut calculator = Calculator::with_rng(StdRng::seed_from_u64(7));
    /// let value: f64 = calculator.press_all(&["Rand"]).parse().unwrap();
    /// assert!((0.0..1.0).contains(&value));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self {
            display: "0".into(),
            prev_number: None,
            prev_operator: None,
            operator_pressed: false,
            result_displayed: false,
            last_binary_number: None,
            rng,
        }
    }

    /// The text currently on the display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending operation, or the last result
    pub fn prev_number(&self) -> Option<f64> {
        self.prev_number
    }

    /// Operator waiting for its right operand
    pub fn prev_operator(&self) -> Option<Op> {
        self.prev_operator
    }

    /// Right operand remembered by the last `=`
    pub fn last_binary_number(&self) -> Option<f64> {
        self.last_binary_number
    }

    /// An operator was just registered and no digit typed since
    pub fn operator_pressed(&self) -> bool {
        self.operator_pressed
    }

    /// The display shows the result of `=` or of a function
    pub fn result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Check if the display shows one of the error sentinels. Only digits,
    /// `.` and `AC` are honored in this state.
    pub fn is_error(&self) -> bool {
        self.display == ERROR || self.display == NOT_IMPLEMENTED
    }

    /// Snapshot of all the registers
    pub fn state(&self) -> State {
        State {
            display: self.display.clone(),
            prev_number: self.prev_number,
            prev_operator: self.prev_operator,
            operator_pressed: self.operator_pressed,
            result_displayed: self.result_displayed,
            last_binary_number: self.last_binary_number,
        }
    }

    /// Press the button with the given `label`. Labels outside of the
    /// calculator alphabet are ignored.
    ///
    /// Returns the effect the presenter must carry out, if any.
    pub fn press(&mut self, label: &str) -> Option<Effect> {
        match classify(label) {
            Ok(label) => self.press_label(label),
            Err(err) => {
                debug!("ignoring button: {}", err);
                None
            }
        }
    }

    /// Press every button of `labels` in order, and get the final display.
    /// Effects are dropped: a `Copy` in `labels` leaves the clipboard alone.
    pub fn press_all<I>(&mut self, labels: I) -> &str
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for label in labels {
            let _ = self.press(label.as_ref());
        }
        &self.display
    }

    /// Press an already classified button.
    pub fn press_label(&mut self, label: Label) -> Option<Effect> {
        trace!("press '{}' on display '{}'", label, self.display);
        if self.is_error() {
            self.recover(label);
            return None;
        }

        match label {
            Label::Digit(_) | Label::Point => self.input(label),
            Label::Clear => {
                self.prev_operator = None;
                self.clear();
            }
            Label::Copy => return Some(Effect::Copy(self.display.clone())),
            Label::Random => {
                let drawn: f64 = self.rng.gen();
                self.immediate(|_| Ok(drawn));
            }
            Label::Unary(name) => match FUNCTIONS.get(name) {
                Some(&function) => self.immediate(function),
                None => {
                    debug!("no function behind '{}'", name);
                    self.display = NOT_IMPLEMENTED.into();
                }
            },
            Label::Binary(op) => self.binary(op),
            Label::Equals => self.equals(),
        }
        None
    }

    /// Input while an error sentinel is displayed: a digit or `.` starts a
    /// brand new calculation, `AC` clears, anything else is dropped.
    fn recover(&mut self, label: Label) {
        match label {
            Label::Digit(_) | Label::Point => {
                self.clear();
                self.display = match label {
                    Label::Point => "0.".into(),
                    _ => label.as_str().into(),
                };
                self.operator_pressed = false;
                self.result_displayed = false;
            }
            Label::Clear => self.clear(),
            other => debug!("ignoring '{}' while showing '{}'", other, self.display),
        }
    }

    fn clear(&mut self) {
        self.display = "0".into();
        self.prev_number = None;
        self.prev_operator = None;
        self.last_binary_number = None;
    }

    fn fail(&mut self, err: &Error) {
        debug!("{}", err);
        self.display = ERROR.into();
    }

    /// Type a digit or the decimal point into the current operand
    fn input(&mut self, label: Label) {
        let fresh = self.operator_pressed || self.result_displayed;
        if self.result_displayed {
            self.prev_number = None;
            self.prev_operator = None;
        }
        if fresh {
            self.operator_pressed = false;
            self.result_displayed = false;
            self.last_binary_number = None;
            self.display = "0".into();
        }

        match label {
            Label::Point if !self.display.contains('.') => self.display.push('.'),
            Label::Point => {}
            _ if self.display == "0" => self.display = label.as_str().into(),
            _ => self.display.push_str(label.as_str()),
        }
    }

    /// Apply a unary function to the displayed value
    fn immediate<F>(&mut self, function: F)
    where
        F: FnOnce(f64) -> Result<f64, Error>,
    {
        let value = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => {
                debug!("clearing: {}", err);
                return self.clear();
            }
        };

        match function(value) {
            Ok(result) => {
                self.display = format_result(result);
                self.operator_pressed = false;
                self.result_displayed = true;
                // the pending operator, if any, stays in place
                self.prev_number = Some(result);
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Register a binary operator, applying the pending one first if its
    /// right operand has been typed.
    fn binary(&mut self, op: Op) {
        let current = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => {
                debug!("clearing: {}", err);
                return self.clear();
            }
        };

        match (self.prev_operator, self.prev_number) {
            (Some(pending), Some(left)) if !self.operator_pressed && !self.result_displayed => {
                match pending.apply(left, current) {
                    Ok(result) => {
                        self.display = format_result(result);
                        self.prev_number = Some(result);
                    }
                    Err(err) => return self.fail(&err),
                }
            }
            _ => self.prev_number = Some(current),
        }

        self.prev_operator = Some(op);
        self.operator_pressed = true;
        self.result_displayed = false;
    }

    fn equals(&mut self) {
        let current = match parse_display(&self.display) {
            Ok(value) => value,
            Err(err) => return self.fail(&err),
        };

        let (op, left) = match (self.prev_operator, self.prev_number) {
            (Some(op), Some(left)) => (op, left),
            _ => {
                self.operator_pressed = false;
                self.result_displayed = true;
                return;
            }
        };

        let right = self.last_binary_number.unwrap_or(current);
        match op.apply(left, right) {
            Ok(result) => {
                self.display = format_result(result);
                self.operator_pressed = false;
                self.result_displayed = true;
                self.prev_number = Some(result);
                self.last_binary_number = Some(right);
            }
            Err(err) => self.fail(&err),
        }
    }
}
