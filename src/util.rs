use crate::error::Error;
use hashbrown::HashMap;
use std::f64::consts::{E, PI};

/// A unary calculator function. Domain violations are reported as errors,
/// the engine turns them into the `Error` display.
pub type Function = fn(f64) -> Result<f64, Error>;

lazy_static! {
    /// The deterministic unary functions, keyed by button text. `Rand` and
    /// `Copy` are handled by the engine itself.
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::<&'static str, Function>::new();
        map.insert("x^2", |v| Ok(libm::pow(v, 2.0)));
        map.insert("x^3", |v| Ok(libm::pow(v, 3.0)));
        map.insert("e^x", |v| Ok(v.exp()));
        map.insert("10^x", |v| Ok(libm::pow(10.0, v)));
        map.insert("x!", factorial);
        map.insert("ln", |v| positive(v, "ln").map(f64::ln));
        map.insert("log10", |v| positive(v, "log10").map(f64::log10));
        map.insert("1/x", reciprocal);
        map.insert("√x", square_root);
        map.insert("∛x", |v| Ok(libm::cbrt(v)));
        map.insert("e", |_| Ok(E));
        map.insert("π", |_| Ok(PI));
        map.insert("sin", |v| Ok(v.sin()));
        map.insert("cos", |v| Ok(v.cos()));
        map.insert("tan", |v| Ok(v.tan()));
        map.insert("sinh", |v| Ok(v.sinh()));
        map.insert("cosh", |v| Ok(v.cosh()));
        map.insert("tanh", |v| Ok(v.tanh()));
        map.insert("±", |v| Ok(v * -1.0));
        map.insert("%", |v| Ok(v / 100.0));
        map.shrink_to_fit();
        map
    };
}

fn positive(v: f64, name: &str) -> Result<f64, Error> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(Error::Domain(format!("{} of {} is undefined", name, v)))
    }
}

fn reciprocal(v: f64) -> Result<f64, Error> {
    if v == 0.0 {
        return Err(Error::Domain("1/x of zero is undefined".into()));
    }
    Ok(1.0 / v)
}

fn square_root(v: f64) -> Result<f64, Error> {
    if v >= 0.0 {
        Ok(v.sqrt())
    } else {
        Err(Error::Domain(format!("√x of {} is undefined", v)))
    }
}

/// `1·2·…·n` for a non-negative integral `v`. The product is carried in
/// `f64`, so anything past `170!` is infinite.
fn factorial(v: f64) -> Result<f64, Error> {
    // NaN fails the integral check too
    if v < 0.0 || !v.is_finite() || v.trunc() != v {
        return Err(Error::Domain(format!("x! of {} is undefined", v)));
    }
    let mut result: f64 = 1.0;
    let mut i: f64 = 1.0;
    while i <= v && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn call(name: &str, v: f64) -> Result<f64, Error> {
        FUNCTIONS[name](v)
    }

    #[test_case("x^2", 3.0 => Ok(9.0) ; "square")]
    #[test_case("x^3", -2.0 => Ok(-8.0) ; "cube keeps the sign")]
    #[test_case("e^x", 0.0 => Ok(1.0) ; "exp of zero")]
    #[test_case("10^x", 2.0 => Ok(100.0) ; "power of ten")]
    #[test_case("x!", 5.0 => Ok(120.0) ; "factorial")]
    #[test_case("x!", 0.0 => Ok(1.0) ; "factorial of zero")]
    #[test_case("ln", 1.0 => Ok(0.0) ; "ln of one")]
    #[test_case("log10", 100.0 => Ok(2.0) ; "log10 of hundred")]
    #[test_case("1/x", 4.0 => Ok(0.25) ; "reciprocal")]
    #[test_case("√x", 9.0 => Ok(3.0) ; "square root")]
    #[test_case("∛x", -27.0 => Ok(-3.0) ; "real cube root of a negative")]
    #[test_case("e", 42.0 => Ok(E) ; "e ignores its input")]
    #[test_case("π", 42.0 => Ok(PI) ; "pi ignores its input")]
    #[test_case("sin", 0.0 => Ok(0.0) ; "sin")]
    #[test_case("cos", 0.0 => Ok(1.0) ; "cos")]
    #[test_case("tan", 0.0 => Ok(0.0) ; "tan")]
    #[test_case("sinh", 0.0 => Ok(0.0) ; "sinh")]
    #[test_case("cosh", 0.0 => Ok(1.0) ; "cosh")]
    #[test_case("tanh", 0.0 => Ok(0.0) ; "tanh")]
    #[test_case("±", 5.0 => Ok(-5.0) ; "negate")]
    #[test_case("%", 50.0 => Ok(0.5) ; "percent")]
    fn functions(name: &str, v: f64) -> Result<f64, Error> {
        call(name, v)
    }

    #[test]
    fn domain_errors() {
        let failing = [
            ("x!", -1.0),
            ("x!", 2.5),
            ("x!", f64::NAN),
            ("ln", 0.0),
            ("ln", -1.0),
            ("log10", 0.0),
            ("1/x", 0.0),
            ("1/x", -0.0),
            ("√x", -4.0),
            ("√x", f64::NAN),
        ];
        for &(name, v) in &failing {
            match call(name, v) {
                Err(Error::Domain(_)) => {}
                other => panic!("{}({}) gave {:?}", name, v, other),
            }
        }
    }

    #[test]
    fn factorial_overflows_to_infinity() {
        assert!(call("x!", 170.0).unwrap().is_finite());
        assert_eq!(call("x!", 171.0), Ok(f64::INFINITY));
        assert_eq!(call("x!", 1e10), Ok(f64::INFINITY));
    }

    #[test]
    fn factorial_of_infinity_is_undefined() {
        assert!(matches!(call("x!", f64::INFINITY), Err(Error::Domain(_))));
        assert!(matches!(call("x!", f64::NEG_INFINITY), Err(Error::Domain(_))));
    }
}
