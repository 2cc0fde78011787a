//! Invariants that hold for any sequence of button presses.

use deskcalc::{parse_display, Calculator, ERROR, LABELS, NOT_IMPLEMENTED};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn calculator(seed: u64) -> Calculator<StdRng> {
    Calculator::with_rng(StdRng::seed_from_u64(seed))
}

fn labels() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(LABELS.to_vec()), 0..64)
}

/// Type `number` digit by digit
fn type_number(calculator: &mut Calculator<StdRng>, number: &str) {
    for c in number.chars() {
        calculator.press(&c.to_string());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn display_stays_well_formed(seed in any::<u64>(), labels in labels()) {
        let mut calculator = calculator(seed);
        for label in labels {
            calculator.press(label);
            let display = calculator.display();
            prop_assert!(
                display == ERROR || display == NOT_IMPLEMENTED || parse_display(display).is_ok(),
                "'{}' after '{}'", display, label
            );
            prop_assert!(display.matches('.').count() <= 1, "'{}'", display);
            prop_assert!(!(calculator.operator_pressed() && calculator.result_displayed()));
            if calculator.prev_operator().is_some() {
                prop_assert!(calculator.prev_number().is_some());
            }
        }
    }

    #[test]
    fn clear_resets_everything(seed in any::<u64>(), labels in labels()) {
        let mut calculator = calculator(seed);
        calculator.press_all(&labels);
        calculator.press("AC");
        prop_assert_eq!(calculator.display(), "0");
        prop_assert_eq!(calculator.prev_number(), None);
        prop_assert_eq!(calculator.prev_operator(), None);
        prop_assert_eq!(calculator.last_binary_number(), None);

        let once = calculator.state();
        calculator.press("AC");
        prop_assert_eq!(calculator.state(), once);
    }

    #[test]
    fn copy_changes_nothing(seed in any::<u64>(), labels in labels()) {
        let mut calculator = calculator(seed);
        calculator.press_all(&labels);
        let before = calculator.state();
        calculator.press("Copy");
        prop_assert_eq!(calculator.state(), before);
    }

    #[test]
    fn random_is_in_unit_interval(seed in any::<u64>(), labels in labels()) {
        let mut calculator = calculator(seed);
        calculator.press_all(&labels);
        calculator.press("AC");
        let value = parse_display(calculator.press_all(&["Rand"])).unwrap();
        prop_assert!((0.0..1.0).contains(&value), "{}", value);
    }

    #[test]
    fn addition_and_multiplication_commute(
        a in 0u32..1_000_000,
        b in 0u32..1_000_000,
        op in prop::sample::select(vec!["+", "×"]),
    ) {
        let mut left = calculator(0);
        type_number(&mut left, &a.to_string());
        left.press(op);
        type_number(&mut left, &b.to_string());
        left.press("=");

        let mut right = calculator(0);
        type_number(&mut right, &b.to_string());
        right.press(op);
        type_number(&mut right, &a.to_string());
        right.press("=");

        prop_assert_eq!(left.display(), right.display());
    }

    #[test]
    fn negate_twice_restores_display(n in 1u32..100_000, root in any::<bool>()) {
        let mut calculator = calculator(0);
        type_number(&mut calculator, &n.to_string());
        if root {
            calculator.press("√x");
        }
        let original = calculator.display().to_owned();
        calculator.press_all(&["±", "±"]);
        prop_assert_eq!(calculator.display(), original.as_str());
    }

    #[test]
    fn reciprocal_twice_is_within_one_ulp(whole in 1u32..100_000, fraction in 0u32..1000) {
        let text = format!("{}.{}", whole, fraction);
        let mut calculator = calculator(0);
        type_number(&mut calculator, &text);
        let original = parse_display(calculator.display()).unwrap();
        let back = parse_display(calculator.press_all(&["1/x", "1/x"])).unwrap();
        let distance = (original.to_bits() as i64 - back.to_bits() as i64).abs();
        prop_assert!(distance <= 1, "{} came back as {}", original, back);
    }
}
