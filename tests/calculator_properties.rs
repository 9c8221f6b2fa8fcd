//! Property tests for the calculator state machine.

use deskpad::calculator::{Calculator, DIVIDE_BY_ZERO, Operator, format_result};
use proptest::prelude::*;

fn digit_key() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'])
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ])
}

proptest! {
    /// No digit sequence can ever produce an entry with two decimal points.
    #[test]
    fn entry_never_has_two_decimal_points(keys in prop::collection::vec(digit_key(), 1..40)) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.enter_digit(key);
            let points = calc.display().matches('.').count();
            prop_assert!(points <= 1, "display {:?} has {} points", calc.display(), points);
        }
    }

    /// `a op b =` agrees with computing in floating point and rounding to
    /// six decimal places.
    #[test]
    fn evaluate_matches_float_arithmetic(
        a in 0i32..9999,
        b in 0i32..9999,
        op in operator(),
    ) {
        prop_assume!(!(op == Operator::Divide && b == 0));

        let mut calc = Calculator::new();
        for d in a.to_string().chars() {
            calc.enter_digit(d);
        }
        calc.choose_operator(op);
        for d in b.to_string().chars() {
            calc.enter_digit(d);
        }
        calc.evaluate();

        let expected = match op {
            Operator::Add => (a + b) as f64,
            Operator::Subtract => (a - b) as f64,
            Operator::Multiply => a as f64 * b as f64,
            Operator::Divide => a as f64 / b as f64,
        };
        let expected_display = format_result(expected);
        prop_assert_eq!(calc.display(), expected_display.as_str());
    }

    /// Dividing by zero always lands on the sentinel, and the next digit
    /// starts a fresh number.
    #[test]
    fn divide_by_zero_is_always_recoverable(a in 0u32..100_000, d in 0u32..10) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars() {
            calc.enter_digit(c);
        }
        calc.choose_operator(Operator::Divide);
        calc.enter_digit('0');
        calc.evaluate();
        prop_assert_eq!(calc.display(), DIVIDE_BY_ZERO);

        let digit = char::from_digit(d, 10).unwrap();
        calc.enter_digit(digit);
        let expected_display = digit.to_string();
        prop_assert_eq!(calc.display(), expected_display.as_str());
    }

    /// Arbitrary key sequences never panic and always leave the display
    /// as either the sentinel or a parseable number.
    #[test]
    fn display_is_always_sentinel_or_numeric(keys in prop::collection::vec(any_key(), 0..60)) {
        let mut calc = Calculator::new();
        for key in keys {
            match key {
                Key::Digit(d) => calc.enter_digit(d),
                Key::Op(op) => calc.choose_operator(op),
                Key::Percent => calc.percent(),
                Key::Evaluate => calc.evaluate(),
                Key::Clear => calc.clear_all(),
                Key::Delete => calc.delete_last(),
            }
        }

        let display = calc.display();
        prop_assert!(
            display == DIVIDE_BY_ZERO || display.parse::<f64>().is_ok(),
            "unexpected display: {:?}",
            display
        );
    }
}

#[derive(Clone, Debug)]
enum Key {
    Digit(char),
    Op(Operator),
    Percent,
    Evaluate,
    Clear,
    Delete,
}

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        digit_key().prop_map(Key::Digit),
        operator().prop_map(Key::Op),
        Just(Key::Percent),
        Just(Key::Evaluate),
        Just(Key::Clear),
        Just(Key::Delete),
    ]
}
