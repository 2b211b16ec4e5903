//! Property-based tests for the input state machine

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use padcalc::core::machine::transition;
use padcalc::core::{
    ButtonSpec, DisplayEdit, Evaluator, InputMachine, InputState, Operation, ERROR_TOKEN,
    INITIAL_DISPLAY,
};

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn button_strategy() -> impl Strategy<Value = ButtonSpec> {
    prop_oneof![
        4 => digit_strategy().prop_map(ButtonSpec::Digit),
        2 => operator_strategy().prop_map(ButtonSpec::Operation),
        1 => Just(ButtonSpec::Operation(Operation::Equals)),
        1 => Just(ButtonSpec::Operation(Operation::Clear)),
    ]
}

fn state_strategy() -> impl Strategy<Value = InputState> {
    prop_oneof![Just(InputState::Accumulating), Just(InputState::AwaitingOperand)]
}

fn presses_strategy() -> impl Strategy<Value = Vec<ButtonSpec>> {
    prop::collection::vec(button_strategy(), 0..40)
}

// ===== Invariants over arbitrary press sequences =====

proptest! {
    /// The display is never empty
    #[test]
    fn prop_display_never_empty(presses in presses_strategy()) {
        let mut machine = InputMachine::new();
        for button in presses {
            machine.press(button);
            prop_assert!(!machine.display().is_empty());
        }
    }

    /// Awaiting-operand holds exactly after an arithmetic operator
    #[test]
    fn prop_awaiting_iff_last_was_operator(presses in presses_strategy()) {
        let mut machine = InputMachine::new();
        for button in presses {
            machine.press(button);
            let was_operator = matches!(
                button,
                ButtonSpec::Operation(op) if op.operator().is_some()
            );
            prop_assert_eq!(machine.is_awaiting_operand(), was_operator);
        }
    }

    /// Clear always restores the initial state
    #[test]
    fn prop_clear_resets(presses in presses_strategy()) {
        let mut machine = InputMachine::new();
        machine.press_all(presses);
        machine.press(Operation::Clear.into());
        prop_assert_eq!(machine.display(), INITIAL_DISPLAY);
        prop_assert_eq!(machine.state(), InputState::Accumulating);
    }

    /// Equals leaves either a number or the error token
    #[test]
    fn prop_equals_yields_number_or_error(presses in presses_strategy()) {
        let mut machine = InputMachine::new();
        machine.press_all(presses);
        let display = machine.press(Operation::Equals.into()).to_string();
        prop_assert!(
            display == ERROR_TOKEN
                || display.parse::<f64>().is_ok_and(f64::is_finite),
            "unexpected display {:?}",
            display
        );
        prop_assert_eq!(machine.state(), InputState::Accumulating);
    }

    /// Digit payloads outside 0..=9 never change the machine
    #[test]
    fn prop_out_of_range_digit_ignored(
        presses in presses_strategy(),
        bad in 10u8..=u8::MAX,
    ) {
        let mut machine = InputMachine::new();
        machine.press_all(presses);
        let before = (machine.display().to_string(), machine.state());
        machine.press(ButtonSpec::Digit(bad));
        prop_assert_eq!((machine.display().to_string(), machine.state()), before);
    }

    /// Headless runs are deterministic
    #[test]
    fn prop_same_presses_same_display(presses in presses_strategy()) {
        let mut a = InputMachine::new();
        let mut b = InputMachine::new();
        prop_assert_eq!(a.press_all(presses.clone()), b.press_all(presses));
    }
}

// ===== Transition table =====

proptest! {
    /// A digit after an operator replaces the display with that digit
    #[test]
    fn prop_digit_after_operator_replaces(
        presses in presses_strategy(),
        op in operator_strategy(),
        d in digit_strategy(),
    ) {
        let mut machine = InputMachine::new();
        machine.press_all(presses);
        machine.press(op.into());
        prop_assert_eq!(machine.press(ButtonSpec::Digit(d)), d.to_string());
    }

    /// A digit while accumulating appends exactly one character
    #[test]
    fn prop_digit_while_accumulating_appends(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut machine = InputMachine::new();
        let mut expected = INITIAL_DISPLAY.to_string();
        for d in digits {
            expected.push_str(&d.to_string());
            prop_assert_eq!(machine.press(ButtonSpec::Digit(d)), expected.as_str());
        }
    }

    /// Operators append their symbol from either state
    #[test]
    fn prop_operator_appends_symbol(state in state_strategy(), op in operator_strategy()) {
        let t = transition(state, op.into());
        prop_assert_eq!(t.edit, DisplayEdit::Append(op.symbol().to_string()));
        prop_assert_eq!(t.next, InputState::AwaitingOperand);
    }

    /// Typing a number and pressing equals shows that number
    #[test]
    fn prop_number_evaluates_to_itself(n in 0u32..1_000_000) {
        let mut machine = InputMachine::new();
        let n_str = n.to_string();
        let digits = n_str.bytes().map(|b| ButtonSpec::Digit(b - b'0'));
        machine.press_all(digits);
        prop_assert_eq!(machine.press(Operation::Equals.into()), n.to_string());
    }
}

// ===== Evaluator agreement =====

proptest! {
    /// Binary expressions built from two numbers match direct arithmetic
    #[test]
    fn prop_binary_expression_matches_arithmetic(
        a in 0i64..10_000,
        b in 1i64..10_000,
        op in operator_strategy(),
    ) {
        let symbol = op.symbol();
        let text = format!("{a}{symbol}{b}");
        let expected = match op {
            Operation::Add => (a + b) as f64,
            Operation::Subtract => (a - b) as f64,
            Operation::Multiply => (a * b) as f64,
            _ => a as f64 / b as f64,
        };
        let got = Evaluator::new().evaluate_str(&text).unwrap();
        prop_assert!((got - expected).abs() < 1e-9, "{} gave {}", text, got);
    }
}
