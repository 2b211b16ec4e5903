//! Scripted keypad session
//!
//! Presses a fixed sequence of buttons, printing the display and input
//! state after each one. With the `tui` feature the same presses are then
//! replayed as clicks on a virtual screen, and the final frame is printed.
//!
//! Run with: cargo run --example scripted_session

use padcalc::driver::{run_full_specification, CalculatorDriver, HeadlessDriver};
use padcalc::prelude::{ButtonSpec, Operation};

fn script() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec::Digit(7),
        ButtonSpec::Digit(2),
        Operation::Divide.into(),
        ButtonSpec::Digit(8),
        Operation::Equals.into(),
        Operation::Multiply.into(),
        ButtonSpec::Digit(4),
        Operation::Equals.into(),
        Operation::Subtract.into(),
        Operation::Equals.into(),
        Operation::Clear.into(),
    ]
}

fn replay<D: CalculatorDriver>(name: &str, driver: &mut D) {
    println!("{name}:");
    println!("  {:<6} {:<12} awaiting", "press", "display");
    for button in script() {
        let display = driver.press(button);
        println!(
            "  {:<6} {:<12} {}",
            button.label(),
            display,
            driver.is_awaiting_operand()
        );
    }
    println!();
}

fn main() {
    let mut headless = HeadlessDriver::new();
    replay("Headless", &mut headless);

    run_full_specification(&mut HeadlessDriver::new());
    println!("Interaction scripts passed on the headless driver");

    #[cfg(feature = "tui")]
    {
        use padcalc::driver::TuiDriver;

        let mut tui = TuiDriver::new().with_screen(40, 16);
        replay("TUI (clicks)", &mut tui);
        tui.press_all(&[ButtonSpec::Digit(9), Operation::Multiply.into()]);
        println!("{}", tui.screen_text());

        run_full_specification(&mut TuiDriver::new());
        println!("Interaction scripts passed on the TUI driver");
    }
}
