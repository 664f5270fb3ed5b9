//! Keypad DOM Demo
//!
//! Drives the mock-DOM keypad with keyboard keys and prints what a browser
//! would show after each press.
//!
//! Run with: cargo run --example keypad_dom_demo

use keypad_calc::prelude::*;
use keypad_calc::wasm::{ACTIVE_CLASS, SELECTED_CLASS};

fn main() {
    let mut driver = WasmDriver::new();
    let feedback_ms = driver.controller().config().press_feedback_ms;

    println!("Keypad: {} buttons", driver.keypad().button_count());
    println!();
    println!("{:>10}  {:>20}  {:<12}  {}", "key", "display", "selected", "lit");

    for key in ["1", "2", "+", "7", "*", "2", "Enter", "/", "0", "=", "Escape"] {
        driver.key_down(key);

        let selected = driver.dom().ids_with_class(SELECTED_CLASS).join(",");
        let lit = driver.dom().ids_with_class(ACTIVE_CLASS).join(",");
        println!("{key:>10}  {:>20}  {selected:<12}  {lit}", driver.display_text());

        driver.tick(feedback_ms);
    }

    println!();
    println!("DOM events recorded: {}", driver.dom().event_history().len());
}
