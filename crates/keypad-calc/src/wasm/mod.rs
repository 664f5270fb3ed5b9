//! DOM frontend
//!
//! A mock document and page driver that run anywhere, plus the real
//! wasm-bindgen entry point behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, ACTIVE_CLASS, SELECTED_CLASS};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, WasmKeypad, DISPLAY_ID};
