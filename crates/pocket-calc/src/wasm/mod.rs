//! WASM Frontend for the calculator
//!
//! The mock DOM and keypad routing are always available so the page
//! behaviour can be tested without a browser; the real bindings need the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, ElementSurface};
pub use dom::{DomElement, DomEvent, DomSurface, MockDom};
pub use driver::WasmDriver;
pub use keypad::{button_element, keypad_element, route_element, MockDomKeypadExt, KEYPAD_ID};
