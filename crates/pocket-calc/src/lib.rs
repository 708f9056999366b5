//! Pocket Calculator - button-driven arithmetic over display surfaces
//!
//! A four-function calculator that behaves like a handheld one: digits are
//! typed into a running value surface, operators fold the entry into a
//! pending total, and equals writes the result along with a trace of the
//! last operation to a second surface.
//!
//! The engine only ever reads and writes surface text, so the same logic
//! runs over in-memory surfaces, a mock DOM page, or (with the `wasm`
//! feature) the real browser elements.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new(MemorySurface::new("number"), MemorySurface::new("equation"));
//!
//! calc.digit_entry("1");
//! calc.digit_entry("2");
//! calc.operator_select("/", "/");
//! calc.digit_entry("4");
//! calc.equals();
//!
//! assert_eq!(calc.number().text(), "3");
//! assert_eq!(calc.equation().text(), "12/4");
//! ```

// Allow common test patterns in tests
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, SignToggleTotal};
    pub use crate::core::{
        format_number, parse_float, text_to_number, CalcError, CalcResult, Calculator,
        CalculatorState, Operation, Total,
    };
    pub use crate::display::{DisplaySurface, MemorySurface};
    pub use crate::driver::{CalculatorDriver, MemoryDriver};
    pub use crate::keypad::{Keypad, KeypadAction, KeypadButtonDef};
    pub use crate::wasm::{DomElement, DomEvent, DomSurface, MockDom, WasmDriver};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::{BrowserCalculator, ElementSurface};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn calculator() -> Calculator<MemorySurface> {
        Calculator::new(MemorySurface::new("number"), MemorySurface::new("equation"))
    }

    #[test]
    fn test_prelude_imports() {
        let mut calc = calculator();
        calc.handle(KeypadAction::Digit(2));
        calc.handle(KeypadAction::Operator(Operation::Add));
        calc.handle(KeypadAction::Digit(3));
        calc.handle(KeypadAction::Equals);
        assert_eq!(calc.number().text(), "5");
    }

    #[test]
    fn test_engine_and_drivers_agree() {
        let labels = ["9", "*", "9", "-", "1", "="];

        let mut memory = MemoryDriver::new();
        memory.press_all(&labels).unwrap();

        let mut page = WasmDriver::new().unwrap();
        page.press_all(&labels).unwrap();

        assert_eq!(memory.number_text(), "80");
        assert_eq!(memory.number_text(), page.number_text());
        assert_eq!(memory.equation_text(), page.equation_text());
        assert_eq!(memory.state(), page.state());
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert!(text_to_number("12abc").is_nan());
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_all_operations() {
        let cases = [
            (Operation::Add, "15"),
            (Operation::Subtract, "5"),
            (Operation::Multiply, "50"),
            (Operation::Divide, "2"),
        ];
        for (op, expected) in cases {
            let mut calc = calculator();
            calc.digit_entry("1");
            calc.digit_entry("0");
            calc.operator_select(op.symbol(), op.symbol());
            calc.digit_entry("5");
            calc.equals();
            assert_eq!(calc.number().text(), expected, "{op:?}");
        }
    }

    #[test]
    fn test_config_round_trip_through_json() {
        let config = CalculatorConfig::from_json(r#"{"sign_toggle_total":"number"}"#).unwrap();
        assert_eq!(config.sign_toggle_total, SignToggleTotal::Number);
        assert_eq!(config.number_surface, "number");
    }
}
