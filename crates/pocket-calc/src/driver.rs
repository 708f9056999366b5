//! Unified Calculator Driver
//!
//! Write the click sequence once, run it against every front end.
//!
//! Balanced testing: the same specifications drive the in-memory engine
//! and the mock DOM page.

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Calculator, CalculatorState, Operation, Total};
use crate::display::{DisplaySurface, MemorySurface};
use crate::keypad::Keypad;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, MemoryDriver};
///
/// let mut driver = MemoryDriver::new();
/// driver.press_all(&["7", "+", "3", "="]).unwrap();
/// assert_eq!(driver.number_text(), "10");
/// assert_eq!(driver.equation_text(), "7+3");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with the given face label (or operator symbol)
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the running value surface text
    fn number_text(&self) -> String;

    /// Gets the equation trace surface text
    fn equation_text(&self) -> String;

    /// Gets a snapshot of the engine state
    fn state(&self) -> CalculatorState;

    /// Presses several buttons in order
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }
}

/// Driver over in-memory surfaces
#[derive(Debug)]
pub struct MemoryDriver {
    calculator: Calculator<MemorySurface>,
    keypad: Keypad,
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        let number = MemorySurface::new(&config.number_surface);
        let equation = MemorySurface::new(&config.equation_surface);
        Self {
            calculator: Calculator::with_config(number, equation, config),
            keypad: Keypad::new(),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<MemorySurface> {
        &self.calculator
    }

    /// Returns a mutable reference to the calculator
    pub fn calculator_mut(&mut self) -> &mut Calculator<MemorySurface> {
        &mut self.calculator
    }
}

impl CalculatorDriver for MemoryDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let action = self
            .keypad
            .find_button_by_label(label)
            .map(|btn| btn.action)
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        self.calculator.handle(action);
        Ok(())
    }

    fn number_text(&self) -> String {
        self.calculator.number().text()
    }

    fn equation_text(&self) -> String {
        self.calculator.equation().text()
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }
}

// ===== Unified Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies one operation per operator, each from a clean slate
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    let cases: [(&[&str], &str, &str); 4] = [
        (&["7", "+", "3", "="], "10", "7+3"),
        (&["1", "0", "-", "4", "="], "6", "10-4"),
        (&["6", "*", "7", "="], "42", "6*7"),
        (&["2", "0", "/", "8", "="], "2.5", "20/8"),
    ];
    for (labels, number, equation) in cases {
        driver.press("AC")?;
        driver.press_all(labels)?;
        assert_eq!(driver.number_text(), number);
        assert_eq!(driver.equation_text(), equation);
    }
    driver.press("AC")
}

/// Verifies an operator pressed while another is pending
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press("AC")?;

    driver.press_all(&["5", "*"])?;
    let state = driver.state();
    assert_eq!(state.pending_total, Some(Total::Number(5.0)));
    assert!(driver.number_text().is_empty());

    driver.press_all(&["4", "*"])?;
    let state = driver.state();
    assert_eq!(state.pending_total, Some(Total::Number(20.0)));
    assert_eq!(state.pending_operator, Some(Operation::Multiply));
    assert!(state.pending_clear);
    assert_eq!(driver.equation_text(), "5*4");

    driver.press_all(&["2", "="])?;
    assert_eq!(driver.number_text(), "40");
    assert_eq!(driver.equation_text(), "20*2");
    driver.press("AC")
}

/// Verifies that missing operands are ignored
pub fn verify_missing_operands<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press("AC")?;

    driver.press_all(&["+", "="])?;
    assert!(driver.state().is_idle());

    driver.press_all(&["9", "="])?;
    assert_eq!(driver.number_text(), "9");
    assert!(driver.equation_text().is_empty());
    driver.press("AC")
}

/// Verifies divide by zero yields 0
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press("AC")?;
    driver.press_all(&["5", "/", "0", "="])?;
    assert_eq!(driver.number_text(), "0");
    assert_eq!(driver.state().pending_total, Some(Total::Number(0.0)));
    driver.press("AC")
}

/// Verifies the decimal point and sign buttons on the entry
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press("AC")?;

    driver.press_all(&[".", ".", "5"])?;
    assert_eq!(driver.number_text(), "0.5");

    driver.press("±")?;
    assert_eq!(driver.number_text(), "-0.5");
    driver.press("±")?;
    assert_eq!(driver.number_text(), "0.5");

    driver.press("C")?;
    assert!(driver.number_text().is_empty());
    driver.press("AC")
}

/// Verifies that all-clear wipes both surfaces and the state
pub fn verify_clear_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_all(&["8", "-", "3", "="])?;
    driver.press("AC")?;
    assert!(driver.number_text().is_empty());
    assert!(driver.equation_text().is_empty());
    assert!(driver.state().is_idle());
    Ok(())
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_chained_operations(driver)?;
    verify_missing_operands(driver)?;
    verify_divide_by_zero(driver)?;
    verify_entry_editing(driver)?;
    verify_clear_all(driver)
}
