//! WASM Driver - Unified Testing Interface
//!
//! This module implements the CalculatorDriver trait over the mock DOM, so
//! the same click specifications run against the page-shaped front end.
//!
//! Balanced testing: clicks go through element routing, not straight into
//! the engine.

use std::cell::RefCell;
use std::rc::Rc;

use super::dom::{DomEvent, DomSurface, MockDom};
use super::keypad::{route_element, MockDomKeypadExt};
use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Calculator, CalculatorState};
use crate::display::DisplaySurface;
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;

/// WASM Driver wrapping the calculator and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: Calculator<DomSurface>,
    /// Mock DOM shared with the calculator's surfaces
    dom: Rc<RefCell<MockDom>>,
    /// Button layout
    keypad: Keypad,
}

impl WasmDriver {
    /// Creates a WASM driver with the default configuration
    pub fn new() -> CalcResult<Self> {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a WASM driver with a custom configuration
    pub fn with_config(config: &CalculatorConfig) -> CalcResult<Self> {
        let keypad = Keypad::new();
        let mut page = MockDom::calculator(config);
        page.add_keypad(&keypad);
        Self::from_parts(page, keypad, config)
    }

    /// Creates a WASM driver over an existing page
    ///
    /// Fails if the page lacks either configured surface.
    pub fn with_dom(page: MockDom, config: &CalculatorConfig) -> CalcResult<Self> {
        Self::from_parts(page, Keypad::new(), config)
    }

    fn from_parts(page: MockDom, keypad: Keypad, config: &CalculatorConfig) -> CalcResult<Self> {
        let dom = Rc::new(RefCell::new(page));
        let number = DomSurface::bind(&dom, &config.number_surface)?;
        let equation = DomSurface::bind(&dom, &config.equation_surface)?;
        Ok(Self {
            calculator: Calculator::with_config(number, equation, config),
            dom,
            keypad,
        })
    }

    /// Returns the button layout used to resolve labels
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<DomSurface> {
        &self.calculator
    }

    /// Returns the shared DOM
    #[must_use]
    pub fn dom(&self) -> Rc<RefCell<MockDom>> {
        Rc::clone(&self.dom)
    }

    /// Simulates clicking the element with the given ID
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        let action = {
            let mut dom = self.dom.borrow_mut();
            dom.dispatch_event(DomEvent::click(element_id));
            let routed = dom.get_element(element_id).and_then(route_element);
            routed
        };
        let action = action.ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))?;
        self.calculator.handle(action);
        Ok(())
    }

    /// Gets the text of any element
    #[must_use]
    pub fn element_text(&self, id: &str) -> Option<String> {
        self.dom.borrow().get_element_text(id).map(str::to_string)
    }

    /// Number of events the DOM has seen
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.dom.borrow().event_history().len()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let id = self
            .keypad
            .find_button_by_label(label)
            .map(|btn| btn.id.clone())
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        self.click(&id)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignToggleTotal;
    use crate::core::{Operation, Total};
    use crate::driver::{run_full_specification, verify_chained_operations};

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new().unwrap();
        assert!(driver.number_text().is_empty());
        assert!(driver.state().is_idle());
    }

    #[test]
    fn test_wasm_driver_custom_surface_ids() {
        let config = CalculatorConfig {
            number_surface: "display".into(),
            equation_surface: "trace".into(),
            ..CalculatorConfig::default()
        };
        let mut driver = WasmDriver::with_config(&config).unwrap();
        driver.press_all(&["4", "+", "4", "="]).unwrap();
        assert_eq!(driver.element_text("display").as_deref(), Some("8"));
        assert_eq!(driver.element_text("trace").as_deref(), Some("4+4"));
    }

    #[test]
    fn test_wasm_driver_missing_surface() {
        let config = CalculatorConfig::default();
        let result = WasmDriver::with_dom(MockDom::new(), &config);
        assert!(matches!(result, Err(CalcError::MissingSurface(id)) if id == "number"));
    }

    #[test]
    fn test_wasm_driver_debug() {
        let driver = WasmDriver::new().unwrap();
        assert!(format!("{:?}", driver).contains("WasmDriver"));
    }

    #[test]
    fn test_wasm_driver_keypad_matches_page() {
        let driver = WasmDriver::new().unwrap();
        let dom = driver.dom();
        let page = dom.borrow();
        for btn in driver.keypad().buttons() {
            let elem = page.get_element(&btn.id).unwrap();
            assert_eq!(route_element(elem), Some(btn.action));
        }
    }

    // ===== Click tests =====

    #[test]
    fn test_click_by_element_id() {
        let mut driver = WasmDriver::new().unwrap();
        driver.click("btn-7").unwrap();
        driver.click("btn-times").unwrap();
        driver.click("btn-6").unwrap();
        driver.click("equal").unwrap();
        assert_eq!(driver.element_text("number").as_deref(), Some("42"));
        assert_eq!(driver.element_text("equation").as_deref(), Some("7*6"));
    }

    #[test]
    fn test_click_unknown_element() {
        let mut driver = WasmDriver::new().unwrap();
        let result = driver.click("number");
        assert!(matches!(result, Err(CalcError::UnknownButton(_))));
    }

    #[test]
    fn test_click_records_click_and_writes() {
        let mut driver = WasmDriver::new().unwrap();
        driver.click("btn-1").unwrap();
        // one click, one text change
        assert_eq!(driver.event_count(), 2);
        let dom = driver.dom();
        let history = dom.borrow();
        assert_eq!(history.event_history()[0], DomEvent::click("btn-1"));
    }

    #[test]
    fn test_press_unknown_label() {
        let mut driver = WasmDriver::new().unwrap();
        assert!(matches!(
            driver.press("sqrt"),
            Err(CalcError::UnknownButton(_))
        ));
    }

    #[test]
    fn test_operator_page_button_with_unknown_symbol_is_rejected() {
        use crate::wasm::DomElement;

        let mut driver = WasmDriver::new().unwrap();
        driver.dom().borrow_mut().register_element(
            DomElement::new("button")
                .with_id("btn-mod")
                .with_class("operator")
                .with_attr("value", "%"),
        );
        driver.press("5").unwrap();
        assert!(driver.click("btn-mod").is_err());
        assert!(driver.state().is_idle());
        assert_eq!(driver.number_text(), "5");
    }

    #[test]
    fn test_chained_state_through_dom() {
        let mut driver = WasmDriver::new().unwrap();
        driver.press_all(&["5", "*", "4", "*"]).unwrap();
        let state = driver.state();
        assert_eq!(state.pending_total, Some(Total::Number(20.0)));
        assert_eq!(state.pending_operator, Some(Operation::Multiply));
        assert_eq!(driver.equation_text(), "5*4");
    }

    #[test]
    fn test_numeric_sign_policy_through_dom() {
        let config = CalculatorConfig::default().with_sign_toggle_total(SignToggleTotal::Number);
        let mut driver = WasmDriver::with_config(&config).unwrap();
        driver.press_all(&["5", "+", "0", "=", "5", "±"]).unwrap();
        assert_eq!(driver.state().pending_total, Some(Total::Number(-5.0)));
    }

    // ===== Unified Specification Tests =====

    #[test]
    fn test_unified_chained_operations() {
        let mut driver = WasmDriver::new().unwrap();
        verify_chained_operations(&mut driver).unwrap();
    }

    #[test]
    fn test_full_specification() {
        let mut driver = WasmDriver::new().unwrap();
        run_full_specification(&mut driver).unwrap();
    }
}
