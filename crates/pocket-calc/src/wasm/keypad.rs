//! Keypad buttons as DOM elements
//!
//! Builds the page's buttons from the [`Keypad`] layout and routes a clicked
//! element back to an action the same way the page wires its listeners:
//! by class for the digit pad and operators, by ID for everything else.

use super::dom::{DomElement, MockDom};
use crate::core::Operation;
use crate::keypad::{Keypad, KeypadAction, KeypadButtonDef, NUMPAD_CLASS, OPERATOR_CLASS};

/// ID of the keypad container element
pub const KEYPAD_ID: &str = "calc-keypad";

/// Creates the DOM element for one button
#[must_use]
pub fn button_element(btn: &KeypadButtonDef) -> DomElement {
    let mut elem = DomElement::new("button")
        .with_id(&btn.id)
        .with_text(&btn.label())
        .with_class("keypad-btn")
        .with_class(&format!("keypad-row-{}", btn.row))
        .with_class(&format!("keypad-col-{}", btn.col));

    if let Some(class) = btn.action.class() {
        elem = elem.with_class(class);
    }
    if let Some(value) = btn.action.value() {
        elem = elem.with_attr("value", &value);
    }
    elem
}

/// Creates a keypad container element with all buttons
#[must_use]
pub fn keypad_element(keypad: &Keypad) -> DomElement {
    keypad.buttons().iter().fold(
        DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
        |pad, btn| pad.with_child(button_element(btn)),
    )
}

/// Routes a clicked element to the action its listener performs
///
/// `.numpad` buttons enter their single-digit `value`, `.operator` buttons
/// select the operator named by their `value`. Unknown operator symbols
/// route nowhere.
#[must_use]
pub fn route_element(elem: &DomElement) -> Option<KeypadAction> {
    if elem.has_class(NUMPAD_CLASS) {
        let value = elem.value()?;
        let mut chars = value.chars();
        let digit = chars.next()?.to_digit(10)?;
        return chars
            .next()
            .is_none()
            .then_some(KeypadAction::Digit(digit as u8));
    }
    if elem.has_class(OPERATOR_CLASS) {
        return elem
            .value()
            .and_then(Operation::from_symbol)
            .map(KeypadAction::Operator);
    }
    match elem.id.as_str() {
        "equal" => Some(KeypadAction::Equals),
        "sign" => Some(KeypadAction::ToggleSign),
        "all-clear" => Some(KeypadAction::ClearAll),
        "clear" => Some(KeypadAction::ClearEntry),
        "dot" => Some(KeypadAction::DecimalPoint),
        _ => None,
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad under the calculator root
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        let root_id = self.root.id.clone();
        self.append_child(&root_id, keypad_element(keypad));

        for btn in keypad.buttons() {
            self.register_element(button_element(btn));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    // ===== Element construction tests =====

    #[test]
    fn test_button_element_digit() {
        let btn = KeypadButtonDef::new(KeypadAction::Digit(7), 1, 0);
        let elem = button_element(&btn);
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("numpad"));
        assert!(elem.has_class("keypad-row-1"));
        assert_eq!(elem.value(), Some("7"));
    }

    #[test]
    fn test_button_element_operator() {
        let btn = KeypadButtonDef::new(KeypadAction::Operator(Operation::Divide), 0, 3);
        let elem = button_element(&btn);
        assert_eq!(elem.text_content, "/");
        assert!(elem.has_class("operator"));
        assert_eq!(elem.value(), Some("/"));
    }

    #[test]
    fn test_button_element_equals_has_no_value() {
        let btn = KeypadButtonDef::new(KeypadAction::Equals, 4, 2);
        let elem = button_element(&btn);
        assert_eq!(elem.id, "equal");
        assert_eq!(elem.value(), None);
        assert!(!elem.has_class("numpad"));
    }

    #[test]
    fn test_keypad_element_children() {
        let keypad = Keypad::new();
        let elem = keypad_element(&keypad);
        assert_eq!(elem.id, KEYPAD_ID);
        assert_eq!(elem.children.len(), keypad.button_count());
    }

    // ===== Routing tests =====

    #[test]
    fn test_route_every_layout_button() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            assert_eq!(route_element(&button_element(btn)), Some(btn.action));
        }
    }

    #[test]
    fn test_route_unknown_operator_symbol() {
        let elem = DomElement::new("button")
            .with_id("btn-mod")
            .with_class("operator")
            .with_attr("value", "%");
        assert_eq!(route_element(&elem), None);
    }

    #[test]
    fn test_route_numpad_without_value() {
        let elem = DomElement::new("button").with_id("btn-x").with_class("numpad");
        assert_eq!(route_element(&elem), None);
    }

    #[test]
    fn test_route_numpad_multi_digit_value() {
        let elem = DomElement::new("button")
            .with_id("btn-00")
            .with_class("numpad")
            .with_attr("value", "00");
        assert_eq!(route_element(&elem), None);
    }

    #[test]
    fn test_route_display_element() {
        let elem = DomElement::new("div").with_id("number");
        assert_eq!(route_element(&elem), None);
    }

    // ===== MockDom extension tests =====

    #[test]
    fn test_add_keypad_registers_buttons() {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator(&CalculatorConfig::default());
        dom.add_keypad(&keypad);

        assert!(dom.get_element(KEYPAD_ID).is_some());
        for btn in keypad.buttons() {
            assert!(dom.get_element(&btn.id).is_some(), "missing {}", btn.id);
        }
        assert_eq!(dom.elements_with_class("numpad").len(), 10);
        assert_eq!(dom.elements_with_class("operator").len(), 4);
    }
}
