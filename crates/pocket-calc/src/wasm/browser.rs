//! Browser WASM bindings for the calculator
//!
//! Binds the engine to the real page: the display surfaces are DOM
//! elements, and [`BrowserCalculator::attach`] registers click listeners on
//! every keypad button the way the page's own startup does.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlButtonElement};

use crate::config::CalculatorConfig;
use crate::core::{CalcError, Calculator};
use crate::display::DisplaySurface;
use crate::keypad::{NUMPAD_CLASS, OPERATOR_CLASS};

/// Display surface backed by a page element's text content
#[derive(Debug, Clone)]
pub struct ElementSurface {
    id: String,
    element: Element,
}

impl ElementSurface {
    /// Looks up the element with the given ID
    pub fn bind(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| js_err(&CalcError::MissingSurface(id.to_string())))?;
        Ok(Self {
            id: id.to_string(),
            element,
        })
    }
}

impl DisplaySurface for ElementSurface {
    fn name(&self) -> &str {
        &self.id
    }

    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn write(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

type SharedCalculator = Rc<RefCell<Calculator<ElementSurface>>>;

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: SharedCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the default `number` and `equation` elements
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::with_config_json("{}")
    }

    /// Binds using a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = CalculatorConfig::from_json(json).map_err(|e| js_err(&e))?;
        let document = document()?;
        let number = ElementSurface::bind(&document, &config.number_surface)?;
        let equation = ElementSurface::bind(&document, &config.equation_surface)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Calculator::with_config(
                number, equation, &config,
            ))),
        })
    }

    /// Registers click listeners on every keypad button of the page
    ///
    /// `.numpad` and `.operator` buttons are found by class; equals, sign,
    /// clear, all-clear and decimal point by their IDs.
    pub fn attach(&self) -> Result<(), JsValue> {
        let document = document()?;

        for button in buttons_with_class(&document, NUMPAD_CLASS)? {
            on_button_click(&button, &self.inner, |calc, button| {
                calc.digit_entry(&button.value());
            })?;
        }

        for button in buttons_with_class(&document, OPERATOR_CLASS)? {
            on_button_click(&button, &self.inner, |calc, button| {
                let glyph = button.text_content().unwrap_or_default();
                calc.operator_select(&button.value(), &glyph);
            })?;
        }

        let by_id: [(&str, fn(&mut Calculator<ElementSurface>)); 5] = [
            ("equal", Calculator::equals),
            ("sign", Calculator::toggle_sign),
            ("all-clear", Calculator::clear_all),
            ("clear", Calculator::clear_entry),
            ("dot", Calculator::add_decimal_point),
        ];
        for (id, handler) in by_id {
            let element = document
                .get_element_by_id(id)
                .ok_or_else(|| js_err(&CalcError::UnknownButton(id.to_string())))?;
            let calc = Rc::clone(&self.inner);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                handler(&mut calc.borrow_mut());
            });
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        console::log_1(&"Calculator listeners attached".into());
        Ok(())
    }

    /// Enters a pressed digit
    #[wasm_bindgen(js_name = digitEntry)]
    pub fn digit_entry(&self, pressed: &str) {
        self.inner.borrow_mut().digit_entry(pressed);
    }

    /// Selects an operator by symbol, tracing with the given glyph
    #[wasm_bindgen(js_name = operatorSelect)]
    pub fn operator_select(&self, symbol: &str, glyph: &str) {
        self.inner.borrow_mut().operator_select(symbol, glyph);
    }

    /// Resolves the pending operator
    pub fn equals(&self) {
        self.inner.borrow_mut().equals();
    }

    /// Flips the sign of the entry
    #[wasm_bindgen(js_name = toggleSign)]
    pub fn toggle_sign(&self) {
        self.inner.borrow_mut().toggle_sign();
    }

    /// Blanks the entry
    #[wasm_bindgen(js_name = clearEntry)]
    pub fn clear_entry(&self) {
        self.inner.borrow_mut().clear_entry();
    }

    /// Resets everything
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self) {
        self.inner.borrow_mut().clear_all();
    }

    /// Appends a decimal point
    #[wasm_bindgen(js_name = addDecimalPoint)]
    pub fn add_decimal_point(&self) {
        self.inner.borrow_mut().add_decimal_point();
    }

    /// Current state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.inner.borrow().state()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Attaches a click listener that hands the clicked button to `handler`
fn on_button_click(
    button: &HtmlButtonElement,
    calc: &SharedCalculator,
    handler: fn(&mut Calculator<ElementSurface>, &HtmlButtonElement),
) -> Result<(), JsValue> {
    let calc = Rc::clone(calc);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let clicked = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlButtonElement>().ok());
        if let Some(clicked) = clicked {
            handler(&mut calc.borrow_mut(), &clicked);
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Collects the buttons carrying a class
fn buttons_with_class(document: &Document, class: &str) -> Result<Vec<HtmlButtonElement>, JsValue> {
    let nodes = document.query_selector_all(&format!(".{class}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlButtonElement>().ok())
        .collect())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

fn js_err(err: &CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
