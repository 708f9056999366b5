//! Mock DOM for WASM Testing
//!
//! This module provides DOM abstractions that let the calculator run against
//! a page-shaped element tree without a browser.
//!
//! Visual feedback: every text change is recorded, so tests can observe
//! what the user would have seen after each click.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult};
use crate::display::DisplaySurface;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Gets the `value` attribute a button carries
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
    }

    /// Finds this element or a descendant by ID
    pub fn find_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

/// DOM events observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Text content of an element was replaced
    TextChanged {
        /// The ID of the changed element
        element_id: String,
        /// The new text
        text: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a text change event
    #[must_use]
    pub fn text_changed(element_id: &str, text: &str) -> Self {
        Self::TextChanged {
            element_id: element_id.to_string(),
            text: text.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: two display surfaces, no keypad yet
    #[must_use]
    pub fn calculator(config: &CalculatorConfig) -> Self {
        let mut dom = Self::new();

        let equation = DomElement::new("div")
            .with_id(&config.equation_surface)
            .with_class("equation-display");

        let number = DomElement::new("div")
            .with_id(&config.number_surface)
            .with_class("number-display");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-app")
            .with_child(equation.clone())
            .with_child(number.clone());

        dom.register_element(equation);
        dom.register_element(number);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Returns every registered element carrying a class, sorted by ID
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<&DomElement> {
        let mut found: Vec<_> = self
            .elements
            .values()
            .filter(|e| e.has_class(class))
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// Dispatches an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::TextChanged { element_id, text } = &event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.set_text(text);
            }
            if let Some(node) = self.root.find_mut(element_id) {
                node.set_text(text);
            }
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        self.dispatch_event(DomEvent::text_changed(id, text));
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if parent_id == self.root.id {
            self.root.children.push(child.clone());
        } else if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }
}

/// Display surface backed by an element of a shared mock DOM
#[derive(Debug, Clone)]
pub struct DomSurface {
    dom: Rc<RefCell<MockDom>>,
    id: String,
}

impl DomSurface {
    /// Binds to the element with the given ID
    pub fn bind(dom: &Rc<RefCell<MockDom>>, id: &str) -> CalcResult<Self> {
        if dom.borrow().get_element(id).is_none() {
            return Err(CalcError::MissingSurface(id.to_string()));
        }
        Ok(Self {
            dom: Rc::clone(dom),
            id: id.to_string(),
        })
    }
}

impl DisplaySurface for DomSurface {
    fn name(&self) -> &str {
        &self.id
    }

    fn text(&self) -> String {
        self.dom
            .borrow()
            .get_element_text(&self.id)
            .unwrap_or_default()
            .to_string()
    }

    fn write(&mut self, text: &str) {
        tracing::trace!(surface = %self.id, text, "write");
        self.dom.borrow_mut().set_element_text(&self.id, text);
    }
}
