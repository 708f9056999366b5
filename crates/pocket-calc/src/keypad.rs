//! Calculator keypad
//!
//! Visual feedback: every button on the pad maps to exactly one
//! [`KeypadAction`], and every action maps to one engine handler.
//!
//! Layout:
//! ```text
//! [ AC ] [ C ] [ ± ] [ / ]
//! [ 7  ] [ 8 ] [ 9 ] [ * ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [ 0  ] [ . ] [ = ]
//! ```

use crate::core::Operation;

/// Actions that keypad buttons perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Select an operator
    Operator(Operation),
    /// Resolve the pending operator
    Equals,
    /// Flip the sign of the entry
    ToggleSign,
    /// Blank the entry only
    ClearEntry,
    /// Reset everything
    ClearAll,
    /// Append a decimal point
    DecimalPoint,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::DecimalPoint => ".".to_string(),
        }
    }

    /// Returns the value carried by the button, if any
    ///
    /// Digit buttons carry their digit, operator buttons their symbol.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        match self {
            Self::Digit(d) => Some(d.to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }

    /// Returns the element id for this action's button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Operator(op) => format!("btn-{}", op_name(*op)),
            Self::Equals => "equal".to_string(),
            Self::ToggleSign => "sign".to_string(),
            Self::ClearEntry => "clear".to_string(),
            Self::ClearAll => "all-clear".to_string(),
            Self::DecimalPoint => "dot".to_string(),
        }
    }

    /// Returns the button class shared by a group of buttons, if any
    #[must_use]
    pub const fn class(&self) -> Option<&'static str> {
        match self {
            Self::Digit(_) => Some(NUMPAD_CLASS),
            Self::Operator(_) => Some(OPERATOR_CLASS),
            _ => None,
        }
    }
}

/// Class carried by every digit button
pub const NUMPAD_CLASS: &str = "numpad";

/// Class carried by every operator button
pub const OPERATOR_CLASS: &str = "operator";

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }
}

/// Keypad layout definition
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard pocket calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{ClearAll, ClearEntry, DecimalPoint, Digit, Equals, ToggleSign};

        let buttons = vec![
            // Row 0: AC C ± /
            KeypadButtonDef::new(ClearAll, 0, 0),
            KeypadButtonDef::new(ClearEntry, 0, 1),
            KeypadButtonDef::new(ToggleSign, 0, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Divide), 0, 3),
            // Row 1: 7 8 9 *
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Add), 3, 3),
            // Row 4: 0 . =
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(DecimalPoint, 4, 1),
            KeypadButtonDef::new(Equals, 4, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its face label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.label() == label)
    }

    /// Processes a button click and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}
