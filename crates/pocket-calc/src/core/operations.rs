//! Arithmetic operations and the running total
//!
//! Error prevention: the four keypad operations are an exhaustive enum, so a
//! symbol either maps to one of them or is rejected up front.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::number::{format_number, text_to_number};

/// Type-safe operation enum for the four operator buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol, both the button value and its face
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Looks up an operation by its symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands
    ///
    /// Dividing by zero yields 0 rather than an infinity.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The running total held between operator presses
///
/// A total is normally numeric. Toggling the sign while no operator is
/// pending stores the toggled display text verbatim; that text keeps its
/// textual nature through later arithmetic: adding appends the operand's
/// text, while the other operations coerce it to a number first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Total {
    /// Numeric total
    Number(f64),
    /// Display text stored as the total by a sign toggle
    Text(String),
}

impl Total {
    /// Returns the total coerced to a number
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(text) => text_to_number(text),
        }
    }

    /// Combines the total with an operand
    #[must_use]
    pub fn combine(&self, op: Operation, operand: f64) -> Self {
        match (self, op) {
            (Self::Text(text), Operation::Add) => {
                Self::Text(format!("{text}{}", format_number(operand)))
            }
            _ => Self::Number(op.apply(self.as_number(), operand)),
        }
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
        }
    }
}
