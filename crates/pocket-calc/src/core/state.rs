//! Calculator state between clicks

use serde::{Deserialize, Serialize};

use super::operations::{Operation, Total};

/// Pending operator, pending total and the pending-clear flag
///
/// `pending_operator` is only set while a total is established and before
/// the next equals or all-clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operator awaiting its second operand
    pub pending_operator: Option<Operation>,
    /// Running result of earlier operations
    pub pending_total: Option<Total>,
    /// Next entry must blank the number surface first
    pub pending_clear: bool,
}

impl CalculatorState {
    /// Creates the empty start-up state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns to the start-up state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears the pending-clear flag, returning whether it was set
    pub fn take_pending_clear(&mut self) -> bool {
        std::mem::take(&mut self.pending_clear)
    }

    /// True when nothing is pending
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending_operator.is_none() && self.pending_total.is_none() && !self.pending_clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new_is_idle() {
        let state = CalculatorState::new();
        assert!(state.is_idle());
    }

    #[test]
    fn test_state_reset() {
        let mut state = CalculatorState {
            pending_operator: Some(Operation::Add),
            pending_total: Some(Total::Number(3.0)),
            pending_clear: true,
        };
        state.reset();
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_take_pending_clear() {
        let mut state = CalculatorState::new();
        state.pending_clear = true;
        assert!(state.take_pending_clear());
        assert!(!state.pending_clear);
        assert!(!state.take_pending_clear());
    }

    #[test]
    fn test_state_serializes_to_json() {
        let state = CalculatorState {
            pending_operator: Some(Operation::Multiply),
            pending_total: Some(Total::Number(20.0)),
            pending_clear: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("Multiply"));
        let back: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
