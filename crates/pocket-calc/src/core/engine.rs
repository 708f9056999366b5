//! Click-driven calculator engine
//!
//! Error prevention: all mutable state lives in one [`CalculatorState`]
//! owned by the engine, and the only way to change it is through the
//! handler methods below. Each handler runs to completion; none of them
//! fail. A click that lacks an operand is silently ignored.

use crate::config::{CalculatorConfig, SignToggleTotal};
use crate::core::number::{format_number, parse_float};
use crate::core::operations::{Operation, Total};
use crate::core::state::CalculatorState;
use crate::display::DisplaySurface;
use crate::keypad::KeypadAction;

/// Calculator engine over a pair of display surfaces
#[derive(Debug)]
pub struct Calculator<S> {
    /// Running value surface
    number: S,
    /// Equation trace surface
    equation: S,
    /// Pending operator, total and clear flag
    state: CalculatorState,
    /// Sign toggle policy
    sign_toggle_total: SignToggleTotal,
}

impl<S: DisplaySurface> Calculator<S> {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new(number: S, equation: S) -> Self {
        Self::with_config(number, equation, &CalculatorConfig::default())
    }

    /// Creates a calculator with a custom configuration
    #[must_use]
    pub fn with_config(number: S, equation: S, config: &CalculatorConfig) -> Self {
        Self {
            number,
            equation,
            state: CalculatorState::new(),
            sign_toggle_total: config.sign_toggle_total,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the running value surface
    #[must_use]
    pub fn number(&self) -> &S {
        &self.number
    }

    /// Returns the equation trace surface
    #[must_use]
    pub fn equation(&self) -> &S {
        &self.equation
    }

    /// Consumes the calculator, returning (number, equation)
    pub fn into_surfaces(self) -> (S, S) {
        (self.number, self.equation)
    }

    /// Routes a keypad action to its handler
    pub fn handle(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(d) => self.digit_entry(&d.to_string()),
            KeypadAction::Operator(op) => self.operator_select(op.symbol(), op.symbol()),
            KeypadAction::Equals => self.equals(),
            KeypadAction::ToggleSign => self.toggle_sign(),
            KeypadAction::ClearEntry => self.clear_entry(),
            KeypadAction::ClearAll => self.clear_all(),
            KeypadAction::DecimalPoint => self.add_decimal_point(),
        }
    }

    /// Blanks the number surface if a result is waiting to be replaced
    fn consume_pending_clear(&mut self) {
        if self.state.take_pending_clear() {
            self.number.write("");
        }
    }

    /// Appends a pressed digit (or any pressed value) to the entry
    pub fn digit_entry(&mut self, pressed: &str) {
        self.consume_pending_clear();

        match self.number.read_current() {
            Some(current) => self.number.write(&format!("{current}{pressed}")),
            None => {
                let sign = if self.number.is_negative() { "-" } else { "" };
                self.number.write(&format!("{sign}{pressed}"));
            }
        }

        tracing::debug!(pressed, number = %self.number.text(), "digit entry");
    }

    /// Selects an operator
    ///
    /// The first operator after start-up or all-clear establishes the total.
    /// An operator pressed while another is pending resolves the pending one
    /// first and traces `total glyph operand` on the equation surface, using
    /// whatever face the pressed button shows.
    pub fn operator_select(&mut self, symbol: &str, glyph: &str) {
        self.consume_pending_clear();

        let Some(display_value) = self.number.read_current() else {
            return;
        };
        let Some(op) = Operation::from_symbol(symbol) else {
            tracing::debug!(symbol, "ignoring unknown operator");
            return;
        };

        if self.state.pending_total.is_none() {
            self.state.pending_total = Some(Total::Number(parse_float(&display_value)));
            self.number.write("");
        } else if self.state.pending_operator.is_none() {
            self.number.write("");
        } else {
            let total = self
                .state
                .pending_total
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            let trace = format!("{total}{glyph}{display_value}");
            self.equals();
            self.state.pending_clear = true;
            self.equation.write(&trace);
        }

        self.state.pending_operator = Some(op);
        tracing::debug!(operator = %op, state = ?self.state, "operator selected");
    }

    /// Resolves the pending operator against the entry
    pub fn equals(&mut self) {
        let Some(display_value) = self.number.read_current() else {
            return;
        };
        let (Some(op), Some(total)) = (self.state.pending_operator, &self.state.pending_total)
        else {
            return;
        };

        let operand = parse_float(&display_value);
        let trace = format!("{total}{op}{}", format_number(operand));
        let result = total.combine(op, operand);

        match &result {
            Total::Number(n) => self.number.write_number(*n),
            Total::Text(text) => self.number.write(text),
        }
        self.equation.write(&trace);

        self.state.pending_total = Some(result);
        self.state.pending_operator = None;
        self.state.pending_clear = true;

        tracing::debug!(equation = %trace, state = ?self.state, "equals");
    }

    /// Flips the sign of the entry
    ///
    /// With a total but no pending operator (right after equals), the
    /// toggled entry also becomes the total.
    pub fn toggle_sign(&mut self) {
        self.consume_pending_clear();

        let current = self.number.read_current().unwrap_or_default();
        let toggled = match current.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{current}"),
        };
        self.number.write(&toggled);

        if self.state.pending_operator.is_none() && self.state.pending_total.is_some() {
            self.state.pending_total = Some(match self.sign_toggle_total {
                SignToggleTotal::Text => Total::Text(toggled),
                SignToggleTotal::Number => Total::Number(parse_float(&toggled)),
            });
        }

        tracing::debug!(state = ?self.state, "toggle sign");
    }

    /// Blanks the entry, leaving the pending operation intact
    pub fn clear_entry(&mut self) {
        self.number.write("");
        tracing::debug!("clear entry");
    }

    /// Resets the state and blanks both surfaces
    pub fn clear_all(&mut self) {
        self.state.reset();
        self.number.write("");
        self.equation.write("");
        tracing::debug!("clear all");
    }

    /// Appends a decimal point unless the entry already has one
    pub fn add_decimal_point(&mut self) {
        let current = self
            .number
            .read_current()
            .unwrap_or_else(|| "0".to_string());
        if current.contains('.') {
            return;
        }
        self.number.write(&format!("{current}."));
        tracing::debug!(number = %self.number.text(), "decimal point");
    }
}
