//! Calculator core: operations, number conversion and the click-driven engine
//!
//! The engine never fails at runtime. Errors only surface while wiring a
//! calculator together (binding surfaces, loading configuration, routing
//! clicks from a DOM).

pub mod engine;
mod number;
mod operations;
pub mod state;

pub use engine::Calculator;
pub use number::{format_number, parse_float, text_to_number};
pub use operations::{Operation, Total};
pub use state::CalculatorState;

/// Result type for calculator wiring
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while assembling or driving a calculator
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// A display surface id has no backing element
    #[error("display surface not found: {0}")]
    MissingSurface(String),
    /// A clicked element is not a calculator button
    #[error("unknown button: {0}")]
    UnknownButton(String),
    /// Configuration could not be parsed or serialized
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_missing_surface() {
        let err = CalcError::MissingSurface("number".into());
        assert_eq!(format!("{err}"), "display surface not found: number");
    }

    #[test]
    fn test_calc_error_display_unknown_button() {
        let err = CalcError::UnknownButton("btn-99".into());
        assert_eq!(format!("{err}"), "unknown button: btn-99");
    }

    #[test]
    fn test_calc_error_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CalcError = json_err.into();
        assert!(matches!(err, CalcError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::MissingSurface("x".into()));
        assert!(err.to_string().contains("not found"));
    }
}
