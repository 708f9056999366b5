//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::core::CalcResult;

/// What a sign toggle does to the pending total when no operator is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignToggleTotal {
    /// Store the toggled display text as the total
    #[default]
    Text,
    /// Re-parse the toggled text into a numeric total
    Number,
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Element id of the running-value surface
    pub number_surface: String,
    /// Element id of the equation trace surface
    pub equation_surface: String,
    /// Sign toggle policy
    pub sign_toggle_total: SignToggleTotal,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            number_surface: "number".to_string(),
            equation_surface: "equation".to_string(),
            sign_toggle_total: SignToggleTotal::default(),
        }
    }
}

impl CalculatorConfig {
    /// Loads a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the sign toggle policy
    #[must_use]
    pub fn with_sign_toggle_total(mut self, policy: SignToggleTotal) -> Self {
        self.sign_toggle_total = policy;
        self
    }
}
