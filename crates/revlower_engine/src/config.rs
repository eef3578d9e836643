//! Lowering configuration
//!
//! Gantree: L3_Lowering → LoweringConfig
//!
//! Controls when gates are validated and how fresh circuits name their
//! registers.

use crate::sink::{DEFAULT_INPUT_REGISTER, DEFAULT_OUTPUT_REGISTER};
use revlower_core::{LowerError, LowerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// When gate validation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Validate the whole netlist before emitting anything
    #[default]
    UpFront,
    /// Validate each gate right before it is emitted
    PerGate,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::UpFront => write!(f, "up_front"),
            ValidationMode::PerGate => write!(f, "per_gate"),
        }
    }
}

/// Lowering configuration
/// Gantree: LoweringConfig // 로워링 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoweringConfig {
    /// Validation timing
    pub validation: ValidationMode,

    /// Declare a same-width classical register in fresh circuits
    pub with_output_register: bool,

    /// Input register name for fresh circuits
    pub input_register: String,

    /// Output register name for fresh circuits
    pub output_register: String,
}

impl Default for LoweringConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::UpFront,
            with_output_register: false,
            input_register: DEFAULT_INPUT_REGISTER.to_string(),
            output_register: DEFAULT_OUTPUT_REGISTER.to_string(),
        }
    }
}

impl LoweringConfig {
    // ========================================================================
    // Presets
    // ========================================================================

    /// Whole-netlist validation: a rejected netlist emits nothing
    pub fn strict() -> Self {
        Self::default()
    }

    /// Per-gate validation: gates before a rejected one stay emitted
    pub fn streaming() -> Self {
        Self {
            validation: ValidationMode::PerGate,
            ..Self::default()
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set validation timing
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Enable or disable the output register of fresh circuits
    pub fn with_output_register(mut self, enabled: bool) -> Self {
        self.with_output_register = enabled;
        self
    }

    /// Set register names for fresh circuits
    pub fn with_register_names(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.input_register = input.into();
        self.output_register = output.into();
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> LowerResult<()> {
        if !is_identifier(&self.input_register) {
            return Err(LowerError::InvalidConfig(format!(
                "input register name '{}' is not an identifier",
                self.input_register
            )));
        }
        if !is_identifier(&self.output_register) {
            return Err(LowerError::InvalidConfig(format!(
                "output register name '{}' is not an identifier",
                self.output_register
            )));
        }
        if self.with_output_register && self.input_register == self.output_register {
            return Err(LowerError::InvalidConfig(format!(
                "input and output registers share the name '{}'",
                self.input_register
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to JSON
    pub fn to_json(&self) -> LowerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate from JSON
    pub fn from_json(json: &str) -> LowerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// QASM-style identifier: a letter followed by letters, digits or `_`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for LoweringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoweringConfig(validation={}, ", self.validation)?;
        if self.with_output_register {
            write!(f, "registers={}/{})", self.input_register, self.output_register)
        } else {
            write!(f, "register={})", self.input_register)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
