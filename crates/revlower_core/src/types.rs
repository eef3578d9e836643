//! Core types for RevLower
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Qubit indices, rotation angles, and control literals shared by the
//! gate model, the lowering engine, and the simulators.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit index (0-indexed line within a register space)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

// ============================================================================
// Polarity
// ============================================================================

/// Control polarity
/// Gantree: Polarity // 제어 극성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Active when the control qubit is 1
    #[default]
    Positive,
    /// Active when the control qubit is 0 (complemented control)
    Negative,
}

impl Polarity {
    /// Check if polarity is negative
    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(self, Polarity::Negative)
    }

    /// Value of the control bit that activates this polarity
    #[inline]
    pub fn active_value(&self) -> bool {
        !self.is_negative()
    }
}

// ============================================================================
// Control Literal
// ============================================================================

/// Control literal: a qubit plus a polarity
/// Gantree: Control // 제어 리터럴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Control {
    /// Control qubit
    pub qubit: QubitId,

    /// Control polarity
    #[serde(default)]
    pub polarity: Polarity,
}

impl Control {
    /// Create a control literal
    pub fn new(qubit: QubitId, polarity: Polarity) -> Self {
        Self { qubit, polarity }
    }

    /// Create a positive control (active on 1)
    pub fn positive(qubit: QubitId) -> Self {
        Self::new(qubit, Polarity::Positive)
    }

    /// Create a negative control (active on 0)
    pub fn negative(qubit: QubitId) -> Self {
        Self::new(qubit, Polarity::Negative)
    }

    /// Check if the control is complemented
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.polarity.is_negative()
    }

    /// Check whether the control fires for the given qubit value
    #[inline]
    pub fn is_active(&self, bit: bool) -> bool {
        bit == self.polarity.active_value()
    }
}

impl From<QubitId> for Control {
    fn from(qubit: QubitId) -> Self {
        Control::positive(qubit)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Positive => write!(f, "{}", self.qubit),
            Polarity::Negative => write!(f, "!{}", self.qubit),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
