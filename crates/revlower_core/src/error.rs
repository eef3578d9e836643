//! Error types for RevLower
//!
//! Gantree: L0_Foundation → Errors
//!
//! One error enum shared by the core, engine, and simulator crates.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for RevLower
/// Gantree: LowerError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LowerError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Controlled flip with more controls than the basis supports
    /// Gantree: GateArity{{idx,controls,max}} // 제어 수 초과
    #[error("Gate {gate_index} has {controls} controls: basis supports at most {max}")]
    GateArity {
        gate_index: usize,
        controls: usize,
        max: usize,
    },

    /// Gate kind outside the closed gate set
    /// Gantree: UnsupportedGateKind{{idx,kind}} // 미지원 게이트
    #[error("Gate {gate_index} has unsupported kind '{kind}'")]
    UnsupportedGateKind { gate_index: usize, kind: String },

    /// Qubit index not addressable
    /// Gantree: QubitRange{{idx,q,count}} // 큐비트 범위
    #[error("Gate {gate_index} references qubit {qubit} but only {qubit_count} qubits are addressable")]
    QubitRange {
        gate_index: usize,
        qubit: usize,
        qubit_count: usize,
    },

    /// Gate with an empty target list
    #[error("Gate {gate_index} has no targets")]
    EmptyTargets { gate_index: usize },

    // ========================================================================
    // Sink Errors
    // ========================================================================
    /// Embedded sink smaller than the netlist
    /// Gantree: InsufficientQubits{{req,avail}} // 라인 부족
    #[error("Sink provides {available} qubits but netlist requires {required}")]
    InsufficientQubits { required: usize, available: usize },

    /// Register name already declared in the sink
    #[error("Register '{0}' is already declared")]
    DuplicateRegister(String),

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Malformed netlist document
    #[error("Invalid netlist: {0}")]
    InvalidNetlist(String),

    /// Invalid lowering configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    // ========================================================================
    // Simulation Errors
    // ========================================================================
    /// Operation has no classical (permutation) semantics
    #[error("Operation '{0}' is not classical")]
    NonClassicalOperation(String),

    /// Register too wide to simulate exhaustively
    #[error("Cannot simulate {qubits} qubits: limit is {max}")]
    SimulationTooLarge { qubits: usize, max: usize },
}

/// Result type alias for RevLower operations
/// Gantree: LowerResult<T> // type alias
pub type LowerResult<T> = Result<T, LowerError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for LowerError {
    fn from(err: serde_json::Error) -> Self {
        LowerError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl LowerError {
    /// Check if error came from the gate validation layer
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LowerError::GateArity { .. }
                | LowerError::QubitRange { .. }
                | LowerError::EmptyTargets { .. }
        )
    }

    /// Index of the offending gate, if the error is tied to one
    pub fn gate_index(&self) -> Option<usize> {
        match self {
            LowerError::GateArity { gate_index, .. }
            | LowerError::UnsupportedGateKind { gate_index, .. }
            | LowerError::QubitRange { gate_index, .. }
            | LowerError::EmptyTargets { gate_index } => Some(*gate_index),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
