//! # RevLower Sim
//!
//! Reference simulators for checking lowered circuits against the direct
//! meaning of their source netlists.
//!
//! ## Gantree Architecture
//!
//! ```text
//! revlower_sim // L4: Verification (완료)
//!     L4_Verification // 동치성 검증 (완료)
//!         ClassicalState // 비트 벡터 시뮬레이션 (완료)
//!         Permutation // 순열 표 (완료)
//!         StateVector // 상태 벡터 시뮬레이션 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use revlower_core::{BasisOp, NetlistBuilder};
//! use revlower_sim::{netlist_permutation, ops_permutation};
//!
//! let netlist = NetlistBuilder::new(2).cx(1, 0).cx(0, 1).cx(1, 0).build();
//! let ops = [BasisOp::Cx(1, 0), BasisOp::Cx(0, 1), BasisOp::Cx(1, 0)];
//!
//! assert_eq!(netlist_permutation(&netlist).unwrap(), vec![0, 2, 1, 3]);
//! assert_eq!(ops_permutation(2, &ops).unwrap(), vec![0, 2, 1, 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Classical simulation (Gantree: L4_Verification → ClassicalState)
pub mod classical;

/// State-vector simulation (Gantree: L4_Verification → StateVector)
pub mod statevector;

// ============================================================================
// Re-exports
// ============================================================================

pub use classical::{
    netlist_permutation, ops_permutation, ClassicalState, MAX_CLASSICAL_QUBITS,
    MAX_PERMUTATION_QUBITS,
};
pub use statevector::{StateVector, MAX_STATEVECTOR_QUBITS};

use revlower_core::{Gate, LowerError, LowerResult, QubitId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Shared Checks
// ============================================================================

fn check_qubits(qubits: &[QubitId], num_qubits: usize) -> LowerResult<()> {
    match qubits.iter().find(|&&q| q >= num_qubits) {
        Some(q) => Err(LowerError::InvalidNetlist(format!(
            "qubit {} outside {}-qubit state",
            q, num_qubits
        ))),
        None => Ok(()),
    }
}

/// Direct flip semantics need controls disjoint from targets
fn check_controls(gate: &Gate) -> LowerResult<()> {
    let targets = gate.targets();
    match gate.controls().iter().find(|c| targets.contains(&c.qubit)) {
        Some(c) => Err(LowerError::InvalidNetlist(format!(
            "control qubit {} is also a target of {}",
            c.qubit, gate
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// Integration Tests
// ============================================================================
