//! Gate validation for RevLower
//!
//! Gantree: L1_Netlist → Validation
//!
//! Arity and qubit-range checks. A gate is checked in full before any
//! basis operation is produced for it.

use crate::error::{LowerError, LowerResult};
use crate::gate::{Gate, MAX_CONTROLS};

/// Validate a single gate against an addressable qubit count
/// Gantree: validate_gate(gate, idx, n) -> Result // 게이트 검증
///
/// Checks run in a fixed order: empty target list, control arity, then
/// qubit range over controls followed by targets.
pub fn validate_gate(gate: &Gate, gate_index: usize, qubit_count: usize) -> LowerResult<()> {
    if gate.targets().is_empty() {
        return Err(LowerError::EmptyTargets { gate_index });
    }

    let controls = gate.num_controls();
    if controls > MAX_CONTROLS {
        return Err(LowerError::GateArity {
            gate_index,
            controls,
            max: MAX_CONTROLS,
        });
    }

    if let Some(qubit) = gate.qubits().into_iter().find(|&q| q >= qubit_count) {
        return Err(LowerError::QubitRange {
            gate_index,
            qubit,
            qubit_count,
        });
    }

    Ok(())
}

/// Validate a gate sequence, reporting the first failure in program order
/// Gantree: validate_gates(gates, n) -> Result // 전체 검증
pub fn validate_gates(gates: &[Gate], qubit_count: usize) -> LowerResult<()> {
    gates
        .iter()
        .enumerate()
        .try_for_each(|(i, gate)| validate_gate(gate, i, qubit_count))
}

// ============================================================================
// Tests
// ============================================================================
