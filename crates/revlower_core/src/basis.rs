//! Basis operations for RevLower
//!
//! Gantree: L1_Netlist → BasisOp
//!
//! The fixed vocabulary every lowered circuit is restricted to:
//! X, CX, CCX, H and RZ.

use crate::types::{Angle, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis operation enumeration
/// Gantree: BasisOp // 기저 연산 enum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BasisOp {
    /// Pauli-X (NOT)
    /// Gantree: X(QubitId) // 반전
    X(QubitId),

    /// Controlled-NOT (control, target)
    /// Gantree: Cx(QubitId, QubitId) // ctrl, tgt
    Cx(QubitId, QubitId),

    /// Toffoli (control1, control2, target)
    /// Gantree: Ccx(QubitId, QubitId, QubitId) // ctrl1, ctrl2, tgt
    Ccx(QubitId, QubitId, QubitId),

    /// Hadamard
    H(QubitId),

    /// Rotation around Z-axis
    Rz(QubitId, Angle),
}

impl BasisOp {
    /// Qubits touched by this operation (controls first, target last)
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            BasisOp::X(q) | BasisOp::H(q) | BasisOp::Rz(q, _) => vec![q],
            BasisOp::Cx(c, t) => vec![c, t],
            BasisOp::Ccx(c1, c2, t) => vec![c1, c2, t],
        }
    }

    /// Operation name
    pub fn name(&self) -> &'static str {
        match self {
            BasisOp::X(_) => "x",
            BasisOp::Cx(_, _) => "cx",
            BasisOp::Ccx(_, _, _) => "ccx",
            BasisOp::H(_) => "h",
            BasisOp::Rz(_, _) => "rz",
        }
    }

    /// Check if operation permutes computational basis states
    pub fn is_classical(&self) -> bool {
        matches!(self, BasisOp::X(_) | BasisOp::Cx(_, _) | BasisOp::Ccx(_, _, _))
    }

    /// OpenQASM 2.0 statement with qubits rendered by `qubit`
    pub fn to_qasm_with(&self, qubit: impl Fn(QubitId) -> String) -> String {
        match *self {
            BasisOp::X(q) => format!("x {};", qubit(q)),
            BasisOp::Cx(c, t) => format!("cx {},{};", qubit(c), qubit(t)),
            BasisOp::Ccx(c1, c2, t) => format!("ccx {},{},{};", qubit(c1), qubit(c2), qubit(t)),
            BasisOp::H(q) => format!("h {};", qubit(q)),
            BasisOp::Rz(q, angle) => format!("rz({}) {};", angle, qubit(q)),
        }
    }

    /// OpenQASM 2.0 statement over a single register `q`
    pub fn to_qasm(&self) -> String {
        self.to_qasm_with(|q| format!("q[{}]", q))
    }
}

impl fmt::Display for BasisOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_qubits() {
        assert_eq!(BasisOp::X(3).qubits(), vec![3]);
        assert_eq!(BasisOp::Cx(0, 1).qubits(), vec![0, 1]);
        assert_eq!(BasisOp::Ccx(0, 1, 2).qubits(), vec![0, 1, 2]);
        assert_eq!(BasisOp::Rz(4, 0.25).qubits(), vec![4]);
    }

    #[test]
    fn test_basis_classification() {
        assert!(BasisOp::X(0).is_classical());
        assert!(BasisOp::Ccx(0, 1, 2).is_classical());
        assert!(!BasisOp::H(0).is_classical());
        assert!(!BasisOp::Rz(0, 1.0).is_classical());
    }

    #[test]
    fn test_basis_to_qasm() {
        assert_eq!(BasisOp::H(0).to_qasm(), "h q[0];");
        assert_eq!(BasisOp::Cx(0, 1).to_qasm(), "cx q[0],q[1];");
        assert_eq!(BasisOp::Ccx(2, 0, 1).to_qasm(), "ccx q[2],q[0],q[1];");
        assert_eq!(BasisOp::Rz(1, 0.5).to_qasm(), "rz(0.5) q[1];");
    }
}
