//! Lowering statistics
//!
//! Gantree: L3_Lowering → LoweringStats

use revlower_core::BasisOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts collected while lowering one netlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoweringStats {
    /// Gates fully lowered
    pub gates_lowered: usize,

    /// Basis operations emitted
    pub ops_emitted: usize,

    /// X operations
    pub x: usize,

    /// CX operations
    pub cx: usize,

    /// CCX operations
    pub ccx: usize,

    /// H operations
    pub h: usize,

    /// RZ operations
    pub rz: usize,
}

impl LoweringStats {
    /// Record one emitted operation
    pub fn record(&mut self, op: &BasisOp) {
        self.ops_emitted += 1;
        match op {
            BasisOp::X(_) => self.x += 1,
            BasisOp::Cx(_, _) => self.cx += 1,
            BasisOp::Ccx(_, _, _) => self.ccx += 1,
            BasisOp::H(_) => self.h += 1,
            BasisOp::Rz(_, _) => self.rz += 1,
        }
    }

    /// Operations with a permutation semantics (X, CX, CCX)
    pub fn classical_ops(&self) -> usize {
        self.x + self.cx + self.ccx
    }
}

impl fmt::Display for LoweringStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LoweringStats(gates={}, ops={}, x={}, cx={}, ccx={}, h={}, rz={})",
            self.gates_lowered, self.ops_emitted, self.x, self.cx, self.ccx, self.h, self.rz
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
