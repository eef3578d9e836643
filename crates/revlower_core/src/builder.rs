//! Netlist builder for RevLower
//!
//! Gantree: L1_Netlist → NetlistBuilder
//!
//! Fluent construction of netlists, mainly for tests and for producers
//! that emit gates one at a time.

use crate::gate::Gate;
use crate::netlist::Netlist;
use crate::types::{Angle, Control, QubitId};

/// Fluent netlist builder (consuming self pattern)
/// Gantree: NetlistBuilder // 빌더 패턴
pub struct NetlistBuilder {
    /// Internal netlist being built
    netlist: Netlist,
}

impl NetlistBuilder {
    /// Create a new netlist builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            netlist: Netlist::new(num_qubits),
        }
    }

    /// Create with netlist name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            netlist: Netlist::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Layers
    // ========================================================================

    /// Add a Hadamard layer
    pub fn h(mut self, targets: impl Into<Vec<QubitId>>) -> Self {
        self.netlist.add_gate(Gate::hadamard(targets));
        self
    }

    /// Add a Z-rotation layer
    pub fn rz(mut self, angle: Angle, targets: impl Into<Vec<QubitId>>) -> Self {
        self.netlist.add_gate(Gate::rz(angle, targets));
        self
    }

    // ========================================================================
    // Controlled Flips
    // ========================================================================

    /// Add an uncontrolled flip
    pub fn not(mut self, target: QubitId) -> Self {
        self.netlist
            .add_gate(Gate::mcx(Vec::<Control>::new(), vec![target]));
        self
    }

    /// Add a positively controlled flip
    /// Gantree: cx(self, c, t) -> Self // CX 추가
    pub fn cx(mut self, control: QubitId, target: QubitId) -> Self {
        self.netlist
            .add_gate(Gate::cx(Control::positive(control), vec![target]));
        self
    }

    /// Add a negatively controlled flip
    pub fn cx_neg(mut self, control: QubitId, target: QubitId) -> Self {
        self.netlist
            .add_gate(Gate::cx(Control::negative(control), vec![target]));
        self
    }

    /// Add a positively controlled Toffoli
    pub fn toffoli(mut self, c1: QubitId, c2: QubitId, target: QubitId) -> Self {
        self.netlist.add_gate(Gate::mcx(
            [Control::positive(c1), Control::positive(c2)],
            vec![target],
        ));
        self
    }

    /// Add a generalized Toffoli
    /// Gantree: mcx(self, ctrls, tgts) -> Self // 다중 제어
    pub fn mcx(
        mut self,
        controls: impl Into<Vec<Control>>,
        targets: impl Into<Vec<QubitId>>,
    ) -> Self {
        self.netlist.add_gate(Gate::mcx(controls, targets));
        self
    }

    /// Add an arbitrary gate
    pub fn gate(mut self, gate: Gate) -> Self {
        self.netlist.add_gate(gate);
        self
    }

    /// Finish building
    pub fn build(self) -> Netlist {
        self.netlist
    }
}

// ============================================================================
// Tests
// ============================================================================
