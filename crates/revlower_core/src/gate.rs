//! Netlist gate definitions for RevLower
//!
//! Gantree: L1_Netlist → Gate
//!
//! Closed gate set produced by reversible synthesis: Hadamard and
//! Z-rotation layers plus multi-target controlled flips with mixed
//! control polarity.

use crate::types::{Angle, Control, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of controls a controlled flip may carry
pub const MAX_CONTROLS: usize = 2;

/// Netlist gate enumeration
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gate {
    /// Hadamard on every target
    /// Gantree: Hadamard{{targets}} // 하다마드
    Hadamard { targets: Vec<QubitId> },

    /// Z rotation by `angle` on every target
    /// Gantree: PhaseRotationZ{{angle,targets}} // Z 회전
    PhaseRotationZ { angle: Angle, targets: Vec<QubitId> },

    /// Singly-controlled flip on every target
    /// Gantree: ControlledX{{control,targets}} // 제어 X
    ControlledX {
        control: Control,
        targets: Vec<QubitId>,
    },

    /// Flip on every target, controlled by up to two literals
    /// Gantree: GeneralizedToffoli{{controls,targets}} // 일반 토폴리
    GeneralizedToffoli {
        #[serde(default)]
        controls: Vec<Control>,
        targets: Vec<QubitId>,
    },
}

impl Gate {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Hadamard on the given targets
    pub fn hadamard(targets: impl Into<Vec<QubitId>>) -> Self {
        Gate::Hadamard {
            targets: targets.into(),
        }
    }

    /// Z rotation on the given targets
    pub fn rz(angle: Angle, targets: impl Into<Vec<QubitId>>) -> Self {
        Gate::PhaseRotationZ {
            angle,
            targets: targets.into(),
        }
    }

    /// Controlled flip with a single control literal
    pub fn cx(control: Control, targets: impl Into<Vec<QubitId>>) -> Self {
        Gate::ControlledX {
            control,
            targets: targets.into(),
        }
    }

    /// Generalized Toffoli (multi-control, multi-target flip)
    pub fn mcx(controls: impl Into<Vec<Control>>, targets: impl Into<Vec<QubitId>>) -> Self {
        Gate::GeneralizedToffoli {
            controls: controls.into(),
            targets: targets.into(),
        }
    }

    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Gate kind tag
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::Hadamard { .. } => GateKind::Hadamard,
            Gate::PhaseRotationZ { .. } => GateKind::PhaseRotationZ,
            Gate::ControlledX { .. } => GateKind::ControlledX,
            Gate::GeneralizedToffoli { .. } => GateKind::GeneralizedToffoli,
        }
    }

    /// Target qubits, in order
    /// Gantree: targets(&self) -> &[QubitId] // 타깃
    pub fn targets(&self) -> &[QubitId] {
        match self {
            Gate::Hadamard { targets }
            | Gate::PhaseRotationZ { targets, .. }
            | Gate::ControlledX { targets, .. }
            | Gate::GeneralizedToffoli { targets, .. } => targets,
        }
    }

    /// Control literals, in order (empty for non-controlled gates)
    pub fn controls(&self) -> &[Control] {
        match self {
            Gate::ControlledX { control, .. } => std::slice::from_ref(control),
            Gate::GeneralizedToffoli { controls, .. } => controls,
            Gate::Hadamard { .. } | Gate::PhaseRotationZ { .. } => &[],
        }
    }

    /// Number of control literals
    pub fn num_controls(&self) -> usize {
        self.controls().len()
    }

    /// All qubits referenced by this gate (controls first, then targets)
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        self.controls()
            .iter()
            .map(|c| c.qubit)
            .chain(self.targets().iter().copied())
            .collect()
    }

    /// Check if gate is a (multi-target) controlled flip
    pub fn is_controlled_flip(&self) -> bool {
        matches!(
            self,
            Gate::ControlledX { .. } | Gate::GeneralizedToffoli { .. }
        )
    }

    /// Check if gate has a permutation (truth-table) semantics
    pub fn is_classical(&self) -> bool {
        self.is_controlled_flip()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: Vec<String> = self.targets().iter().map(|t| t.to_string()).collect();
        match self {
            Gate::Hadamard { .. } => write!(f, "h [{}]", targets.join(",")),
            Gate::PhaseRotationZ { angle, .. } => write!(f, "rz({}) [{}]", angle, targets.join(",")),
            Gate::ControlledX { .. } | Gate::GeneralizedToffoli { .. } => {
                let controls: Vec<String> = self.controls().iter().map(|c| c.to_string()).collect();
                write!(
                    f,
                    "{} [{}] -> [{}]",
                    self.kind(),
                    controls.join(","),
                    targets.join(",")
                )
            }
        }
    }
}

// ============================================================================
// Gate Kind
// ============================================================================

/// Gate kind tag of the closed gate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Hadamard layer
    Hadamard,
    /// Z rotation layer
    PhaseRotationZ,
    /// Singly-controlled flip
    ControlledX,
    /// Generalized Toffoli
    GeneralizedToffoli,
}

impl GateKind {
    /// All supported kinds
    pub const ALL: [GateKind; 4] = [
        GateKind::Hadamard,
        GateKind::PhaseRotationZ,
        GateKind::ControlledX,
        GateKind::GeneralizedToffoli,
    ];

    /// Canonical tag used in netlist documents
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "hadamard",
            GateKind::PhaseRotationZ => "phase_rotation_z",
            GateKind::ControlledX => "controlled_x",
            GateKind::GeneralizedToffoli => "generalized_toffoli",
        }
    }

    /// Parse from a kind tag, accepting common aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hadamard" | "h" => Some(GateKind::Hadamard),
            "phase_rotation_z" | "rz" => Some(GateKind::PhaseRotationZ),
            "controlled_x" | "cx" | "cnot" => Some(GateKind::ControlledX),
            "generalized_toffoli" | "mcx" | "toffoli" => Some(GateKind::GeneralizedToffoli),
            _ => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(Gate::hadamard([0, 1]).qubits(), vec![0, 1]);
        assert_eq!(Gate::cx(Control::positive(2), [0]).qubits(), vec![2, 0]);
        assert_eq!(
            Gate::mcx([Control::positive(3), Control::negative(4)], [0, 1]).qubits(),
            vec![3, 4, 0, 1]
        );
    }

    #[test]
    fn test_gate_controls() {
        assert!(Gate::rz(0.5, [0]).controls().is_empty());
        assert_eq!(Gate::cx(Control::negative(1), [0]).controls(), &[Control::negative(1)]);
        assert_eq!(Gate::mcx(Vec::<Control>::new(), [0]).num_controls(), 0);
    }

    #[test]
    fn test_gate_classification() {
        assert!(Gate::cx(Control::positive(0), [1]).is_controlled_flip());
        assert!(Gate::mcx(Vec::<Control>::new(), [1]).is_classical());
        assert!(!Gate::hadamard([0]).is_controlled_flip());
        assert!(!Gate::rz(1.0, [0]).is_classical());
    }

    #[test]
    fn test_gate_kind_parse() {
        for kind in GateKind::ALL {
            assert_eq!(GateKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(GateKind::parse("CNOT"), Some(GateKind::ControlledX));
        assert_eq!(GateKind::parse("toffoli"), Some(GateKind::GeneralizedToffoli));
        assert_eq!(GateKind::parse("swap"), None);
    }

    #[test]
    fn test_gate_serde_tag() {
        let gate = Gate::mcx([Control::negative(1)], [0, 2]);
        let json = serde_json::to_string(&gate).unwrap();
        assert!(json.contains(r#""kind":"generalized_toffoli""#));

        let back: Gate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gate);
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(Gate::hadamard([0, 1]).to_string(), "h [0,1]");
        assert_eq!(
            Gate::mcx([Control::positive(0), Control::negative(1)], [2]).to_string(),
            "generalized_toffoli [0,!1] -> [2]"
        );
    }
}
