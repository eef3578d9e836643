//! Netlist structure for RevLower
//!
//! Gantree: L1_Netlist → Netlist
//!
//! An ordered, qubit-counted gate list. The netlist is a plain container:
//! it records what the producer wrote, and the lowering engine decides
//! whether each gate is acceptable.

use crate::error::{LowerError, LowerResult};
use crate::gate::{Gate, GateKind};
use crate::validate::validate_gates;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Reversible netlist
/// Gantree: Netlist // 넷리스트 구조체
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Netlist {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Gate sequence in program order
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Optional netlist name
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Netlist {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty netlist
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a netlist with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> Self {
        Self {
            num_qubits,
            gates,
            name: None,
        }
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Append a gate
    /// Gantree: add_gate(&mut, Gate) // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Append multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) {
        self.gates.extend(gates);
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get number of gates
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Get netlist name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set netlist name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if netlist has no gates
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Count gates of a given kind
    pub fn count_kind(&self, kind: GateKind) -> usize {
        self.gates.iter().filter(|g| g.kind() == kind).count()
    }

    /// Check if every gate is a controlled flip
    pub fn is_classical(&self) -> bool {
        self.gates.iter().all(Gate::is_classical)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate every gate against the declared qubit count
    /// Gantree: validate(&self) -> Result // 넷리스트 검증
    pub fn validate(&self) -> LowerResult<()> {
        validate_gates(&self.gates, self.num_qubits)
    }

    // ========================================================================
    // JSON Interchange
    // ========================================================================

    /// Serialize to a JSON netlist document
    pub fn to_json(&self) -> LowerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON netlist document
    /// Gantree: from_json(s) -> Result<Self> // JSON 파싱
    ///
    /// Kind tags are resolved against the closed gate set before the gate
    /// body is decoded, so a foreign tag reports `UnsupportedGateKind`
    /// rather than a generic decoding failure.
    pub fn from_json(json: &str) -> LowerResult<Self> {
        let doc: NetlistDocument =
            serde_json::from_str(json).map_err(|e| LowerError::InvalidNetlist(e.to_string()))?;

        let gates = doc
            .gates
            .into_iter()
            .enumerate()
            .map(|(i, value)| parse_gate(i, value))
            .collect::<LowerResult<Vec<_>>>()?;

        Ok(Self {
            num_qubits: doc.num_qubits,
            gates,
            name: doc.name,
        })
    }
}

// ============================================================================
// JSON Parsing Helpers
// ============================================================================

#[derive(Deserialize)]
struct NetlistDocument {
    num_qubits: usize,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    gates: Vec<Value>,
}

fn parse_gate(gate_index: usize, mut value: Value) -> LowerResult<Gate> {
    let tag = value
        .get("kind")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| LowerError::InvalidNetlist(format!("gate {} has no kind tag", gate_index)))?;

    let kind = GateKind::parse(&tag).ok_or(LowerError::UnsupportedGateKind {
        gate_index,
        kind: tag,
    })?;

    value["kind"] = Value::from(kind.name());
    serde_json::from_value(value)
        .map_err(|e| LowerError::InvalidNetlist(format!("gate {}: {}", gate_index, e)))
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(
                f,
                "Netlist '{}' ({} qubits, {} gates)",
                name,
                self.num_qubits,
                self.gates.len()
            )?,
            None => writeln!(
                f,
                "Netlist({} qubits, {} gates)",
                self.num_qubits,
                self.gates.len()
            )?,
        }
        for gate in &self.gates {
            writeln!(f, "  {}", gate)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
