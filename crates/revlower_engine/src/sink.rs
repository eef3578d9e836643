//! Basis gate sinks for RevLower
//!
//! Gantree: L2_Sink → BasisSink
//!
//! The lowering engine writes basis operations through [`BasisSink`].
//! [`BasisCircuit`] is the register-aware implementation used both for
//! freshly allocated circuits and for caller-supplied ones.

use revlower_core::{BasisOp, LowerError, LowerResult, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default name of the input (quantum) register of a fresh circuit
pub const DEFAULT_INPUT_REGISTER: &str = "qr";

/// Default name of the output (classical) register of a fresh circuit
pub const DEFAULT_OUTPUT_REGISTER: &str = "cr";

// ============================================================================
// Sink Trait
// ============================================================================

/// Write-only destination for basis operations
/// Gantree: BasisSink // trait
///
/// Lines are addressed through one flat index space `0..qubit_count()`.
/// The engine only emits operations whose qubits lie in that space.
pub trait BasisSink {
    /// Number of addressable lines
    fn qubit_count(&self) -> usize;

    /// Append one basis operation
    fn emit(&mut self, op: BasisOp);
}

impl<S: BasisSink + ?Sized> BasisSink for &mut S {
    fn qubit_count(&self) -> usize {
        (**self).qubit_count()
    }

    fn emit(&mut self, op: BasisOp) {
        (**self).emit(op)
    }
}

// ============================================================================
// Register
// ============================================================================

/// Named register group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// Register name
    pub name: String,
    /// Number of lines
    pub size: usize,
}

impl Register {
    /// Create a register
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

// ============================================================================
// Basis Circuit
// ============================================================================

/// Register-aware basis circuit
/// Gantree: BasisCircuit // 기저 회로
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasisCircuit {
    /// Quantum register groups, concatenated in order into the line space
    qregs: Vec<Register>,

    /// Classical register groups (outside the line space)
    cregs: Vec<Register>,

    /// Emitted operations over flat line indices
    ops: Vec<BasisOp>,
}

impl BasisCircuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a circuit without registers
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh circuit with `num_qubits` input lines
    /// Gantree: fresh(n, with_output) -> Self // 새 회로
    ///
    /// With `with_output_register`, a same-width classical register is
    /// declared as well. The engine never touches it.
    pub fn fresh(num_qubits: usize, with_output_register: bool) -> Self {
        let output = with_output_register.then_some(DEFAULT_OUTPUT_REGISTER);
        Self::fresh_named(num_qubits, DEFAULT_INPUT_REGISTER, output)
    }

    /// Allocate a fresh circuit with explicit register names
    pub fn fresh_named(num_qubits: usize, input: &str, output: Option<&str>) -> Self {
        let mut circuit = Self::new();
        circuit.qregs.push(Register::new(input, num_qubits));
        if let Some(output) = output {
            circuit.cregs.push(Register::new(output, num_qubits));
        }
        circuit
    }

    // ========================================================================
    // Registers
    // ========================================================================

    /// Declare a quantum register, returning the flat index of its first line
    pub fn add_qreg(&mut self, name: impl Into<String>, size: usize) -> LowerResult<QubitId> {
        let name = name.into();
        self.check_unique(&name)?;
        let offset = self.qubit_count();
        self.qregs.push(Register::new(name, size));
        Ok(offset)
    }

    /// Declare a classical register
    pub fn add_creg(&mut self, name: impl Into<String>, size: usize) -> LowerResult<()> {
        let name = name.into();
        self.check_unique(&name)?;
        self.cregs.push(Register::new(name, size));
        Ok(())
    }

    fn check_unique(&self, name: &str) -> LowerResult<()> {
        if self.qregs.iter().chain(&self.cregs).any(|r| r.name == name) {
            return Err(LowerError::DuplicateRegister(name.to_string()));
        }
        Ok(())
    }

    /// Quantum register groups
    pub fn qregs(&self) -> &[Register] {
        &self.qregs
    }

    /// Classical register groups
    pub fn cregs(&self) -> &[Register] {
        &self.cregs
    }

    /// Total number of classical bits
    pub fn num_clbits(&self) -> usize {
        self.cregs.iter().map(|r| r.size).sum()
    }

    /// Resolve a flat line index to `(register name, offset)`
    /// Gantree: line(i) -> Option<(&str, usize)> // 라인 해석
    pub fn line(&self, index: QubitId) -> Option<(&str, usize)> {
        let mut start = 0;
        for reg in &self.qregs {
            if index < start + reg.size {
                return Some((reg.name.as_str(), index - start));
            }
            start += reg.size;
        }
        None
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Emitted operations, in order
    pub fn ops(&self) -> &[BasisOp] {
        &self.ops
    }

    /// Number of emitted operations
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop all emitted operations, keeping registers
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count single-qubit operations
    pub fn count_1q(&self) -> usize {
        self.ops.iter().filter(|op| op.qubits().len() == 1).count()
    }

    /// Count two-qubit operations
    pub fn count_2q(&self) -> usize {
        self.ops.iter().filter(|op| op.qubits().len() == 2).count()
    }

    /// Count three-qubit operations
    pub fn count_3q(&self) -> usize {
        self.ops.iter().filter(|op| op.qubits().len() == 3).count()
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to an OpenQASM 2.0 program
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(String::new());

        // Register declarations
        for reg in &self.qregs {
            lines.push(format!("qreg {}[{}];", reg.name, reg.size));
        }
        for reg in &self.cregs {
            lines.push(format!("creg {}[{}];", reg.name, reg.size));
        }
        lines.push(String::new());

        // Operations
        for op in &self.ops {
            lines.push(op.to_qasm_with(|q| match self.line(q) {
                Some((name, offset)) => format!("{}[{}]", name, offset),
                None => format!("q[{}]", q),
            }));
        }

        lines.join("\n")
    }
}

impl BasisSink for BasisCircuit {
    fn qubit_count(&self) -> usize {
        self.qregs.iter().map(|r| r.size).sum()
    }

    fn emit(&mut self, op: BasisOp) {
        debug_assert!(
            op.qubits().iter().all(|&q| q < self.qubit_count()),
            "basis op {} outside line space",
            op
        );
        self.ops.push(op);
    }
}

impl fmt::Display for BasisCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BasisCircuit({} qubits, {} ops)",
            self.qubit_count(),
            self.ops.len()
        )?;
        writeln!(f, "  1Q ops: {}", self.count_1q())?;
        writeln!(f, "  2Q ops: {}", self.count_2q())?;
        writeln!(f, "  3Q ops: {}", self.count_3q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
