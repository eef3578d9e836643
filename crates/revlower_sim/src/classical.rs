//! Classical (bit-vector) simulation
//!
//! Gantree: L4_Verification → ClassicalState
//!
//! Reversible circuits act on computational basis states as permutations.
//! [`ClassicalState`] tracks one basis state; [`netlist_permutation`] and
//! [`ops_permutation`] tabulate the whole permutation of `0..2^n`.

use crate::{check_controls, check_qubits};
use revlower_core::{BasisOp, Gate, LowerError, LowerResult, Netlist};
use std::fmt;

/// Widest state a [`ClassicalState`] can hold
pub const MAX_CLASSICAL_QUBITS: usize = 64;

/// Widest register tabulated by the permutation functions
pub const MAX_PERMUTATION_QUBITS: usize = 20;

/// Computational basis state over `num_qubits` lines
/// Gantree: ClassicalState // 고전 상태
///
/// Bit `q` of `value` is the value of line `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassicalState {
    num_qubits: usize,
    value: u64,
}

impl ClassicalState {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// All-zero state
    pub fn new(num_qubits: usize) -> LowerResult<Self> {
        Self::from_value(num_qubits, 0)
    }

    /// State from an integer; bits at or above `num_qubits` are dropped
    pub fn from_value(num_qubits: usize, value: u64) -> LowerResult<Self> {
        if num_qubits > MAX_CLASSICAL_QUBITS {
            return Err(LowerError::SimulationTooLarge {
                qubits: num_qubits,
                max: MAX_CLASSICAL_QUBITS,
            });
        }
        let mask = if num_qubits == MAX_CLASSICAL_QUBITS {
            u64::MAX
        } else {
            (1u64 << num_qubits) - 1
        };
        Ok(Self {
            num_qubits,
            value: value & mask,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of lines
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Integer value of the state
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Value of line `q`
    pub fn bit(&self, q: usize) -> bool {
        q < self.num_qubits && (self.value >> q) & 1 == 1
    }

    fn flip(&mut self, q: usize) {
        self.value ^= 1 << q;
    }

    // ========================================================================
    // Evolution
    // ========================================================================

    /// Apply one basis operation
    ///
    /// H and RZ have no permutation semantics and are rejected.
    pub fn apply_basis(&mut self, op: &BasisOp) -> LowerResult<()> {
        check_qubits(&op.qubits(), self.num_qubits)?;
        match *op {
            BasisOp::X(q) => self.flip(q),
            BasisOp::Cx(c, t) => {
                if self.bit(c) {
                    self.flip(t);
                }
            }
            BasisOp::Ccx(c1, c2, t) => {
                if self.bit(c1) && self.bit(c2) {
                    self.flip(t);
                }
            }
            BasisOp::H(_) | BasisOp::Rz(_, _) => {
                return Err(LowerError::NonClassicalOperation(op.to_string()))
            }
        }
        Ok(())
    }

    /// Apply a basis operation sequence in order
    pub fn apply_ops(&mut self, ops: &[BasisOp]) -> LowerResult<()> {
        ops.iter().try_for_each(|op| self.apply_basis(op))
    }

    /// Apply a netlist gate with its direct logical meaning
    /// Gantree: apply_gate(gate) -> Result // 직접 의미론
    ///
    /// Every target is flipped iff every control literal is active. There
    /// is no limit on the number of controls here.
    pub fn apply_gate(&mut self, gate: &Gate) -> LowerResult<()> {
        if !gate.is_controlled_flip() {
            return Err(LowerError::NonClassicalOperation(gate.to_string()));
        }
        check_qubits(&gate.qubits(), self.num_qubits)?;
        check_controls(gate)?;

        let fires = gate.controls().iter().all(|c| c.is_active(self.bit(c.qubit)));
        if fires {
            for &t in gate.targets() {
                self.flip(t);
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClassicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Line 0 is the rightmost character
        for q in (0..self.num_qubits).rev() {
            write!(f, "{}", if self.bit(q) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// ============================================================================
// Permutations
// ============================================================================

/// Permutation realised by a classical netlist
/// Gantree: netlist_permutation(netlist) -> Result<Vec<usize>> // 순열 표
///
/// Entry `i` is the output state for input state `i`.
pub fn netlist_permutation(netlist: &Netlist) -> LowerResult<Vec<usize>> {
    let n = netlist.num_qubits();
    tabulate(n, |state| {
        netlist
            .gates()
            .iter()
            .try_for_each(|gate| state.apply_gate(gate))
    })
}

/// Permutation realised by a basis operation sequence over `num_qubits` lines
pub fn ops_permutation(num_qubits: usize, ops: &[BasisOp]) -> LowerResult<Vec<usize>> {
    tabulate(num_qubits, |state| state.apply_ops(ops))
}

fn tabulate<F>(num_qubits: usize, mut run: F) -> LowerResult<Vec<usize>>
where
    F: FnMut(&mut ClassicalState) -> LowerResult<()>,
{
    if num_qubits > MAX_PERMUTATION_QUBITS {
        return Err(LowerError::SimulationTooLarge {
            qubits: num_qubits,
            max: MAX_PERMUTATION_QUBITS,
        });
    }

    (0..1usize << num_qubits)
        .map(|input| -> LowerResult<usize> {
            let mut state = ClassicalState::from_value(num_qubits, input as u64)?;
            run(&mut state)?;
            Ok(state.value() as usize)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use revlower_core::{Control, NetlistBuilder};

    #[test]
    fn test_from_value_masks_high_bits() {
        let state = ClassicalState::from_value(2, 0b111).unwrap();
        assert_eq!(state.value(), 0b11);
        assert!(state.bit(1));
        assert!(!state.bit(2));

        let full = ClassicalState::from_value(64, u64::MAX).unwrap();
        assert_eq!(full.value(), u64::MAX);
    }

    #[test]
    fn test_too_wide() {
        assert_eq!(
            ClassicalState::new(65),
            Err(LowerError::SimulationTooLarge { qubits: 65, max: 64 })
        );
    }

    #[test]
    fn test_apply_basis() {
        let mut state = ClassicalState::new(3).unwrap();
        state.apply_basis(&BasisOp::X(0)).unwrap();
        state.apply_basis(&BasisOp::Cx(0, 1)).unwrap();
        assert_eq!(state.value(), 0b011);

        state.apply_basis(&BasisOp::Ccx(0, 1, 2)).unwrap();
        assert_eq!(state.value(), 0b111);
        assert_eq!(state.to_string(), "111");
    }

    #[test]
    fn test_non_classical_rejected() {
        let mut state = ClassicalState::new(1).unwrap();
        assert!(matches!(
            state.apply_basis(&BasisOp::H(0)),
            Err(LowerError::NonClassicalOperation(_))
        ));
        assert!(matches!(
            state.apply_gate(&Gate::rz(0.3, [0])),
            Err(LowerError::NonClassicalOperation(_))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = ClassicalState::new(2).unwrap();
        assert!(state.apply_basis(&BasisOp::X(2)).is_err());
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn test_direct_semantics_negative_control() {
        let gate = Gate::mcx([Control::negative(0)], [1, 2]);

        let mut state = ClassicalState::from_value(3, 0b000).unwrap();
        state.apply_gate(&gate).unwrap();
        assert_eq!(state.value(), 0b110);

        let mut state = ClassicalState::from_value(3, 0b001).unwrap();
        state.apply_gate(&gate).unwrap();
        assert_eq!(state.value(), 0b001);
    }

    #[test]
    fn test_direct_semantics_three_controls() {
        let gate = Gate::mcx(
            [
                Control::positive(0),
                Control::positive(1),
                Control::negative(2),
            ],
            [3],
        );
        let mut state = ClassicalState::from_value(4, 0b0011).unwrap();
        state.apply_gate(&gate).unwrap();
        assert_eq!(state.value(), 0b1011);
    }

    #[test]
    fn test_control_on_target_rejected() {
        let mut state = ClassicalState::new(2).unwrap();
        let gate = Gate::cx(Control::positive(1), [0, 1]);
        assert!(matches!(
            state.apply_gate(&gate),
            Err(LowerError::InvalidNetlist(_))
        ));
    }

    #[test]
    fn test_swap_permutation() {
        let netlist = NetlistBuilder::new(2).cx(1, 0).cx(0, 1).cx(1, 0).build();
        assert_eq!(netlist_permutation(&netlist).unwrap(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_ops_permutation() {
        let perm = ops_permutation(2, &[BasisOp::X(0), BasisOp::Cx(0, 1), BasisOp::X(0)]).unwrap();
        // Negatively controlled CX on line 1
        assert_eq!(perm, vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_permutation_too_large() {
        assert!(matches!(
            ops_permutation(21, &[]),
            Err(LowerError::SimulationTooLarge { qubits: 21, max: 20 })
        ));
    }
}
