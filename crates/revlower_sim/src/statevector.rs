//! State-vector simulation
//!
//! Gantree: L4_Verification → StateVector
//!
//! Dense amplitude simulation used to compare lowered circuits that mix
//! H and RZ with controlled flips. RZ follows the convention
//! `diag(e^{-iθ/2}, e^{iθ/2})`.

use crate::{check_controls, check_qubits};
use num_complex::Complex64;
use rand::Rng;
use revlower_core::{BasisOp, Gate, LowerError, LowerResult, QubitId};
use std::f64::consts::FRAC_1_SQRT_2;

/// Widest state a [`StateVector`] allocates
pub const MAX_STATEVECTOR_QUBITS: usize = 20;

/// Dense state vector over `num_qubits` lines
/// Gantree: StateVector // 상태 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// All-zero state |0...0⟩
    pub fn new(num_qubits: usize) -> LowerResult<Self> {
        Self::basis_state(num_qubits, 0)
    }

    /// Computational basis state |index⟩
    pub fn basis_state(num_qubits: usize, index: usize) -> LowerResult<Self> {
        check_width(num_qubits)?;
        let dim = 1usize << num_qubits;
        if index >= dim {
            return Err(LowerError::InvalidNetlist(format!(
                "basis state {} outside {}-qubit space",
                index, num_qubits
            )));
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Normalized random state
    pub fn random<R: Rng + ?Sized>(num_qubits: usize, rng: &mut R) -> LowerResult<Self> {
        check_width(num_qubits)?;
        let mut amplitudes: Vec<Complex64> = (0..1usize << num_qubits)
            .map(|_| Complex64::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5))
            .collect();

        let norm = amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if norm == 0.0 {
            amplitudes[0] = Complex64::new(1.0, 0.0);
        } else {
            amplitudes.iter_mut().for_each(|a| *a /= norm);
        }
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of lines
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes indexed by basis state
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probability of measuring basis state `index`
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |a| a.norm_sqr())
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    // ========================================================================
    // Evolution
    // ========================================================================

    /// Apply one basis operation
    pub fn apply_basis(&mut self, op: &BasisOp) -> LowerResult<()> {
        check_qubits(&op.qubits(), self.num_qubits)?;
        match *op {
            BasisOp::X(q) => self.apply_flip(&[], 1 << q),
            BasisOp::Cx(c, t) => self.apply_flip(&[(c, true)], 1 << t),
            BasisOp::Ccx(c1, c2, t) => self.apply_flip(&[(c1, true), (c2, true)], 1 << t),
            BasisOp::H(q) => self.apply_h(q),
            BasisOp::Rz(q, angle) => self.apply_rz(q, angle),
        }
        Ok(())
    }

    /// Apply a basis operation sequence in order
    pub fn apply_ops(&mut self, ops: &[BasisOp]) -> LowerResult<()> {
        ops.iter().try_for_each(|op| self.apply_basis(op))
    }

    /// Apply a netlist gate with its direct meaning
    /// Gantree: apply_gate(gate) -> Result // 직접 의미론
    pub fn apply_gate(&mut self, gate: &Gate) -> LowerResult<()> {
        check_qubits(&gate.qubits(), self.num_qubits)?;
        match gate {
            Gate::Hadamard { targets } => targets.iter().for_each(|&t| self.apply_h(t)),
            Gate::PhaseRotationZ { angle, targets } => {
                targets.iter().for_each(|&t| self.apply_rz(t, *angle))
            }
            Gate::ControlledX { .. } | Gate::GeneralizedToffoli { .. } => {
                check_controls(gate)?;
                let controls: Vec<(QubitId, bool)> = gate
                    .controls()
                    .iter()
                    .map(|c| (c.qubit, c.polarity.active_value()))
                    .collect();
                let flip_mask = gate.targets().iter().fold(0usize, |m, &t| m ^ (1 << t));
                self.apply_flip(&controls, flip_mask);
            }
        }
        Ok(())
    }

    /// Apply a gate sequence in order
    pub fn apply_gates(&mut self, gates: &[Gate]) -> LowerResult<()> {
        gates.iter().try_for_each(|gate| self.apply_gate(gate))
    }

    fn apply_h(&mut self, q: QubitId) {
        self.apply_single_qubit(q, |a, b| ((a + b) * FRAC_1_SQRT_2, (a - b) * FRAC_1_SQRT_2));
    }

    fn apply_rz(&mut self, q: QubitId, angle: f64) {
        let phase_neg = Complex64::from_polar(1.0, -angle / 2.0);
        let phase_pos = Complex64::from_polar(1.0, angle / 2.0);
        self.apply_single_qubit(q, |a, b| (a * phase_neg, b * phase_pos));
    }

    fn apply_single_qubit<F>(&mut self, q: QubitId, f: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let mask = 1 << q;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (new_i, new_j) = f(self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = new_i;
                self.amplitudes[j] = new_j;
            }
        }
    }

    /// XOR `flip_mask` into every basis index whose controls are active
    ///
    /// Controls must be disjoint from the flipped lines, which makes the map
    /// an involution.
    fn apply_flip(&mut self, controls: &[(QubitId, bool)], flip_mask: usize) {
        for i in 0..self.amplitudes.len() {
            let j = i ^ flip_mask;
            let active = controls
                .iter()
                .all(|&(q, value)| ((i >> q) & 1 == 1) == value);
            if active && i < j {
                self.amplitudes.swap(i, j);
            }
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Inner product ⟨self|other⟩
    pub fn inner(&self, other: &StateVector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Fidelity |⟨self|other⟩|²
    pub fn fidelity(&self, other: &StateVector) -> f64 {
        self.inner(other).norm_sqr()
    }

    /// Amplitude-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &StateVector, epsilon: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() <= epsilon)
    }
}

fn check_width(num_qubits: usize) -> LowerResult<()> {
    if num_qubits > MAX_STATEVECTOR_QUBITS {
        return Err(LowerError::SimulationTooLarge {
            qubits: num_qubits,
            max: MAX_STATEVECTOR_QUBITS,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use revlower_core::Control;

    #[test]
    fn test_basis_state() {
        let state = StateVector::basis_state(2, 3).unwrap();
        assert_relative_eq!(state.probability(3), 1.0);
        assert_relative_eq!(state.probability(0), 0.0);
        assert!(StateVector::basis_state(2, 4).is_err());
    }

    #[test]
    fn test_too_wide() {
        assert!(matches!(
            StateVector::new(21),
            Err(LowerError::SimulationTooLarge { qubits: 21, max: 20 })
        ));
    }

    #[test]
    fn test_hadamard() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_basis(&BasisOp::H(0)).unwrap();
        assert_relative_eq!(state.probability(0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability(1), 0.5, epsilon = 1e-12);

        state.apply_basis(&BasisOp::H(0)).unwrap();
        assert_relative_eq!(state.probability(0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let mut state = StateVector::new(2).unwrap();
        state
            .apply_ops(&[BasisOp::H(0), BasisOp::Cx(0, 1)])
            .unwrap();
        assert_relative_eq!(state.probability(0b00), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability(0b11), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rz_phase() {
        let mut state = StateVector::basis_state(1, 1).unwrap();
        state.apply_basis(&BasisOp::Rz(0, std::f64::consts::PI)).unwrap();
        let amp = state.amplitudes()[1];
        assert_relative_eq!(amp.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(amp.im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flip_gate_matches_basis_op() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = StateVector::random(3, &mut rng).unwrap();

        let mut direct = start.clone();
        direct
            .apply_gate(&Gate::mcx([Control::positive(0), Control::positive(1)], [2]))
            .unwrap();

        let mut basis = start;
        basis.apply_basis(&BasisOp::Ccx(0, 1, 2)).unwrap();

        assert!(direct.approx_eq(&basis, 1e-12));
    }

    #[test]
    fn test_negative_control_multi_target() {
        let mut state = StateVector::new(3).unwrap();
        state
            .apply_gate(&Gate::cx(Control::negative(0), [1, 2]))
            .unwrap();
        assert_relative_eq!(state.probability(0b110), 1.0);
    }

    #[test]
    fn test_random_state_is_normalized() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = StateVector::random(4, &mut rng).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.fidelity(&state), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fidelity_orthogonal() {
        let a = StateVector::basis_state(2, 0).unwrap();
        let b = StateVector::basis_state(2, 1).unwrap();
        assert_relative_eq!(a.fidelity(&b), 0.0);
        assert!(!a.approx_eq(&b, 1e-9));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = StateVector::new(1).unwrap();
        assert!(state.apply_basis(&BasisOp::Cx(0, 1)).is_err());
        assert!(state.apply_gate(&Gate::hadamard([3])).is_err());
    }
}
