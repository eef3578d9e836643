//! Gate decomposition rules
//!
//! Gantree: L3_Lowering → Decompose
//!
//! Maps one netlist gate to its basis-operation sequence. The functions
//! here are pure; they build the whole sequence for a gate before the
//! engine hands any of it to a sink.

use revlower_core::{BasisOp, Control, Gate, LowerError, LowerResult, QubitId, MAX_CONTROLS};

/// Decompose one gate into basis operations
/// Gantree: decompose(gate, idx) -> Result<Vec<BasisOp>> // 게이트 분해
///
/// Structural failures (no targets, too many controls) are reported with
/// `gate_index`; qubit ranges are the caller's concern.
pub fn decompose(gate: &Gate, gate_index: usize) -> LowerResult<Vec<BasisOp>> {
    match gate {
        Gate::Hadamard { targets } => {
            non_empty(targets, gate_index)?;
            Ok(targets.iter().map(|&t| BasisOp::H(t)).collect())
        }
        Gate::PhaseRotationZ { angle, targets } => {
            non_empty(targets, gate_index)?;
            Ok(targets.iter().map(|&t| BasisOp::Rz(t, *angle)).collect())
        }
        Gate::ControlledX { control, targets } => {
            controlled_flip(std::slice::from_ref(control), targets, gate_index)
        }
        Gate::GeneralizedToffoli { controls, targets } => {
            controlled_flip(controls, targets, gate_index)
        }
    }
}

/// Multi-target controlled flip
/// Gantree: controlled_flip(ctrls, tgts) -> Result<Vec<BasisOp>> // 다중 타깃 분해
///
/// With `targets = [p, s1..sk]`, emits copy-in `CX(p, s_i)`, an `X` on each
/// negative control, the core flip on `p`, the same `X`s again, and the
/// copy-out `CX(p, s_i)`. The sections must stay in this order.
pub fn controlled_flip(
    controls: &[Control],
    targets: &[QubitId],
    gate_index: usize,
) -> LowerResult<Vec<BasisOp>> {
    let Some((&primary, secondaries)) = targets.split_first() else {
        return Err(LowerError::EmptyTargets { gate_index });
    };

    let core = match controls {
        [] => BasisOp::X(primary),
        [c] => BasisOp::Cx(c.qubit, primary),
        [c1, c2] => BasisOp::Ccx(c1.qubit, c2.qubit, primary),
        _ => {
            return Err(LowerError::GateArity {
                gate_index,
                controls: controls.len(),
                max: MAX_CONTROLS,
            })
        }
    };

    let negated: Vec<QubitId> = controls
        .iter()
        .filter(|c| c.is_negative())
        .map(|c| c.qubit)
        .collect();

    let copy = secondaries.iter().map(|&s| BasisOp::Cx(primary, s));
    let flip = negated.iter().map(|&q| BasisOp::X(q));

    let mut ops = Vec::with_capacity(flip_op_count(controls, targets.len()));
    ops.extend(copy.clone());
    ops.extend(flip.clone());
    ops.push(core);
    ops.extend(flip);
    ops.extend(copy);
    Ok(ops)
}

/// Number of basis operations a controlled flip lowers to: `2k + 2·|negs| + 1`
pub fn flip_op_count(controls: &[Control], num_targets: usize) -> usize {
    let secondaries = num_targets.saturating_sub(1);
    let negated = controls.iter().filter(|c| c.is_negative()).count();
    2 * secondaries + 2 * negated + 1
}

/// Number of basis operations a well-formed gate lowers to
pub fn op_count(gate: &Gate) -> usize {
    match gate {
        Gate::Hadamard { targets } | Gate::PhaseRotationZ { targets, .. } => targets.len(),
        Gate::ControlledX { .. } | Gate::GeneralizedToffoli { .. } => {
            flip_op_count(gate.controls(), gate.targets().len())
        }
    }
}

fn non_empty(targets: &[QubitId], gate_index: usize) -> LowerResult<()> {
    if targets.is_empty() {
        return Err(LowerError::EmptyTargets { gate_index });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
