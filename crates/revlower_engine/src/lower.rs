//! Lowering engine
//!
//! Gantree: L3_Lowering → Lowerer
//!
//! Walks a netlist in program order, validates each gate, decomposes it
//! into basis operations and appends them to a sink. A gate's whole
//! sequence is built before the first of its operations reaches the sink,
//! so a rejected gate never leaves partial output behind.

use crate::config::{LoweringConfig, ValidationMode};
use crate::decompose::decompose;
use crate::sink::{BasisCircuit, BasisSink};
use crate::stats::LoweringStats;
use revlower_core::{validate_gate, validate_gates, LowerError, LowerResult, Netlist};

/// Fresh circuit plus the statistics of the call that filled it
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered {
    /// Lowered circuit
    pub circuit: BasisCircuit,

    /// Lowering statistics
    pub stats: LoweringStats,
}

/// Netlist lowering engine
/// Gantree: Lowerer // 로워링 엔진
#[derive(Debug, Clone, Default)]
pub struct Lowerer {
    config: LoweringConfig,
}

impl Lowerer {
    /// Create an engine from a validated configuration
    pub fn new(config: LoweringConfig) -> LowerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &LoweringConfig {
        &self.config
    }

    // ========================================================================
    // Lowering
    // ========================================================================

    /// Lower into a freshly allocated circuit
    /// Gantree: lower(netlist) -> Result<Lowered> // 새 회로로 로워링
    ///
    /// The circuit has one input register of `num_qubits` lines and,
    /// if configured, a classical output register of the same width.
    pub fn lower(&self, netlist: &Netlist) -> LowerResult<Lowered> {
        let output = self
            .config
            .with_output_register
            .then_some(self.config.output_register.as_str());
        let mut circuit =
            BasisCircuit::fresh_named(netlist.num_qubits(), &self.config.input_register, output);

        let stats = self.lower_into(netlist, &mut circuit)?;
        Ok(Lowered { circuit, stats })
    }

    /// Lower into a caller-supplied sink
    /// Gantree: lower_into(netlist, sink) -> Result<LoweringStats> // 임베딩
    ///
    /// Netlist qubit `i` maps to line `i` of the sink. A sink with fewer
    /// lines than the netlist declares is rejected before anything is
    /// emitted.
    pub fn lower_into<S: BasisSink + ?Sized>(
        &self,
        netlist: &Netlist,
        sink: &mut S,
    ) -> LowerResult<LoweringStats> {
        let required = netlist.num_qubits();
        let available = sink.qubit_count();

        log::debug!(
            "Lowering {} gates over {} qubits into sink with {} lines ({})",
            netlist.num_gates(),
            required,
            available,
            self.config.validation
        );

        if available < required {
            log::debug!(
                "Rejecting netlist: sink has {} lines, {} required",
                available,
                required
            );
            return Err(LowerError::InsufficientQubits {
                required,
                available,
            });
        }

        if self.config.validation == ValidationMode::UpFront {
            validate_gates(netlist.gates(), required).map_err(rejected)?;
        }

        let mut stats = LoweringStats::default();
        for (index, gate) in netlist.gates().iter().enumerate() {
            if self.config.validation == ValidationMode::PerGate {
                validate_gate(gate, index, required).map_err(rejected)?;
            }

            let ops = decompose(gate, index).map_err(rejected)?;
            log::trace!("Gate {} ({}) -> {} ops", index, gate, ops.len());

            for op in ops {
                stats.record(&op);
                sink.emit(op);
            }
            stats.gates_lowered += 1;
        }

        log::debug!("Lowering finished: {}", stats);
        Ok(stats)
    }
}

fn rejected(err: LowerError) -> LowerError {
    log::debug!("Rejecting gate: {}", err);
    err
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Lower into a fresh circuit with default register names
/// Gantree: lower_fresh(netlist, with_output) -> Result<BasisCircuit> // 편의 함수
pub fn lower_fresh(netlist: &Netlist, with_output_register: bool) -> LowerResult<BasisCircuit> {
    let config = LoweringConfig::default().with_output_register(with_output_register);
    Ok(Lowerer { config }.lower(netlist)?.circuit)
}

/// Lower into an existing sink with the default configuration
/// Gantree: embed(netlist, sink) -> Result<LoweringStats> // 편의 함수
pub fn embed<S: BasisSink + ?Sized>(netlist: &Netlist, sink: &mut S) -> LowerResult<LoweringStats> {
    Lowerer::default().lower_into(netlist, sink)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use revlower_core::{BasisOp, Control, Gate, NetlistBuilder, QubitId};

    fn netlist(num_qubits: usize, gates: Vec<Gate>) -> Netlist {
        Netlist::from_gates(num_qubits, gates)
    }

    #[test]
    fn test_lower_fresh() {
        let nl = NetlistBuilder::new(3).h([0, 1]).toffoli(0, 1, 2).build();
        let circuit = lower_fresh(&nl, false).unwrap();

        assert_eq!(
            circuit.ops(),
            &[BasisOp::H(0), BasisOp::H(1), BasisOp::Ccx(0, 1, 2)]
        );
        assert_eq!(circuit.qubit_count(), 3);
        assert!(circuit.cregs().is_empty());
    }

    #[test]
    fn test_lower_fresh_with_output_register() {
        let nl = NetlistBuilder::new(2).not(1).build();
        let circuit = lower_fresh(&nl, true).unwrap();

        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.cregs()[0].name, "cr");
        assert_eq!(circuit.ops(), &[BasisOp::X(1)]);
    }

    #[test]
    fn test_lower_uses_configured_names() {
        let config = LoweringConfig::default()
            .with_output_register(true)
            .with_register_names("lines", "bits");
        let lowerer = Lowerer::new(config).unwrap();

        let nl = NetlistBuilder::new(2).cx(0, 1).build();
        let lowered = lowerer.lower(&nl).unwrap();

        assert_eq!(lowered.circuit.qregs()[0].name, "lines");
        assert_eq!(lowered.circuit.cregs()[0].name, "bits");
        assert!(lowered.circuit.to_qasm().contains("cx lines[0],lines[1];"));
        assert_eq!(lowered.stats.gates_lowered, 1);
        assert_eq!(lowered.stats.cx, 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LoweringConfig::default().with_register_names("", "cr");
        assert!(matches!(
            Lowerer::new(config),
            Err(LowerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_program_order_concatenation() {
        let nl = NetlistBuilder::new(3)
            .cx_neg(0, 1)
            .h([2])
            .mcx([Control::positive(2)], [0, 1])
            .build();
        let circuit = lower_fresh(&nl, false).unwrap();

        assert_eq!(
            circuit.ops(),
            &[
                BasisOp::X(0),
                BasisOp::Cx(0, 1),
                BasisOp::X(0),
                BasisOp::H(2),
                BasisOp::Cx(0, 1),
                BasisOp::Cx(2, 0),
                BasisOp::Cx(0, 1),
            ]
        );
    }

    #[test]
    fn test_stats() {
        let nl = NetlistBuilder::new(4)
            .h([0, 1, 2])
            .rz(0.25, [3])
            .mcx([Control::negative(0), Control::positive(1)], [2, 3])
            .build();
        let lowered = Lowerer::default().lower(&nl).unwrap();

        let stats = lowered.stats;
        assert_eq!(stats.gates_lowered, 3);
        assert_eq!(stats.h, 3);
        assert_eq!(stats.rz, 1);
        assert_eq!(stats.x, 2);
        assert_eq!(stats.cx, 2);
        assert_eq!(stats.ccx, 1);
        assert_eq!(stats.ops_emitted, lowered.circuit.op_count());
    }

    #[test]
    fn test_too_many_controls_emits_nothing() {
        let nl = netlist(
            4,
            vec![Gate::mcx(
                [
                    Control::positive(0),
                    Control::positive(1),
                    Control::positive(2),
                ],
                [3],
            )],
        );
        let mut circuit = BasisCircuit::fresh(4, false);

        let err = embed(&nl, &mut circuit).unwrap_err();
        assert_eq!(
            err,
            LowerError::GateArity {
                gate_index: 0,
                controls: 3,
                max: 2
            }
        );
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_arity_reported_before_range() {
        let gate = Gate::mcx(
            [
                Control::positive(7),
                Control::positive(8),
                Control::positive(9),
            ],
            [0],
        );
        let err = lower_fresh(&netlist(2, vec![gate]), false).unwrap_err();
        assert!(matches!(err, LowerError::GateArity { .. }));
    }

    #[test]
    fn test_up_front_rejection_emits_nothing() {
        let nl = netlist(
            2,
            vec![Gate::hadamard([0]), Gate::cx(Control::positive(0), [5])],
        );
        let mut circuit = BasisCircuit::fresh(2, false);
        let lowerer = Lowerer::new(LoweringConfig::strict()).unwrap();

        let err = lowerer.lower_into(&nl, &mut circuit).unwrap_err();
        assert_eq!(
            err,
            LowerError::QubitRange {
                gate_index: 1,
                qubit: 5,
                qubit_count: 2
            }
        );
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_per_gate_rejection_keeps_earlier_gates() {
        let nl = netlist(
            3,
            vec![
                Gate::hadamard([0, 1]),
                Gate::mcx([Control::negative(0)], [1, 2, 9]),
                Gate::hadamard([2]),
            ],
        );
        let mut circuit = BasisCircuit::fresh(3, false);
        let lowerer = Lowerer::new(LoweringConfig::streaming()).unwrap();

        let err = lowerer.lower_into(&nl, &mut circuit).unwrap_err();
        assert_eq!(err.gate_index(), Some(1));
        assert!(err.is_validation_error());

        // First gate stays, the failing gate and everything after add nothing
        assert_eq!(circuit.ops(), &[BasisOp::H(0), BasisOp::H(1)]);
    }

    #[test]
    fn test_empty_targets_rejected() {
        let nl = netlist(1, vec![Gate::rz(0.1, Vec::<QubitId>::new())]);
        let err = lower_fresh(&nl, false).unwrap_err();
        assert_eq!(err, LowerError::EmptyTargets { gate_index: 0 });
    }

    #[test]
    fn test_insufficient_qubits_leaves_sink_unchanged() {
        let mut circuit = BasisCircuit::fresh(2, false);
        circuit.emit(BasisOp::H(0));

        let nl = NetlistBuilder::new(3).not(0).build();
        for config in [LoweringConfig::strict(), LoweringConfig::streaming()] {
            let err = Lowerer::new(config)
                .unwrap()
                .lower_into(&nl, &mut circuit)
                .unwrap_err();
            assert_eq!(
                err,
                LowerError::InsufficientQubits {
                    required: 3,
                    available: 2
                }
            );
            assert_eq!(circuit.op_count(), 1);
        }
    }

    #[test]
    fn test_embed_reuses_leading_lines() {
        let mut circuit = BasisCircuit::new();
        circuit.add_qreg("a", 2).unwrap();
        circuit.add_qreg("anc", 2).unwrap();
        circuit.add_creg("m", 4).unwrap();
        circuit.emit(BasisOp::X(3));

        let nl = NetlistBuilder::new(3).toffoli(0, 1, 2).build();
        let stats = embed(&nl, &mut circuit).unwrap();

        assert_eq!(stats.ops_emitted, 1);
        assert_eq!(circuit.ops(), &[BasisOp::X(3), BasisOp::Ccx(0, 1, 2)]);
        assert!(circuit.to_qasm().contains("ccx a[0],a[1],anc[0];"));
    }

    #[test]
    fn test_range_checked_against_netlist_width() {
        // Line 3 exists in the sink but not in the netlist
        let nl = netlist(2, vec![Gate::hadamard([3])]);
        let mut circuit = BasisCircuit::fresh(4, false);

        let err = embed(&nl, &mut circuit).unwrap_err();
        assert!(matches!(err, LowerError::QubitRange { qubit: 3, .. }));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_custom_sink() {
        #[derive(Default)]
        struct Recorder {
            names: Vec<&'static str>,
        }

        impl BasisSink for Recorder {
            fn qubit_count(&self) -> usize {
                8
            }

            fn emit(&mut self, op: BasisOp) {
                self.names.push(op.name());
            }
        }

        let nl = NetlistBuilder::new(3)
            .mcx([Control::negative(0)], [1, 2])
            .build();
        let mut recorder = Recorder::default();
        embed(&nl, &mut recorder).unwrap();

        assert_eq!(recorder.names, vec!["cx", "x", "cx", "x", "cx"]);
    }

    #[test]
    fn test_dyn_sink() {
        let nl = NetlistBuilder::new(1).not(0).build();
        let mut circuit = BasisCircuit::fresh(1, false);
        let sink: &mut dyn BasisSink = &mut circuit;

        embed(&nl, sink).unwrap();
        assert_eq!(circuit.ops(), &[BasisOp::X(0)]);
    }

    #[test]
    fn test_empty_netlist() {
        let lowered = Lowerer::default().lower(&Netlist::new(2)).unwrap();
        assert!(lowered.circuit.is_empty());
        assert_eq!(lowered.stats, LoweringStats::default());
    }
}
