//! Netlist Lowering Example
//!
//! Lowers a small mixed-polarity netlist into a fresh circuit, then embeds
//! the same netlist into a caller-owned circuit with an ancilla register.
//!
//! Usage:
//! ```bash
//! cargo run --example lower_netlist
//! cargo run --example lower_netlist -- path/to/netlist.json
//! ```

use anyhow::Context;
use revlower_engine::prelude::*;
use std::fs;

const DEMO_NETLIST: &str = r#"{
    "num_qubits": 4,
    "name": "demo",
    "gates": [
        {"kind": "h", "targets": [0, 1]},
        {"kind": "cx", "control": {"qubit": 0, "polarity": "negative"}, "targets": [2, 3]},
        {"kind": "toffoli", "controls": [{"qubit": 0}, {"qubit": 1, "polarity": "negative"}], "targets": [3]},
        {"kind": "rz", "angle": 0.785398, "targets": [3]}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    let json = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        None => DEMO_NETLIST.to_string(),
    };

    let netlist = Netlist::from_json(&json).context("parsing netlist")?;
    println!("{}", netlist);

    // ========================================================================
    // Fresh circuit
    // ========================================================================

    let lowerer = Lowerer::new(LoweringConfig::strict().with_output_register(true))?;
    let Lowered { circuit, stats } = lowerer.lower(&netlist)?;

    println!("{}", stats);
    println!("{}", circuit);
    println!("{}\n", circuit.to_qasm());

    // ========================================================================
    // Embedded circuit
    // ========================================================================

    let mut host = BasisCircuit::new();
    host.add_qreg("data", 2)?;
    host.add_qreg("anc", netlist.num_qubits().saturating_sub(2) + 1)?;
    host.add_creg("meas", 2)?;

    let stats = embed(&netlist, &mut host)?;
    println!("Embedded {} ops into {} lines", stats.ops_emitted, host.qubit_count());
    println!("{}", host.to_qasm());

    // ========================================================================
    // Rejection
    // ========================================================================

    let mut small = BasisCircuit::fresh(2, false);
    match embed(&netlist, &mut small) {
        Err(err @ LowerError::InsufficientQubits { .. }) => {
            println!("\nRejected as expected: {} ({} ops in sink)", err, small.op_count())
        }
        other => anyhow::bail!("expected InsufficientQubits, got {:?}", other),
    }

    Ok(())
}
