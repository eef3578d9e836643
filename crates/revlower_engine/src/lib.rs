//! # RevLower Engine
//!
//! Lowers reversible/quantum netlists onto the basis `{X, CX, CCX, H, RZ}`.
//!
//! ## Gantree Architecture
//!
//! ```text
//! revlower_engine // L2+L3: Sink + Lowering (완료)
//!     L2_Sink // 기저 게이트 싱크 (완료)
//!         BasisSink // qubit_count(), emit(op) (완료)
//!         BasisCircuit // 레지스터 인식 회로 + QASM (완료)
//!     L3_Lowering // 로워링 (완료)
//!         Decompose // 게이트별 분해 (완료)
//!         LoweringConfig // 검증 시점, 레지스터 이름 (완료)
//!         Lowerer // lower(), lower_into() (완료)
//!         LoweringStats // 통계 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use revlower_engine::prelude::*;
//!
//! // Flip qubits 1 and 2 when qubit 0 is 0
//! let netlist = NetlistBuilder::new(3)
//!     .mcx([Control::negative(0)], [1, 2])
//!     .build();
//!
//! let circuit = lower_fresh(&netlist, true).unwrap();
//! assert_eq!(
//!     circuit.ops(),
//!     &[
//!         BasisOp::Cx(1, 2),
//!         BasisOp::X(0),
//!         BasisOp::Cx(0, 1),
//!         BasisOp::X(0),
//!         BasisOp::Cx(1, 2),
//!     ]
//! );
//! ```
//!
//! ## Embedding
//!
//! ```rust
//! use revlower_engine::prelude::*;
//!
//! let mut circuit = BasisCircuit::new();
//! circuit.add_qreg("data", 2).unwrap();
//! circuit.add_qreg("anc", 1).unwrap();
//!
//! let netlist = NetlistBuilder::new(3).toffoli(0, 1, 2).build();
//! embed(&netlist, &mut circuit).unwrap();
//!
//! assert!(circuit.to_qasm().contains("ccx data[0],data[1],anc[0];"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Basis sinks (Gantree: L2_Sink → BasisSink)
pub mod sink;

/// Gate decomposition (Gantree: L3_Lowering → Decompose)
pub mod decompose;

/// Configuration (Gantree: L3_Lowering → LoweringConfig)
pub mod config;

/// Lowering statistics (Gantree: L3_Lowering → LoweringStats)
pub mod stats;

/// Lowering engine (Gantree: L3_Lowering → Lowerer)
pub mod lower;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{LoweringConfig, ValidationMode};
pub use decompose::{controlled_flip, decompose, flip_op_count, op_count};
pub use lower::{embed, lower_fresh, Lowered, Lowerer};
pub use sink::{BasisCircuit, BasisSink, Register};
pub use stats::LoweringStats;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use revlower_engine::prelude::*;
    //! ```

    pub use crate::config::{LoweringConfig, ValidationMode};
    pub use crate::lower::{embed, lower_fresh, Lowered, Lowerer};
    pub use crate::sink::{BasisCircuit, BasisSink, Register};
    pub use crate::stats::LoweringStats;

    pub use revlower_core::prelude::*;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
