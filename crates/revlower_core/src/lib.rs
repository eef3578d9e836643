//! # RevLower Core
//!
//! Gate model, netlists, basis operations, and validation for the
//! reversible netlist lowering engine.
//!
//! ## Gantree Architecture
//!
//! ```text
//! revlower_core // L0+L1: Foundation + Netlist (완료)
//!     L0_Foundation // 기반 타입/에러 (완료)
//!         CoreTypes // QubitId, Angle, Polarity, Control (완료)
//!         Errors // LowerError (완료)
//!     L1_Netlist // 넷리스트 구조 (완료)
//!         Gate // 닫힌 게이트 집합 (완료)
//!         BasisOp // {X, CX, CCX, H, RZ} (완료)
//!         Netlist // 넷리스트 + JSON (완료)
//!         NetlistBuilder // 빌더 패턴 (완료)
//!         Validation // 제어 수/범위 검증 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use revlower_core::prelude::*;
//!
//! // Swap qubits 0 and 1 with three CNOTs
//! let netlist = NetlistBuilder::new(2)
//!     .cx(1, 0)
//!     .cx(0, 1)
//!     .cx(1, 0)
//!     .build();
//!
//! assert_eq!(netlist.num_gates(), 3);
//! assert!(netlist.validate().is_ok());
//! ```
//!
//! ## Mixed Polarity
//!
//! ```rust
//! use revlower_core::prelude::*;
//!
//! // Flip qubits 2 and 3 when q0 = 1 and q1 = 0
//! let gate = Gate::mcx([Control::positive(0), Control::negative(1)], [2, 3]);
//! assert_eq!(gate.num_controls(), 2);
//! assert_eq!(gate.to_string(), "generalized_toffoli [0,!1] -> [2,3]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Netlist gates (Gantree: L1_Netlist → Gate)
pub mod gate;

/// Basis operations (Gantree: L1_Netlist → BasisOp)
pub mod basis;

/// Netlist structure (Gantree: L1_Netlist → Netlist)
pub mod netlist;

/// Netlist builder (Gantree: L1_Netlist → NetlistBuilder)
pub mod builder;

/// Gate validation (Gantree: L1_Netlist → Validation)
pub mod validate;

// ============================================================================
// Re-exports
// ============================================================================

pub use basis::BasisOp;
pub use builder::NetlistBuilder;
pub use error::{LowerError, LowerResult};
pub use gate::{Gate, GateKind, MAX_CONTROLS};
pub use netlist::Netlist;
pub use types::{Angle, Control, Polarity, QubitId};
pub use validate::{validate_gate, validate_gates};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use revlower_core::prelude::*;
    //! ```

    pub use crate::basis::BasisOp;
    pub use crate::builder::NetlistBuilder;
    pub use crate::error::{LowerError, LowerResult};
    pub use crate::gate::{Gate, GateKind, MAX_CONTROLS};
    pub use crate::netlist::Netlist;
    pub use crate::types::{Angle, Control, Polarity, QubitId};
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
