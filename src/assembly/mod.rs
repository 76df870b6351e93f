//! Instruction-stream vocabulary shared with the traversal and encoder collaborators.
//!
//! The engine neither decodes binary method bodies nor encodes rewritten ones; both
//! sides of that exchange are external. This module owns the typed events the three
//! parties pass around and the opcode constants behind them.
//!
//! # Key Types
//! - [`Instruction`] - One element of the typed instruction stream
//! - [`StorageType`] - Local-slot storage category with per-type rewrite metadata
//! - [`ConstValue`] - Constant operands including the zero equivalents
//! - [`Condition`] - Conditional-branch comparison tags
//! - [`Label`] - Branch-target identity
//!
//! # Example
//! ```rust
//! use slotscope::assembly::{ConstValue, Instruction, StorageType};
//!
//! let init = [
//!     Instruction::Const(ConstValue::Int(1)),
//!     Instruction::Store { slot: 1, ty: StorageType::Int },
//! ];
//! assert_eq!(init[1].mnemonic(), "istore");
//! ```

mod instruction;
pub mod opcodes;

pub use instruction::{Condition, ConstValue, Instruction, Label, StorageType};
