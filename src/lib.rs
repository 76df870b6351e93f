// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # slotscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/slotscope.svg)](https://crates.io/crates/slotscope)
//! [![Documentation](https://docs.rs/slotscope/badge.svg)](https://docs.rs/slotscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/slotscope/blob/main/LICENSE-APACHE)
//!
//! A flow-sensitive mutation engine for local-slot writes in stack-machine method
//! bytecode. Built in pure Rust, `slotscope` classifies every write to a numbered
//! local slot as a declaration or a redefinition - from purely local signals, without
//! building a control-flow graph - and rewrites one selected write or increment per
//! pass into a semantically reduced form for mutation testing.
//!
//! ## Features
//!
//! - **🔍 Flow-sensitive classification** - Declaration vs. assignment decided from
//!   instruction order, branch forks and merge-point snapshots alone
//! - **🔧 Type-correct rewrites** - Zero-equivalent reduction for initializations,
//!   stack-balanced suppression for redefinitions and increments
//! - **📏 Structural fidelity** - Every untargeted instruction is forwarded
//!   byte-for-byte; stack depth and value types are preserved around substitutions
//! - **⚡ Parallel batches** - Independent per-method rewrites fan out across methods
//!   with no shared mutable state
//! - **🛡️ Memory safe** - Built in Rust with comprehensive error handling
//!
//! ## Quick Start
//!
//! Add `slotscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! slotscope = "0.1"
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use slotscope::prelude::*;
//!
//! // The driver owns the registry and activation oracle
//! #[derive(Default)]
//! struct Discovery(Vec<String>);
//!
//! impl MutationContext for Discovery {
//!     fn register(&mut self, _owner: &str, description: &str) -> slotscope::Result<MutationId> {
//!         self.0.push(description.to_string());
//!         Ok(MutationId(self.0.len() as u64 - 1))
//!     }
//!     fn should_activate(&mut self, _id: MutationId) -> slotscope::Result<bool> {
//!         Ok(false) // discovery pass: activate nothing
//!     }
//! }
//!
//! // int a = 1; return a;
//! let method = [
//!     Instruction::Const(ConstValue::Int(1)),
//!     Instruction::Store { slot: 1, ty: StorageType::Int },
//!     Instruction::Load { slot: 1, ty: StorageType::Int },
//!     Instruction::Return { ty: StorageType::Int },
//! ];
//!
//! let mut context = Discovery::default();
//! let rewritten = rewrite_method(&method, &mut context)?;
//!
//! assert_eq!(rewritten, method);
//! assert_eq!(context.0, ["Removed initialization on local Integer variable 1"]);
//! # Ok::<(), slotscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `slotscope` is organized into three modules:
//!
//! - [`assembly`] - The typed instruction vocabulary exchanged with the external
//!   traversal (which decodes binary method bodies) and the output encoder (which
//!   consumes the rewritten stream)
//! - [`analysis`] - [`analysis::ScopeTracker`], the stack of live-slot sets threaded
//!   through conditional forks and merge-point snapshots
//! - [`mutation`] - Mutation point discovery, the driver-facing
//!   [`mutation::MutationContext`] interface, and the rewriter itself
//!
//! Data flows one way: the instruction stream is visited in program order, the
//! tracker updates on every store, branch and frame event, and the rewriter consults
//! it synchronously at each write to pick between declaration reduction (discard the
//! computed value, store the type's zero equivalent) and assignment suppression
//! (discard the computed value, keep the slot's prior value).
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with comprehensive error
//! information. A method containing unsupported instruction material, or whose
//! registry/oracle fails, is rejected as a whole - a pass either completes and
//! yields a fully rewritten stream or fails with no partial output.

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use slotscope::prelude::*;
///
/// let store = Instruction::Store { slot: 1, ty: StorageType::Long };
/// assert_eq!(store.mnemonic(), "lstore");
/// ```
pub mod prelude;

/// Typed instruction-stream vocabulary and opcode constants.
///
/// # Key Types
///
/// - [`assembly::Instruction`] - One element of the typed instruction stream
/// - [`assembly::StorageType`] - Local-slot storage category with rewrite metadata
/// - [`assembly::ConstValue`] - Constant operands including the zero equivalents
/// - [`assembly::Condition`] / [`assembly::Label`] - Conditional-branch model
pub mod assembly;

/// Flow-sensitive analyses threaded through the traversal.
///
/// # Key Types
///
/// - [`analysis::ScopeTracker`] - Stack of live-slot sets classifying each write as
///   declaration or assignment
pub mod analysis;

/// Mutation point discovery and the local-slot rewrite engine.
///
/// # Key Types
///
/// - [`mutation::LocalSlotRewriter`] - Single-pass visitor over one method body
/// - [`mutation::MutationContext`] - Driver-supplied registry + activation oracle
///
/// # Main Functions
///
/// - [`mutation::rewrite_method`] - Rewrite one method body
/// - [`mutation::rewrite_methods`] - Rewrite a batch of methods in parallel
pub mod mutation;

/// `slotscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `slotscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for instruction handling and collaborator failures.
pub use error::Error;
