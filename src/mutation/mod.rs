//! Mutation point discovery and the local-slot rewrite engine.
//!
//! Everything in this module runs inside one synchronous method traversal: writes and
//! increments become registered mutation points, the driver's activation oracle picks
//! at most one, and the activated instruction is emitted in its reduced form while the
//! rest of the stream passes through byte-for-byte.
//!
//! # Key Types
//! - [`LocalSlotRewriter`] - Single-pass visitor over one method's instruction stream
//! - [`MutationContext`] - Driver-supplied registry + activation oracle
//! - [`MutationPoint`] / [`MutationKind`] / [`MutationId`] - Discovery model
//!
//! # Main Functions
//! - [`rewrite_method`] - Rewrite one method body
//! - [`rewrite_methods`] - Rewrite a batch of methods in parallel

mod context;
mod point;
mod rewriter;

pub use context::MutationContext;
pub use point::{MutationId, MutationKind, MutationPoint};
pub use rewriter::{rewrite_method, rewrite_methods, LocalSlotRewriter, OWNER};
