//! Flow-sensitive analyses over the instruction stream.
//!
//! The engine deliberately builds no control-flow graph; everything it knows about
//! control flow is threaded through [`ScopeTracker`] as the stream is traversed in
//! program order.
//!
//! # Key Types
//! - [`ScopeTracker`] - Stack of live-slot sets classifying writes as declarations
//!   or assignments

mod scope;

pub use scope::ScopeTracker;
