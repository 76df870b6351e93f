//! Convenient re-exports of the most commonly used types and traits.
//!
//! This module provides a curated selection of the most frequently used types from
//! across the slotscope library, allowing for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use slotscope::prelude::*;
//!
//! let mut scope = ScopeTracker::new();
//! assert!(scope.on_store(1));
//! ```

pub use crate::analysis::ScopeTracker;
pub use crate::assembly::{Condition, ConstValue, Instruction, Label, StorageType};
pub use crate::mutation::{
    rewrite_method, rewrite_methods, LocalSlotRewriter, MutationContext, MutationId,
    MutationKind, MutationPoint, OWNER,
};
pub use crate::{Error, Result};
