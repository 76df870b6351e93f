//! Single-pass rewriter turning one selected slot write or increment into its
//! semantically reduced form.
//!
//! This module implements the mutation engine proper. The instruction stream is
//! visited in program order, exactly once, with no look-ahead; a [`ScopeTracker`]
//! threads the live-slot bookkeeping through forks and merges, and every store and
//! increment is registered with the driver's [`MutationContext`] in discovery order.
//! At most one point is typically activated per pass, and only that instruction's
//! emitted form differs from its input.
//!
//! # Rewrite rules
//!
//! - **Declaration reduction** (activated first live write): the value on top of the
//!   evaluation stack is discarded - one word for `Integer`/`Float`/`Reference`, two
//!   for `Long`/`Double` - the type's zero equivalent is pushed, and the original
//!   store is performed. The slot still gets written, preserving definite-assignment
//!   validity, but always with the neutral value.
//! - **Assignment suppression** (activated redefinition): the computed value is
//!   discarded and the store is dropped entirely; the slot keeps its prior value.
//!   The right-hand side was already evaluated by the preceding instructions, so its
//!   side effects are preserved - only its result is thrown away.
//! - **Increment suppression** (activated `iinc`): the instruction is omitted;
//!   the slot is left untouched. The delta is never altered, only dropped whole.
//!
//! # Basic Usage
//!
//! ```rust
//! use slotscope::assembly::{ConstValue, Instruction, StorageType};
//! use slotscope::mutation::{rewrite_method, MutationContext, MutationId};
//!
//! #[derive(Default)]
//! struct Discovery(Vec<String>);
//!
//! impl MutationContext for Discovery {
//!     fn register(&mut self, _owner: &str, description: &str) -> slotscope::Result<MutationId> {
//!         self.0.push(description.to_string());
//!         Ok(MutationId(self.0.len() as u64 - 1))
//!     }
//!     fn should_activate(&mut self, _id: MutationId) -> slotscope::Result<bool> {
//!         Ok(false)
//!     }
//! }
//!
//! let method = [
//!     Instruction::Const(ConstValue::Int(1)),
//!     Instruction::Store { slot: 1, ty: StorageType::Int },
//!     Instruction::Load { slot: 1, ty: StorageType::Int },
//!     Instruction::Return { ty: StorageType::Int },
//! ];
//!
//! let mut context = Discovery::default();
//! let rewritten = rewrite_method(&method, &mut context)?;
//! assert_eq!(rewritten, method); // nothing active: pass-through
//! assert_eq!(context.0, ["Removed initialization on local Integer variable 1"]);
//! # Ok::<(), slotscope::Error>(())
//! ```

use rayon::prelude::*;

use crate::{
    analysis::ScopeTracker,
    assembly::Instruction,
    mutation::{MutationContext, MutationKind, MutationPoint},
    Result,
};

/// Owner identity passed to the registry on every registration.
///
/// Groups the points this engine discovers under one operator name, so drivers
/// running several mutation operators can attribute each point to its source.
pub const OWNER: &str = "LOCAL_SLOT_MUTATOR";

/// Single-pass local-slot mutation rewriter for one method body.
///
/// Owns the scope bookkeeping for one traversal and borrows the driver's context.
/// Feed it every instruction of the method in program order via [`visit`](Self::visit),
/// then take the rewritten stream with [`finish`](Self::finish). A visit error means
/// the whole pass is abandoned; the partially built output is dropped with the
/// rewriter.
///
/// Instances are single-use and exclusively owned; independent methods rewrite in
/// parallel by giving each its own rewriter and context (see [`rewrite_methods`]).
pub struct LocalSlotRewriter<'a, C: MutationContext> {
    context: &'a mut C,
    scope: ScopeTracker,
    out: Vec<Instruction>,
}

impl<'a, C: MutationContext> LocalSlotRewriter<'a, C> {
    /// Creates a rewriter for one method traversal.
    pub fn new(context: &'a mut C) -> Self {
        LocalSlotRewriter {
            context,
            scope: ScopeTracker::new(),
            out: Vec::new(),
        }
    }

    /// Visits the next instruction of the method, in program order.
    ///
    /// Stores and increments are registered as mutation points and either forwarded
    /// or reduced; branches and frames update the scope bookkeeping and are always
    /// forwarded; every other instruction passes through untouched.
    ///
    /// # Errors
    ///
    /// Propagates registry/oracle failures ([`crate::Error::Context`]); the pass
    /// must then be abandoned.
    pub fn visit(&mut self, insn: &Instruction) -> Result<()> {
        match insn {
            Instruction::Store { slot, ty } => {
                // Classification must happen once per write, before the oracle is
                // consulted: registration order is what makes identifiers stable.
                let kind = if self.scope.on_store(*slot) {
                    MutationKind::Initialization
                } else {
                    MutationKind::Assignment
                };

                let point = MutationPoint::store(kind, *slot, *ty);
                if self.should_mutate(&point)? {
                    self.out.push(ty.pop());
                    if kind == MutationKind::Initialization {
                        self.out.push(Instruction::Const(ty.zero()));
                        self.out.push(insn.clone());
                    }
                } else {
                    self.out.push(insn.clone());
                }
            }

            Instruction::Increment { slot, .. } => {
                let point = MutationPoint::increment(*slot);
                if !self.should_mutate(&point)? {
                    self.out.push(insn.clone());
                }
            }

            Instruction::Branch { .. } => {
                self.scope.on_conditional_branch();
                self.out.push(insn.clone());
            }

            Instruction::Frame { live } => {
                self.scope.on_merge_point(live.iter().copied());
                self.out.push(insn.clone());
            }

            // Unconditional jumps fork nothing; everything else is not the
            // engine's business and passes through untouched.
            _ => self.out.push(insn.clone()),
        }

        Ok(())
    }

    /// Consumes the rewriter and returns the rewritten instruction stream.
    #[must_use]
    pub fn finish(self) -> Vec<Instruction> {
        self.out
    }

    fn should_mutate(&mut self, point: &MutationPoint) -> Result<bool> {
        let id = self.context.register(OWNER, &point.description())?;
        self.context.should_activate(id)
    }
}

/// Rewrites one method body in a single pass.
///
/// Convenience wrapper driving a [`LocalSlotRewriter`] over the whole stream. Either
/// the complete rewritten stream is returned or the pass fails outright; no partial
/// output is surfaced.
///
/// # Errors
///
/// Propagates the first visit error (registry/oracle failure).
///
/// # Examples
///
/// See the [module documentation](self).
pub fn rewrite_method<C>(method: &[Instruction], context: &mut C) -> Result<Vec<Instruction>>
where
    C: MutationContext,
{
    let mut rewriter = LocalSlotRewriter::new(context);
    for insn in method {
        rewriter.visit(insn)?;
    }
    Ok(rewriter.finish())
}

/// Rewrites many method bodies in parallel, one fresh context per method.
///
/// Invocations are independent by construction: each method gets its own tracker,
/// rewriter and context, and no mutable state crosses method boundaries. The factory
/// is called once per method from worker threads; a driver that needs the registered
/// points back hands out contexts that report into its own shared store.
///
/// Results are returned in input order.
///
/// # Errors
///
/// The first method-level failure aborts the batch.
///
/// # Examples
///
/// ```rust
/// use slotscope::assembly::{ConstValue, Instruction, StorageType};
/// use slotscope::mutation::{rewrite_methods, MutationContext, MutationId};
///
/// struct Inactive(u64);
///
/// impl MutationContext for Inactive {
///     fn register(&mut self, _owner: &str, _description: &str) -> slotscope::Result<MutationId> {
///         self.0 += 1;
///         Ok(MutationId(self.0 - 1))
///     }
///     fn should_activate(&mut self, _id: MutationId) -> slotscope::Result<bool> {
///         Ok(false)
///     }
/// }
///
/// let body = vec![
///     Instruction::Const(ConstValue::Int(1)),
///     Instruction::Store { slot: 1, ty: StorageType::Int },
/// ];
/// let methods = vec![body.clone(), body.clone()];
///
/// let rewritten = rewrite_methods(&methods, || Inactive(0))?;
/// assert_eq!(rewritten, methods);
/// # Ok::<(), slotscope::Error>(())
/// ```
pub fn rewrite_methods<C, F>(methods: &[Vec<Instruction>], context_factory: F) -> Result<Vec<Vec<Instruction>>>
where
    C: MutationContext,
    F: Fn() -> C + Sync,
{
    methods
        .par_iter()
        .map(|method| {
            let mut context = context_factory();
            rewrite_method(method, &mut context)
        })
        .collect()
}
