//! Driver-supplied registry and activation oracle interface.
//!
//! The engine discovers mutation points; the mutant-generation driver owns them. This
//! module defines the two calls the engine makes against the driver: registering a
//! discovered point, and asking whether the point is the one activated for the current
//! generation pass. The engine only consumes this trait, it never implements it.

use crate::{mutation::MutationId, Result};

/// Registry and activation oracle owned by the mutant-generation driver.
///
/// One implementation instance belongs to exactly one method traversal; the engine
/// calls it synchronously, in strict program order, once per discovered point. A
/// driver typically activates exactly one identifier per generated mutant so that a
/// single behavioral change is introduced at a time, and activates none during a
/// pure discovery pass.
///
/// # Errors
///
/// Both operations are fallible. A failure has no side-effect-free default - in
/// particular a failed activation query is never treated as "inactive" - so the
/// engine propagates it and abandons the method's rewrite.
///
/// # Examples
///
/// ```rust
/// use slotscope::mutation::{MutationContext, MutationId};
/// use slotscope::Result;
///
/// /// Discovery-pass context: records every description, activates nothing.
/// #[derive(Default)]
/// struct Discovery {
///     descriptions: Vec<String>,
/// }
///
/// impl MutationContext for Discovery {
///     fn register(&mut self, _owner: &str, description: &str) -> Result<MutationId> {
///         self.descriptions.push(description.to_string());
///         Ok(MutationId(self.descriptions.len() as u64 - 1))
///     }
///
///     fn should_activate(&mut self, _id: MutationId) -> Result<bool> {
///         Ok(false)
///     }
/// }
/// ```
pub trait MutationContext {
    /// Registers a discovered mutation point and returns its stable identifier.
    ///
    /// `owner` is the registering engine's identity ([`crate::mutation::OWNER`]),
    /// `description` the canonical point description. Called for every discovered
    /// point, active or not - identifier stability across passes depends on it.
    ///
    /// # Errors
    ///
    /// Any registry failure; the engine abandons the method's rewrite.
    fn register(&mut self, owner: &str, description: &str) -> Result<MutationId>;

    /// Returns whether the identified point is activated for the current pass.
    ///
    /// # Errors
    ///
    /// Any oracle failure; the engine abandons the method's rewrite rather than
    /// defaulting to "inactive".
    fn should_activate(&mut self, id: MutationId) -> Result<bool>;
}
