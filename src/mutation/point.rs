//! Mutation point identity and description model.
//!
//! A mutation point is one discovered opportunity to alter behavior: reducing an
//! initializing write to its type's zero equivalent, suppressing a redefinition, or
//! suppressing an increment. Points are created transiently as their instruction is
//! visited; the driver-owned registry is the durable store, and the [`MutationId`] it
//! assigns is the stable handle the activation oracle keys on.

use strum::{Display, EnumCount, EnumIter};

use crate::assembly::StorageType;

/// Stable identifier of a registered mutation point.
///
/// Assigned by the external registry in strict traversal order, so for a given input
/// method body the same instruction always receives the same identifier across
/// mutant-generation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationId(pub u64);

impl std::fmt::Display for MutationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of reduction a mutation point performs.
///
/// `Display` renders the lower-case word used in mutation descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum MutationKind {
    /// First live write of a slot: the stored value is replaced with the type's
    /// zero equivalent, keeping the slot definitely assigned.
    Initialization,
    /// Redefinition of a live slot: the store is dropped and the computed value
    /// discarded, leaving the slot's prior value in place.
    Assignment,
    /// Read-modify-write increment: the increment is suppressed outright.
    Increment,
}

/// A discovered mutation opportunity, built transiently per visited instruction.
///
/// Carries the slot, the reduction kind, and - for stores - the storage type; the
/// textual description derived from these is what the registry persists.
///
/// # Examples
///
/// ```rust
/// use slotscope::mutation::{MutationKind, MutationPoint};
/// use slotscope::assembly::StorageType;
///
/// let point = MutationPoint::store(MutationKind::Initialization, 3, StorageType::Double);
/// assert_eq!(
///     point.description(),
///     "Removed initialization on local Double variable 3"
/// );
///
/// let point = MutationPoint::increment(1);
/// assert_eq!(point.description(), "Removed increment on local variable 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MutationPoint {
    /// Index of the targeted slot
    pub slot: u16,
    /// Kind of reduction this point performs
    pub kind: MutationKind,
    /// Storage type of the written value; `None` for increments, which are always
    /// integer-typed and described without a type word
    pub ty: Option<StorageType>,
}

impl MutationPoint {
    /// Creates the point for a classified write.
    #[must_use]
    pub const fn store(kind: MutationKind, slot: u16, ty: StorageType) -> Self {
        MutationPoint {
            slot,
            kind,
            ty: Some(ty),
        }
    }

    /// Creates the point for an increment instruction.
    #[must_use]
    pub const fn increment(slot: u16) -> Self {
        MutationPoint {
            slot,
            kind: MutationKind::Increment,
            ty: None,
        }
    }

    /// Builds the canonical description the registry persists for this point.
    #[must_use]
    pub fn description(&self) -> String {
        match self.ty {
            Some(ty) => format!(
                "Removed {} on local {} variable {}",
                self.kind, ty, self.slot
            ),
            None => format!("Removed {} on local variable {}", self.kind, self.slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_descriptions() {
        let decl = MutationPoint::store(MutationKind::Initialization, 2, StorageType::Int);
        assert_eq!(
            decl.description(),
            "Removed initialization on local Integer variable 2"
        );

        let assign = MutationPoint::store(MutationKind::Assignment, 2, StorageType::Reference);
        assert_eq!(
            assign.description(),
            "Removed assignment on local Reference variable 2"
        );
    }

    #[test]
    fn test_increment_description_has_no_type_word() {
        let point = MutationPoint::increment(4);
        assert_eq!(point.description(), "Removed increment on local variable 4");
    }

    #[test]
    fn test_id_ordering_follows_assignment_order() {
        assert!(MutationId(0) < MutationId(1));
        assert_eq!(MutationId(7).to_string(), "#7");
    }
}
