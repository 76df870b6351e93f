//! Typed representation of the method-body instruction stream.
//!
//! This module defines the event vocabulary exchanged between the external traversal
//! (which decodes a binary method body), the mutation engine, and the output encoder.
//! It provides strongly-typed representations for local-slot storage types, constants,
//! branch conditions, and the instruction categories the engine inspects or forwards.
//!
//! # Architecture
//!
//! The module is organized around the central [`Instruction`] enum. The engine only
//! interprets a handful of its categories - stores, increments, conditional branches,
//! unconditional jumps, and merge-point frames - and forwards everything else untouched.
//! [`StorageType`] concentrates the per-type knowledge a rewrite needs: stack width,
//! zero-equivalent constant, and the discard instruction for one value of that type.
//!
//! # Key Components
//!
//! - [`Instruction`] - One element of the typed instruction stream
//! - [`StorageType`] - Local-slot storage category with its rewrite metadata
//! - [`ConstValue`] - Constant operands, including the per-type zero equivalents
//! - [`Condition`] - Conditional-branch comparison tags
//! - [`Label`] - Branch-target identity
//!
//! # Usage Examples
//!
//! ```rust
//! use slotscope::assembly::{ConstValue, Instruction, StorageType};
//!
//! // Per-type rewrite metadata
//! assert_eq!(StorageType::Long.width(), 2);
//! assert_eq!(StorageType::Reference.zero(), ConstValue::Null);
//! assert_eq!(StorageType::Double.pop(), Instruction::Pop2);
//!
//! // Opcode round-trip
//! let ty = StorageType::from_store_opcode(0x36)?;
//! assert_eq!(ty, StorageType::Int);
//! assert_eq!(ty.store_opcode(), 0x36);
//! # Ok::<(), slotscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are [`Send`] and [`Sync`]; apart from the live-slot list
//! carried by [`Instruction::Frame`] they contain only primitive data.

use strum::{Display, EnumCount, EnumIter};

use crate::{assembly::opcodes, Error, Result};

/// Storage category of a local slot.
///
/// One of the five verifier-level value categories a slot can hold. `Long` and `Double`
/// occupy two storage words and two evaluation-stack words; the others occupy one.
/// The sub-integer source types (boolean, byte, char, short) all ride the `Int`
/// encoding and are not distinguished at this level.
///
/// The storage type determines everything a rewrite needs to know about a value:
/// the constant that neutralizes it ([`zero`](Self::zero)), and the instruction that
/// discards it from the evaluation stack ([`pop`](Self::pop)).
///
/// # Examples
///
/// ```rust
/// use slotscope::assembly::StorageType;
///
/// // Display renders the words used in mutation descriptions
/// assert_eq!(StorageType::Int.to_string(), "Integer");
/// assert_eq!(StorageType::Reference.to_string(), "Reference");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum StorageType {
    /// 32-bit integer, including the boolean/byte/char/short encodings
    #[strum(serialize = "Integer")]
    Int,
    /// 32-bit floating point
    Float,
    /// 64-bit integer, two storage words
    Long,
    /// 64-bit floating point, two storage words
    Double,
    /// Object reference
    Reference,
}

impl StorageType {
    /// Returns the number of storage and evaluation-stack words a value of this
    /// type occupies.
    #[must_use]
    pub const fn width(&self) -> u8 {
        match self {
            StorageType::Long | StorageType::Double => 2,
            StorageType::Int | StorageType::Float | StorageType::Reference => 1,
        }
    }

    /// Returns the zero-equivalent constant for this type.
    ///
    /// This is the value an activated declaration reduction stores instead of the
    /// original expression result: `0`, `0.0f`, `0L`, `0.0d`, or the null reference.
    #[must_use]
    pub const fn zero(&self) -> ConstValue {
        match self {
            StorageType::Int => ConstValue::Int(0),
            StorageType::Float => ConstValue::Float(0.0),
            StorageType::Long => ConstValue::Long(0),
            StorageType::Double => ConstValue::Double(0.0),
            StorageType::Reference => ConstValue::Null,
        }
    }

    /// Returns the instruction that discards one value of this type from the top of
    /// the evaluation stack.
    ///
    /// One-word types pop a single word, two-word types pop both words of the value.
    #[must_use]
    pub const fn pop(&self) -> Instruction {
        match self.width() {
            2 => Instruction::Pop2,
            _ => Instruction::Pop,
        }
    }

    /// Decodes a store opcode byte into its storage type.
    ///
    /// Only the five indexed store forms are accepted; shorthand forms are expected
    /// to be normalized by the traversal before they reach this engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOpcode`] if `opcode` is not one of
    /// `istore`, `lstore`, `fstore`, `dstore`, `astore`.
    pub const fn from_store_opcode(opcode: u8) -> Result<Self> {
        match opcode {
            opcodes::ISTORE => Ok(StorageType::Int),
            opcodes::LSTORE => Ok(StorageType::Long),
            opcodes::FSTORE => Ok(StorageType::Float),
            opcodes::DSTORE => Ok(StorageType::Double),
            opcodes::ASTORE => Ok(StorageType::Reference),
            _ => Err(Error::UnsupportedOpcode(opcode)),
        }
    }

    /// Decodes a load opcode byte into its storage type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOpcode`] if `opcode` is not one of
    /// `iload`, `lload`, `fload`, `dload`, `aload`.
    pub const fn from_load_opcode(opcode: u8) -> Result<Self> {
        match opcode {
            opcodes::ILOAD => Ok(StorageType::Int),
            opcodes::LLOAD => Ok(StorageType::Long),
            opcodes::FLOAD => Ok(StorageType::Float),
            opcodes::DLOAD => Ok(StorageType::Double),
            opcodes::ALOAD => Ok(StorageType::Reference),
            _ => Err(Error::UnsupportedOpcode(opcode)),
        }
    }

    /// Returns the indexed store opcode byte for this type.
    #[must_use]
    pub const fn store_opcode(&self) -> u8 {
        match self {
            StorageType::Int => opcodes::ISTORE,
            StorageType::Long => opcodes::LSTORE,
            StorageType::Float => opcodes::FSTORE,
            StorageType::Double => opcodes::DSTORE,
            StorageType::Reference => opcodes::ASTORE,
        }
    }

    /// Returns the indexed load opcode byte for this type.
    #[must_use]
    pub const fn load_opcode(&self) -> u8 {
        match self {
            StorageType::Int => opcodes::ILOAD,
            StorageType::Long => opcodes::LLOAD,
            StorageType::Float => opcodes::FLOAD,
            StorageType::Double => opcodes::DLOAD,
            StorageType::Reference => opcodes::ALOAD,
        }
    }
}

/// A constant operand pushed onto the evaluation stack.
///
/// Covers the literal forms the engine emits (the zero equivalents) and the forms
/// harness scenarios push as initial values. [`ConstValue::Ref`] is an opaque non-null
/// reference handle in the style of a constant-pool index; [`ConstValue::Null`] is the
/// zero reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    /// 32-bit integer constant
    Int(i32),
    /// 32-bit floating point constant
    Float(f32),
    /// 64-bit integer constant
    Long(i64),
    /// 64-bit floating point constant
    Double(f64),
    /// The null reference
    Null,
    /// A non-null reference handle
    Ref(u32),
}

impl ConstValue {
    /// Returns the storage type of this constant.
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        match self {
            ConstValue::Int(_) => StorageType::Int,
            ConstValue::Float(_) => StorageType::Float,
            ConstValue::Long(_) => StorageType::Long,
            ConstValue::Double(_) => StorageType::Double,
            ConstValue::Null | ConstValue::Ref(_) => StorageType::Reference,
        }
    }

    /// Returns `true` if this constant is its type's zero equivalent.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            ConstValue::Int(value) => *value == 0,
            ConstValue::Float(value) => *value == 0.0,
            ConstValue::Long(value) => *value == 0,
            ConstValue::Double(value) => *value == 0.0,
            ConstValue::Null => true,
            ConstValue::Ref(_) => false,
        }
    }
}

/// Identity of a branch target within one method body.
///
/// Labels are opaque; the traversal assigns them and [`Instruction::Mark`] places them
/// in the stream. The engine never resolves them, it only forwards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub u32);

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Comparison performed by a conditional branch.
///
/// The `Eq`..`Le` forms pop one integer and compare it against zero; the `Cmp*` forms
/// pop two integers and compare them against each other. Either way the instruction
/// has two successors, which is what makes it a control-flow fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Condition {
    /// Branch if the popped value is zero (`ifeq`)
    Eq,
    /// Branch if the popped value is non-zero (`ifne`)
    Ne,
    /// Branch if the popped value is negative (`iflt`)
    Lt,
    /// Branch if the popped value is non-negative (`ifge`)
    Ge,
    /// Branch if the popped value is positive (`ifgt`)
    Gt,
    /// Branch if the popped value is non-positive (`ifle`)
    Le,
    /// Branch if the two popped values are equal (`if_icmpeq`)
    CmpEq,
    /// Branch if the two popped values differ (`if_icmpne`)
    CmpNe,
    /// Branch if the first popped operand is less (`if_icmplt`)
    CmpLt,
    /// Branch if the first popped operand is not less (`if_icmpge`)
    CmpGe,
    /// Branch if the first popped operand is greater (`if_icmpgt`)
    CmpGt,
    /// Branch if the first popped operand is not greater (`if_icmple`)
    CmpLe,
}

impl Condition {
    /// Returns the number of stack operands this comparison pops.
    #[must_use]
    pub const fn operand_count(&self) -> u8 {
        match self {
            Condition::Eq
            | Condition::Ne
            | Condition::Lt
            | Condition::Ge
            | Condition::Gt
            | Condition::Le => 1,
            Condition::CmpEq
            | Condition::CmpNe
            | Condition::CmpLt
            | Condition::CmpGe
            | Condition::CmpGt
            | Condition::CmpLe => 2,
        }
    }

    /// Returns the opcode byte of this branch form.
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        match self {
            Condition::Eq => opcodes::IFEQ,
            Condition::Ne => opcodes::IFNE,
            Condition::Lt => opcodes::IFLT,
            Condition::Ge => opcodes::IFGE,
            Condition::Gt => opcodes::IFGT,
            Condition::Le => opcodes::IFLE,
            Condition::CmpEq => opcodes::IF_ICMPEQ,
            Condition::CmpNe => opcodes::IF_ICMPNE,
            Condition::CmpLt => opcodes::IF_ICMPLT,
            Condition::CmpGe => opcodes::IF_ICMPGE,
            Condition::CmpGt => opcodes::IF_ICMPGT,
            Condition::CmpLe => opcodes::IF_ICMPLE,
        }
    }

    /// Decodes a conditional-branch opcode byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOpcode`] if `opcode` is not one of the
    /// `if*` / `if_icmp*` forms.
    pub const fn from_opcode(opcode: u8) -> Result<Self> {
        match opcode {
            opcodes::IFEQ => Ok(Condition::Eq),
            opcodes::IFNE => Ok(Condition::Ne),
            opcodes::IFLT => Ok(Condition::Lt),
            opcodes::IFGE => Ok(Condition::Ge),
            opcodes::IFGT => Ok(Condition::Gt),
            opcodes::IFLE => Ok(Condition::Le),
            opcodes::IF_ICMPEQ => Ok(Condition::CmpEq),
            opcodes::IF_ICMPNE => Ok(Condition::CmpNe),
            opcodes::IF_ICMPLT => Ok(Condition::CmpLt),
            opcodes::IF_ICMPGE => Ok(Condition::CmpGe),
            opcodes::IF_ICMPGT => Ok(Condition::CmpGt),
            opcodes::IF_ICMPLE => Ok(Condition::CmpLe),
            _ => Err(Error::UnsupportedOpcode(opcode)),
        }
    }
}

/// One element of the typed instruction stream.
///
/// The traversal presents a method body as a sequence of these events in program
/// order. The engine inspects the store, increment, branch and frame categories and
/// forwards everything else untouched; the pass-through set here is the subset needed
/// by harness scenarios, not the full instruction set.
///
/// # Examples
///
/// ```rust
/// use slotscope::assembly::{Condition, Instruction, Label, StorageType};
///
/// let branch = Instruction::Branch { cond: Condition::Eq, target: Label(1) };
/// assert!(branch.is_fork());
///
/// let frame = Instruction::Frame { live: vec![0, 1] };
/// assert!(frame.is_merge());
///
/// let store = Instruction::Store { slot: 1, ty: StorageType::Int };
/// assert_eq!(store.mnemonic(), "istore");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Pop one value and write it to a local slot.
    Store {
        /// Index of the target slot
        slot: u16,
        /// Storage type of the written value
        ty: StorageType,
    },

    /// Add a constant to an integer slot in place (`iinc`), neither reading from nor
    /// writing to the evaluation stack. The `i32` delta covers the `wide` form.
    Increment {
        /// Index of the incremented slot
        slot: u16,
        /// Signed amount added to the slot
        delta: i32,
    },

    /// Conditional branch - a control-flow fork with a taken and a fall-through
    /// successor.
    Branch {
        /// Comparison deciding whether the branch is taken
        cond: Condition,
        /// Target when the comparison holds
        target: Label,
    },

    /// Unconditional jump. Not a fork: control has exactly one successor.
    Goto {
        /// Jump target
        target: Label,
    },

    /// Synthesized merge-point snapshot carrying the externally computed list of
    /// slots live where control-flow paths converge (loop headers, branch joins,
    /// handler entries).
    Frame {
        /// Slot indices guaranteed live at this program point
        live: Vec<u16>,
    },

    /// Push a constant onto the evaluation stack.
    Const(ConstValue),

    /// Push the value of a local slot.
    Load {
        /// Index of the read slot
        slot: u16,
        /// Storage type of the read value
        ty: StorageType,
    },

    /// Pop two integers, push their sum.
    Add,

    /// Discard the top stack word.
    Pop,

    /// Discard the top two stack words (one two-word value or two one-word values).
    Pop2,

    /// Placement of a branch target in the stream.
    Mark {
        /// The label this position carries
        label: Label,
    },

    /// Pop one value of the given type and return it to the caller.
    Return {
        /// Storage type of the returned value
        ty: StorageType,
    },
}

impl Instruction {
    /// Returns `true` if this instruction forks control flow into two or more
    /// successors.
    #[must_use]
    pub const fn is_fork(&self) -> bool {
        matches!(self, Instruction::Branch { .. })
    }

    /// Returns `true` if this event is a synthesized merge-point snapshot.
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        matches!(self, Instruction::Frame { .. })
    }

    /// Returns the mnemonic of this instruction.
    #[must_use]
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Store { ty, .. } => match ty {
                StorageType::Int => "istore",
                StorageType::Long => "lstore",
                StorageType::Float => "fstore",
                StorageType::Double => "dstore",
                StorageType::Reference => "astore",
            },
            Instruction::Load { ty, .. } => match ty {
                StorageType::Int => "iload",
                StorageType::Long => "lload",
                StorageType::Float => "fload",
                StorageType::Double => "dload",
                StorageType::Reference => "aload",
            },
            Instruction::Increment { .. } => "iinc",
            Instruction::Branch { cond, .. } => match cond {
                Condition::Eq => "ifeq",
                Condition::Ne => "ifne",
                Condition::Lt => "iflt",
                Condition::Ge => "ifge",
                Condition::Gt => "ifgt",
                Condition::Le => "ifle",
                Condition::CmpEq => "if_icmpeq",
                Condition::CmpNe => "if_icmpne",
                Condition::CmpLt => "if_icmplt",
                Condition::CmpGe => "if_icmpge",
                Condition::CmpGt => "if_icmpgt",
                Condition::CmpLe => "if_icmple",
            },
            Instruction::Goto { .. } => "goto",
            Instruction::Frame { .. } => "frame",
            Instruction::Const(value) => match value {
                ConstValue::Int(_) => "ldc",
                ConstValue::Float(_) => "ldc",
                ConstValue::Long(_) | ConstValue::Double(_) => "ldc2_w",
                ConstValue::Null => "aconst_null",
                ConstValue::Ref(_) => "ldc",
            },
            Instruction::Add => "iadd",
            Instruction::Pop => "pop",
            Instruction::Pop2 => "pop2",
            Instruction::Mark { .. } => "label",
            Instruction::Return { ty } => match ty {
                StorageType::Int => "ireturn",
                StorageType::Long => "lreturn",
                StorageType::Float => "freturn",
                StorageType::Double => "dreturn",
                StorageType::Reference => "areturn",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_storage_type_widths() {
        assert_eq!(StorageType::Int.width(), 1);
        assert_eq!(StorageType::Float.width(), 1);
        assert_eq!(StorageType::Reference.width(), 1);
        assert_eq!(StorageType::Long.width(), 2);
        assert_eq!(StorageType::Double.width(), 2);
    }

    #[test]
    fn test_zero_equivalents() {
        for ty in StorageType::iter() {
            let zero = ty.zero();
            assert!(zero.is_zero());
            assert_eq!(zero.storage_type(), ty);
        }
        assert_eq!(StorageType::Reference.zero(), ConstValue::Null);
    }

    #[test]
    fn test_pop_matches_width() {
        for ty in StorageType::iter() {
            let expected = if ty.width() == 2 {
                Instruction::Pop2
            } else {
                Instruction::Pop
            };
            assert_eq!(ty.pop(), expected);
        }
    }

    #[test]
    fn test_store_opcode_roundtrip() {
        for ty in StorageType::iter() {
            assert_eq!(StorageType::from_store_opcode(ty.store_opcode()).unwrap(), ty);
            assert_eq!(StorageType::from_load_opcode(ty.load_opcode()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_opcode_is_rejected() {
        assert!(matches!(
            StorageType::from_store_opcode(opcodes::WIDE),
            Err(Error::UnsupportedOpcode(op)) if op == opcodes::WIDE
        ));
        assert!(matches!(
            StorageType::from_load_opcode(opcodes::GOTO),
            Err(Error::UnsupportedOpcode(_))
        ));
        assert!(matches!(
            Condition::from_opcode(opcodes::GOTO),
            Err(Error::UnsupportedOpcode(_))
        ));
    }

    #[test]
    fn test_condition_operand_counts() {
        assert_eq!(Condition::Eq.operand_count(), 1);
        assert_eq!(Condition::CmpGe.operand_count(), 2);
        for cond in Condition::iter() {
            assert_eq!(Condition::from_opcode(cond.opcode()).unwrap(), cond);
        }
    }

    #[test]
    fn test_display_renders_description_words() {
        assert_eq!(StorageType::Int.to_string(), "Integer");
        assert_eq!(StorageType::Float.to_string(), "Float");
        assert_eq!(StorageType::Long.to_string(), "Long");
        assert_eq!(StorageType::Double.to_string(), "Double");
        assert_eq!(StorageType::Reference.to_string(), "Reference");
    }

    #[test]
    fn test_fork_and_merge_classification() {
        let branch = Instruction::Branch {
            cond: Condition::Ne,
            target: Label(3),
        };
        assert!(branch.is_fork());
        assert!(!branch.is_merge());

        let goto = Instruction::Goto { target: Label(3) };
        assert!(!goto.is_fork());

        let frame = Instruction::Frame { live: vec![0] };
        assert!(frame.is_merge());
        assert!(!frame.is_fork());
    }
}
