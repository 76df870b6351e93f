//! Scenario method bodies shared across the test suite.
//!
//! Each factory returns one method as a typed instruction stream, mirroring what the
//! traversal would produce for the equivalent source. Slot 0 is reserved for an
//! integer argument where a scenario takes one; locals start at slot 1.

use crate::assembly::{Condition, ConstValue, Instruction, Label, StorageType};

/// `return 10;` - no local writes at all.
pub(crate) fn has_no_locals() -> Vec<Instruction> {
    vec![
        Instruction::Const(ConstValue::Int(10)),
        Instruction::Return { ty: StorageType::Int },
    ]
}

/// `T a = <initial>; return a;` for any storage type.
pub(crate) fn local_init(initial: ConstValue) -> Vec<Instruction> {
    let ty = initial.storage_type();
    vec![
        Instruction::Const(initial),
        Instruction::Store { slot: 1, ty },
        Instruction::Load { slot: 1, ty },
        Instruction::Return { ty },
    ]
}

/// `int a = 1; a = 10; return a;`
pub(crate) fn second_assignment() -> Vec<Instruction> {
    vec![
        Instruction::Const(ConstValue::Int(1)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Const(ConstValue::Int(10)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
    ]
}

/// `if (arg != 0) { int b = 1; return b; } else { int a = 1; a = 2; return a; }`
///
/// The false arm begins at a merge frame, so each arm's first write to slot 1 is
/// its own declaration.
pub(crate) fn branch_method() -> Vec<Instruction> {
    vec![
        Instruction::Load { slot: 0, ty: StorageType::Int },
        Instruction::Branch { cond: Condition::Eq, target: Label(0) },
        // true arm
        Instruction::Const(ConstValue::Int(1)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
        // false arm
        Instruction::Mark { label: Label(0) },
        Instruction::Frame { live: vec![0] },
        Instruction::Const(ConstValue::Int(1)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Const(ConstValue::Int(2)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
    ]
}

/// Three disjoint lexical regions reusing slot 2 for unrelated variables: one per
/// branch arm, one after the join. The merge frames never list slot 2, so every
/// region's first write re-classifies as a declaration.
pub(crate) fn slot_reuse() -> Vec<Instruction> {
    vec![
        Instruction::Load { slot: 0, ty: StorageType::Int },
        Instruction::Branch { cond: Condition::Eq, target: Label(0) },
        Instruction::Const(ConstValue::Int(1)),
        Instruction::Store { slot: 2, ty: StorageType::Int },
        Instruction::Goto { target: Label(1) },
        Instruction::Mark { label: Label(0) },
        Instruction::Frame { live: vec![0] },
        Instruction::Const(ConstValue::Int(2)),
        Instruction::Store { slot: 2, ty: StorageType::Int },
        Instruction::Mark { label: Label(1) },
        Instruction::Frame { live: vec![0] },
        Instruction::Const(ConstValue::Int(7)),
        Instruction::Store { slot: 2, ty: StorageType::Int },
        Instruction::Load { slot: 2, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
    ]
}

/// `int acc = 100; for (int i = 1; i < 3; i++) { acc = acc + i; } return acc;`
///
/// The loop header frame is the merge of the forward entry and the back-edge; the
/// body's accumulator update is a redefinition, visited once statically however many
/// iterations run.
pub(crate) fn counting_loop() -> Vec<Instruction> {
    vec![
        Instruction::Const(ConstValue::Int(100)),
        Instruction::Store { slot: 2, ty: StorageType::Int },
        Instruction::Const(ConstValue::Int(1)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        // loop header
        Instruction::Mark { label: Label(0) },
        Instruction::Frame { live: vec![1, 2] },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Const(ConstValue::Int(3)),
        Instruction::Branch { cond: Condition::CmpGe, target: Label(1) },
        // body
        Instruction::Load { slot: 2, ty: StorageType::Int },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Add,
        Instruction::Store { slot: 2, ty: StorageType::Int },
        Instruction::Increment { slot: 1, delta: 1 },
        Instruction::Goto { target: Label(0) },
        // exit
        Instruction::Mark { label: Label(1) },
        Instruction::Frame { live: vec![1, 2] },
        Instruction::Load { slot: 2, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
    ]
}

/// `int a = 11; a++; return a;`
pub(crate) fn increment_method() -> Vec<Instruction> {
    vec![
        Instruction::Const(ConstValue::Int(11)),
        Instruction::Store { slot: 1, ty: StorageType::Int },
        Instruction::Increment { slot: 1, delta: 1 },
        Instruction::Load { slot: 1, ty: StorageType::Int },
        Instruction::Return { ty: StorageType::Int },
    ]
}
