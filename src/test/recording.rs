//! In-memory mutation context with a planned single activation.

use crate::{
    mutation::{MutationContext, MutationId},
    Error, Result,
};

/// Registry/oracle double: assigns identifiers sequentially in registration order,
/// records every description, and activates at most the one planned identifier -
/// the "exactly one point per generated mutant" shape a real driver has.
pub(crate) struct RecordingContext {
    registered: Vec<String>,
    active: Option<u64>,
    fail: bool,
}

impl RecordingContext {
    /// Discovery pass: record everything, activate nothing.
    pub(crate) fn new() -> Self {
        RecordingContext {
            registered: Vec::new(),
            active: None,
            fail: false,
        }
    }

    /// Generation pass with the `index`-th discovered point activated.
    pub(crate) fn activating(index: u64) -> Self {
        RecordingContext {
            registered: Vec::new(),
            active: Some(index),
            fail: false,
        }
    }

    /// Oracle that fails every activation query.
    pub(crate) fn failing() -> Self {
        RecordingContext {
            registered: Vec::new(),
            active: None,
            fail: true,
        }
    }

    /// Descriptions registered so far, in discovery order.
    pub(crate) fn descriptions(&self) -> Vec<&str> {
        self.registered.iter().map(String::as_str).collect()
    }
}

impl MutationContext for RecordingContext {
    fn register(&mut self, _owner: &str, description: &str) -> Result<MutationId> {
        self.registered.push(description.to_string());
        Ok(MutationId(self.registered.len() as u64 - 1))
    }

    fn should_activate(&mut self, id: MutationId) -> Result<bool> {
        if self.fail {
            return Err(Error::Context("activation oracle unavailable".to_string()));
        }
        Ok(self.active == Some(id.0))
    }
}
