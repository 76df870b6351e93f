use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the failure modes of a method rewrite: instruction material the engine
/// does not understand, and failures reported by the driver-supplied mutation registry or
/// activation oracle. Each variant provides specific context about the failure mode to
/// enable appropriate error handling.
///
/// # Error Categories
///
/// ## Instruction Errors
/// - [`Error::UnsupportedOpcode`] - An opcode byte outside the supported instruction set
/// - [`Error::NotSupported`] - An instruction shape the rewrite table does not cover
///
/// ## Collaborator Errors
/// - [`Error::Context`] - The mutation registry or activation oracle failed
///
/// # Examples
///
/// ```rust
/// use slotscope::{assembly::StorageType, Error};
///
/// match StorageType::from_store_opcode(0xC4) {
///     Ok(ty) => println!("store of {ty}"),
///     Err(Error::UnsupportedOpcode(op)) => eprintln!("not a store: {op:#04x}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Encountered an opcode byte outside the supported instruction set.
    ///
    /// Returned by the opcode conversion helpers when a byte does not decode to a
    /// store, load or branch the engine knows. A method containing such material is
    /// rejected as a whole rather than partially mutated, since skipping it silently
    /// would produce an inconsistent mutation count.
    #[error("Unsupported opcode - {0:#04x}")]
    UnsupportedOpcode(u8),

    /// This instruction shape is not supported.
    ///
    /// Indicates an instruction category the rewrite table does not cover, for example
    /// a store variant added by a newer traversal than this engine was built against.
    #[error("This instruction shape is not supported")]
    NotSupported,

    /// The mutation registry or activation oracle reported a failure.
    ///
    /// Registration and activation queries are owned by the driver. A failing query has
    /// no side-effect-free default, so the error is propagated and the whole method's
    /// mutation pass is abandoned, never silently treated as "inactive".
    #[error("Mutation context failure - {0}")]
    Context(String),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for wrapping
    /// collaborator errors with additional context.
    #[error("{0}")]
    Error(String),
}
