//! Engine error types

use thiserror::Error;

/// Errors reported by natural-number operations.
///
/// Every fallible operation returns one of these synchronously to its
/// immediate caller; the engine never logs and never panics on them.
/// When an operation fails, its operands are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalError {
    /// Textual input is not a valid unsigned number in the requested base.
    #[error("invalid numeric text: {0}")]
    InvalidFormat(String),

    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value does not fit the requested fixed-width machine integer.
    #[error("value exceeds the {0}-bit range")]
    RangeOverflow(u32),

    /// An operation precondition was violated (e.g. root degree below 2).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
