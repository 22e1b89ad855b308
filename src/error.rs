//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by field arithmetic, polynomial division and the
/// irreducible-polynomial cache.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A constructor or operation received an argument outside its domain
    /// (non-prime characteristic, zero degree, negative exponent, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operands belong to different fields.
    #[error("incompatible operands: {0}")]
    IncompatibleOperand(String),

    /// Inverse of zero, or division by the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,

    /// Exact polynomial division left a non-zero remainder.
    #[error("divisor does not divide dividend")]
    NotDivisible,

    /// The element shares a factor with a reducible defining polynomial.
    #[error("element is not invertible modulo {modulus}")]
    NotInvertible { modulus: String },

    /// The record store could not be read or written.
    #[error("record store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be parsed.
    #[error("corrupt record in {path}, line {line}: {reason}")]
    CorruptRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The search was stopped between two degree levels.
    #[error("search cancelled after degree {completed_degree}")]
    Cancelled { completed_degree: usize },
}

/// Shorthand for results carrying a [`FieldError`].
pub type Result<T> = std::result::Result<T, FieldError>;
