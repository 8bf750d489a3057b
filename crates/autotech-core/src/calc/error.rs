//! Calculator input errors

use thiserror::Error;

/// Why a calculator could not produce a result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A required field is empty
    #[error("Enter all values")]
    MissingInput,

    /// A field is non-numeric, non-finite, or violates a domain constraint
    #[error("Invalid input")]
    InvalidInput,
}
