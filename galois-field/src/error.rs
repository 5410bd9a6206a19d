//! Error types.

use core::fmt;
use num_bigint::{BigInt, BigUint};

/// Field arithmetic errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Element value does not lie in `[0, modulus)`.
    OutOfRange {
        /// Rejected value.
        value: BigInt,

        /// Modulus of the field the value was meant for.
        modulus: BigUint,
    },

    /// Modulus is smaller than 2, so it cannot define a field.
    InvalidModulus {
        /// Rejected modulus.
        modulus: BigInt,
    },

    /// Binary operation across elements of different fields.
    FieldMismatch {
        /// Modulus of the left-hand operand.
        lhs: BigUint,

        /// Modulus of the right-hand operand.
        rhs: BigUint,
    },

    /// Value shares a factor with the modulus and has no inverse.
    NotInvertible {
        /// Value which could not be inverted.
        value: BigUint,

        /// Modulus the inverse was requested for.
        modulus: BigUint,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { value, modulus } => {
                write!(f, "{value} not in field range 0 to {modulus} (exclusive)")
            }
            Error::InvalidModulus { modulus } => {
                write!(f, "modulus {modulus} is too small to define a field")
            }
            Error::FieldMismatch { lhs, rhs } => {
                write!(f, "cannot operate on elements of different fields: {lhs} vs {rhs}")
            }
            Error::NotInvertible { value, modulus } => {
                write!(f, "{value} has no inverse modulo {modulus}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
