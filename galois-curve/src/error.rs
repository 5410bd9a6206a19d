//! Error types.

use core::fmt;
use galois_field::FieldElement;

/// Curve group errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Underlying field arithmetic failed, e.g. coordinates from different
    /// fields or a non-invertible denominator under a composite modulus.
    Field(galois_field::Error),

    /// Exactly one of the two affine coordinates was supplied.
    InvalidPoint,

    /// Coordinates do not satisfy `y² = x³ + a·x + b`.
    NotOnCurve {
        /// Offending x-coordinate.
        x: FieldElement,

        /// Offending y-coordinate.
        y: FieldElement,

        /// Curve coefficient `a`.
        a: FieldElement,

        /// Curve coefficient `b`.
        b: FieldElement,
    },

    /// Points belong to different curves.
    CurveMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::InvalidPoint => {
                f.write_str("coordinates must be both present or both absent (infinity)")
            }
            Error::NotOnCurve { x, y, a, b } => write!(
                f,
                "point ({}, {}) is not on the curve y^2 = x^3 + {}x + {} over GF({})",
                x.value(),
                y.value(),
                a.value(),
                b.value(),
                a.modulus()
            ),
            Error::CurveMismatch => f.write_str("points are not on the same curve"),
        }
    }
}

impl From<galois_field::Error> for Error {
    fn from(err: galois_field::Error) -> Error {
        Error::Field(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
