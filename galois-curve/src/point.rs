//! Affine curve points.

#![allow(clippy::should_implement_trait)]

use crate::{Error, Result};
use core::{fmt, ops::Neg};
use galois_field::FieldElement;

/// Point on the short Weierstrass curve `y² = x³ + a·x + b` over GF(p), in
/// affine coordinates.
///
/// The curve is carried by the point itself through the coefficients `a` and
/// `b`, which share the modulus of the coordinates. Points can only be combined
/// with points on the same curve.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Affine coordinates, or `None` for the point at infinity.
    coordinates: Option<(FieldElement, FieldElement)>,

    /// Coefficient `a` in the curve equation.
    a: FieldElement,

    /// Coefficient `b` in the curve equation.
    b: FieldElement,
}

impl Point {
    /// Create a point on the curve `y² = x³ + a·x + b`.
    ///
    /// Passing `None` for both coordinates yields the point at infinity.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPoint`] if exactly one coordinate is `None`.
    /// - [`Error::NotOnCurve`] if `(x, y)` does not satisfy the curve
    ///   equation.
    /// - [`Error::Field`] if the coordinates and coefficients do not all
    ///   share one modulus.
    pub fn new(
        x: Option<FieldElement>,
        y: Option<FieldElement>,
        a: FieldElement,
        b: FieldElement,
    ) -> Result<Self> {
        match (x, y) {
            (None, None) => Ok(Self::identity(a, b)),
            (Some(x), Some(y)) => {
                if satisfies_curve_equation(&x, &y, &a, &b)? {
                    Ok(Self {
                        coordinates: Some((x, y)),
                        a,
                        b,
                    })
                } else {
                    Err(Error::NotOnCurve { x, y, a, b })
                }
            }
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(a: FieldElement, b: FieldElement) -> Self {
        Self {
            coordinates: None,
            a,
            b,
        }
    }

    /// Build a point from coordinates already known to lie on the curve.
    ///
    /// The group law preserves curve membership, so its results skip the
    /// check outside of debug builds.
    pub(crate) fn from_affine_unchecked(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Self {
        debug_assert!(matches!(
            satisfies_curve_equation(&x, &y, &a, &b),
            Ok(true)
        ));

        Self {
            coordinates: Some((x, y)),
            a,
            b,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// Affine coordinates `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        self.coordinates.as_ref().map(|(x, y)| (x, y))
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Coefficient `a` of the curve this point lies on.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` of the curve this point lies on.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Does this point satisfy its curve equation?
    ///
    /// Always true for points obtained through this crate's API, which
    /// validates on construction.
    pub fn is_on_curve(&self) -> Result<bool> {
        match &self.coordinates {
            Some((x, y)) => satisfies_curve_equation(x, y, &self.a, &self.b),
            None => Ok(true),
        }
    }

    /// Does `other` lie on the same curve as `self`?
    pub fn is_on_same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// - [`Error::CurveMismatch`] if the points lie on different curves.
    /// - [`Error::Field`] if a slope denominator cannot be inverted, which
    ///   only happens when the modulus is not prime.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.is_on_same_curve(other) {
            return Err(Error::CurveMismatch);
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &other.coordinates) {
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        // Vertical line through P and -P.
        if x1 == x2 && y1 != y2 {
            return Ok(self.to_identity());
        }

        let slope = if x1 == x2 {
            // P == Q: the tangent is vertical when y = 0.
            if y1.is_zero() {
                return Ok(self.to_identity());
            }

            tangent_slope(x1, y1, &self.a)?
        } else {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };

        let x3 = slope.square().sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Ok(Self::from_affine_unchecked(
            x3,
            y3,
            self.a.clone(),
            self.b.clone(),
        ))
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match &self.coordinates {
            Some(coordinates) => coordinates,
            None => return Ok(self.clone()),
        };

        if y.is_zero() {
            return Ok(self.to_identity());
        }

        let slope = tangent_slope(x, y, &self.a)?;
        let x3 = slope.square().sub(&x.double())?;
        let y3 = slope.mul(&x.sub(&x3)?)?.sub(y)?;

        Ok(Self::from_affine_unchecked(
            x3,
            y3,
            self.a.clone(),
            self.b.clone(),
        ))
    }

    /// Returns `-self`, the reflection of `self` across the x-axis.
    pub fn neg(&self) -> Self {
        Self {
            coordinates: self.coordinates.as_ref().map(|(x, y)| (x.clone(), -y)),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    /// The point at infinity of this point's curve.
    pub(crate) fn to_identity(&self) -> Self {
        Self::identity(self.a.clone(), self.b.clone())
    }
}

/// Evaluates `y² == x³ + a·x + b`.
fn satisfies_curve_equation(
    x: &FieldElement,
    y: &FieldElement,
    a: &FieldElement,
    b: &FieldElement,
) -> Result<bool> {
    let lhs = y.pow(2)?;
    let rhs = x.pow(3)?.add(&a.mul(x)?)?.add(b)?;
    Ok(lhs == rhs)
}

/// Slope of the tangent at `(x, y)`: `(3·x² + a) / (2·y)`.
fn tangent_slope(x: &FieldElement, y: &FieldElement, a: &FieldElement) -> Result<FieldElement> {
    // Reduced into the field, since 3 exceeds the smallest moduli.
    let three = x.in_field(3);
    let numerator = three.mul(&x.square())?.add(a)?;
    Ok(numerator.div(&y.double())?)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Some((x, y)) => write!(
                f,
                "Point({}, {})_a{}_b{}",
                x.value(),
                y.value(),
                self.a.value(),
                self.b.value()
            ),
            None => f.write_str("Point(Infinity)"),
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Point::neg(&self)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(self)
    }
}
