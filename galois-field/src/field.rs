//! Elements of a prime field GF(p) with a runtime modulus.

#![allow(clippy::should_implement_trait)]

use crate::{Error, Result, util};
use core::{fmt, ops::Neg};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An element of the finite field GF(p).
///
/// The value is always kept in canonical form, `0 ≤ value < p`. Elements are
/// immutable: arithmetic returns a new element and never modifies its
/// operands.
///
/// The modulus is assumed to be prime. This is not verified: with a composite
/// modulus, [`FieldElement::div`] and [`FieldElement::invert`] fail for values
/// sharing a factor with it, and [`FieldElement::pow`] may return incorrect
/// results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Create the element `value` of GF(`modulus`).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidModulus`] if `modulus < 2`.
    /// - [`Error::OutOfRange`] if `value < 0` or `value ≥ modulus`.
    pub fn new(value: impl Into<BigInt>, modulus: impl Into<BigInt>) -> Result<Self> {
        let modulus = check_modulus(modulus.into())?;
        let value = value.into();

        match value.to_biguint() {
            Some(value) if value < modulus => Ok(Self { value, modulus }),
            _ => Err(Error::OutOfRange { value, modulus }),
        }
    }

    /// Reduce an arbitrary integer into the field this element belongs to.
    ///
    /// Negative integers map to their non-negative representative, so
    /// `in_field(-1)` is `p - 1`.
    pub fn in_field(&self, value: impl Into<BigInt>) -> Self {
        let modulus = BigInt::from(self.modulus.clone());
        let value = value.into().mod_floor(&modulus);
        self.residue(value.magnitude().clone())
    }

    /// Canonical representative of this element, in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Modulus of the field.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Is this element the additive identity?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.residue((&self.value + &rhs.value) % &self.modulus))
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        // Both operands are below `p`, so adding `p` first keeps the
        // intermediate non-negative.
        Ok(self.residue((&self.value + &self.modulus - &rhs.value) % &self.modulus))
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.residue((&self.value * &rhs.value) % &self.modulus))
    }

    /// Returns `self / rhs mod p`, computed as `self * rhs⁻¹`.
    ///
    /// # Errors
    ///
    /// - [`Error::FieldMismatch`] if the moduli differ.
    /// - [`Error::NotInvertible`] if `rhs` is zero (or shares a factor with a
    ///   composite modulus).
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let inverse = util::modular_inverse(&rhs.value, &self.modulus)?;
        Ok(self.residue((&self.value * inverse) % &self.modulus))
    }

    /// Returns the multiplicative inverse of self.
    pub fn invert(&self) -> Result<Self> {
        util::modular_inverse(&self.value, &self.modulus).map(|inverse| self.residue(inverse))
    }

    /// Returns `self^exponent mod p` for any integer exponent.
    ///
    /// The exponent is first reduced modulo `p - 1`: by Fermat's little
    /// theorem every non-zero element has an order dividing `p - 1`. Negative
    /// exponents therefore yield powers of the inverse.
    ///
    /// Zero has no multiplicative order, so it is special-cased: `0^0 = 1`,
    /// `0^e = 0` for positive `e`, and a negative exponent fails with
    /// [`Error::NotInvertible`].
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Result<Self> {
        let exponent = exponent.into();

        if self.is_zero() {
            return match exponent.sign() {
                Sign::Minus => Err(Error::NotInvertible {
                    value: self.value.clone(),
                    modulus: self.modulus.clone(),
                }),
                Sign::NoSign => Ok(self.residue(BigUint::one())),
                Sign::Plus => Ok(self.clone()),
            };
        }

        let order = BigInt::from(self.modulus.clone() - 1u32);
        let exponent = exponent.mod_floor(&order);
        Ok(self.residue(self.value.modpow(exponent.magnitude(), &self.modulus)))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.residue((&self.value * &self.value) % &self.modulus)
    }

    /// Returns `self + self mod p`.
    pub fn double(&self) -> Self {
        self.residue((&self.value + &self.value) % &self.modulus)
    }

    /// Ensure `rhs` lives in the same field as `self`.
    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.modulus == rhs.modulus {
            Ok(())
        } else {
            Err(Error::FieldMismatch {
                lhs: self.modulus.clone(),
                rhs: rhs.modulus.clone(),
            })
        }
    }

    /// Wrap an already reduced value in this element's field.
    fn residue(&self, value: BigUint) -> Self {
        debug_assert!(value < self.modulus);
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }
}

fn check_modulus(modulus: BigInt) -> Result<BigUint> {
    match modulus.to_biguint() {
        Some(m) if m > BigUint::one() => Ok(m),
        _ => Err(Error::InvalidModulus { modulus }),
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.value)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            self.clone()
        } else {
            self.residue(&self.modulus - &self.value)
        }
    }
}
