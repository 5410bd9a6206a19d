//! Scalar multiplication.

use crate::{Point, Result};
use num_bigint::{BigInt, Sign};

impl Point {
    /// Returns `k·self` for any integer `k`.
    ///
    /// Uses right-to-left double-and-add over the bits of `|k|`, so the cost
    /// is `O(log |k|)` group operations. `0·P` is the point at infinity and a
    /// negative scalar multiplies the negated point, `k·P = |k|·(−P)`.
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn mul(&self, k: impl Into<BigInt>) -> Result<Self> {
        let (sign, k) = k.into().into_parts();

        let mut current = match sign {
            Sign::Minus => -self,
            Sign::NoSign | Sign::Plus => self.clone(),
        };
        let mut result = self.to_identity();

        let bits = k.bits();
        for i in 0..bits {
            if k.bit(i) {
                result = result.add(&current)?;
            }

            // The doubling after the most significant bit would be discarded.
            if i + 1 < bits {
                current = current.double()?;
            }
        }

        Ok(result)
    }
}
