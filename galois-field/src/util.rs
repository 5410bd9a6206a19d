//! Number-theoretic helpers.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a·x + b·y = g = gcd(a, b)`. In particular
/// `a·x ≡ g (mod b)`. The Bézout coefficients may be negative.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut a, mut b) = (a.clone(), b.clone());
    let (mut x0, mut x1) = (BigInt::one(), BigInt::zero());
    let (mut y0, mut y1) = (BigInt::zero(), BigInt::one());

    while !b.is_zero() {
        let (q, r) = a.div_mod_floor(&b);
        a = core::mem::replace(&mut b, r);

        let x2 = &x0 - &q * &x1;
        x0 = core::mem::replace(&mut x1, x2);

        let y2 = &y0 - &q * &y1;
        y0 = core::mem::replace(&mut y1, y2);
    }

    (a, x0, y0)
}

/// Computes the multiplicative inverse of `a` modulo `n`, i.e. the `x` in
/// `[0, n)` with `a·x ≡ 1 (mod n)`.
///
/// Fails with [`Error::NotInvertible`] when `gcd(a, n) ≠ 1`.
pub fn modular_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    let n_signed = BigInt::from(n.clone());
    let (g, x, _) = xgcd(&BigInt::from(a.clone()), &n_signed);

    if !g.is_one() {
        return Err(Error::NotInvertible {
            value: a.clone(),
            modulus: n.clone(),
        });
    }

    // `x` is frequently negative; floor modulo maps it into `[0, n)`.
    Ok(x.mod_floor(&n_signed).magnitude().clone())
}
