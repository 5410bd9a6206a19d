//! Field arithmetic tests.

use galois_field::{BigUint, Error, FieldElement};
use hex_literal::hex;
use proptest::prelude::*;

/// Small prime used by most of the hand-checked vectors.
const P: u64 = 31;

/// Largest prime below 2^32.
const P32: u64 = 4_294_967_291;

/// secp256k1 base field modulus, p = 2^256 - 2^32 - 977.
fn secp256k1_p() -> BigUint {
    BigUint::from_bytes_be(&hex!(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
    ))
}

fn fe(value: u64, modulus: u64) -> FieldElement {
    FieldElement::new(value, modulus).unwrap()
}

#[test]
fn construction_rejects_out_of_range_values() {
    assert!(matches!(FieldElement::new(31, P), Err(Error::OutOfRange { .. })));
    assert!(matches!(FieldElement::new(-1, P), Err(Error::OutOfRange { .. })));
    assert!(matches!(FieldElement::new(32, P), Err(Error::OutOfRange { .. })));
}

#[test]
fn cross_field_addition_fails() {
    let err = fe(3, 31).add(&fe(3, 13)).unwrap_err();
    assert!(matches!(err, Error::FieldMismatch { .. }));
}

#[test]
fn division_example() {
    let q = fe(3, P).div(&fe(24, P)).unwrap();
    assert_eq!(q, fe(4, P));
    assert_eq!(q.mul(&fe(24, P)).unwrap(), fe(3, P));
}

#[test]
fn large_modulus_inverse() {
    let p = secp256k1_p();
    let x = FieldElement::new(BigUint::from(7u32), p.clone()).unwrap();
    let inv = x.invert().unwrap();

    assert_eq!(x.mul(&inv).unwrap(), FieldElement::new(1, p.clone()).unwrap());

    // p - 1 is its own inverse.
    let minus_one = FieldElement::new(p.clone() - 1u32, p).unwrap();
    assert_eq!(minus_one.invert().unwrap(), minus_one);
}

#[test]
fn large_modulus_subtraction_wraps() {
    let p = secp256k1_p();
    let one = FieldElement::new(1, p.clone()).unwrap();
    let two = FieldElement::new(2, p.clone()).unwrap();

    let diff = one.sub(&two).unwrap();
    assert_eq!(diff.value(), &(p - 1u32));
}

#[test]
fn field_of_two_elements() {
    let zero = fe(0, 2);
    let one = fe(1, 2);

    assert_eq!(one.add(&one).unwrap(), zero);
    assert_eq!(one.pow(-5).unwrap(), one);
    assert_eq!(one.div(&one).unwrap(), one);
    assert_eq!(-one.clone(), one);
}

#[test]
fn error_messages() {
    assert_eq!(
        FieldElement::new(31, P).unwrap_err().to_string(),
        "31 not in field range 0 to 31 (exclusive)"
    );
    assert_eq!(
        fe(3, 31).add(&fe(3, 13)).unwrap_err().to_string(),
        "cannot operate on elements of different fields: 31 vs 13"
    );
    assert_eq!(
        fe(3, 31).div(&fe(0, 31)).unwrap_err().to_string(),
        "0 has no inverse modulo 31"
    );
}

#[test]
fn elements_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FieldElement>();
    assert_send_sync::<Error>();
}

proptest! {
    #[test]
    fn construct_round_trips(value in 0..P32) {
        let x = fe(value, P32);
        prop_assert_eq!(x.value(), &BigUint::from(value));
        prop_assert_eq!(x.modulus(), &BigUint::from(P32));
    }

    #[test]
    fn add_then_sub(a in 0..P32, b in 0..P32) {
        let (a, b) = (fe(a, P32), fe(b, P32));
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn mul_then_div(a in 0..P32, b in 1..P32) {
        let (a, b) = (fe(a, P32), fe(b, P32));
        prop_assert_eq!(a.mul(&b).unwrap().div(&b).unwrap(), a);
    }

    #[test]
    fn fermat(a in 1..P32) {
        prop_assert_eq!(fe(a, P32).pow(P32 - 1).unwrap(), fe(1, P32));
    }

    #[test]
    fn negative_exponent_is_inverse_power(a in 1..P, e in 0i64..100) {
        let x = fe(a, P);
        prop_assert_eq!(x.pow(-e).unwrap(), x.invert().unwrap().pow(e).unwrap());
    }

    #[test]
    fn exponent_reduction_matches_repeated_multiplication(a in 0..P, e in 0u32..70) {
        let x = fe(a, P);
        let mut expected = fe(1, P);
        for _ in 0..e {
            expected = expected.mul(&x).unwrap();
        }
        prop_assert_eq!(x.pow(e).unwrap(), expected);
    }

    #[test]
    fn negation_is_additive_inverse(a in 0..P32) {
        let x = fe(a, P32);
        prop_assert!(x.add(&-x.clone()).unwrap().is_zero());
    }

    #[test]
    fn sub_matches_add_negated(a in 0..P32, b in 0..P32) {
        let (a, b) = (fe(a, P32), fe(b, P32));
        prop_assert_eq!(a.sub(&b).unwrap(), a.add(&-b).unwrap());
    }
}
