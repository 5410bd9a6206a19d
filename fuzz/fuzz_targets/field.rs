#![no_main]
// Field laws over GF(p) for a handful of primes of different sizes, with
// operands and exponents taken from the fuzzer input.
use galois_field::{BigInt, BigUint, FieldElement};
use libfuzzer_sys::fuzz_target;

const PRIMES: [u64; 4] = [2, 223, 4_294_967_291, 18_446_744_073_709_551_557];

fn element(bytes: &[u8], p: u64) -> FieldElement {
    let modulus = BigUint::from(p);
    let value = BigUint::from_bytes_be(bytes) % &modulus;
    FieldElement::new(value, modulus).unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 41 {
        return;
    }

    let p = PRIMES[usize::from(data[0] & 3)];
    let x = element(&data[1..17], p);
    let y = element(&data[17..33], p);
    let exponent = BigInt::from(i64::from_be_bytes(data[33..41].try_into().unwrap_or([0; 8])));

    // Additive group
    assert_eq!(x.add(&y).unwrap().sub(&y).unwrap(), x);
    assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
    assert!(x.add(&-x.clone()).unwrap().is_zero());

    // Multiplicative group
    assert_eq!(x.mul(&y).unwrap(), y.mul(&x).unwrap());
    if !y.is_zero() {
        assert_eq!(x.mul(&y).unwrap().div(&y).unwrap(), x);
        assert_eq!(y.pow(p - 1).unwrap(), y.in_field(1));
        assert_eq!(
            y.pow(-exponent.clone()).unwrap(),
            y.invert().unwrap().pow(exponent).unwrap()
        );
    } else {
        assert!(x.div(&y).is_err());
    }
});
