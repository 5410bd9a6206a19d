//! Group law test vectors for the curve y² = x³ + 7 over GF(223).
//!
//! The subgroup generated by (192, 105) has order 42, and its element of order
//! two, `21·G = (6, 0)`, exercises the vertical tangent case of doubling.

/// Field modulus.
pub const PRIME: u32 = 223;

/// Curve coefficient `a`.
pub const A: u32 = 0;

/// Curve coefficient `b`.
pub const B: u32 = 7;

/// Generator of the test subgroup.
pub const GENERATOR: (u32, u32) = (192, 105);

/// Order of [`GENERATOR`].
pub const ORDER: u32 = 42;

/// Repeated addition test vectors, `k·G` for `k = 1..ORDER`.
///
/// Entry `i` holds the affine coordinates of `(i + 1)·G`.
pub const ADD_TEST_VECTORS: &[(u32, u32)] = &[
    (192, 105),
    (49, 71),
    (18, 189),
    (66, 111),
    (54, 207),
    (139, 137),
    (173, 35),
    (207, 51),
    (167, 28),
    (8, 96),
    (60, 139),
    (69, 137),
    (143, 98),
    (20, 47),
    (94, 94),
    (64, 55),
    (97, 68),
    (15, 86),
    (50, 166),
    (208, 150),
    (6, 0),
    (208, 73),
    (50, 57),
    (15, 137),
    (97, 155),
    (64, 168),
    (94, 129),
    (20, 176),
    (143, 125),
    (69, 86),
    (60, 84),
    (8, 127),
    (167, 195),
    (207, 172),
    (173, 188),
    (139, 86),
    (54, 16),
    (66, 112),
    (18, 34),
    (49, 152),
    (192, 118),
];

/// Points which are not on the curve.
pub const OFF_CURVE_POINTS: &[(u32, u32)] = &[(200, 119), (42, 99)];
