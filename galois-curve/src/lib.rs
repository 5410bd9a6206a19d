#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod mul;
mod point;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    error::{Error, Result},
    point::Point,
};
pub use galois_field::{self, BigInt, BigUint, FieldElement};
