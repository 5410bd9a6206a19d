#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod field;

pub mod util;

pub use crate::{
    error::{Error, Result},
    field::FieldElement,
};
pub use num_bigint::{self as bigint, BigInt, BigUint};
