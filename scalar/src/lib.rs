#![cfg_attr(not(feature = "std"), no_std)]

mod scalar;

pub use scalar::{Real, Scalar};
