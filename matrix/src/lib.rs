#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate ark_std;

mod error;
pub mod matrix;
pub mod ops;

pub use error::MatrixError;
pub use matrix::Matrix;
