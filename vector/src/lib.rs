#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate ark_std;

mod error;
pub mod vector;

pub use error::VectorError;
pub use vector::Vector;
