#![no_std]

#[cfg(test)]
extern crate std;

pub mod kernels;

pub use kernels::eft;
