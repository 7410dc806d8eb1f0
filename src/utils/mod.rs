//! Utility subsystem for QuadMix.
//!
//! Message segmentation into 64-bit blocks and the standalone
//! number-theoretic primality check.

pub mod converter;
pub mod primes;
