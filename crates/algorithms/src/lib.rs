//! Polynomial ring engine for edukyber
//!
//! Arithmetic over R_q = Z_q[X]/(X^N + 1) and the two sampling distributions
//! the Kyber pipeline needs (uniform and centered binomial).
//!
//! # Security
//!
//! This is teaching code. Multiplication is schoolbook O(N^2), nothing is
//! constant-time, and the samplers accept any [`rand::RngCore`], including
//! non-cryptographic generators. Do not use it to protect real data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod poly;

pub use poly::prelude::*;
